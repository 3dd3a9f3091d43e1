pub mod args;
pub mod commands;

pub use args::{ConfigArgs, ReplayArgs, SubmitArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "formpipe")]
#[command(version = crate::VERSION)]
#[command(about = "Run form submissions through the save-and-record pipeline")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: check the resolved config, submit a single form, then replay a file of submissions."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Submit one form",
        long_about = "Submit validates the name and email, saves them through the configured gateway, and prints the recorded submission as JSON. Invalid input is a silent no-op for the pipeline; the rejected rules are listed on stderr.",
        after_help = "Example:\n    formpipe submit --name Alice --email a@x.com"
    )]
    Submit(SubmitArgs),
    #[command(
        about = "Replay a file of submissions through one session",
        long_about = "Replay reads a JSON array or YAML sequence of inputs and submits them through a single session, either one after another or all at once, then prints a summary and the final history.",
        after_help = "Example:\n    formpipe replay inputs.json --concurrent --output history.json"
    )]
    Replay(ReplayArgs),
    #[command(
        about = "Show the resolved configuration",
        long_about = "Config prints the configuration after merging defaults, formpipe.toml and environment overrides, followed by the supported environment variables.",
        after_help = "Example:\n    formpipe config --workspace ./site"
    )]
    Config(ConfigArgs),
}

pub async fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Submit(submit_args) => commands::submit(submit_args).await,
        Command::Replay(replay_args) => commands::replay(replay_args).await,
        Command::Config(config_args) => commands::config(config_args),
    }
}
