use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Value of the form's name field
    #[arg(long, default_value = "")]
    pub name: String,

    /// Value of the form's email field
    #[arg(long, default_value = "")]
    pub email: String,

    /// Directory containing formpipe.toml (defaults to current directory)
    #[arg(long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Override the simulated save delay, e.g. 250ms or 2s
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration, help_heading = "Gateway Overrides")]
    pub delay: Option<Duration>,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// JSON array or YAML sequence of {name, email} inputs
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory containing formpipe.toml (defaults to current directory)
    #[arg(long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Start every submission at once instead of awaiting each in turn
    #[arg(long)]
    pub concurrent: bool,

    /// Write the final history as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the simulated save delay, e.g. 250ms or 2s
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration, help_heading = "Gateway Overrides")]
    pub delay: Option<Duration>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Directory containing formpipe.toml (defaults to current directory)
    #[arg(long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,
}
