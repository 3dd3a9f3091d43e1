use crate::{
    cli::args::{ConfigArgs, ReplayArgs, SubmitArgs},
    core::{
        ConfigLoader, ConfigValidator, ErrorSeverity, FormSession, FormpipeConfig,
        HistoryRecorder, SubmissionInput, SubmissionOutcome, SubmissionPipeline,
    },
    Result,
};
use anyhow::{anyhow, Context};
use serde::Serialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

/// Counts reported after a replay.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct ReplaySummary {
    pub recorded: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl ReplaySummary {
    pub fn from_outcomes(outcomes: &[SubmissionOutcome]) -> Self {
        let mut summary = ReplaySummary::default();
        for outcome in outcomes {
            match outcome {
                SubmissionOutcome::Recorded(_) => summary.recorded += 1,
                SubmissionOutcome::Rejected(_) => summary.rejected += 1,
                SubmissionOutcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

pub async fn submit(args: SubmitArgs) -> Result<()> {
    let workspace = resolve_workspace(args.workspace.as_deref())?;
    let config = load_config(&workspace, args.delay)?;

    let session = Arc::new(FormSession::new());
    session.stage(SubmissionInput::new(args.name, args.email));
    let pipeline = SubmissionPipeline::from_config(&config, session)?;

    tracing::info!(gateway = pipeline.gateway_name(), "Submitting form");
    match pipeline.submit_form().await {
        SubmissionOutcome::Recorded(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        SubmissionOutcome::Rejected(violations) => {
            for violation in violations {
                eprintln!("rejected: {}", violation);
            }
            Ok(())
        }
        SubmissionOutcome::Failed(error) => Err(anyhow::Error::from(error)),
    }
}

pub async fn replay(args: ReplayArgs) -> Result<()> {
    let workspace = resolve_workspace(args.workspace.as_deref())?;
    let config = load_config(&workspace, args.delay)?;
    let inputs = read_inputs(&args.file)?;

    let session = Arc::new(FormSession::new());
    let pipeline = Arc::new(SubmissionPipeline::from_config(&config, session.clone())?);

    tracing::info!(
        submissions = inputs.len(),
        concurrent = args.concurrent,
        "Replaying submissions from {}",
        args.file.display()
    );

    let outcomes = if args.concurrent {
        let handles: Vec<_> = inputs
            .into_iter()
            .map(|input| pipeline.spawn_submit(input))
            .collect();
        let mut outcomes = Vec::with_capacity(handles.len());
        for joined in futures::future::join_all(handles).await {
            outcomes.push(joined.context("submission task panicked")?);
        }
        outcomes
    } else {
        let mut outcomes = Vec::with_capacity(inputs.len());
        for input in inputs {
            outcomes.push(pipeline.submit(input).await);
        }
        outcomes
    };

    for error in outcomes.iter().filter_map(SubmissionOutcome::error) {
        match error.severity() {
            ErrorSeverity::Warning => tracing::warn!(code = %error.code, "{}", error.message),
            ErrorSeverity::Error => tracing::error!(code = %error.code, "{}", error.message),
        }
    }

    let summary = ReplaySummary::from_outcomes(&outcomes);
    let history = session.history();

    let mut report = serde_json::json!({
        "summary": summary,
        "counter": session.counter(),
        "history": history,
    });
    if let Some(output) = &args.output {
        let recorder = HistoryRecorder::new(output);
        recorder.export(&history)?;
        report["exported_to"] = serde_json::json!(recorder.path().display().to_string());
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn config(args: ConfigArgs) -> Result<()> {
    let workspace = resolve_workspace(args.workspace.as_deref())?;
    let config = load_config(&workspace, None)?;

    let rendered = toml::to_string_pretty(&config).context("failed to render configuration")?;
    println!("{}", rendered.trim_end());
    println!();
    println!("# Environment overrides:");
    for doc in ConfigLoader::env_var_documentation() {
        println!("#   {}", doc);
    }
    Ok(())
}

fn resolve_workspace(workspace: Option<&Path>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path.to_path_buf()),
        None => env::current_dir().context("failed to resolve current directory"),
    }
}

/// Load workspace config, apply CLI overrides, then validate.
fn load_config(workspace: &Path, delay: Option<Duration>) -> Result<FormpipeConfig> {
    let mut config = ConfigLoader::load_from_workspace(workspace)?;
    if let Some(delay) = delay {
        config.gateway.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
    }
    ConfigValidator::validate(&config)?;
    Ok(config)
}

fn read_inputs(path: &Path) -> Result<Vec<SubmissionInput>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read inputs from {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML inputs {}", path.display())),
        Some("json") | None => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON inputs {}", path.display())),
        Some(other) => Err(anyhow!(
            "unsupported input format '.{}'; expected .json, .yaml or .yml",
            other
        )),
    }
}
