pub mod config;
pub mod context;
pub mod layers;

pub use context::{detect_context, ExecutionContext};
pub use layers::console::ConsoleOutput;

use crate::logging::config::LoggingConfig;
use crate::logging::layers::{console, file, opentelemetry, BoxLayer};
use crate::{cli::Command, Result};
use anyhow::{anyhow, Context};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Guards that keep logging sinks active for the duration of the command.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    _otel_guard: Option<opentelemetry::OpenTelemetryGuard>,
    console_output: ConsoleOutput,
    log_file_path: PathBuf,
}

impl LoggingGuard {
    /// Returns the console output configuration used during initialization.
    pub fn console_output(&self) -> ConsoleOutput {
        self.console_output
    }

    /// Returns the log file path backed by the file sink.
    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }
}

/// Initialize the logging framework for the provided CLI command.
///
/// Sinks are a file layer, a console layer chosen from the execution context,
/// and an optional OTLP exporter. A broken exporter is reported as a warning
/// and skipped. Errors when invoked more than once per process.
pub fn init(command: &Command) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let context = detect_context(command);
    let workspace_root = resolve_workspace_path(command);
    let config = LoggingConfig::load(workspace_root.as_deref())?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_level))
        .context("failed to configure tracing level")?;
    let log_file_path = file::log_file_path(&config, workspace_root.as_deref())?;

    let (file_layer, file_guard) = file::file_layer::<Registry>(&log_file_path, config.enable_file)?;
    let console_output = console::select_console_output(context, config.console_output);
    let mut layers: Vec<BoxLayer<Registry>> =
        vec![file_layer, console::console_layer::<Registry>(console_output)];

    let mut otel_guard = None;
    let mut otel_error = None;
    if let Some(endpoint) = config.opentelemetry.export_endpoint()? {
        match opentelemetry::build_opentelemetry_layer::<Registry>(
            &endpoint,
            &config.opentelemetry.service_name,
        ) {
            Ok((layer, guard)) => {
                layers.push(layer);
                otel_guard = Some(guard);
            }
            Err(err) => otel_error = Some(err),
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(err) = otel_error {
        tracing::warn!("OpenTelemetry exporter disabled: {:#}", err);
    }

    Ok(LoggingGuard {
        _file_guard: file_guard,
        _otel_guard: otel_guard,
        console_output,
        log_file_path,
    })
}

fn resolve_workspace_path(command: &Command) -> Option<PathBuf> {
    let explicit = match command {
        Command::Submit(args) => args.workspace.clone(),
        Command::Replay(args) => args.workspace.clone(),
        Command::Config(args) => args.workspace.clone(),
    };
    explicit.or_else(|| env::current_dir().ok())
}
