use crate::cli::Command;

/// Execution contexts that influence how logging is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// A person is driving a single submission from the terminal.
    Interactive,
    /// Many submissions replayed from a file; the console stays quiet.
    Batch,
}

impl ExecutionContext {
    /// Returns `true` when console sinks should be disabled by default.
    pub fn disables_console(self) -> bool {
        matches!(self, ExecutionContext::Batch)
    }
}

/// Derive the active execution context from a parsed CLI command.
pub fn detect_context(command: &Command) -> ExecutionContext {
    match command {
        Command::Replay(_) => ExecutionContext::Batch,
        Command::Submit(_) | Command::Config(_) => ExecutionContext::Interactive,
    }
}
