use std::io::IsTerminal;

/// Returns true if stdin is receiving piped input rather than being
/// attached to a terminal.
///
/// Used by the CLI to decide whether to pass a target path to the spawned
/// engine or let it read from the pipe.
pub fn stdin_is_pipe() -> bool {
    !std::io::stdin().is_terminal()
}
