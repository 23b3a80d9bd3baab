//! User-facing blocking messages.

/// Shows a message the user must see before continuing.
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints alerts to stderr, set apart from prompts on stdout.
///
/// Does not wait for a key press. The session owns stdin and its next prompt
/// is where the user continues.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("\n[!] {message}\n");
    }
}
