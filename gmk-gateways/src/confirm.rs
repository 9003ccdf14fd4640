use std::io::{self, BufRead, Write};

use gmk_core::gateways::confirm::ConfirmationGateway;

/// Blocking yes/no prompt on the controlling terminal.
///
/// Anything other than an explicit yes counts as a decline, including a
/// failed read: when in doubt, nothing is committed.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl ConfirmationGateway for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Non-interactive gate with a fixed answer, for `--yes` invocations.
#[derive(Debug, Clone, Copy)]
pub struct PresetConfirm(pub bool);

impl ConfirmationGateway for PresetConfirm {
    fn confirm(&self, _: &str) -> bool {
        self.0
    }
}
