//! Confirmation prompts for destructive commands

use std::io::{BufRead, Write};

use crate::error::FinanceResult;
use crate::services::{Confirmation, ConfirmationFlow, PendingAction};

/// Ask the user to confirm `action` on stdin
///
/// `assume_yes` (the `--yes` flag) skips the prompt.
pub fn confirm(action: PendingAction, assume_yes: bool) -> FinanceResult<Confirmation> {
    if assume_yes {
        return Ok(Confirmation::Confirmed);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    confirm_with(action, &mut stdin.lock(), &mut stdout)
}

/// Prompt on `output` and read the answer from `input`
///
/// Only `y` or `yes` (any case) confirms; anything else, including end of
/// input, cancels.
pub fn confirm_with<R: BufRead, W: Write>(
    action: PendingAction,
    input: &mut R,
    output: &mut W,
) -> FinanceResult<Confirmation> {
    let mut flow = ConfirmationFlow::new();
    flow.request(action);

    write!(output, "{} [y/N]: ", action.prompt())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    flow.answer(Confirmation::from_bool(answer == "y" || answer == "yes"));

    Ok(flow
        .take_resolved()
        .map(|(_, confirmation)| confirmation)
        .unwrap_or(Confirmation::Cancelled))
}
