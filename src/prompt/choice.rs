use super::interface::{SingleChoiceConfig, SingleChoicePrompter};
use crate::error::{Error, Result};

/// Lets the operator pick one of `labels`.
///
/// Returns the chosen label together with its zero-based position. A provider
/// answering with a label that was never offered is an internal inconsistency and
/// reported as [`Error::SelectionMismatch`].
pub fn select<P>(provider: &P, message: &str, labels: &[String]) -> Result<(String, usize)>
where
    P: SingleChoicePrompter + ?Sized,
{
    let config = SingleChoiceConfig {
        prompt: message.to_string(),
        choices: labels.to_vec(),
        default_index: None,
    };
    let selection = provider.prompt_single_choice(&config)?;

    match labels.iter().position(|label| *label == selection) {
        Some(index) => Ok((selection, index)),
        None => Err(Error::SelectionMismatch { selection }),
    }
}
