//! Interactive dialog utilities for operator input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Implementation replaying prepared answers
//! - `choice`: Single choice selection on top of any provider
//! - `handler`: Type dispatch, validation and re-prompting

pub mod choice;
pub mod dialoguer;
pub mod handler;
pub mod interface;
pub mod scripted;

// Re-export new interfaces for easy access
pub use handler::PromptHandler;
pub use interface::*;
pub use scripted::ScriptedPrompter;

use crate::i18n::Localizer;
use self::dialoguer::DialoguerPrompter;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Creates a handler asking through the terminal
pub fn get_prompt_handler(messages: &dyn Localizer) -> PromptHandler<'_, impl PromptProvider> {
    PromptHandler::new(get_prompt_provider(), messages)
}
