/// Handles argument parsing and the top-level run.
pub mod cli;

/// Question, template and catalog definitions.
pub mod config;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Localized operator-facing texts.
pub mod i18n;

/// Operator interrupt (Ctrl-C) tracking.
pub mod interrupt;

/// A set of helpers for writing the generated configuration.
pub mod ioutils;

/// Operator input: prompt providers and the question engine.
pub mod prompt;

/// Device template rendering.
pub mod renderer;

/// Answer validators
pub mod validation;

/// Wizard flow over device categories.
pub mod wizard;
