use crate::constants::exit_codes;
use crate::i18n::{keys, Localizer};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The operator aborted the session (Ctrl+C / Escape).
    #[error("Interrupted by the operator.")]
    Interrupted,

    #[error("Failed to install the interrupt handler: {0}.")]
    SignalHandlerError(#[from] ctrlc::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("No catalog file found in '{catalog_dir}'. Tried: {catalog_files}.")]
    CatalogNotFound { catalog_dir: String, catalog_files: String },

    #[error("Unsupported catalog file '{path}'. Expected a .json, .yaml or .yml file.")]
    CatalogFormatError { path: String },

    #[error("Catalog validation error: {0}.")]
    CatalogValidation(String),

    /// The prompt collaborator answered with a label that was never offered.
    #[error("Selection '{selection}' is not one of the offered options.")]
    SelectionMismatch { selection: String },

    #[error("Template '{template}' rendered an invalid device: {reason}")]
    RenderError { template: String, reason: String },

    #[error("Cannot proceed: output file '{output}' already exists. Use --force to overwrite it.")]
    OutputExistsError { output: String },

    /// A scripted prompt ran out of prepared answers.
    #[error("No scripted answer left for prompt '{prompt}'.")]
    NoScriptedAnswer { prompt: String },
}

/// Convenience type alias for Results with devconf's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err)
                if io_err.kind() == std::io::ErrorKind::Interrupted =>
            {
                Error::Interrupted
            }
            dialoguer::Error::IO(io_err) => Error::IoError(io_err),
        }
    }
}

/// Maps an error reaching the top of the wizard to the process exit status.
///
/// An operator interrupt is a regular way to leave the wizard and exits successfully.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Interrupted => exit_codes::SUCCESS,
        _ => exit_codes::FAILURE,
    }
}

/// Builds the line shown to the operator for an error reaching the top level.
pub fn error_message(err: &Error, messages: &dyn Localizer) -> String {
    match err {
        Error::Interrupted => messages.localize(keys::CANCEL),
        _ => format!("{} {}", messages.localize(keys::INPUT_ERROR), err),
    }
}

/// Default error handler that reports the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
/// * `messages` - Localizer used for the cancellation and error prefix texts
///
/// # Behavior
/// An interrupt prints the cancellation message to stdout and exits with status 0.
/// Every other error is logged, printed to stderr and exits with status 1.
pub fn default_error_handler(err: Error, messages: &dyn Localizer) -> ! {
    let message = error_message(&err, messages);
    match err {
        Error::Interrupted => println!("{message}"),
        _ => {
            log::error!("{err}");
            eprintln!("{message}");
        }
    }
    std::process::exit(exit_code(&err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Messages;

    #[test]
    fn interrupt_exits_successfully() {
        assert_eq!(exit_code(&Error::Interrupted), exit_codes::SUCCESS);
    }

    #[test]
    fn transport_errors_exit_with_failure() {
        let err = Error::IoError(std::io::Error::other("broken pipe"));
        assert_eq!(exit_code(&err), exit_codes::FAILURE);

        let err = Error::SelectionMismatch { selection: "D".to_string() };
        assert_eq!(exit_code(&err), exit_codes::FAILURE);
    }

    #[test]
    fn interrupted_dialoguer_error_maps_to_interrupt() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "read interrupted");
        let err: Error = dialoguer::Error::IO(io_err).into();
        assert!(matches!(err, Error::Interrupted));
    }

    #[test]
    fn other_dialoguer_error_maps_to_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: Error = dialoguer::Error::IO(io_err).into();
        assert!(matches!(err, Error::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn error_message_uses_localized_texts() {
        let messages = Messages::new();
        assert_eq!(error_message(&Error::Interrupted, &messages), "Cancelled.");

        let err = Error::SelectionMismatch { selection: "D".to_string() };
        assert_eq!(
            error_message(&err, &messages),
            "Input error: Selection 'D' is not one of the offered options."
        );
    }
}
