use crate::config::DeviceCategory;
use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for devconf.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog file, or a directory containing devconf.json / devconf.yaml.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Write the configuration to this file instead of stdout (`-` for stdout).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file.
    #[arg(short, long)]
    pub force: bool,

    /// Device categories to configure (comma-separated). Defaults to all in the catalog.
    #[arg(short, long, value_delimiter = ',')]
    #[arg(value_enum)]
    pub categories: Vec<DeviceCategory>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["devconf", "catalog.yaml"]);
        assert_eq!(args.catalog, PathBuf::from("catalog.yaml"));
        assert_eq!(args.output, None);
        assert!(!args.force);
        assert!(args.categories.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "devconf",
            "templates/",
            "--output",
            "devconf.yaml",
            "--force",
            "-vv",
            "--categories",
            "charger,gridmeter,vehicle",
        ]);
        assert_eq!(args.catalog, PathBuf::from("templates/"));
        assert_eq!(args.output, Some(PathBuf::from("devconf.yaml")));
        assert!(args.force);
        assert_eq!(args.verbose, 2);
        assert_eq!(
            args.categories,
            vec![DeviceCategory::Charger, DeviceCategory::GridMeter, DeviceCategory::Vehicle]
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let result = Args::try_parse_from(["devconf", "c.yaml", "-c", "toaster"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidValue);
    }
}
