//! Constants used throughout the devconf application

/// Catalog file names looked up inside a catalog directory, in order of preference
pub const CATALOG_FILENAMES: &[&str] = &["devconf.json", "devconf.yaml", "devconf.yml"];

/// STDOUT indicator for the output argument
pub const STDOUT_INDICATOR: &str = "-";

/// Choice lists longer than this switch to fuzzy search
pub const FUZZY_SELECT_THRESHOLD: usize = 10;

/// Canonical answers for boolean questions, indexed by the No/Yes choice position
pub const BOOL_ANSWERS: [&str; 2] = ["false", "true"];

/// Device entry keys written for templates without their own render source
pub mod device {
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const TEMPLATE: &str = "template";
    pub const TEMPLATE_TYPE: &str = "template";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
