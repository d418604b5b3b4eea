//! Question and catalog definitions
//!
//! This module contains the configuration system components:
//! - `types`: Basic types and enums used throughout the config system
//! - `question`: Question definition
//! - `loader`: Catalog file loading and parsing

pub mod loader;
pub mod question;
pub mod types;

// Re-export commonly used types for convenience
pub use loader::{Catalog, ElementCatalog, Param, Template};
pub use question::Question;
pub use types::{ChargeMode, DefaultValue, DeviceCategory, ValueType};
