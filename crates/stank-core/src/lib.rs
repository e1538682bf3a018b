pub mod classify;
pub mod config;
pub mod content;
pub mod error;
pub mod meta;
pub mod shebang;
pub mod smell;
pub mod sniff;
pub mod tables;

pub use config::SniffConfig;
pub use error::{ErrorKind, SniffError, Stage};
pub use smell::{FinalEol, Interpreter, LineEnding, Smell};
pub use sniff::sniff;

pub const TOOL_NAME: &str = "stank";

/// JSON schema version of `Smell` records.
/// This must be bumped only when the record shape changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";
