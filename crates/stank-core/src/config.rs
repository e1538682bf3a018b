use serde::{Deserialize, Serialize};

/// Optional probes that cost extra file reads.
///
/// Both default to off, trading completeness of the record for speed
/// when sniffing large trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SniffConfig {
    /// Read the final bytes of the file to report a trailing `\n`.
    pub eol_check: bool,

    /// Scan the whole file for `\r`. Only runs for records already
    /// classified as POSIX or alternative shell scripts.
    pub cr_check: bool,
}

impl SniffConfig {
    /// Every optional probe enabled.
    pub fn thorough() -> Self {
        Self {
            eol_check: true,
            cr_check: true,
        }
    }
}
