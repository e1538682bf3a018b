use crate::tables;

/// Table lookups made from the path alone, before any content is read.
///
/// Each lookup keeps hit and value apart: a confirmed `false` vetoes later
/// content-based inference, a missing entry does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableHits {
    pub extension_posixy: Option<bool>,
    pub filename_posixy: Option<bool>,
    pub extension_config: Option<bool>,
    pub filename_config: Option<bool>,
}

impl TableHits {
    pub fn lookup(extension: &str, filename: &str) -> Self {
        Self {
            extension_posixy: tables::extension_posixy(extension),
            filename_posixy: tables::filename_posixy(filename),
            extension_config: tables::extension_config(extension),
            filename_config: tables::filename_config(filename),
        }
    }

    /// POSIXy-ness implied by name alone. The filename entry, when present,
    /// overrides the extension entry.
    pub fn posixy(&self) -> bool {
        self.filename_posixy
            .or(self.extension_posixy)
            .unwrap_or(false)
    }

    pub fn core_configuration(&self) -> bool {
        self.extension_config.unwrap_or(false) || self.filename_config.unwrap_or(false)
    }

    /// Neither name table explicitly marks the file non-POSIX.
    pub fn allows_posixy(&self) -> bool {
        self.extension_posixy != Some(false) && self.filename_posixy != Some(false)
    }
}

/// Sourced rather than executed: configuration, or any file with an
/// extension, that its owner cannot execute.
pub fn is_library(core_configuration: bool, extension: &str, owner_executable: bool) -> bool {
    (core_configuration || !extension.is_empty()) && !owner_executable
}
