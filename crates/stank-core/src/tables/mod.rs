//! Read-only classification tables.
//!
//! All tables are built once on first use and never mutated, so lookups
//! are safe from any number of threads without synchronization.
//! Probe keys are lowercased here; the stored keys already are.

pub mod bom;
pub(crate) mod catalog;
pub(crate) mod shells;

use catalog::*;
use shells::*;

pub fn extension_posixy(extension: &str) -> Option<bool> {
    EXTENSION_POSIXY.get(extension.to_lowercase().as_str()).copied()
}

pub fn filename_posixy(filename: &str) -> Option<bool> {
    FILENAME_POSIXY.get(filename.to_lowercase().as_str()).copied()
}

pub fn extension_config(extension: &str) -> Option<bool> {
    EXTENSION_CONFIG.get(extension.to_lowercase().as_str()).copied()
}

pub fn filename_config(filename: &str) -> Option<bool> {
    FILENAME_CONFIG.get(filename.to_lowercase().as_str()).copied()
}

pub fn extension_interpreter(extension: &str) -> Option<&'static str> {
    EXTENSION_INTERPRETER
        .get(extension.to_lowercase().as_str())
        .copied()
}

pub fn filename_interpreter(filename: &str) -> Option<&'static str> {
    FILENAME_INTERPRETER
        .get(filename.to_lowercase().as_str())
        .copied()
}

/// Whether `interpreter` is a known POSIX compatible shell.
/// Unknown interpreters are not.
pub fn interpreter_posixy(interpreter: &str) -> bool {
    INTERPRETER_POSIXY
        .get(interpreter.to_lowercase().as_str())
        .copied()
        .unwrap_or(false)
}

pub fn is_full_bash(interpreter: &str) -> bool {
    FULL_BASH_INTERPRETERS.contains(interpreter.to_lowercase().as_str())
}

pub fn is_ksh_family(interpreter: &str) -> bool {
    KSH_INTERPRETERS.contains(interpreter.to_lowercase().as_str())
}

pub fn is_alt_interpreter(interpreter: &str) -> bool {
    ALT_INTERPRETERS.contains(interpreter.to_lowercase().as_str())
}

pub fn is_alt_extension(extension: &str) -> bool {
    ALT_EXTENSIONS.contains(extension.to_lowercase().as_str())
}

pub fn is_alt_filename(filename: &str) -> bool {
    ALT_FILENAMES.contains(filename.to_lowercase().as_str())
}

pub fn is_machine_extension(extension: &str) -> bool {
    MACHINE_EXTENSIONS.contains(extension.to_lowercase().as_str())
}
