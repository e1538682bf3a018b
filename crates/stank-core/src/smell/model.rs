use serde::{Deserialize, Serialize};

/// Classification record for one filesystem entry.
///
/// This struct is the stable JSON contract identified by `SCHEMA_VERSION`.
/// Records for directories and symlinks short-circuit with most fields
/// left at their defaults, so consumers must check `directory` and
/// `symlink` before trusting anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Smell {
    pub path: String,
    pub filename: String,
    pub basename: String,
    /// Substring from the last `.` of the filename, dot included.
    /// `.profile` has extension `.profile`.
    pub extension: String,
    pub symlink: bool,
    /// Raw first line, trailing line terminator removed.
    pub shebang: String,
    pub interpreter: Interpreter,
    pub interpreter_flags: Vec<String>,
    pub line_ending: LineEnding,
    pub final_eol: FinalEol,
    pub contains_cr: bool,
    /// Unix permission bits (`0o777` mask).
    pub permissions: u32,
    pub directory: bool,
    pub owner_executable: bool,
    /// Meant to be sourced rather than executed directly.
    pub library: bool,
    pub bom: bool,
    pub posixy: bool,
    /// Interpreter is a full-featured bash.
    pub bash: bool,
    /// Interpreter belongs to the ksh family.
    pub ksh: bool,
    pub alt_shell_script: bool,
    pub core_configuration: bool,
    pub machine_generated: bool,
}

impl Smell {
    /// An empty record bound to `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// POSIX shell script or alternative shell script.
    pub fn is_script(&self) -> bool {
        self.posixy || self.alt_shell_script
    }

    /// First line looks like a shebang with its two leading bytes swapped.
    pub fn has_broken_shebang(&self) -> bool {
        self.shebang.starts_with("!#")
    }
}

/// Resolved script interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Interpreter {
    /// Named by a shebang or an extension/filename table.
    Known(String),
    /// Confirmed POSIX shell script of unknown dialect.
    GenericPosix,
    #[default]
    Unresolved,
}

impl Interpreter {
    pub fn known(name: impl Into<String>) -> Self {
        Self::Known(name.into())
    }

    /// The concrete interpreter name, if one was resolved.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Known(name) => Some(name),
            Self::GenericPosix | Self::Unresolved => None,
        }
    }
}

impl std::fmt::Display for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::GenericPosix => f.write_str("generic-sh"),
            Self::Unresolved => Ok(()),
        }
    }
}

/// Line ending style of the first line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    /// No terminator before end of file.
    #[default]
    #[serde(rename = "")]
    Missing,
    #[serde(rename = "\n")]
    Lf,
    #[serde(rename = "\r\n")]
    CrLf,
    #[serde(rename = "\r")]
    Cr,
}

impl LineEnding {
    /// Classifies a line read up to and including the first `\n`, or to
    /// end of file when there was none.
    pub fn of_line(line: &[u8]) -> Self {
        if line.ends_with(b"\r\n") {
            Self::CrLf
        } else if line.ends_with(b"\n") {
            Self::Lf
        } else if line.ends_with(b"\r") {
            Self::Cr
        } else {
            Self::Missing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "",
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Presence of a final POSIX end of line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalEol {
    /// The probe was not requested or the file is empty.
    #[default]
    NotComputed,
    Present,
    Absent,
}

impl FinalEol {
    pub fn from_present(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}
