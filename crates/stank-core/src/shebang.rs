//! Shebang recognition and command parsing.
//!
//! Recognized forms include `#!/bin/bash`, `#!/usr/local/bin/bash`,
//! `#!/usr/bin/env python3 -u`, `#!/bin/busybox sh` and the bare
//! `#!bash`. Only `^#!.*$` on the first line is recognized; polyglot or
//! multi-line shebangs are not.

use crate::tables;

const SHEBANG: &str = "#!";

/// `!#` is a common typo for `#!`.
const BROKEN_SHEBANG: &str = "!#";

/// Launchers stripped from the front of a shebang command. Only one
/// layer is stripped: `#!/usr/bin/env busybox sh` keeps `busybox` as the
/// interpreter.
const INDIRECTIONS: &[&str] = &["/usr/bin/env", "/bin/busybox"];

/// How the first line of a file reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstLine<'a> {
    Shebang(&'a str),
    /// Starts with `!#`: an attempted shebang that is not parsed.
    Broken(&'a str),
    Absent,
}

impl<'a> FirstLine<'a> {
    /// `line` must already have its terminator stripped.
    pub fn of(line: &'a str) -> Self {
        if line.starts_with(SHEBANG) {
            Self::Shebang(line)
        } else if line.starts_with(BROKEN_SHEBANG) {
            Self::Broken(line)
        } else {
            Self::Absent
        }
    }
}

/// Interpreter invocation named by a shebang.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShebangCommand {
    /// Canonical interpreter name; empty when the shebang names none. The
    /// flags are kept either way.
    pub interpreter: String,
    pub flags: Vec<String>,
}

/// Parses a `#!` line into interpreter and flags.
///
/// The command is split on single spaces, so repeated spaces yield
/// empty flags.
pub fn parse(shebang: &str) -> ShebangCommand {
    let command = shebang.strip_prefix(SHEBANG).unwrap_or(shebang).trim();

    let mut parts: Vec<&str> = command.split(' ').collect();
    if parts.first().is_some_and(|first| INDIRECTIONS.contains(first)) {
        parts.remove(0);
    }

    let Some((path, flags)) = parts.split_first() else {
        return ShebangCommand::default();
    };

    ShebangCommand {
        interpreter: resolve_interpreter(base_name(path)).to_string(),
        flags: flags.iter().map(|flag| flag.to_string()).collect(),
    }
}

/// Canonical name for an interpreter filename, e.g. `zshrc` → `zsh`.
/// Names outside the filename table are returned as is.
fn resolve_interpreter(filename: &str) -> &str {
    tables::filename_interpreter(filename).unwrap_or(filename)
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(interpreter: &str, flags: &[&str]) -> ShebangCommand {
        ShebangCommand {
            interpreter: interpreter.into(),
            flags: flags.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn first_line_forms() {
        assert_eq!(FirstLine::of("#!/bin/sh"), FirstLine::Shebang("#!/bin/sh"));
        assert_eq!(FirstLine::of("!#/bin/sh"), FirstLine::Broken("!#/bin/sh"));
        assert_eq!(FirstLine::of("echo hi"), FirstLine::Absent);
        assert_eq!(FirstLine::of(""), FirstLine::Absent);
        assert_eq!(FirstLine::of(" #!/bin/sh"), FirstLine::Absent);
    }

    #[test]
    fn absolute_interpreter() {
        assert_eq!(parse("#!/bin/bash"), cmd("bash", &[]));
        assert_eq!(parse("#!/usr/local/bin/bash"), cmd("bash", &[]));
    }

    #[test]
    fn env_is_stripped() {
        assert_eq!(parse("#!/usr/bin/env python3 -u"), cmd("python3", &["-u"]));
        assert_eq!(parse("#!/usr/bin/env sh"), cmd("sh", &[]));
    }

    #[test]
    fn busybox_is_stripped() {
        assert_eq!(parse("#!/bin/busybox ash"), cmd("ash", &[]));
    }

    #[test]
    fn only_one_indirection_layer_is_stripped() {
        assert_eq!(
            parse("#!/usr/bin/env /bin/busybox sh"),
            cmd("busybox", &["sh"])
        );
        assert_eq!(parse("#!/usr/bin/env -S bash -e"), cmd("-S", &["bash", "-e"]));
    }

    #[test]
    fn flags_are_kept_in_order() {
        assert_eq!(
            parse("#!/bin/bash -euo pipefail"),
            cmd("bash", &["-euo", "pipefail"])
        );
        assert_eq!(
            parse("#!/usr/bin/env MathKernel -script"),
            cmd("MathKernel", &["-script"])
        );
    }

    #[test]
    fn repeated_spaces_yield_empty_flags() {
        assert_eq!(parse("#!/bin/sh  -e"), cmd("sh", &["", "-e"]));
        assert_eq!(parse("#!/usr/bin/env  bash"), cmd("", &["bash"]));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(parse("#! /bin/sh "), cmd("sh", &[]));
    }

    #[test]
    fn relative_interpreter() {
        assert_eq!(parse("#!fish"), cmd("fish", &[]));
    }

    #[test]
    fn config_filename_interpreters_are_canonicalized() {
        assert_eq!(parse("#!/etc/zshrc"), cmd("zsh", &[]));
        assert_eq!(parse("#!/usr/bin/env oshrc"), cmd("osh", &[]));
    }

    #[test]
    fn empty_commands_name_no_interpreter() {
        assert_eq!(parse("#!"), ShebangCommand::default());
        assert_eq!(parse("#!   "), ShebangCommand::default());
        assert_eq!(parse("#!/usr/bin/env"), ShebangCommand::default());
    }
}
