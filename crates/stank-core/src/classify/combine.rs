//! Final verdict for a sniffed file.
//!
//! The policy is conservative: name tables are authoritative over
//! content, so a POSIX-looking shebang never overrides an extension or
//! filename explicitly marked non-POSIX.
//!
//!   - Named interpreter → POSIXy iff the interpreter is POSIXy and
//!                         neither name table vetoes it
//!   - Bare `#!`         → POSIXy iff the name tables say so
//!   - Not POSIXy        → alt shell iff interpreter, extension or filename
//!                         is in an alternative-shell set
//!
//! Files without a shebang never reach the combiner; they keep the
//! table verdict and are not considered for the alt-shell sets.
//!
//! A file is never both POSIXy and an alt shell script. Machine-generated
//! files get no special treatment here; callers decide what to do with
//! that flag.

use crate::classify::prior::TableHits;
use crate::smell::Interpreter;
use crate::tables;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    pub posixy: bool,
    pub alt_shell_script: bool,
}

/// `shebang_interpreter` is the interpreter named by the `#!` line, or
/// `None` when the line names none (`#!`, `#!/usr/bin/env`).
pub fn combine(
    hits: &TableHits,
    shebang_interpreter: Option<&str>,
    interpreter: &Interpreter,
    extension: &str,
    filename: &str,
) -> Verdict {
    let posixy = match shebang_interpreter {
        Some(name) => tables::interpreter_posixy(name) && hits.allows_posixy(),
        None => hits.posixy(),
    };

    if posixy {
        return Verdict {
            posixy,
            alt_shell_script: false,
        };
    }

    let alt_shell_script = interpreter.name().is_some_and(tables::is_alt_interpreter)
        || tables::is_alt_extension(extension)
        || tables::is_alt_filename(filename);

    Verdict {
        posixy: false,
        alt_shell_script,
    }
}
