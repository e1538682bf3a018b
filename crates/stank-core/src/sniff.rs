use std::fs::File;
use std::path::Path;

use tracing::{debug, trace};

use crate::classify::{self, TableHits};
use crate::config::SniffConfig;
use crate::content::{self, LeadingContent};
use crate::error::{SniffError, Stage};
use crate::meta;
use crate::shebang::{self, FirstLine};
use crate::smell::{FinalEol, Interpreter, Smell};
use crate::tables;

/// Classify a single filesystem entry.
///
/// The pipeline runs in one direction and stops as soon as the answer is
/// settled:
///
/// 1. `lstat` the path. Directories, editor backups (`name~`) and
///    symlinks return here, before any content is read.
/// 2. Consult the extension and filename tables.
/// 3. Open the file once for a BOM probe and a read up to the first `\n`.
/// 4. Optionally re-open it to check for a final end of line.
/// 5. Without a shebang, return with the verdict of the name tables.
///    Otherwise parse it and combine all signals into a verdict.
/// 6. Optionally re-open it to scan for `\r`, only for files already
///    classified as shell scripts.
///
/// At most three handles are opened, one after another, and each is
/// closed before the function returns. On an I/O failure the error
/// carries the record as populated so far.
pub fn sniff(path: impl AsRef<Path>, config: &SniffConfig) -> Result<Smell, SniffError> {
    let path = path.as_ref();
    let mut smell = Smell::new(path.to_string_lossy());

    let facts = match meta::resolve(path) {
        Ok(facts) => facts,
        Err(e) => return Err(SniffError::new(Stage::Stat, path, e, smell)),
    };

    if facts.directory {
        debug!(path = %path.display(), "directory");
        smell.directory = true;
        return Ok(smell);
    }

    smell.permissions = facts.permissions;
    smell.owner_executable = facts.owner_executable;
    smell.filename = facts.filename.clone();
    smell.basename = facts.basename.clone();
    smell.extension = facts.extension.clone();

    if facts.is_backup() {
        debug!(path = %path.display(), "editor backup file");
        return Ok(smell);
    }

    if facts.symlink {
        debug!(path = %path.display(), "symlink");
        smell.symlink = true;
        return Ok(smell);
    }

    smell.machine_generated = tables::is_machine_extension(&smell.extension);

    let hits = TableHits::lookup(&smell.extension, &smell.filename);
    smell.posixy = hits.posixy();
    smell.core_configuration = hits.core_configuration();
    smell.library = classify::is_library(
        smell.core_configuration,
        &smell.extension,
        smell.owner_executable,
    );

    let extension_interpreter = tables::extension_interpreter(&smell.extension);
    if let Some(name) = extension_interpreter {
        smell.interpreter = Interpreter::known(name);
    }

    let mut leading = LeadingContent::default();
    let probe = File::open(path)
        .map_err(|e| (Stage::Open, e))
        .and_then(|file| {
            content::read_leading(file, &mut leading).map_err(|e| (Stage::ContentProbe, e))
        });
    smell.bom = leading.bom;
    smell.line_ending = leading.line_ending;
    if let Err((stage, e)) = probe {
        return Err(SniffError::new(stage, path, e, smell));
    }
    trace!(path = %path.display(), bom = smell.bom, line_ending = ?smell.line_ending, "leading content");

    if config.eol_check && facts.size > 0 {
        let present = File::open(path).and_then(|file| content::has_final_eol(file, facts.size));
        match present {
            Ok(present) => smell.final_eol = FinalEol::from_present(present),
            Err(e) => return Err(SniffError::new(Stage::FinalEolProbe, path, e, smell)),
        }
    }

    let first_line = leading.first_line_text();
    let text = match FirstLine::of(&first_line) {
        FirstLine::Shebang(text) => text,
        line @ (FirstLine::Broken(_) | FirstLine::Absent) => {
            if let FirstLine::Broken(text) = line {
                smell.shebang = text.to_string();
            }
            if smell.posixy && extension_interpreter.is_none() {
                smell.interpreter = Interpreter::GenericPosix;
            }
            debug!(path = %path.display(), posixy = smell.posixy, "no shebang");
            return Ok(smell);
        }
    };

    smell.shebang = text.to_string();
    let command = shebang::parse(text);
    smell.interpreter_flags = command.flags;

    let shebang_interpreter = if command.interpreter.is_empty() {
        if smell.posixy && extension_interpreter.is_none() {
            smell.interpreter = Interpreter::GenericPosix;
        }
        None
    } else {
        smell.interpreter = Interpreter::known(command.interpreter.as_str());
        Some(command.interpreter)
    };

    if let Some(name) = smell.interpreter.name() {
        smell.bash = tables::is_full_bash(name);
        smell.ksh = tables::is_ksh_family(name);
    }

    let verdict = classify::combine(
        &hits,
        shebang_interpreter.as_deref(),
        &smell.interpreter,
        &smell.extension,
        &smell.filename,
    );
    smell.posixy = verdict.posixy;
    smell.alt_shell_script = verdict.alt_shell_script;

    if config.cr_check && smell.is_script() {
        match File::open(path).and_then(content::contains_cr) {
            Ok(found) => smell.contains_cr = found,
            Err(e) => return Err(SniffError::new(Stage::CrProbe, path, e, smell)),
        }
    }

    debug!(
        path = %path.display(),
        interpreter = %smell.interpreter,
        posixy = smell.posixy,
        alt_shell_script = smell.alt_shell_script,
        "classified"
    );

    Ok(smell)
}
