//! Filesystem metadata resolution.
//!
//! Everything here is derived from `lstat` and the path itself; no file
//! content is read.

use std::fs;
use std::io;
use std::path::Path;

/// Owner execute bit.
const OWNER_EXEC: u32 = 0o100;

/// Facts about a path that do not require opening it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFacts {
    pub directory: bool,
    pub symlink: bool,
    pub size: u64,
    pub permissions: u32,
    pub owner_executable: bool,
    pub filename: String,
    pub basename: String,
    pub extension: String,
}

impl PathFacts {
    /// Editor backup and swap files, e.g. `deploy.sh~`.
    pub fn is_backup(&self) -> bool {
        self.filename.ends_with('~')
    }
}

/// Stats `path` without following symlinks and derives name facts.
pub fn resolve(path: &Path) -> io::Result<PathFacts> {
    let meta = fs::symlink_metadata(path)?;
    let file_type = meta.file_type();

    if file_type.is_dir() {
        return Ok(PathFacts {
            directory: true,
            ..Default::default()
        });
    }

    let permissions = permission_bits(&meta);
    let filename = file_name(path);

    Ok(PathFacts {
        directory: false,
        symlink: file_type.is_symlink(),
        size: meta.len(),
        permissions,
        owner_executable: permissions & OWNER_EXEC != 0,
        basename: filename.clone(),
        extension: extension(&filename).to_string(),
        filename,
    })
}

/// Final path component, or the whole path when it has none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Suffix starting at the last `.` of `filename`, or `""`.
///
/// Unlike `Path::extension`, a leading dot counts: `.profile` has
/// extension `.profile` and `archive.` has extension `.`.
pub fn extension(filename: &str) -> &str {
    filename.rfind('.').map_or("", |i| &filename[i..])
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extension_follows_last_dot() {
        assert_eq!(extension("hello.sh"), ".sh");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(extension(".profile"), ".profile");
        assert_eq!(extension("Makefile"), "");
        assert_eq!(extension("trailing."), ".");
    }

    #[test]
    fn file_name_takes_last_component() {
        assert_eq!(file_name(Path::new("a/b/c.sh")), "c.sh");
        assert_eq!(file_name(Path::new("a/b/")), "b");
        assert_eq!(file_name(Path::new("/")), "/");
    }

    #[test]
    fn backup_files_are_detected() {
        let facts = PathFacts {
            filename: "deploy.sh~".into(),
            ..Default::default()
        };
        assert!(facts.is_backup());
    }

    #[test]
    fn directories_resolve_without_names() {
        let dir = TempDir::new().unwrap();
        let facts = resolve(dir.path()).unwrap();

        assert!(facts.directory);
        assert!(facts.filename.is_empty());
        assert_eq!(facts.permissions, 0);
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = resolve(Path::new("definitely/not/here.sh")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn owner_executable_bit_is_read() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o744)).unwrap();

        let facts = resolve(&path).unwrap();
        assert!(facts.owner_executable);
        assert_eq!(facts.permissions, 0o744);
        assert_eq!(facts.size, 10);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!resolve(&path).unwrap().owner_executable);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.sh");
        fs::write(&target, "#!/bin/sh\n").unwrap();
        let link = dir.path().join("link.sh");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let facts = resolve(&link).unwrap();
        assert!(facts.symlink);
        assert_eq!(facts.filename, "link.sh");
        assert_eq!(facts.extension, ".sh");
    }
}
