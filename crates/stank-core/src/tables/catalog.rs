//! Name-keyed classification catalogs.
//!
//! Every key is stored lowercase. Callers go through the `tables` lookups,
//! which lowercase the probe before consulting these maps.
//!
//! Filename entries are more specific than extension entries and win
//! when both match (see `TableHits::posixy`).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Lowercase extension → whether it marks a POSIX shell script.
const EXTENSIONS_POSIXY: &[(&str, bool)] = &[
    (".ada", false),
    (".ash", true),
    (".bash", true),
    (".bash4", true),
    (".bash_login", true),
    (".bash_logout", true),
    (".bash_profile", true),
    (".bashrc", true),
    (".bat", false),
    (".bin", false),
    (".bmp", false),
    (".bosh", true),
    (".c", false),
    (".cl", false),
    (".cmd", false),
    (".conf", false),
    (".csh", false),
    (".cshrc", false),
    (".dash", true),
    (".doc", false),
    (".docx", false),
    (".ds_store", false),
    (".e", false),
    (".elv", false),
    (".erl", false),
    (".escript", false),
    (".etsh", false),
    (".exe", false),
    (".expect", false),
    (".fish", false),
    (".flv", false),
    (".fth", false),
    (".gif", false),
    (".gitignore", false),
    (".gitkeep", false),
    (".gitmodules", false),
    (".groovy", false),
    (".hsh", true),
    (".ionrc", false),
    (".j", false),
    (".jpeg", false),
    (".jpg", false),
    (".js", false),
    (".json", false),
    (".ksh", true),
    (".ksh88", true),
    (".ksh93", true),
    (".kshrc", true),
    (".lisp", false),
    (".lksh", false),
    (".log", false),
    (".lua", false),
    (".markdown", false),
    (".md", false),
    (".mf", false),
    (".mksh", true),
    (".mov", false),
    (".mp3", false),
    (".mp4", false),
    (".oksh", true),
    (".pdf", false),
    (".pdksh", true),
    (".php", false),
    (".pike", false),
    (".pl", false),
    (".png", false),
    (".posh", true),
    (".properties", false),
    (".psh", false),
    (".py", false),
    (".pyw", false),
    (".rb", false),
    (".rc", false),
    (".rksh", true),
    (".rkt", false),
    (".scala", false),
    (".sf", false),
    (".sh", true),
    (".shinit", true),
    (".shrc", true),
    (".svg", false),
    (".swp", false),
    (".tcsh", false),
    (".tcshrc", false),
    (".tiff", false),
    (".tsh", false),
    (".txr", false),
    (".txt", false),
    (".vbs", false),
    (".wav", false),
    (".xml", false),
    (".yaml", false),
    (".yash", true),
    (".yml", false),
    (".zkl", false),
    (".zlogin", true),
    (".zlogout", true),
    (".zprofile", true),
    (".zsh", true),
    (".zshenv", true),
    (".zshrc", true),
];

/// Lowercase extension → whether it marks a shell configuration file.
const EXTENSIONS_CONFIG: &[(&str, bool)] = &[
    (".ashrc", true),
    (".bash_login", true),
    (".bash_logout", true),
    (".bash_profile", true),
    (".bashrc", true),
    (".cshrc", true),
    (".dashrc", true),
    (".fishrc", true),
    (".ionrc", true),
    (".kshrc", true),
    (".profile", true),
    (".rcrc", true),
    (".shinit", true),
    (".shrc", true),
    (".tcshrc", true),
    (".zlogin", true),
    (".zlogout", true),
    (".zprofile", true),
    (".zshenv", true),
    (".zshrc", true),
];

/// Lowercase filename → whether it marks a POSIX shell script.
const FILENAMES_POSIXY: &[(&str, bool)] = &[
    (".profile", true),
    ("bash_login", true),
    ("bash_logout", true),
    ("changelog", false),
    ("csh.login", false),
    ("csh.logout", false),
    ("login", true),
    ("logout", true),
    ("makefile", false),
    ("oilrc", true),
    ("oshrc", true),
    ("profile", true),
    ("rc.elv", false),
    ("rcrc", false),
    ("readme", false),
    ("shinit", true),
    ("shrc", true),
    ("tcsh.login", false),
    ("tcsh.logout", false),
    ("thumbs.db", false),
    ("yshrc", false),
    ("zlogin", true),
    ("zlogout", true),
    ("zprofile", true),
    ("zshenv", true),
    ("zshrc", true),
];

/// Lowercase filename → whether it marks a shell configuration file.
const FILENAMES_CONFIG: &[(&str, bool)] = &[
    ("bash_login", true),
    ("bash_logout", true),
    ("csh.login", true),
    ("csh.logout", true),
    ("login", true),
    ("logout", true),
    ("oilrc", true),
    ("oshrc", true),
    ("profile", true),
    ("rc.elv", true),
    ("rcrc", true),
    ("shinit", true),
    ("shrc", true),
    ("tcsh.login", true),
    ("tcsh.logout", true),
    ("yshrc", true),
    ("zlogin", true),
    ("zlogout", true),
    ("zprofile", true),
    ("zshenv", true),
    ("zshrc", true),
];

/// Lowercase extension → canonical interpreter.
const EXTENSIONS_INTERPRETER: &[(&str, &str)] = &[
    (".ashrc", "ash"),
    (".awk", "awk"),
    (".bash", "bash"),
    (".bash_login", "bash"),
    (".bash_logout", "bash"),
    (".bash_profile", "bash"),
    (".bashrc", "bash"),
    (".bsdmakefile", "bmake"),
    (".csh", "csh"),
    (".cshrc", "csh"),
    (".dash", "dash"),
    (".dashrc", "dash"),
    (".elv", "elvish"),
    (".fish", "fish"),
    (".fishrc", "fish"),
    (".gawk", "gawk"),
    (".gnumakefile", "gmake"),
    (".hsh", "hsh"),
    (".ion", "ion"),
    (".ionrc", "ion"),
    (".ksh", "ksh"),
    (".ksh88", "ksh"),
    (".ksh93", "ksh93"),
    (".ksh93rc", "ksh93"),
    (".kshrc", "ksh"),
    (".lkshrc", "lksh"),
    (".lua", "lua"),
    (".makefile", "make"),
    (".mf", "make"),
    (".mksh", "mksh"),
    (".mkshrc", "mksh"),
    (".osh", "osh"),
    (".pdksh", "pdksh"),
    (".pdkshrc", "pdksh"),
    (".php", "php"),
    (".pmakefile", "pmake"),
    (".poshrc", "posh"),
    (".profile", "sh"),
    (".rc", "rc"),
    (".rcrc", "rc"),
    (".sed", "sed"),
    (".sh", "sh"),
    (".shinit", "sh"),
    (".shrc", "sh"),
    (".tcsh", "tcsh"),
    (".tcshrc", "tcsh"),
    (".ysh", "ysh"),
    (".zlogin", "zsh"),
    (".zlogout", "zsh"),
    (".zprofile", "zsh"),
    (".zsh", "zsh"),
    (".zshenv", "zsh"),
    (".zshprofile", "zsh"),
    (".zshrc", "zsh"),
];

/// Lowercase filename → canonical interpreter.
const FILENAMES_INTERPRETER: &[(&str, &str)] = &[
    (".ashrc", "ash"),
    (".bashrc", "bash"),
    (".cshrc", "csh"),
    (".dashrc", "dash"),
    (".fishrc", "fish"),
    (".ionrc", "ion"),
    (".ksh93rc", "ksh93"),
    (".kshrc", "ksh"),
    (".lkshrc", "lksh"),
    (".login", "sh"),
    (".logout", "sh"),
    (".mkshrc", "mksh"),
    (".pdkshrc", "pdksh"),
    (".poshrc", "posh"),
    (".rcrc", "rc"),
    (".shinit", "sh"),
    (".shrc", "sh"),
    (".tcshrc", "tcsh"),
    (".zlogin", "zsh"),
    (".zlogout", "zsh"),
    (".zprofile", "zsh"),
    (".zshenv", "zsh"),
    (".zshrc", "zsh"),
    ("bsdmakefile", "bmake"),
    ("csh.login", "csh"),
    ("csh.logout", "csh"),
    ("gnumakefile", "gmake"),
    ("makefile", "make"),
    ("oilrc", "osh"),
    ("oshrc", "osh"),
    ("pmakefile", "pmake"),
    ("profile", "sh"),
    ("rc.elv", "elvish"),
    ("tcsh.login", "tcsh"),
    ("tcsh.logout", "tcsh"),
    ("yshrc", "ysh"),
    ("zlogin", "zsh"),
    ("zlogout", "zsh"),
    ("zprofile", "zsh"),
    ("zshenv", "zsh"),
    ("zshrc", "zsh"),
];

/// Interpreter name → whether it is a POSIX compatible shell.
///
/// Unknown interpreters are treated as non-POSIX by callers.
const INTERPRETERS_POSIXY: &[(&str, bool)] = &[
    ("ash", true),
    ("awk", false),
    ("bash", true),
    ("bash4", true),
    ("bosh", true),
    ("csh", false),
    ("dash", true),
    ("elvish", false),
    ("etsh", false),
    ("expect", false),
    ("fish", false),
    ("gawk", false),
    ("hsh", true),
    ("ion", false),
    ("jruby", false),
    ("jython", false),
    ("ksh", true),
    ("ksh88", true),
    ("ksh93", true),
    ("lksh", false),
    ("lua", false),
    ("mksh", true),
    ("node", false),
    ("oksh", true),
    ("oil", true),
    ("osh", true),
    ("pdksh", true),
    ("perl", false),
    ("perl6", false),
    ("php", false),
    ("posh", true),
    ("python", false),
    ("rc", false),
    ("rksh", true),
    ("ruby", false),
    ("sed", false),
    ("sh", true),
    ("stash", false),
    ("swift", false),
    ("tclsh", false),
    ("tcsh", false),
    ("tsh", false),
    ("yash", true),
    ("ysh", false),
    ("zsh", true),
];

pub(crate) static EXTENSION_POSIXY: LazyLock<HashMap<&'static str, bool>> =
    LazyLock::new(|| EXTENSIONS_POSIXY.iter().copied().collect());

pub(crate) static EXTENSION_CONFIG: LazyLock<HashMap<&'static str, bool>> =
    LazyLock::new(|| EXTENSIONS_CONFIG.iter().copied().collect());

pub(crate) static FILENAME_POSIXY: LazyLock<HashMap<&'static str, bool>> =
    LazyLock::new(|| FILENAMES_POSIXY.iter().copied().collect());

pub(crate) static FILENAME_CONFIG: LazyLock<HashMap<&'static str, bool>> =
    LazyLock::new(|| FILENAMES_CONFIG.iter().copied().collect());

pub(crate) static EXTENSION_INTERPRETER: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EXTENSIONS_INTERPRETER.iter().copied().collect());

pub(crate) static FILENAME_INTERPRETER: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FILENAMES_INTERPRETER.iter().copied().collect());

pub(crate) static INTERPRETER_POSIXY: LazyLock<HashMap<&'static str, bool>> =
    LazyLock::new(|| INTERPRETERS_POSIXY.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keys() -> impl Iterator<Item = &'static str> {
        EXTENSIONS_POSIXY
            .iter()
            .map(|(k, _)| *k)
            .chain(EXTENSIONS_CONFIG.iter().map(|(k, _)| *k))
            .chain(FILENAMES_POSIXY.iter().map(|(k, _)| *k))
            .chain(FILENAMES_CONFIG.iter().map(|(k, _)| *k))
            .chain(EXTENSIONS_INTERPRETER.iter().map(|(k, _)| *k))
            .chain(FILENAMES_INTERPRETER.iter().map(|(k, _)| *k))
            .chain(INTERPRETERS_POSIXY.iter().map(|(k, _)| *k))
    }

    #[test]
    fn every_key_is_lowercase() {
        for key in all_keys() {
            assert_eq!(key, key.to_lowercase(), "key {key:?} is not lowercase");
        }
    }

    #[test]
    fn no_duplicate_keys_within_a_table() {
        assert_eq!(EXTENSION_POSIXY.len(), EXTENSIONS_POSIXY.len());
        assert_eq!(EXTENSION_CONFIG.len(), EXTENSIONS_CONFIG.len());
        assert_eq!(FILENAME_POSIXY.len(), FILENAMES_POSIXY.len());
        assert_eq!(FILENAME_CONFIG.len(), FILENAMES_CONFIG.len());
        assert_eq!(EXTENSION_INTERPRETER.len(), EXTENSIONS_INTERPRETER.len());
        assert_eq!(FILENAME_INTERPRETER.len(), FILENAMES_INTERPRETER.len());
        assert_eq!(INTERPRETER_POSIXY.len(), INTERPRETERS_POSIXY.len());
    }

    #[test]
    fn interpreters_mapped_from_posixy_extensions_are_posixy() {
        for (ext, posixy) in EXTENSIONS_POSIXY {
            if !posixy {
                continue;
            }
            if let Some(interp) = EXTENSION_INTERPRETER.get(ext) {
                assert_eq!(
                    INTERPRETER_POSIXY.get(interp),
                    Some(&true),
                    "{ext} maps to {interp}, which is not POSIXy"
                );
            }
        }
    }
}
