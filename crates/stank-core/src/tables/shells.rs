//! Shell-family membership sets.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Interpreters that are full-featured bash, as opposed to the POSIX
/// subsets (ash, dash, posh, ksh, zsh).
pub(crate) static FULL_BASH_INTERPRETERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["bash", "bash4"].into_iter().collect());

/// Members of the modern ksh family.
pub(crate) static KSH_INTERPRETERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["ksh", "ksh88", "ksh93", "mksh", "oksh", "pdksh", "rksh"]
        .into_iter()
        .collect()
});

/// Non-POSIX but still low-level, interactive shells.
pub(crate) static ALT_INTERPRETERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "csh", "elvish", "etsh", "fish", "ion", "lksh", "rc", "tcsh", "tsh",
    ]
    .into_iter()
    .collect()
});

pub(crate) static ALT_EXTENSIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        ".csh", ".cshrc", ".elv", ".etsh", ".fish", ".fishrc", ".ion", ".ionrc", ".lksh", ".rc",
        ".rcrc", ".tcsh", ".tcshrc", ".tsh",
    ]
    .into_iter()
    .collect()
});

pub(crate) static ALT_FILENAMES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["csh.login", "csh.logout", "rc.elv"].into_iter().collect());

/// Extensions of files that are machine generated and rarely edited by
/// hand, e.g. Git sample hooks.
pub(crate) static MACHINE_EXTENSIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| [".sample"].into_iter().collect());
