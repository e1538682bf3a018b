use crate::TOOL_NAME;
use crate::smell::model::Smell;

pub fn render_text(smell: &Smell) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", TOOL_NAME, smell.path));

    if smell.directory {
        out.push_str("  directory\n");
        return out;
    }
    if smell.symlink {
        out.push_str("  symlink\n");
        return out;
    }

    let verdict = if smell.posixy {
        "posix shell script"
    } else if smell.alt_shell_script {
        "alternative shell script"
    } else {
        "other"
    };
    out.push_str(&format!("  classification: {verdict}\n"));
    out.push_str(&format!("  interpreter: {}\n", smell.interpreter));
    if !smell.interpreter_flags.is_empty() {
        out.push_str(&format!(
            "  interpreter flags: {}\n",
            smell.interpreter_flags.join(" ")
        ));
    }
    out.push_str(&format!("  line ending: {:?}\n", smell.line_ending.as_str()));
    out.push_str(&format!("  final eol: {:?}\n", smell.final_eol));
    out.push_str(&format!("  permissions: {:o}\n", smell.permissions));

    let mut tags = Vec::new();
    for (set, tag) in [
        (smell.bom, "bom"),
        (smell.contains_cr, "cr"),
        (smell.library, "library"),
        (smell.core_configuration, "config"),
        (smell.machine_generated, "machine-generated"),
        (smell.bash, "bash"),
        (smell.ksh, "ksh"),
    ] {
        if set {
            tags.push(tag);
        }
    }
    if !tags.is_empty() {
        out.push_str(&format!("  tags: {}\n", tags.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smell::model::{Interpreter, LineEnding};

    #[test]
    fn renders_posix_script() {
        let smell = Smell {
            path: "hello.sh".into(),
            interpreter: Interpreter::known("bash"),
            interpreter_flags: vec!["-eu".into()],
            line_ending: LineEnding::Lf,
            posixy: true,
            bash: true,
            ..Default::default()
        };

        let text = render_text(&smell);
        assert!(text.starts_with("stank: hello.sh\n"));
        assert!(text.contains("classification: posix shell script"));
        assert!(text.contains("interpreter: bash"));
        assert!(text.contains("interpreter flags: -eu"));
        assert!(text.contains(r#"line ending: "\n""#));
        assert!(text.contains("tags: bash"));
    }

    #[test]
    fn directories_render_briefly() {
        let smell = Smell {
            path: "src".into(),
            directory: true,
            ..Default::default()
        };
        assert_eq!(render_text(&smell), "stank: src\n  directory\n");
    }
}
