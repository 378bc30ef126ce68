use include_dir::{Dir, include_dir};

use crate::domain::{AppError, PROMPT_FILE_NAME, ScriptFlavor};
use crate::ports::TemplateStore;

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Script and prompt bodies compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, name: &str) -> Result<&'static str, AppError> {
        TEMPLATES_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::MissingTemplate(name.to_string()))
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn script_template(&self, flavor: ScriptFlavor) -> Result<&str, AppError> {
        self.read(flavor.file_name())
    }

    fn prompt_template(&self) -> Result<&str, AppError> {
        self.read(PROMPT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_template_requires_branch_argument() {
        let store = EmbeddedTemplateStore::new();
        let script = store.script_template(ScriptFlavor::Sh).unwrap();
        assert!(script.starts_with("#!/bin/bash"));
        assert!(script.contains("if [ -z \"$1\" ]; then"));
        assert!(script.contains("BRANCH_BASE=\"main\""));
        assert!(script.contains("$SCRIPT_DIR/../../diffs"));
        assert!(script.contains("git diff --name-only"));
        assert!(script.contains("git log --no-merges --oneline"));
    }

    #[test]
    fn powershell_template_declares_mandatory_branch() {
        let store = EmbeddedTemplateStore::new();
        let script = store.script_template(ScriptFlavor::Ps).unwrap();
        assert!(script.contains("[Parameter(Mandatory=$true)]"));
        assert!(script.contains("[string]$BranchBase = \"main\""));
        assert!(script.contains(r"..\..\diffs"));
    }

    #[test]
    fn prompt_template_has_placeholders() {
        let store = EmbeddedTemplateStore::new();
        let prompt = store.prompt_template().unwrap();
        assert!(prompt.starts_with("---\ndescription:"));
        assert!(prompt.contains("$ARGUMENTS"));
        assert!(prompt.contains("$FEEDBACK"));
    }

    #[test]
    fn templates_use_lf_line_endings() {
        let store = EmbeddedTemplateStore::new();
        for flavor in ScriptFlavor::ALL {
            assert!(!store.script_template(flavor).unwrap().contains('\r'));
        }
        assert!(!store.prompt_template().unwrap().contains('\r'));
    }
}
