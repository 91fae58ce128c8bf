//! Live editor adapter driving an editor executable.
//!
//! Targets the VS Code family CLI (`code`, `codium`, `cursor`, ...): folders
//! are opened by passing the path, documents by passing `--goto path:line`.

use std::path::Path;
use std::process::Command;

use crate::ports::editor::{DocumentHandle, EditorHost, Selection};
use crate::ports::PortError;

/// Live adapter invoking the configured editor executable.
pub struct LiveEditorHost {
    editor: String,
}

impl LiveEditorHost {
    /// Creates an adapter for the given editor executable.
    #[must_use]
    pub fn new(editor: &str) -> Self {
        Self { editor: editor.to_string() }
    }

    fn run(&self, args: &[String]) -> Result<(), PortError> {
        let output = Command::new(&self.editor).args(args).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("{} {} failed: {}", self.editor, args.join(" "), stderr.trim())
                .into());
        }
        Ok(())
    }
}

impl EditorHost for LiveEditorHost {
    fn open_folder(&self, path: &Path) -> Result<(), PortError> {
        self.run(&[path.to_string_lossy().into_owned()])
    }

    fn open_document(&self, path: &Path) -> Result<DocumentHandle, PortError> {
        // Opening is deferred to show_document; the editor CLI opens and
        // positions in one invocation.
        Ok(DocumentHandle { path: path.to_path_buf() })
    }

    fn show_document(
        &self,
        document: &DocumentHandle,
        selection: Option<Selection>,
    ) -> Result<(), PortError> {
        let path = document.path.to_string_lossy();
        match selection {
            // The CLI takes 1-based positions.
            Some(sel) => self
                .run(&["--goto".to_string(), format!("{path}:{}:1", sel.start_line + 1)]),
            None => self.run(&["--goto".to_string(), path.into_owned()]),
        }
    }

    fn notify_info(&self, message: &str) {
        println!("{message}");
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{message}");
    }
}
