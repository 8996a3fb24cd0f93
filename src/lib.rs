pub mod assemble;
pub mod bridge;
pub mod buffers;
pub mod console;
pub mod debounce;
pub mod error;
pub mod format;
pub mod frame;
pub mod server;
pub mod store;
pub mod theme;

use std::path::Path;

pub use error::{PadError, Result};

/// Derive a display/bundle name from a project directory path.
///
/// Uses the final path component, falling back to `project` for paths
/// without a usable name (e.g. `/` or `.`).
pub fn derive_project_name(path: &Path) -> String {
    path.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(path)
        .file_name()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("project")
        .to_string()
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::bridge::{BridgeMessage, ConsoleLogEntry, Severity};
    use crate::buffers::SourceBuffers;
    use crate::console::ConsoleStore;

    #[test]
    fn end_to_end_document_and_bridge() {
        let buffers = SourceBuffers {
            markup: "<p>hi</p>".into(),
            style: "p{color:red}".into(),
            script: "console.log('x')".into(),
        };

        let doc = assemble::assemble_buffers(&buffers);
        assert!(doc.contains("<p>hi</p>"));
        assert!(doc.contains("p{color:red}"));
        assert!(doc.contains("console.log('x')"));
        assert!(doc.contains("postMessage"));

        // What the sandbox would post for that script, relayed verbatim.
        let raw = r#"{"type":"console","method":"log","message":"x"}"#;
        let mut console = ConsoleStore::default();
        if let Some(BridgeMessage::Console { method, message }) = bridge::decode(raw) {
            console.push(ConsoleLogEntry::record(method, message));
        }

        assert_eq!(console.len(), 1);
        assert_eq!(console.entries()[0].severity, Severity::Log);
        assert_eq!(console.entries()[0].message, "x");
        assert!(console.is_visible());
    }

    #[test]
    fn reassembly_after_a_no_op_edit_is_byte_identical() {
        let buffers = SourceBuffers {
            markup: "<p>hi</p>".into(),
            style: String::new(),
            script: String::new(),
        };
        let first = assemble::assemble_buffers(&buffers);
        let mut edited = buffers.clone();
        edited.set(crate::buffers::EditorKind::Markup, "<p>hi</p>".into());
        assert_eq!(first, assemble::assemble_buffers(&edited));
    }

    #[test]
    fn derive_project_name_uses_the_directory_stem() {
        assert_eq!(derive_project_name(Path::new("/tmp/nonexistent-sketch")), "nonexistent-sketch");
        assert_eq!(derive_project_name(Path::new("demo")), "demo");
    }
}
