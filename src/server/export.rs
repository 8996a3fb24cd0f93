use crate::assemble;
use crate::buffers::{EditorKind, SourceBuffers};

/// One downloadable artifact of the project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Markup,
    Style,
    Script,
    /// Self-contained single-file bundle of all three buffers.
    Project,
}

impl ExportKind {
    pub const ALL: [ExportKind; 4] = [
        ExportKind::Markup,
        ExportKind::Style,
        ExportKind::Script,
        ExportKind::Project,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExportKind::Markup => "markup",
            ExportKind::Style => "style",
            ExportKind::Script => "script",
            ExportKind::Project => "project",
        }
    }

    pub fn from_id(id: &str) -> Option<ExportKind> {
        ExportKind::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// A ready-to-serve download: suggested filename, MIME type, body.
pub struct ExportPayload {
    pub filename: String,
    pub mime: &'static str,
    pub body: String,
}

/// Build the download payload for one artifact. Single-buffer exports are
/// the raw text; the project export is the standalone bundle.
pub fn export_payload(kind: ExportKind, buffers: &SourceBuffers, project: &str) -> ExportPayload {
    match kind {
        ExportKind::Markup => single(EditorKind::Markup, buffers),
        ExportKind::Style => single(EditorKind::Style, buffers),
        ExportKind::Script => single(EditorKind::Script, buffers),
        ExportKind::Project => ExportPayload {
            filename: format!("{project}.html"),
            mime: "text/html",
            body: assemble::bundle(buffers, project),
        },
    }
}

fn single(kind: EditorKind, buffers: &SourceBuffers) -> ExportPayload {
    ExportPayload {
        filename: kind.filename().to_string(),
        mime: kind.mime(),
        body: buffers.get(kind).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_buffer_exports_use_the_conventional_filenames() {
        let buffers = SourceBuffers {
            markup: "<p>hi</p>".into(),
            style: "p{}".into(),
            script: "1".into(),
        };
        let markup = export_payload(ExportKind::Markup, &buffers, "demo");
        assert_eq!(markup.filename, "index.html");
        assert_eq!(markup.mime, "text/html");
        assert_eq!(markup.body, "<p>hi</p>");

        let style = export_payload(ExportKind::Style, &buffers, "demo");
        assert_eq!(style.filename, "style.css");
        assert_eq!(style.mime, "text/css");

        let script = export_payload(ExportKind::Script, &buffers, "demo");
        assert_eq!(script.filename, "script.js");
        assert_eq!(script.mime, "text/javascript");
    }

    #[test]
    fn project_export_bundles_with_placeholders() {
        let buffers = SourceBuffers {
            markup: String::new(),
            style: "body{margin:0}".into(),
            script: String::new(),
        };
        let payload = export_payload(ExportKind::Project, &buffers, "demo");
        assert_eq!(payload.filename, "demo.html");
        assert_eq!(payload.mime, "text/html");
        assert!(payload.body.contains("body{margin:0}"));
        assert!(payload.body.contains("<!-- No HTML code provided -->"));
        assert!(payload.body.contains("// No JavaScript code provided"));
    }

    #[test]
    fn from_id_round_trips() {
        for kind in ExportKind::ALL {
            assert_eq!(ExportKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ExportKind::from_id("wasm"), None);
    }
}
