use serde::{Deserialize, Serialize};

/// Addresses one of the three independently edited sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
    Markup,
    Style,
    Script,
}

impl EditorKind {
    pub const ALL: [EditorKind; 3] = [EditorKind::Markup, EditorKind::Style, EditorKind::Script];

    /// Key under which this buffer is persisted.
    pub fn key(self) -> &'static str {
        match self {
            EditorKind::Markup => "markup",
            EditorKind::Style => "style",
            EditorKind::Script => "script",
        }
    }

    /// Suggested filename for a single-buffer download.
    pub fn filename(self) -> &'static str {
        match self {
            EditorKind::Markup => "index.html",
            EditorKind::Style => "style.css",
            EditorKind::Script => "script.js",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            EditorKind::Markup => "text/html",
            EditorKind::Style => "text/css",
            EditorKind::Script => "text/javascript",
        }
    }

    /// Label shown on the editor panel.
    pub fn label(self) -> &'static str {
        match self {
            EditorKind::Markup => "HTML",
            EditorKind::Style => "CSS",
            EditorKind::Script => "JavaScript",
        }
    }
}

/// The three source buffers feeding the preview pipeline.
///
/// Created empty at session start or restored from the persistence
/// adapter; mutated on edit events; reset to empty by an explicit clear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffers {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl SourceBuffers {
    pub fn get(&self, kind: EditorKind) -> &str {
        match kind {
            EditorKind::Markup => &self.markup,
            EditorKind::Style => &self.style,
            EditorKind::Script => &self.script,
        }
    }

    pub fn set(&mut self, kind: EditorKind, text: String) {
        match kind {
            EditorKind::Markup => self.markup = text,
            EditorKind::Style => self.style = text,
            EditorKind::Script => self.script = text,
        }
    }

    /// Reset every buffer to the empty string.
    pub fn clear(&mut self) {
        *self = SourceBuffers::default();
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.style.is_empty() && self.script.is_empty()
    }
}
