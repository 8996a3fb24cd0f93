use serde::{Deserialize, Serialize};

/// The fixed set of editor themes. Affects only how the editor surfaces
/// render, never the buffer contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "onedark")]
    OneDark,
    #[serde(rename = "vscode-dark")]
    VscodeDark,
    #[serde(rename = "dracula")]
    Dracula,
    #[serde(rename = "monokai")]
    Monokai,
    #[serde(rename = "github-light")]
    GithubLight,
}

/// Editor surface colors for one theme.
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub active_line: &'static str,
    pub selection: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::OneDark,
        Theme::VscodeDark,
        Theme::Dracula,
        Theme::Monokai,
        Theme::GithubLight,
    ];

    /// Identifier used for persistence and the theme picker.
    pub fn id(self) -> &'static str {
        match self {
            Theme::OneDark => "onedark",
            Theme::VscodeDark => "vscode-dark",
            Theme::Dracula => "dracula",
            Theme::Monokai => "monokai",
            Theme::GithubLight => "github-light",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::OneDark => "One Dark",
            Theme::VscodeDark => "VSCode Dark",
            Theme::Dracula => "Dracula",
            Theme::Monokai => "Monokai",
            Theme::GithubLight => "GitHub Light",
        }
    }

    pub fn is_dark(self) -> bool {
        !matches!(self, Theme::GithubLight)
    }

    /// Look a theme up by identifier; unknown identifiers fall back to the
    /// default so a stale persisted value never breaks the session.
    pub fn from_id(id: &str) -> Theme {
        Theme::ALL
            .into_iter()
            .find(|t| t.id() == id)
            .unwrap_or_default()
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::OneDark => Palette {
                background: "#282c34",
                foreground: "#abb2bf",
                active_line: "#2c313c",
                selection: "#3e4451",
            },
            Theme::VscodeDark => Palette {
                background: "#1e1e1e",
                foreground: "#d4d4d4",
                active_line: "#282828",
                selection: "#264f78",
            },
            Theme::Dracula => Palette {
                background: "#282a36",
                foreground: "#f8f8f2",
                active_line: "#343746",
                selection: "#44475a",
            },
            Theme::Monokai => Palette {
                background: "#272822",
                foreground: "#f8f8f2",
                active_line: "#3e3d32",
                selection: "#49483e",
            },
            Theme::GithubLight => Palette {
                background: "#ffffff",
                foreground: "#24292e",
                active_line: "#f6f8fa",
                selection: "#bbdfff",
            },
        }
    }
}
