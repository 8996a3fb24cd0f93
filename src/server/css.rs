use crate::theme::Theme;

/// Stylesheet for the editor page. The chrome is fixed; the editor
/// surfaces take their colors from the selected theme via a body class.
pub(super) fn build_css() -> String {
    let mut css = String::from(BASE_CSS);
    for theme in Theme::ALL {
        let palette = theme.palette();
        css.push_str(&format!(
            r#"
.theme-{id} .editor textarea {{ background: {bg}; color: {fg}; }}
.theme-{id} .editor textarea:focus {{ background: {active}; }}
.theme-{id} .editor textarea::selection {{ background: {selection}; }}
"#,
            id = theme.id(),
            bg = palette.background,
            fg = palette.foreground,
            active = palette.active_line,
            selection = palette.selection,
        ));
    }
    css
}

const BASE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { height: 100%; background: #0A0A0A; color: #A0A0A0;
  font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 13px; }
body { display: flex; flex-direction: column; overflow-y: auto; }

.toolbar { display: flex; align-items: center; gap: 10px; padding: 8px 14px;
  border-bottom: 1px solid #1F1F1F; background: #111; position: sticky; top: 0; z-index: 20; }
.toolbar .title { color: #E0E0E0; font-weight: 600; }
.toolbar .title .project { color: #D4AF37; }
.toolbar .spacer { flex: 1; }
.toolbar select { background: #1A1A1A; color: #D0D0D0; border: 1px solid #2A2A2A;
  border-radius: 4px; padding: 4px 8px; font: inherit; cursor: pointer; }

button, a.btn { background: #1A1A1A; color: #D0D0D0; border: 1px solid #2A2A2A;
  border-radius: 4px; padding: 4px 10px; font: inherit; cursor: pointer;
  text-decoration: none; display: inline-block; }
button:hover, a.btn:hover { background: #242424; color: #FFF; }
button.danger { border-color: #3F1818; color: #EF4444; }
button.danger:hover { background: rgba(239,68,68,0.08); }

.editors { display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; padding: 10px 14px; }
.panel { border: 1px solid #1F1F1F; border-radius: 6px; overflow: hidden; background: #141414; }
.panel-head { display: flex; align-items: center; justify-content: space-between;
  padding: 6px 10px; background: #181818; border-bottom: 1px solid #1F1F1F; }
.panel-label { color: #888; font-size: 11px; text-transform: uppercase; letter-spacing: 0.08em; }
.panel-actions { display: flex; gap: 6px; }
.editor textarea { display: block; width: 100%; height: 280px; resize: vertical;
  border: none; outline: none; padding: 10px; font: inherit; line-height: 1.6;
  white-space: pre; tab-size: 2; }

.preview-panel { margin: 0 14px 10px; }
.frame-btn.active { background: #2A2A2A; color: #FFF; }
.preview-stage { background: #181818; padding: 18px; display: flex;
  justify-content: center; align-items: flex-start; min-height: 520px; }
#frame-wrapper { width: 100%; max-width: 100%; transition: width 0.3s; }
#frame-chrome { display: none; background: #0A0A0A; color: #555; padding: 5px 10px;
  font-size: 11px; border-radius: 6px 6px 0 0; border: 1px solid #1F1F1F; border-bottom: none; }
#preview { display: block; width: 100%; height: 500px; border: 1px solid #1F1F1F;
  background: #FFF; }

.console-panel { margin: 0 14px 14px; }
#console-count { background: rgba(212,175,55,0.15); color: #D4AF37;
  border-radius: 8px; padding: 1px 8px; font-size: 11px; }
#console-body { max-height: 220px; overflow-y: auto; padding: 6px 0; }
.console-row { display: flex; gap: 10px; padding: 3px 12px; font-size: 12px; }
.console-time { color: #555; flex-shrink: 0; }
.console-msg { white-space: pre-wrap; word-break: break-word; color: #C0C0C0; }
.sev-error .console-msg { color: #EF4444; }
.sev-warn .console-msg { color: #EAB308; }
.sev-info .console-msg { color: #60A5FA; }

#toasts { position: fixed; bottom: 16px; right: 16px; display: flex;
  flex-direction: column; gap: 8px; z-index: 100; }
.toast { background: #141414; border: 1px solid #1F5F2F; color: #4ADE80;
  border-radius: 6px; padding: 8px 14px; font-size: 12px; animation: toast-in 0.2s ease-out; }
.toast.error { border-color: #3F1818; color: #EF4444; }
.toast.info { border-color: #1F2F4F; color: #60A5FA; }
@keyframes toast-in { from { opacity: 0; transform: translateY(6px); } to { opacity: 1; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_gets_an_editor_rule() {
        let css = build_css();
        for theme in Theme::ALL {
            assert!(css.contains(&format!(".theme-{} .editor textarea", theme.id())));
        }
    }
}
