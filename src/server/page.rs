use crate::buffers::{EditorKind, SourceBuffers};
use crate::frame::DeviceFrame;
use crate::theme::Theme;

use super::css::build_css;
use super::inline_js::build_inline_js;
use super::util::html_escape;

/// Build the editor page: three editor surfaces, the sandboxed preview
/// with device framing, the console panel, and the toolbar.
pub(super) fn build_editor_page(
    project: &str,
    buffers: &SourceBuffers,
    theme: Theme,
    console_visible: bool,
) -> String {
    let css = build_css();
    let theme_options = build_theme_options(theme);
    let editors = EditorKind::ALL
        .map(|kind| build_editor_panel(kind, buffers.get(kind)))
        .join("\n");
    let frame_buttons = build_frame_buttons();
    let inline_js = build_inline_js();
    let console_display = if console_visible {
        ""
    } else {
        " style=\"display:none\""
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>webpad — {project}</title>
<style>
{css}
</style>
</head>
<body class="theme-{theme_id}">
<div class="toolbar">
  <span class="title">webpad <span class="project">{project}</span></span>
  <span class="spacer"></span>
  <select id="theme" title="Editor theme">
    {theme_options}
  </select>
  <button id="format-btn" title="Format code">FORMAT</button>
  <a class="btn" href="/export/project" download title="Download complete project">DOWNLOAD</a>
  <button id="clear-btn" class="danger" title="Clear all code">CLEAR</button>
</div>
<div class="editors">
{editors}
</div>
<div class="preview-panel panel">
  <div class="panel-head">
    <span class="panel-label">live preview</span>
    <span class="panel-actions">
      {frame_buttons}
    </span>
  </div>
  <div class="preview-stage">
    <div id="frame-wrapper">
      <div id="frame-chrome"><span id="frame-dims"></span></div>
      <iframe id="preview" src="/preview.html" sandbox="allow-scripts" title="preview"></iframe>
    </div>
  </div>
</div>
<div class="console-panel panel">
  <div class="panel-head">
    <span class="panel-label">console <span id="console-count">0</span></span>
    <span class="panel-actions">
      <button id="console-clear">Clear</button>
      <button id="console-toggle">Show / Hide</button>
    </span>
  </div>
  <div id="console-body"{console_display}></div>
</div>
<div id="toasts"></div>
{inline_js}
</body>
</html>"##,
        project = html_escape(project),
        css = css,
        theme_id = theme.id(),
        theme_options = theme_options,
        editors = editors,
        frame_buttons = frame_buttons,
        console_display = console_display,
        inline_js = inline_js,
    )
}

fn build_editor_panel(kind: EditorKind, content: &str) -> String {
    format!(
        r##"<div class="editor panel">
  <div class="panel-head">
    <span class="panel-label">{label}</span>
    <span class="panel-actions">
      <button data-copy="{id}" data-label="{label}" title="Copy {label}">Copy</button>
      <a class="btn" href="/export/{id}" download title="Download {label}">Download</a>
    </span>
  </div>
  <textarea id="ed-{id}" spellcheck="false" autocomplete="off">{content}</textarea>
</div>"##,
        label = kind.label(),
        id = kind.key(),
        content = html_escape(content),
    )
}

fn build_theme_options(current: Theme) -> String {
    Theme::ALL
        .map(|theme| {
            let selected = if theme == current { " selected" } else { "" };
            let mode = if theme.is_dark() { "dark" } else { "light" };
            format!(
                r#"<option value="{id}"{selected}>{name} ({mode})</option>"#,
                id = theme.id(),
                selected = selected,
                name = theme.name(),
                mode = mode,
            )
        })
        .join("\n    ")
}

fn build_frame_buttons() -> String {
    DeviceFrame::ALL
        .map(|frame| {
            let active = if frame == DeviceFrame::default() { " active" } else { "" };
            let width = frame.width().map(|w| w.to_string()).unwrap_or_default();
            format!(
                r#"<button class="frame-btn{active}" data-frame="{id}" data-w="{width}" data-h="{height}" title="{label}">{label}</button>"#,
                active = active,
                id = frame.id(),
                width = width,
                height = frame.height(),
                label = frame.label(),
            )
        })
        .join("\n      ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_buffer_contents_escaped() {
        let buffers = SourceBuffers {
            markup: "<p>hi</p>".into(),
            style: String::new(),
            script: "if (1 < 2) {}".into(),
        };
        let page = build_editor_page("demo", &buffers, Theme::OneDark, false);
        assert!(page.contains("&lt;p&gt;hi&lt;/p&gt;"));
        assert!(page.contains("if (1 &lt; 2) {}"));
        // The raw markup must not appear outside the textarea.
        assert!(!page.contains("<p>hi</p>"));
    }

    #[test]
    fn page_sandboxes_the_preview_to_scripts_only() {
        let page = build_editor_page("demo", &SourceBuffers::default(), Theme::OneDark, false);
        assert!(page.contains(r#"sandbox="allow-scripts""#));
        assert!(page.contains(r#"src="/preview.html""#));
    }

    #[test]
    fn page_marks_the_persisted_theme_selected() {
        let page = build_editor_page("demo", &SourceBuffers::default(), Theme::Monokai, false);
        assert!(page.contains(r#"value="monokai" selected"#));
        assert!(page.contains("theme-monokai"));
    }

    #[test]
    fn page_lists_every_device_frame() {
        let page = build_editor_page("demo", &SourceBuffers::default(), Theme::OneDark, false);
        for frame in DeviceFrame::ALL {
            assert!(page.contains(&format!("data-frame=\"{}\"", frame.id())));
        }
        // fullwidth is fluid: no fixed width attribute value
        assert!(page.contains(r#"data-frame="fullwidth" data-w="" data-h="500""#));
    }
}
