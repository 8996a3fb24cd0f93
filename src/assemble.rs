//! Document assembly — combines the three source buffers into one
//! executable HTML document.
//!
//! No escaping is applied to the user's markup, style, or script: the
//! playground exists to run arbitrary user code, and isolation comes from
//! sandboxing the consumer, not sanitizing the input.

use crate::bridge::{CONSOLE_BRIDGE_SNIPPET, ERROR_HANDLER_SNIPPET};
use crate::buffers::SourceBuffers;

/// Build the preview document: `style` in a head-level style block,
/// `markup` as body content, and `script` in a body-level script block
/// preceded by the console bridge snippet and followed by the global
/// error handler registration.
///
/// Pure and deterministic — identical inputs yield byte-identical output.
pub fn assemble(markup: &str, style: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<style>
{style}
</style>
</head>
<body>
{markup}
<script>
{bridge}
{script}
{error_handler}
</script>
</body>
</html>
"#,
        style = style,
        markup = markup,
        bridge = CONSOLE_BRIDGE_SNIPPET,
        script = script,
        error_handler = ERROR_HANDLER_SNIPPET,
    )
}

/// `assemble` over a buffer set.
pub fn assemble_buffers(buffers: &SourceBuffers) -> String {
    assemble(&buffers.markup, &buffers.style, &buffers.script)
}

/// Build the standalone full-project document for the download surface.
///
/// Unlike the preview document this carries no bridge machinery, so the
/// file opens directly in a browser with no dependency on the playground.
/// Empty buffers become human-readable placeholder comments.
pub fn bundle(buffers: &SourceBuffers, title: &str) -> String {
    let style = if buffers.style.is_empty() {
        "/* No CSS code provided */"
    } else {
        &buffers.style
    };
    let markup = if buffers.markup.is_empty() {
        "<!-- No HTML code provided -->"
    } else {
        &buffers.markup
    };
    let script = if buffers.script.is_empty() {
        "// No JavaScript code provided"
    } else {
        &buffers.script
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{style}
    </style>
</head>
<body>
{markup}
    <script>
{script}
    </script>
</body>
</html>
"#,
        title = title,
        style = style,
        markup = markup,
        script = script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assemble_is_pure_and_deterministic() {
        let a = assemble("<p>hi</p>", "p{color:red}", "console.log('x')");
        let b = assemble("<p>hi</p>", "p{color:red}", "console.log('x')");
        assert_eq!(a, b);
    }

    #[test]
    fn assemble_places_each_source_in_its_section() {
        let doc = assemble("<p>hi</p>", "p{color:red}", "console.log('x')");
        let head = &doc[..doc.find("</head>").unwrap()];
        let body = &doc[doc.find("<body>").unwrap()..];
        assert!(head.contains("p{color:red}"));
        assert!(body.contains("<p>hi</p>"));
        assert!(body.contains("console.log('x')"));
    }

    #[test]
    fn bridge_precedes_the_user_script_and_error_handler_follows_it() {
        let doc = assemble("", "", "console.log('mine')");
        let bridge_at = doc.find("Array.prototype.map").expect("bridge present");
        let script_at = doc.find("console.log('mine')").expect("script present");
        let handler_at = doc.find("window.onerror").expect("handler present");
        assert!(bridge_at < script_at);
        assert!(script_at < handler_at);
    }

    #[test]
    fn user_sources_are_embedded_unescaped() {
        let doc = assemble("<div class=\"a\">&copy;</div>", "a::after{content:'<'}", "if (1 < 2) {}");
        assert!(doc.contains("<div class=\"a\">&copy;</div>"));
        assert!(doc.contains("a::after{content:'<'}"));
        assert!(doc.contains("if (1 < 2) {}"));
    }

    #[test]
    fn bundle_substitutes_placeholders_for_empty_buffers() {
        let buffers = SourceBuffers {
            markup: String::new(),
            style: "body{margin:0}".into(),
            script: String::new(),
        };
        let doc = bundle(&buffers, "demo");
        assert!(doc.contains("<!-- No HTML code provided -->"));
        assert!(doc.contains("// No JavaScript code provided"));
        assert!(doc.contains("body{margin:0}"));
    }

    #[test]
    fn bundle_carries_no_bridge_machinery() {
        let buffers = SourceBuffers {
            markup: "<p>hi</p>".into(),
            style: String::new(),
            script: "console.log(1)".into(),
        };
        let doc = bundle(&buffers, "demo");
        assert!(!doc.contains("postMessage"));
        assert!(!doc.contains("window.onerror"));
    }
}
