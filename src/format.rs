//! Best-effort source formatters.
//!
//! These are line-oriented text transforms, not parsers: they reindent by
//! counting tags and braces and can mangle structurally unusual input
//! (`<` inside string literals, braces in strings, nested CSS blocks).
//! They are convenience helpers for the FORMAT button, never
//! correctness-critical.

const SELF_CLOSING_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const INLINE_TAGS: [&str; 24] = [
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "i", "kbd", "mark", "q",
    "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// Reindent markup two spaces per nesting level. Inline tags stay on the
/// line they started; self-closing tags never change the depth.
pub fn format_markup(code: &str) -> String {
    if code.trim().is_empty() {
        return code.to_string();
    }
    let collapsed = collapse_between_tags(code);
    let source = collapsed.trim();

    let mut result = String::with_capacity(source.len());
    let mut indent = 0usize;
    let mut i = 0usize;

    while i < source.len() {
        if source[i..].starts_with('<') {
            let Some(rel) = source[i..].find('>') else {
                result.push_str(&source[i..]);
                break;
            };
            let tag_end = i + rel;
            let tag = &source[i..=tag_end];
            let name = tag_name(tag);

            if tag.starts_with("</") {
                indent = indent.saturating_sub(1);
                push_tag_line(&mut result, indent, tag);
            } else if tag.ends_with("/>")
                || tag.starts_with("<!")
                || SELF_CLOSING_TAGS.contains(&name.as_str())
            {
                push_tag_line(&mut result, indent, tag);
            } else if INLINE_TAGS.contains(&name.as_str()) {
                result.push_str(tag);
            } else {
                push_tag_line(&mut result, indent, tag);
                indent += 1;
            }
            i = tag_end + 1;
        } else {
            match source[i..].find('<') {
                None => {
                    let text = source[i..].trim();
                    if !text.is_empty() {
                        result.push_str(text);
                    }
                    break;
                }
                Some(rel) => {
                    let text = source[i..i + rel].trim();
                    if !text.is_empty() {
                        result.push_str(text);
                    }
                    i += rel;
                }
            }
        }
    }

    result.trim().to_string()
}

/// One declaration per line inside braces, blank line between blocks.
pub fn format_style(code: &str) -> String {
    if code.trim().is_empty() {
        return code.to_string();
    }
    let mut out = String::with_capacity(code.len() + 16);
    let mut chars = code.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                trim_trailing_ws(&mut out);
                out.push_str(" {\n  ");
                skip_ws(&mut chars);
            }
            '}' => {
                trim_trailing_ws(&mut out);
                out.push_str("\n}\n\n");
                skip_ws(&mut chars);
            }
            ';' => {
                out.push_str(";\n  ");
                skip_ws(&mut chars);
            }
            ',' => {
                out.push_str(", ");
                skip_ws(&mut chars);
            }
            c => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Brace/semicolon line-splitting for script sources.
pub fn format_script(code: &str) -> String {
    if code.trim().is_empty() {
        return code.to_string();
    }
    let mut out = String::with_capacity(code.len() + 16);
    let mut chars = code.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                trim_trailing_ws(&mut out);
                out.push_str(" {\n  ");
                skip_ws(&mut chars);
            }
            '}' => {
                trim_trailing_ws(&mut out);
                out.push_str("\n}\n");
                skip_ws(&mut chars);
            }
            ';' => {
                out.push_str(";\n  ");
                skip_ws(&mut chars);
            }
            c => out.push(c),
        }
    }
    out.trim().to_string()
}

// ── Helpers ───────────────────────────────────────────────────────────

/// Collapse whitespace runs between a `>` and the next `<`.
fn collapse_between_tags(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut rest = code;
    while let Some(pos) = rest.find('>') {
        out.push_str(&rest[..=pos]);
        rest = &rest[pos + 1..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with('<') {
            rest = trimmed;
        }
    }
    out.push_str(rest);
    out
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn push_tag_line(out: &mut String, indent: usize, tag: &str) {
    out.push('\n');
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push_str(tag);
}

fn trim_trailing_ws(out: &mut String) {
    while out.ends_with(|c: char| c.is_whitespace()) {
        out.pop();
    }
}

fn skip_ws(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}
