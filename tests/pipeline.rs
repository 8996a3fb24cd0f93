//! End-to-end pipeline checks through the public API: persistence →
//! buffers → assembled document → bridge ingestion → export.

use webpad::assemble;
use webpad::bridge::{self, BridgeMessage, ConsoleLogEntry, Severity};
use webpad::buffers::SourceBuffers;
use webpad::console::ConsoleStore;
use webpad::server::{export_payload, ExportKind};
use webpad::store::LocalStore;
use webpad::theme::Theme;

fn sample_buffers() -> SourceBuffers {
    SourceBuffers {
        markup: "<p>hi</p>".into(),
        style: "p{color:red}".into(),
        script: "console.log('x')".into(),
    }
}

#[test]
fn session_restores_assembles_and_bridges() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocalStore::new(dir.path());
    store.save_buffers(&sample_buffers()).unwrap();
    store.save_theme(Theme::Dracula).unwrap();

    // A fresh session restores exactly what was persisted.
    let restored = store.load_buffers().unwrap();
    assert_eq!(restored, sample_buffers());
    assert_eq!(store.load_theme().unwrap(), Theme::Dracula);

    // The assembled document carries all three sources plus the bridge.
    let doc = assemble::assemble_buffers(&restored);
    assert!(doc.contains("<p>hi</p>"));
    assert!(doc.contains("p{color:red}"));
    assert!(doc.contains("console.log('x')"));
    assert!(doc.contains("postMessage"));
    assert!(doc.contains("window.onerror"));

    // Running that script in the sandbox posts one console message; the
    // host records exactly one log entry for it.
    let mut console = ConsoleStore::default();
    let raw = r#"{"type":"console","method":"log","message":"x"}"#;
    match bridge::decode(raw) {
        Some(BridgeMessage::Console { method, message }) => {
            console.push(ConsoleLogEntry::record(method, message));
        }
        None => panic!("well-formed console message did not decode"),
    }
    assert_eq!(console.len(), 1);
    assert_eq!(console.entries()[0].severity, Severity::Log);
    assert_eq!(console.entries()[0].message, "x");
    assert!(console.is_visible());
}

#[test]
fn console_log_with_object_argument_round_trips_json() {
    // What the bridge snippet posts for console.log("a", {x:1}).
    let raw = r#"{"type":"console","method":"log","message":"a {\n  \"x\": 1\n}"}"#;
    let Some(BridgeMessage::Console { method, message }) = bridge::decode(raw) else {
        panic!("message did not decode");
    };
    assert_eq!(method, Severity::Log);
    assert!(message.contains('a'));
    assert!(message.contains("\"x\": 1"));
}

#[test]
fn download_all_with_only_style_set() {
    let buffers = SourceBuffers {
        markup: String::new(),
        style: "body{margin:0}".into(),
        script: String::new(),
    };
    let payload = export_payload(ExportKind::Project, &buffers, "scratch");
    assert_eq!(payload.filename, "scratch.html");
    assert_eq!(payload.mime, "text/html");
    assert!(payload.body.contains("body{margin:0}"));
    assert!(payload.body.contains("<!-- No HTML code provided -->"));
    assert!(payload.body.contains("// No JavaScript code provided"));
    // Standalone: no dependency on the bridge/sandbox machinery.
    assert!(!payload.body.contains("postMessage"));
}

#[test]
fn clearing_buffers_restores_default_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocalStore::new(dir.path());
    store.save_buffers(&sample_buffers()).unwrap();
    store.save_theme(Theme::Monokai).unwrap();

    store.clear_buffers().unwrap();

    assert_eq!(store.load_buffers().unwrap(), SourceBuffers::default());
    // Theme is a separate entry and survives a buffer clear.
    assert_eq!(store.load_theme().unwrap(), Theme::Monokai);
}
