//! Console bridge — relays console activity out of the sandboxed preview.
//!
//! The sandbox gets no call-back handle into the host. Instead the
//! assembled document carries a snippet that overrides the four console
//! methods and posts `{type: "console", method, message}` to the parent
//! context; the editor page forwards each payload verbatim to the host,
//! which decodes it defensively and appends a log entry. Anything that is
//! not a well-formed console message is ignored, since the channel is a
//! wildcard channel and may carry unrelated traffic.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Severity of a bridged console event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Log,
    Error,
    Warn,
    Info,
}

/// The closed set of messages the sandbox may post to the host,
/// discriminated by the `type` tag.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BridgeMessage {
    Console { method: Severity, message: String },
}

/// One bridged event as recorded by the host.
///
/// Immutable once created; the timestamp is the host's clock, not the
/// sandbox's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsoleLogEntry {
    pub severity: Severity,
    pub message: String,
    pub timestamp: String,
}

impl ConsoleLogEntry {
    /// Stamp a decoded message with the host clock.
    pub fn record(severity: Severity, message: String) -> Self {
        Self {
            severity,
            message,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Decode one raw payload from the message channel. Unknown tags, missing
/// fields, or non-JSON input all decode to `None` — a forward-compatible
/// no-op rather than an error.
pub fn decode(raw: &str) -> Option<BridgeMessage> {
    serde_json::from_str(raw).ok()
}

/// Injected ahead of the user script: overrides `log`/`error`/`warn`/
/// `info` to (a) invoke the original so native devtools still work and
/// (b) post the stringified arguments to the parent. Objects go through
/// JSON.stringify with a coercion fallback, so the message is always a
/// string and never throws.
pub const CONSOLE_BRIDGE_SNIPPET: &str = r#"(function() {
  function render(args) {
    return Array.prototype.map.call(args, function(arg) {
      try {
        return typeof arg === 'object' && arg !== null ? JSON.stringify(arg, null, 2) : String(arg);
      } catch (e) {
        return String(arg);
      }
    }).join(' ');
  }
  ['log', 'error', 'warn', 'info'].forEach(function(method) {
    var original = console[method];
    console[method] = function() {
      original.apply(console, arguments);
      window.parent.postMessage({ type: 'console', method: method, message: render(arguments) }, '*');
    };
  });
})();"#;

/// Injected after the user script: reports uncaught errors as a single
/// synthetic `error` entry. Returns false so the browser's own error
/// reporting is not suppressed.
pub const ERROR_HANDLER_SNIPPET: &str = r#"window.onerror = function(message, source, lineno) {
  window.parent.postMessage({ type: 'console', method: 'error', message: 'Error: ' + message + ' (Line ' + lineno + ')' }, '*');
  return false;
};"#;
