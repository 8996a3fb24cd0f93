//! The playground dev server: serves the editor page, owns the session
//! state, and drives the edit → debounce → assemble → reload pipeline.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use notify::{Event, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tower_livereload::{LiveReloadLayer, Reloader};

use crate::assemble;
use crate::bridge::{self, BridgeMessage, ConsoleLogEntry};
use crate::buffers::{EditorKind, SourceBuffers};
use crate::console::ConsoleStore;
use crate::debounce::{Debouncer, PERSIST_DEBOUNCE, PREVIEW_DEBOUNCE};
use crate::error::{PadError, Result};
use crate::format;
use crate::store::{LocalStore, STORE_FILE};
use crate::theme::Theme;

mod css;
mod export;
mod inline_js;
mod page;
pub(crate) mod util;

pub use export::{export_payload, ExportKind, ExportPayload};

/// Session state behind the lock.
struct PadState {
    buffers: SourceBuffers,
    theme: Theme,
    /// Last assembled snapshot — what the sandbox sees. Only the debounce
    /// pass (or a restore) replaces it, so the preview never reflects a
    /// mid-keystroke state.
    assembled: String,
    console: ConsoleStore,
    /// What we last wrote to the store, used to tell our own write-through
    /// apart from an external edit when the watcher fires.
    last_written: (SourceBuffers, Theme),
}

/// Shared host state for one playground session.
pub struct AppState {
    project: String,
    store: LocalStore,
    reloader: Reloader,
    preview_debounce: Debouncer,
    persist_debounce: Debouncer,
    inner: Mutex<PadState>,
}

impl AppState {
    /// Restore a session from the project directory's store; absent
    /// entries mean empty buffers and the default theme.
    pub fn restore(dir: &Path, reloader: Reloader) -> Result<Self> {
        let store = LocalStore::new(dir);
        let buffers = store.load_buffers()?;
        let theme = store.load_theme()?;
        let assembled = assemble::assemble_buffers(&buffers);

        if !buffers.is_empty() {
            tracing::info!("restored previous session from {}", store.path().display());
        }

        Ok(Self {
            project: crate::derive_project_name(dir),
            store,
            reloader,
            preview_debounce: Debouncer::new(PREVIEW_DEBOUNCE),
            persist_debounce: Debouncer::new(PERSIST_DEBOUNCE),
            inner: Mutex::new(PadState {
                last_written: (buffers.clone(), theme),
                buffers,
                theme,
                assembled,
                console: ConsoleStore::default(),
            }),
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    fn lock(&self) -> MutexGuard<'_, PadState> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Recompute the assembled snapshot and replace the sandbox document.
    fn refresh_preview(&self) {
        {
            let mut inner = self.lock();
            if uses_console(&inner.buffers.script) {
                inner.console.reveal();
            }
            inner.assembled = assemble::assemble_buffers(&inner.buffers);
        }
        self.reloader.reload();
        tracing::debug!("preview regenerated");
    }

    fn persist_buffers(&self) -> Result<()> {
        let (buffers, theme) = {
            let inner = self.lock();
            (inner.buffers.clone(), inner.theme)
        };
        self.store.save_buffers(&buffers)?;
        self.lock().last_written = (buffers, theme);
        tracing::debug!("buffers auto-saved");
        Ok(())
    }

    /// Cancel any pending debounce pass, e.g. on teardown.
    pub fn cancel_pending(&self) {
        self.preview_debounce.cancel();
        self.persist_debounce.cancel();
    }

    /// Pick up changes an external editor made to the store file. Echoes
    /// of our own write-through and mid-write read failures are ignored;
    /// a genuine change replaces the buffers and reloads the preview.
    fn absorb_external_change(&self) {
        let Ok(buffers) = self.store.load_buffers() else {
            return;
        };
        let Ok(theme) = self.store.load_theme() else {
            return;
        };
        {
            let mut inner = self.lock();
            if inner.last_written == (buffers.clone(), theme) {
                return;
            }
            inner.last_written = (buffers.clone(), theme);
            inner.theme = theme;
            inner.buffers = buffers;
            inner.assembled = assemble::assemble_buffers(&inner.buffers);
        }
        self.reloader.reload();
        tracing::info!("project file changed on disk, preview reloaded");
    }
}

/// Apply one edit event and schedule the coalesced passes.
fn apply_edit(state: &Arc<AppState>, editor: EditorKind, content: String) {
    state.lock().buffers.set(editor, content);
    schedule_preview(state);
    schedule_persist(state);
}

fn schedule_preview(state: &Arc<AppState>) {
    let task_state = Arc::clone(state);
    state.preview_debounce.schedule(async move {
        task_state.refresh_preview();
    });
}

fn schedule_persist(state: &Arc<AppState>) {
    let task_state = Arc::clone(state);
    state.persist_debounce.schedule(async move {
        if let Err(e) = task_state.persist_buffers() {
            tracing::warn!("auto-save failed: {e}");
        }
    });
}

fn uses_console(script: &str) -> bool {
    ["console.log", "console.error", "console.warn", "console.info"]
        .iter()
        .any(|method| script.contains(method))
}

/// Start the playground server for a project directory.
pub async fn run_dev_server(dir: PathBuf, port: u16) -> Result<()> {
    std::fs::create_dir_all(&dir).map_err(|e| PadError::store(&dir, e))?;

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();
    let state = Arc::new(AppState::restore(&dir, reloader)?);

    // Watch the store file so external edits flow into the session.
    let watch_state = Arc::clone(&state);
    let mut watcher = notify::recommended_watcher(
        move |res: std::result::Result<Event, notify::Error>| {
            if let Ok(event) = res {
                let ours = event.paths.iter().any(|p| p.ends_with(STORE_FILE));
                if ours && (event.kind.is_modify() || event.kind.is_create()) {
                    watch_state.absorb_external_change();
                }
            }
        },
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    let app = router(Arc::clone(&state), livereload);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    eprintln!("webpad dev server");
    eprintln!("  project:  {}", dir.display());
    eprintln!("  editor:   http://localhost:{port}/");
    eprintln!("  preview:  http://localhost:{port}/preview.html");
    eprintln!("  watching for changes...");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(PadError::Server)?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(Arc::clone(&state)))
        .await
        .map_err(PadError::Server)?;

    // Keep watcher alive until the server exits
    drop(watcher);
    Ok(())
}

/// Build the route table. The livereload layer wraps only the preview
/// route: edits replace the sandbox document, never the editor page.
pub fn router(state: Arc<AppState>, livereload: LiveReloadLayer) -> Router {
    let preview = Router::new()
        .route("/preview.html", get(serve_preview))
        .layer(livereload);

    Router::new()
        .route("/", get(serve_editor))
        .route("/update", post(serve_update))
        .route("/console", post(serve_console_ingest))
        .route("/console.json", get(serve_console_json))
        .route("/console/clear", post(serve_console_clear))
        .route("/console/toggle", post(serve_console_toggle))
        .route("/theme", post(serve_theme))
        .route("/clear", post(serve_clear))
        .route("/format", post(serve_format))
        .route("/export/{kind}", get(serve_export))
        .merge(preview)
        .with_state(state)
}

async fn shutdown_signal(state: Arc<AppState>) {
    let _ = tokio::signal::ctrl_c().await;
    state.cancel_pending();
    eprintln!();
    eprintln!("shutting down");
}

// ── Route handlers ────────────────────────────────────────────────────

async fn serve_editor(State(state): State<Arc<AppState>>) -> Html<String> {
    let inner = state.lock();
    Html(page::build_editor_page(
        &state.project,
        &inner.buffers,
        inner.theme,
        inner.console.is_visible(),
    ))
}

/// The sandbox document: always the last assembled snapshot.
async fn serve_preview(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.lock().assembled.clone())
}

#[derive(Deserialize)]
struct UpdateRequest {
    editor: EditorKind,
    content: String,
}

async fn serve_update(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> StatusCode {
    apply_edit(&state, req.editor, req.content);
    StatusCode::NO_CONTENT
}

/// Bridge ingest: the editor page relays sandbox messages here verbatim.
/// Anything that is not a well-formed console message is a no-op.
async fn serve_console_ingest(State(state): State<Arc<AppState>>, body: String) -> StatusCode {
    match bridge::decode(&body) {
        Some(BridgeMessage::Console { method, message }) => {
            state.lock().console.push(ConsoleLogEntry::record(method, message));
        }
        None => tracing::debug!("ignoring non-console bridge message"),
    }
    StatusCode::NO_CONTENT
}

#[derive(Serialize)]
struct ConsoleView {
    visible: bool,
    entries: Vec<ConsoleLogEntry>,
}

async fn serve_console_json(State(state): State<Arc<AppState>>) -> Json<ConsoleView> {
    let inner = state.lock();
    Json(ConsoleView {
        visible: inner.console.is_visible(),
        entries: inner.console.entries().to_vec(),
    })
}

async fn serve_console_clear(State(state): State<Arc<AppState>>) -> StatusCode {
    state.lock().console.clear();
    StatusCode::NO_CONTENT
}

async fn serve_console_toggle(State(state): State<Arc<AppState>>) -> StatusCode {
    state.lock().console.toggle();
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
struct ThemeRequest {
    theme: Theme,
}

/// Theme changes persist immediately; they are cheap and rare.
async fn serve_theme(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ThemeRequest>,
) -> StatusCode {
    {
        let mut inner = state.lock();
        inner.theme = req.theme;
        inner.last_written.1 = req.theme;
    }
    if let Err(e) = state.store.save_theme(req.theme) {
        tracing::warn!("theme save failed: {e}");
    }
    StatusCode::NO_CONTENT
}

/// Reset the session: empty buffers, empty console, persisted buffer
/// entries removed. The theme survives.
async fn serve_clear(State(state): State<Arc<AppState>>) -> StatusCode {
    {
        let mut inner = state.lock();
        inner.buffers.clear();
        inner.console.clear();
        inner.last_written.0 = SourceBuffers::default();
    }
    if let Err(e) = state.store.clear_buffers() {
        tracing::warn!("clearing persisted buffers failed: {e}");
    }
    schedule_preview(&state);
    StatusCode::NO_CONTENT
}

#[derive(Serialize)]
struct FormatResponse {
    markup: String,
    style: String,
    script: String,
    changed: bool,
}

async fn serve_format(State(state): State<Arc<AppState>>) -> Json<FormatResponse> {
    let (response, changed) = {
        let mut inner = state.lock();
        let buffers = &mut inner.buffers;
        let mut changed = false;
        if !buffers.markup.trim().is_empty() {
            buffers.markup = format::format_markup(&buffers.markup);
            changed = true;
        }
        if !buffers.style.trim().is_empty() {
            buffers.style = format::format_style(&buffers.style);
            changed = true;
        }
        if !buffers.script.trim().is_empty() {
            buffers.script = format::format_script(&buffers.script);
            changed = true;
        }
        (
            FormatResponse {
                markup: buffers.markup.clone(),
                style: buffers.style.clone(),
                script: buffers.script.clone(),
                changed,
            },
            changed,
        )
    };
    if changed {
        schedule_preview(&state);
        schedule_persist(&state);
    }
    Json(response)
}

async fn serve_export(
    State(state): State<Arc<AppState>>,
    UrlPath(kind): UrlPath<String>,
) -> Response {
    let Some(kind) = ExportKind::from_id(&kind) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let buffers = state.lock().buffers.clone();
    let payload = export_payload(kind, &buffers, &state.project);
    (
        [
            (header::CONTENT_TYPE, payload.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", payload.filename),
            ),
        ],
        payload.body,
    )
        .into_response()
}
