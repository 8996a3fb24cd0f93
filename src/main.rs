use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use webpad::server::{export_payload, ExportKind};
use webpad::store::LocalStore;

#[derive(Parser)]
#[command(name = "webpad", version)]
#[command(about = "webpad — self-hosted live HTML/CSS/JS playground")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the playground server for a project directory
    Dev {
        /// Project directory holding the persisted buffers (default: .)
        dir: Option<PathBuf>,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },

    /// Write one of the download artifacts without starting the server
    Export {
        /// Artifact to produce
        #[arg(value_enum)]
        kind: ExportArg,

        /// Project directory holding the persisted buffers (default: .)
        dir: Option<PathBuf>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Reset the persisted buffers for a project directory
    Clear {
        /// Project directory holding the persisted buffers (default: .)
        dir: Option<PathBuf>,

        /// Also reset the persisted editor theme
        #[arg(long)]
        theme: bool,
    },
}

/// Downloadable artifact, as exposed on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum ExportArg {
    /// Raw markup buffer (index.html)
    Markup,
    /// Raw style buffer (style.css)
    Style,
    /// Raw script buffer (script.js)
    Script,
    /// Self-contained single-file bundle
    Project,
}

impl From<ExportArg> for ExportKind {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Markup => ExportKind::Markup,
            ExportArg::Style => ExportKind::Style,
            ExportArg::Script => ExportKind::Script,
            ExportArg::Project => ExportKind::Project,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("webpad=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dev { dir, port } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("error: cannot create async runtime: {e}");
                    process::exit(1);
                }
            };
            rt.block_on(async {
                if let Err(e) = webpad::server::run_dev_server(dir, port).await {
                    eprintln!("error: dev server failed: {e}");
                    process::exit(1);
                }
            });
        }

        Commands::Export { kind, dir, o } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let store = LocalStore::new(&dir);
            let buffers = match store.load_buffers() {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            };

            let project = webpad::derive_project_name(&dir);
            let payload = export_payload(kind.into(), &buffers, &project);

            match o {
                Some(out_path) => match fs::write(&out_path, &payload.body) {
                    Ok(()) => {
                        eprintln!(
                            "wrote {} to {} ({} bytes)",
                            payload.filename,
                            out_path.display(),
                            payload.body.len()
                        );
                    }
                    Err(e) => {
                        eprintln!("error: cannot write '{}': {e}", out_path.display());
                        process::exit(1);
                    }
                },
                None => print!("{}", payload.body),
            }
        }

        Commands::Clear { dir, theme } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let store = LocalStore::new(&dir);
            let result = if theme {
                store
                    .clear_buffers()
                    .and_then(|()| store.remove(&[webpad::store::KEY_THEME]))
            } else {
                store.clear_buffers()
            };
            match result {
                Ok(()) => eprintln!("cleared persisted buffers in {}", dir.display()),
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}
