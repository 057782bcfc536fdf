//! rivet entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::Session;
use core_config::load_from;
use core_render::CrosstermSurface;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, CrosstermInput, TerminalBackend};
use core_text::LineStore;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod runtime;

const LOG_FILE: &str = "rivet.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "rivet", version, about = "rivet modal line editor")]
struct Args {
    /// Optional path to open at startup. If omitted an empty buffer is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `rivet.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn run(&mut self, args: &Args) -> Result<()> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let config = load_from(args.config.clone())?;
        let options = config.editor_options();
        let mut session = Session::new(load_buffer(args.path.as_deref()), options);
        info!(
            target: "runtime.startup",
            path = args.path.as_ref().map(|p| p.display().to_string()).as_deref(),
            lines = session.state().lines.line_count(),
            config_override = args.config.is_some(),
            tab_width = options.tab_width,
            "bootstrap_complete"
        );

        let guard = self.backend.enter_guard("rivet")?;
        let (cols, rows) = guard.backend().size()?;
        session.resize(cols, rows);
        let mut surface = CrosstermSurface::stdout(cols, rows);
        let mut input = CrosstermInput::new();
        let summary = runtime::run(&mut session, &mut input, &mut surface)?;
        drop(guard);
        info!(
            target: "runtime",
            events = summary.events,
            errors = summary.errors,
            skipped_input = input.skipped(),
            "shutdown"
        );
        Ok(())
    }
}

/// Build the initial editor state from `path`; unreadable files give an empty buffer.
fn load_buffer(path: Option<&Path>) -> EditorState {
    let Some(path) = path else {
        return EditorState::new(LineStore::new());
    };
    let store = match std::fs::read_to_string(path) {
        Ok(content) => {
            let store = LineStore::from_text(&content);
            tracing::debug!(target: "io", file = %path.display(), size_bytes = content.len(), line_count = store.line_count(), "file_read_ok");
            store
        }
        Err(e) => {
            error!(target: "io", file = %path.display(), error = %e, "file_open_error");
            LineStore::new()
        }
    };
    EditorState::new(store.with_origin(path))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.run(&args)
}
