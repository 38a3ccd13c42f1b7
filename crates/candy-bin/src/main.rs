//! candy entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::ModeController;
use core_config::load_from;
use core_model::{EditorModel, Layout};
use core_render::RenderEngine;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::Document;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Instant;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "candy.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "candy", version, about = "candy text editor")]
struct Args {
    /// Optional file to open at startup. If omitted an empty unnamed buffer is used.
    pub path: Option<PathBuf>,
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

    fn run(&mut self, args: &Args) -> Result<()> {
        self.configure_logging();
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let mut guard = self.backend.enter_guard()?;
        let model = load_editor_model(args.path.as_deref(), None)?;
        let mut runtime = EditorRuntime::new(model);
        runtime.run(&mut *guard)?;
        info!(target: "runtime.shutdown", frames = runtime.engine.frame_count(), "shutdown");
        Ok(())
    }

    fn configure_logging(&mut self) {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
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
}

/// Build the session: open `path` (if any) and apply configuration.
/// `config_path` overrides discovery of `candy.toml`.
fn load_editor_model(path: Option<&Path>, config_path: Option<PathBuf>) -> Result<EditorModel> {
    let document = match path {
        Some(p) => Document::open(p).with_context(|| format!("loading {}", p.display()))?,
        None => Document::new(),
    };
    let mut state = EditorState::new(document);
    let config = load_from(config_path)?;
    config.apply_to(&mut state);
    let path_str = path.map(|p| p.to_string_lossy().to_string());
    info!(
        target: "runtime.startup",
        path = path_str.as_deref(),
        rows = state.document.row_count(),
        page_rows = state.page_rows,
        message_ttl_ms = config.file.status.message_timeout_ms,
        "bootstrap_complete"
    );
    Ok(EditorModel::new(state))
}

struct EditorRuntime {
    model: EditorModel,
    controller: ModeController,
    engine: RenderEngine,
}

impl EditorRuntime {
    fn new(model: EditorModel) -> Self {
        Self {
            model,
            controller: ModeController::new(),
            engine: RenderEngine::new(),
        }
    }

    /// Render, block on one key, handle it; repeat until a quit result.
    fn run<B: TerminalBackend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        loop {
            self.render(backend)?;
            let key = backend.read_key()?;
            if self.controller.handle(key, &mut self.model).is_quit() {
                return Ok(());
            }
        }
    }

    fn render<B: TerminalBackend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        let (rows, cols) = backend.size()?;
        let layout = Layout::from_terminal(rows, cols);
        let view = self.model.view_mut();
        view.apply_layout(&layout);
        view.scroll();
        let frame = self
            .engine
            .render(self.model.state(), self.model.view(), &layout, Instant::now())?;
        backend.write_frame(&frame)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.run(&args)
}
