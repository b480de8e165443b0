//! diagmon entrypoint.
//!
//! A build pipes compiler output into a fifo; diagmon parses it into
//! retained error/warning queues and serves a scrollable, auto-refreshing
//! terminal view until `q` is pressed.

use anyhow::Result;
use clap::Parser;
use core_config::Config;
use core_diag::DiagnosticStore;
use core_terminal::TerminalSession;
use core_view::{ScrollState, compose_frame, scroll_rows};
use crossbeam_channel::{Receiver, Sender, select, tick, unbounded};
use std::path::PathBuf;
use std::sync::Once;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod draw;
mod keys;
mod pipe;

use keys::InputAction;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "diagmon", version, about = "Live compiler diagnostics monitor")]
struct Args {
    /// Named pipe to read diagnostics from (overrides the config file).
    #[arg(long = "pipe")]
    pub pipe: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `diagmon.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

/// The fifo the monitor reads: the CLI flag when given, the config file
/// otherwise.
fn resolve_pipe_path(cli_pipe: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_pipe.unwrap_or_else(|| config.file.pipe.path.clone())
}

/// Send tracing output to `diagmon.log` in the working directory; the
/// screen belongs to the frame painter, so no log line may reach stdout.
/// Truncates the previous run's log. The returned worker guard must stay
/// alive until exit or buffered lines are lost.
fn init_logging() -> Option<WorkerGuard> {
    let _ = std::fs::remove_file("diagmon.log");
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(".", "diagmon.log"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init()
        .is_ok();
    // When a subscriber is already installed (another init won the race),
    // dropping the guard shuts the orphaned writer down.
    installed.then_some(guard)
}

/// Log panics before the default hook aborts; with the alternate screen
/// active the panic message itself would otherwise vanish with it.
fn log_panics() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            error!(target: "runtime.panic", ?info, "panic");
            previous(info);
        }));
    });
}

/// Blocking input thread: translated events flow into the runtime channel.
fn spawn_input(tx: Sender<InputAction>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if let Some(action) = keys::translate(&event) {
                        let quit = matches!(action, InputAction::Quit);
                        if tx.send(action).is_err() || quit {
                            break;
                        }
                    }
                }
                Err(err) => {
                    error!(target: "input", ?err, "event read failed");
                    break;
                }
            }
        }
    })
}

struct MonitorRuntime {
    store: DiagnosticStore,
    scroll: ScrollState,
    auto_refresh: bool,
    refresh_interval: Duration,
    chunks: Receiver<Vec<u8>>,
    inputs: Receiver<InputAction>,
    session: TerminalSession,
    _pipe_guard: pipe::PipeGuard,
}

impl MonitorRuntime {
    fn run(&mut self) -> Result<()> {
        self.redraw()?;
        let ticker = tick(self.refresh_interval);

        loop {
            select! {
                recv(self.chunks) -> chunk => match chunk {
                    Ok(chunk) => {
                        // Repaints ride the refresh timer; ingest only
                        // updates the store. A flush resets the scroll so
                        // the next frame starts at the top.
                        let summary = self.store.ingest(&chunk);
                        if summary.flushed {
                            self.scroll = ScrollState::new(self.scroll.viewport_rows());
                        }
                    }
                    Err(_) => {
                        info!(target: "runtime", "pipe reader stopped");
                        break;
                    }
                },
                recv(self.inputs) -> action => match action {
                    Ok(InputAction::Quit) => {
                        info!(target: "runtime", "shutdown");
                        break;
                    }
                    Ok(InputAction::Redraw) => self.redraw()?,
                    Ok(InputAction::ToggleAutoRefresh) => {
                        self.auto_refresh = !self.auto_refresh;
                        self.redraw()?;
                    }
                    Ok(InputAction::Scroll(direction)) => {
                        let before = self.scroll.offset();
                        if self.scroll.scroll(direction, self.store.total()) != before {
                            self.redraw()?;
                        }
                    }
                    Err(_) => break,
                },
                recv(ticker) -> _ => {
                    if self.auto_refresh {
                        self.redraw()?;
                    }
                }
            }
        }

        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let size = self.session.size();
        self.scroll.set_viewport_rows(scroll_rows(size.rows as usize));
        let frame = compose_frame(
            &self.store,
            self.scroll.offset(),
            size.cols as usize,
            size.rows as usize,
            self.auto_refresh,
        );
        draw::draw(&frame)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();
    log_panics();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone())?;
    let pipe_path = resolve_pipe_path(args.pipe, &config);
    info!(
        target: "runtime.startup",
        pipe = %pipe_path.display(),
        config_override = args.config.is_some(),
        auto_refresh = config.file.refresh.auto,
        "bootstrap_complete"
    );

    // Printed before the alternate screen so it is on the shell's
    // scrollback once the monitor exits.
    println!("diagmon - live compiler diagnostics monitor");
    println!("pipe: {}", pipe_path.display());
    println!("keys: q quit, d redraw, s auto refresh, arrows/page scroll");

    let (pipe_guard, pipe_file) = pipe::PipeGuard::create(&pipe_path)?;
    let (chunk_tx, chunk_rx) = unbounded();
    pipe::spawn_reader(pipe_file, chunk_tx);
    let (input_tx, input_rx) = unbounded();
    spawn_input(input_tx);

    let (session, size) = TerminalSession::begin("diagmon")?;
    let retention = &config.file.retention;
    let mut runtime = MonitorRuntime {
        store: DiagnosticStore::new(retention.max_errors, retention.max_others),
        scroll: ScrollState::new(scroll_rows(size.rows as usize)),
        auto_refresh: config.file.refresh.auto,
        refresh_interval: Duration::from_secs(config.file.refresh.interval_secs.max(1)),
        chunks: chunk_rx,
        inputs: input_rx,
        session,
        _pipe_guard: pipe_guard,
    };
    runtime.run()
}
