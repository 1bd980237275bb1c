use std::io;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ide_shell::app::Workbench;
use ide_shell::models::FileTree;
use ide_shell::services::{ensure_settings_file, load_seed_file, load_settings};
use ide_shell::tui::terminal_guard::{install_quit_flag, TerminalGuard};
use ide_shell::tui::view::View;

mod logging;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let seed_path = std::env::args_os().nth(1).map(PathBuf::from);

    let mut logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable, using defaults");
    }
    let settings = load_settings();

    let tree = match &seed_path {
        Some(path) => load_seed_file(path)?,
        None => FileTree::seed(),
    };

    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());
    let quit = install_quit_flag()?;

    let guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut workbench = Workbench::new(tree, &settings, log_rx);
    let result = run(&mut terminal, &mut workbench, &quit);

    drop(guard);
    tracing::info!("shutdown");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    quit: &std::sync::atomic::AtomicBool,
) -> io::Result<()> {
    let mut dirty = true;

    loop {
        if quit.load(Ordering::Relaxed) {
            tracing::info!("quit signal received");
            return Ok(());
        }

        dirty |= workbench.tick();

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = workbench.after_render();
        }

        if !event::poll(POLL_TIMEOUT)? {
            continue;
        }

        let ev = event::read()?;
        let result = workbench.handle_input(&ev);
        if result.is_quit() {
            return Ok(());
        }
        dirty |= result.is_consumed();
    }
}
