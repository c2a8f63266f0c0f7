// Module declarations
pub mod terminal;
pub mod widgets;

pub use terminal::TerminalRenderer;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::config::Config;
use crate::dashboard::DashboardState;
use crate::data_provider::MlbDataProvider;
use crate::runtime::Runtime;
use crate::scheduler::FetchScheduler;

/// How often the key reader checks whether the dashboard has stopped
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Keys that end the dashboard: q, Esc, Ctrl-C
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Read keys on a blocking thread until a quit key or `stop`
///
/// `quit` fires on a quit key; it is dropped without firing when reading
/// the terminal fails, which also ends the dashboard.
fn spawn_key_reader(stop: Arc<AtomicBool>, quit: oneshot::Sender<()>) {
    tokio::task::spawn_blocking(move || -> io::Result<()> {
        while !stop.load(Ordering::Relaxed) {
            if !event::poll(KEY_POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    debug!("KEYS: quit requested");
                    let _ = quit.send(());
                    break;
                }
            }
        }
        Ok(())
    });
}

/// Main entry point for dashboard mode
///
/// Owns the terminal for the lifetime of the dashboard and restores it on exit.
pub async fn run(provider: Arc<dyn MlbDataProvider>, config: &Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut renderer =
        TerminalRenderer::new(terminal, config.theme.clone(), config.time_format.as_str());

    let runtime = Runtime::new(
        DashboardState::new(config.games_per_page()),
        config.page_interval(),
    );
    let scheduler =
        FetchScheduler::spawn(provider, config.fetch_intervals(), runtime.action_sender());

    let stop = Arc::new(AtomicBool::new(false));
    let (quit_tx, quit_rx) = oneshot::channel();
    spawn_key_reader(Arc::clone(&stop), quit_tx);

    let shutdown = async {
        tokio::select! {
            result = quit_rx => {
                if result.is_err() {
                    error!("KEYS: terminal input failed, stopping");
                }
            }
            _ = tokio::signal::ctrl_c() => debug!("SIGNAL: interrupt"),
        }
    };

    runtime.run(&mut renderer, shutdown).await;

    stop.store(true, Ordering::Relaxed);
    scheduler.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(renderer.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    renderer.terminal_mut().show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!is_quit_key(&key));
    }
}
