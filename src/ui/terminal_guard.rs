//! Raw-mode terminal setup with guaranteed restore.
//!
//! The restore closure runs exactly once: on drop, or from the panic hook if
//! the UI thread panics first.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Restore = Box<dyn FnOnce() + Send + 'static>;

pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    fn new(restore: Restore) -> Self {
        let guard = Self {
            restore: Arc::new(Mutex::new(Some(restore))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let restore = Arc::clone(&self.restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(restore) = restore.lock().take() {
                restore();
            }
            default_hook(info);
        }));
    }

    pub fn restore(&self) {
        if let Some(restore) = self.restore.lock().take() {
            restore();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(Hide)?;

    let guard = TerminalGuard::new(Box::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableBracketedPaste);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }));

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
