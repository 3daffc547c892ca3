use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the game loop.
pub type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode alternate-screen terminal owned for one play session.
///
/// Dropping it, or panicking while it is alive, puts the terminal back into
/// cooked mode on the main screen.
pub struct TerminalGuard {
    terminal: GameTerminal,
}

impl TerminalGuard {
    /// Installs the restore-on-panic hook, then takes over the terminal.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal();
                Err(error)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut GameTerminal {
        &mut self.terminal
    }

    /// Writes a BEL character; failures are ignored.
    pub fn ring_bell(&mut self) {
        use std::io::Write;

        let backend = self.terminal.backend_mut();
        let _ = backend.write_all(b"\x07");
        let _ = backend.flush();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
