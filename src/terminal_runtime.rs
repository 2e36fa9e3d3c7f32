use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type driving the renderer.
pub type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// RAII guard over raw mode, the alternate screen, and the hidden cursor.
///
/// Dropping the guard restores the terminal best-effort, so the screen comes
/// back even when the loop exits through `?`.
pub struct TerminalGuard {
    terminal: GameTerminal,
}

impl TerminalGuard {
    /// Puts the terminal into game mode and builds the ratatui terminal.
    ///
    /// Partial setup is rolled back before the error is returned.
    pub fn acquire() -> io::Result<Self> {
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
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leaves game mode, ignoring failures.
///
/// Also called from the panic hook, where the guard's destructor may never
/// run.
pub fn restore_terminal() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
