use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::App;

/// Applies one key press. Returns `true` when the app should exit.
pub fn handle_key(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return true;
    }

    // The notice is modal: it swallows everything except quit.
    if app.notice.visible {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.notice.dismiss(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
        return app.should_quit;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('e') => {
            let trigger = app.trigger();
            debug!(?trigger, "extract pressed");
        }
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
    app.should_quit
}
