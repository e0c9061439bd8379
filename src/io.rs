use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::AppEvent;
use crate::events::Command;
use crate::events::Event;

/// Converts a crossterm event into a grid event
///
/// ```notrust
///  arrows / hjkl   move (up goes to the parent, down into the children)
///  s / space       smash
///  r / R           rotate clockwise / counter-clockwise
///  m / M           mirror horizontally / vertically
///  q / ctrl-c      quit
/// ```
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        // ignore key releases on terminals that report them
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => convert_key(key_event),
        CrossTermEvent::Resize(cols, rows) => Some(Event::App(AppEvent::Resize { cols, rows })),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    let command = match key_event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return Some(Event::App(AppEvent::Exit)),

        KeyEvent {
            code: KeyCode::Up | KeyCode::Char('k'),
            ..
        } => Command::MoveUp,
        KeyEvent {
            code: KeyCode::Down | KeyCode::Char('j'),
            ..
        } => Command::MoveDown,
        KeyEvent {
            code: KeyCode::Left | KeyCode::Char('h'),
            ..
        } => Command::MoveLeft,
        KeyEvent {
            code: KeyCode::Right | KeyCode::Char('l'),
            ..
        } => Command::MoveRight,

        KeyEvent {
            code: KeyCode::Char('s' | ' '),
            ..
        } => Command::Smash,

        KeyEvent {
            code: KeyCode::Char('r'),
            ..
        } => Command::Rotate { clockwise: true },
        KeyEvent {
            code: KeyCode::Char('R'),
            ..
        } => Command::Rotate { clockwise: false },

        KeyEvent {
            code: KeyCode::Char('m'),
            ..
        } => Command::Mirror { horizontal: true },
        KeyEvent {
            code: KeyCode::Char('M'),
            ..
        } => Command::Mirror { horizontal: false },

        _ => return None,
    };

    Some(Event::Grid(command))
}
