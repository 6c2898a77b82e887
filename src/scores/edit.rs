use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::scores::Scoreboard;
use crate::{NAME_MAX, NAME_SYMBOLS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    Editing,
    Viewing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditAction {
    Continue,
    Finish,
    Abort,
}

pub fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || NAME_SYMBOLS.contains(ch)
}

pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl Scoreboard {
    pub fn state(&self) -> EditState {
        if self.active_entry().is_some() {
            EditState::Editing
        } else {
            EditState::Viewing
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditAction {
        if is_interrupt(&key) {
            return EditAction::Abort;
        }
        match key.code {
            KeyCode::Enter => match self.active_entry() {
                None => EditAction::Finish,
                Some(entry) if !entry.name.is_empty() => EditAction::Finish,
                Some(_) => EditAction::Continue,
            },
            KeyCode::Backspace => {
                if let Some(entry) = self.active_entry_mut() {
                    entry.name.pop();
                }
                EditAction::Continue
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(entry) = self.active_entry_mut() {
                    if is_name_char(ch) {
                        entry.name.push(ch);
                        entry.name.truncate(NAME_MAX);
                    }
                }
                EditAction::Continue
            }
            _ => EditAction::Continue,
        }
    }
}
