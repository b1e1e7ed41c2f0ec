//! Activity modules for the TUI.

pub mod picker;
pub mod shadow;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

pub use picker::PickerActivity;
pub use shadow::ShadowActivity;

/// Tab-order focus over a fixed list of component IDs.
pub struct FocusRing<Id: Copy + 'static> {
    ids: &'static [Id],
    current_idx: usize,
}

impl<Id: Copy + 'static> FocusRing<Id> {
    /// `ids` must not be empty.
    pub fn new(ids: &'static [Id]) -> Self {
        Self {
            ids,
            current_idx: 0,
        }
    }

    pub fn current_focus(&self) -> Id {
        self.ids[self.current_idx]
    }

    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % self.ids.len();
        self.current_focus()
    }

    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + self.ids.len() - 1) % self.ids.len();
        self.current_focus()
    }
}

/// Block for one key while the help modal is open.
///
/// Returns `true` if the key closes the modal.
pub fn help_modal_closed() -> Result<bool> {
    if let Event::Key(key) = event::read()? {
        return Ok(matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
        ));
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_ring_wraps_both_ways() {
        static IDS: [u8; 3] = [1, 2, 3];
        let mut ring = FocusRing::new(&IDS);
        assert_eq!(ring.current_focus(), 1);
        assert_eq!(ring.focus_prev(), 3);
        assert_eq!(ring.focus_next(), 1);
        assert_eq!(ring.focus_next(), 2);
    }
}
