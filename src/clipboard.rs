//! Clipboard access for copying color and shadow values.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to set clipboard content: {0}")]
    SetContent(String),
}

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardService {
    fn write_text(&mut self, content: String) -> ClipboardResult<()>;
}

/// The desktop clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn write_text(&mut self, content: String) -> ClipboardResult<()> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        ctx.set_contents(content.clone())
            .map_err(|e| ClipboardError::SetContent(e.to_string()))?;

        tracing::debug!(message = "copied to clipboard", copied = %content);
        Ok(())
    }
}

pub mod test_fixtures {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{ClipboardError, ClipboardResult, ClipboardService};

    /// Records the last write. Clones share the recorded content.
    #[derive(Debug, Default, Clone)]
    pub struct TestClipboard {
        content: Rc<RefCell<String>>,
    }

    impl TestClipboard {
        pub fn content(&self) -> String {
            self.content.borrow().clone()
        }
    }

    impl ClipboardService for TestClipboard {
        fn write_text(&mut self, content: String) -> ClipboardResult<()> {
            *self.content.borrow_mut() = content;
            Ok(())
        }
    }

    /// A clipboard that refuses every write.
    #[derive(Debug, Default)]
    pub struct FailingClipboard;

    impl ClipboardService for FailingClipboard {
        fn write_text(&mut self, _content: String) -> ClipboardResult<()> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }
}
