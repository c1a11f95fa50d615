use super::command::{Command, TimerFamily};

/// Modal overlay with a timed closing transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    visible: bool,
    closing: bool,
    close_delay_ms: u32,
}

impl Overlay {
    pub fn new(close_delay_ms: u32) -> Self {
        Self {
            visible: false,
            closing: false,
            close_delay_ms,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn closing(&self) -> bool {
        self.closing
    }

    /// Opens a hidden overlay, or starts closing a visible one.
    /// Ignored while a close is already pending.
    pub fn toggle(&mut self) -> Vec<Command> {
        if !self.visible {
            self.visible = true;
            Vec::new()
        } else if !self.closing {
            self.closing = true;
            vec![Command::once(TimerFamily::OverlayClose, self.close_delay_ms)]
        } else {
            Vec::new()
        }
    }

    pub fn finish_close(&mut self) {
        self.visible = false;
        self.closing = false;
    }
}
