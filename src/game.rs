//! Per-tick results shared by both programs

/// What the main loop should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep running
    Continue,
    /// The run ended by game rules (dodge: first collision)
    GameOver,
    /// The user asked to close the window
    Quit,
}

impl LoopControl {
    pub fn should_stop(self) -> bool {
        !matches!(self, LoopControl::Continue)
    }
}

/// Which axes of a move were rolled back this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub blocked_x: bool,
    pub blocked_y: bool,
}

impl MoveOutcome {
    pub fn blocked(&self) -> bool {
        self.blocked_x || self.blocked_y
    }
}
