//! Motion history for audio/feedback gating

/// Tracks the last few ticks' movement so the shell can gate ambient
/// feedback without reacting to single-frame flickers.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlowMonitor {
    history: [bool; 3],
}

impl FlowMonitor {
    /// Push this tick's "did anything move" flag.
    pub fn record(&mut self, moved: bool) {
        self.history.rotate_left(1);
        self.history[2] = moved;
    }

    /// True if anything moved within the recorded window.
    pub fn is_flowing(&self) -> bool {
        self.history.iter().any(|moved| *moved)
    }

    pub fn reset(&mut self) {
        self.history = [false; 3];
    }
}
