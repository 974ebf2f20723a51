//! Logical input consumed by [`tick`](super::tick)
//!
//! Raw keys never reach the simulation. The input layer maps them to held
//! [`Control`]s (level-triggered) and one-shot [`Command`]s (edge-triggered).

use serde::{Deserialize, Serialize};

use super::state::PlayerId;

/// A control that is active for as long as it is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Dash,
}

/// One-shot commands, applied once in the tick they are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    ToggleCamera,
    TogglePause,
    SelectSinglePlayer,
    SelectTwoPlayer,
    ReturnToMenu,
}

/// Set of controls currently held, per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldControls {
    bits: u8,
}

impl HeldControls {
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(player: PlayerId, control: Control) -> u8 {
        let shift = match control {
            Control::MoveLeft => 0,
            Control::MoveRight => 1,
            Control::Dash => 2,
        };
        match player {
            PlayerId::One => 1 << shift,
            PlayerId::Two => 1 << (shift + 3),
        }
    }

    pub fn press(&mut self, player: PlayerId, control: Control) {
        self.bits |= Self::bit(player, control);
    }

    pub fn release(&mut self, player: PlayerId, control: Control) {
        self.bits &= !Self::bit(player, control);
    }

    pub fn is_held(&self, player: PlayerId, control: Control) -> bool {
        self.bits & Self::bit(player, control) != 0
    }

    /// Builder form of [`press`](Self::press)
    pub fn with(mut self, player: PlayerId, control: Control) -> Self {
        self.press(player, control);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Controls held during this tick
    pub held: HeldControls,
    /// One-shot commands, applied in order
    pub commands: Vec<Command>,
    /// Idle/demo mode - AI also drives player 1
    pub idle_mode: bool,
}

impl TickInput {
    pub fn held(held: HeldControls) -> Self {
        Self {
            held,
            ..Default::default()
        }
    }

    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_are_scoped_per_player() {
        let held = HeldControls::new().with(PlayerId::One, Control::MoveLeft);
        assert!(held.is_held(PlayerId::One, Control::MoveLeft));
        assert!(!held.is_held(PlayerId::Two, Control::MoveLeft));
        assert!(!held.is_held(PlayerId::One, Control::MoveRight));
    }

    #[test]
    fn test_press_release() {
        let mut held = HeldControls::new();
        held.press(PlayerId::Two, Control::Dash);
        held.press(PlayerId::Two, Control::MoveRight);
        assert!(held.is_held(PlayerId::Two, Control::Dash));
        held.release(PlayerId::Two, Control::Dash);
        assert!(!held.is_held(PlayerId::Two, Control::Dash));
        assert!(held.is_held(PlayerId::Two, Control::MoveRight));
        held.clear();
        assert!(held.is_empty());
    }
}
