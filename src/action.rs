// MIT License - Copyright (c) 2026 Peter Wright
// Tapo bulb group control

use std::fmt;

use clap::ValueEnum;

/// Action applied to every bulb in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BulbAction {
    /// Switch the bulb on.
    On,
    /// Switch the bulb off.
    Off,
    /// Invert the bulb's current state.
    Toggle,
}

impl BulbAction {
    /// The power state this action drives a bulb to.
    ///
    /// `Toggle` is resolved against `currently_on`, the state read from the
    /// device at connect time. Each bulb toggles against its own state, so a
    /// mixed group stays mixed (inverted) rather than snapping to one state.
    pub fn target_state(self, currently_on: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Toggle => !currently_on,
        }
    }
}

impl fmt::Display for BulbAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Toggle => "toggle",
        })
    }
}
