//! Input adapter
//!
//! Raw keyboard/pointer events are normalized into three intents:
//! - `Jump`: edge-triggered, one per physical press
//! - `Duck`: level-triggered, follows the key state
//! - `Restart`: edge-triggered, honoured in any state

use crate::sim::{Pulse, TickInput};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
    ArrowDown,
    KeyR,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "KeyR" => Key::KeyR,
            _ => Key::Other,
        }
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Key::Space | Key::ArrowUp)
    }
}

/// Raw input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Keydown generated by holding a key (`KeyboardEvent.repeat`)
    KeyRepeat(Key),
    KeyUp(Key),
    /// Window lost focus; keyups may never arrive
    Blur,
    /// Tap/click on the play field
    PointerDown,
    /// On-screen action button
    ActionButton,
}

impl InputEvent {
    /// Whether the browser's default handling (page scroll) should be suppressed
    pub fn prevents_default(&self) -> bool {
        matches!(self, InputEvent::KeyDown(key) | InputEvent::KeyRepeat(key) if key.is_jump())
    }
}

/// Abstract player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Jump,
    Duck(bool),
    Restart,
}

/// The only state shared between event handlers and the frame loop.
///
/// Writes coalesce: several jump presses before the next tick still yield a
/// single jump, and duck is last-write-wins. Auto-repeat is flagged by the
/// browser on each event, so no key state is tracked here.
#[derive(Debug, Clone, Default)]
pub struct IntentBuffer {
    pub tick: TickInput,
    pub restart: Pulse,
}

impl IntentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a raw event; returns the intent it produced, if any
    pub fn handle(&mut self, event: InputEvent) -> Option<Intent> {
        let intent = match event {
            InputEvent::KeyDown(key) if key.is_jump() => Intent::Jump,
            InputEvent::KeyDown(Key::ArrowDown) | InputEvent::KeyRepeat(Key::ArrowDown) => {
                Intent::Duck(true)
            }
            InputEvent::KeyUp(Key::ArrowDown) | InputEvent::Blur => Intent::Duck(false),
            InputEvent::KeyDown(Key::KeyR) => Intent::Restart,
            InputEvent::PointerDown | InputEvent::ActionButton => Intent::Jump,
            _ => return None,
        };
        self.apply(intent);
        Some(intent)
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Jump => self.tick.jump.fire(),
            Intent::Duck(held) => self.tick.duck = held,
            Intent::Restart => self.restart.fire(),
        }
    }

    /// Drop pending pulses; duck follows the key and stays
    pub fn clear_pulses(&mut self) {
        self.tick.jump.clear();
        self.restart.clear();
    }
}
