//! Keyboard event translation
//!
//! Raw key events become held movement intents plus one-shot actions. Key
//! repeats never reach the one-shot side, so holding Enter cannot restart the
//! run every frame.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    Left,
    Right,
    Enter,
    KeypadEnter,
    P,
    Escape,
    Other,
}

/// Platform event, as delivered by the window system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key },
    /// Window close button
    Close,
}

/// Source of platform events
pub trait InputSource {
    /// Move every pending event into `out` without waiting
    fn poll(&mut self, out: &mut Vec<RawEvent>);
}

/// Folds raw events into the per-frame [`TickInput`]
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    pending: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one raw event
    pub fn handle(&mut self, event: RawEvent) {
        match event {
            RawEvent::Close => self.pending.quit = true,
            RawEvent::KeyDown { repeat: true, .. } => {}
            RawEvent::KeyDown { key, repeat: false } => match key {
                Key::A | Key::Left => self.left_held = true,
                Key::D | Key::Right => self.right_held = true,
                Key::Enter | Key::KeypadEnter => self.pending.start = true,
                Key::P => self.pending.pause = true,
                Key::Escape => self.pending.quit = true,
                Key::Other => {}
            },
            RawEvent::KeyUp { key } => match key {
                Key::A | Key::Left => self.left_held = false,
                Key::D | Key::Right => self.right_held = false,
                _ => {}
            },
        }
    }

    /// Input for this frame; one-shot actions are consumed
    pub fn take_frame(&mut self) -> TickInput {
        let mut input = self.pending;
        input.move_left = self.left_held;
        input.move_right = self.right_held;
        self.pending.clear_actions();
        input
    }
}

/// Replays a timeline of events, frame by frame
///
/// Each entry is `(frame, event)`; events are released on the frame they name.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frame: u64,
    script: VecDeque<(u64, RawEvent)>,
}

impl ScriptedInput {
    pub fn new(mut script: Vec<(u64, RawEvent)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        Self {
            frame: 0,
            script: script.into(),
        }
    }

    /// Press and release a key on the same frame
    pub fn tap(frame: u64, key: Key) -> [(u64, RawEvent); 2] {
        [
            (frame, RawEvent::KeyDown { key, repeat: false }),
            (frame, RawEvent::KeyUp { key }),
        ]
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, out: &mut Vec<RawEvent>) {
        while let Some(&(frame, event)) = self.script.front() {
            if frame > self.frame {
                break;
            }
            out.push(event);
            self.script.pop_front();
        }
        self.frame += 1;
    }
}
