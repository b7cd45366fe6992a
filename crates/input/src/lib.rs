//! Per-frame input state for keyboard, mouse, and scroll wheel.
//!
//! The host event loop feeds raw events in; the simulation reads boolean
//! "held"/"pressed" state and accumulated mouse deltas once per frame.

use glam::Vec2;
use std::collections::HashSet;

/// Named controls the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Forward (`w`).
    Forward,
    /// Backward (`s`).
    Backward,
    /// Strafe left (`a`).
    Left,
    /// Strafe right (`d`).
    Right,
    /// Jump thrust (`space`).
    Jump,
    /// Menu toggle (`escape`).
    Menu,
}

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<Key>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<Key>,
    /// Keys released this frame.
    keys_released: HashSet<Key>,

    /// Mouse movement delta this frame.
    mouse_delta: Vec2,
    /// Accumulated mouse delta (drained into `mouse_delta` at frame start).
    accumulated_delta: Vec2,

    /// Mouse scroll state.
    scroll_up: bool,
    scroll_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame, before
    /// feeding this frame's events.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_delta = self.accumulated_delta;
        self.accumulated_delta = Vec2::ZERO;
        self.scroll_up = false;
        self.scroll_down = false;
    }

    /// Process a key event. `pressed` is true for key-down, false for key-up.
    pub fn process_key(&mut self, key: Key, pressed: bool) {
        if pressed {
            if !self.keys_held.contains(&key) {
                self.keys_pressed.insert(key);
            }
            self.keys_held.insert(key);
        } else {
            self.keys_held.remove(&key);
            self.keys_released.insert(key);
        }
    }

    /// Process raw mouse movement.
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        self.accumulated_delta.x += delta.0 as f32;
        self.accumulated_delta.y += delta.1 as f32;
    }

    /// Register a scroll-up event for this frame.
    pub fn set_scroll_up(&mut self) {
        self.scroll_up = true;
    }

    /// Register a scroll-down event for this frame.
    pub fn set_scroll_down(&mut self) {
        self.scroll_down = true;
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    /// Mouse movement delta accumulated for this frame.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Check if scrolled up this frame.
    pub fn is_scroll_up(&self) -> bool {
        self.scroll_up
    }

    /// Check if scrolled down this frame.
    pub fn is_scroll_down(&self) -> bool {
        self.scroll_down
    }
}
