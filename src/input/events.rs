use macroquad::prelude::*;

/// Events the simulation reacts to. Everything else is dropped by the
/// event source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    PrimaryClickAt { x: f32, y: f32 },
}

/// Non-blocking source of pending input
pub trait EventSource {
    /// Take every event buffered since the last call
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// Event source backed by macroquad's per-frame input state.
///
/// Creating one takes over the window close button, which then reports
/// [`InputEvent::Quit`] instead of closing the window directly.
pub struct MacroquadEvents;

impl MacroquadEvents {
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl EventSource for MacroquadEvents {
    fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::Quit);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            events.push(InputEvent::PrimaryClickAt { x, y });
        }

        events
    }
}
