//! Input handling for the car status selector.
//!
//! Converts window events into selector actions. The keyboard stands in for
//! the dashboard buttons:
//!
//! | Key | Action |
//! |-----|--------|
//! | `A` | toggle ON/OFF |
//! | `O` | select ON |
//! | `F` | select OFF |
//! | `Q`, window close | quit |
//!
//! Key-repeat events are ignored so holding `A` does not flicker the status.

use embedded_graphics_simulator::{SimulatorEvent, sdl2::Keycode};

use crate::state::CarStatus;

/// What a single input event asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Toggle,
    Select(CarStatus),
    Quit,
}

/// Map a key press to an action.
pub fn key_action(
    keycode: Keycode,
    repeat: bool,
) -> Option<Action> {
    if repeat {
        return None;
    }
    match keycode {
        Keycode::A => Some(Action::Toggle),
        Keycode::O => Some(Action::Select(CarStatus::On)),
        Keycode::F => Some(Action::Select(CarStatus::Off)),
        Keycode::Q => Some(Action::Quit),
        _ => None,
    }
}

/// Map a window event to an action.
pub fn event_action(event: &SimulatorEvent) -> Option<Action> {
    match *event {
        SimulatorEvent::Quit => Some(Action::Quit),
        SimulatorEvent::KeyDown { keycode, repeat, .. } => key_action(keycode, repeat),
        _ => None,
    }
}

// =============================================================================
// Selector
// =============================================================================

/// The ON/OFF selection control. Defaults to ON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    selected: CarStatus,
}

impl Selector {
    pub const fn new(selected: CarStatus) -> Self { Self { selected } }

    #[inline]
    pub const fn selected(&self) -> CarStatus { self.selected }

    /// Apply a selection action. Returns whether the selection changed.
    pub fn apply(
        &mut self,
        action: Action,
    ) -> bool {
        let next = match action {
            Action::Toggle => self.selected.toggle(),
            Action::Select(status) => status,
            Action::Quit => return false,
        };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }
}

/// Result of processing the pending events for one poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResult {
    /// New selection, if it changed during this poll.
    pub new_status: Option<CarStatus>,
    /// Shutdown was requested.
    pub quit: bool,
}

/// Drain `events` into `selector`.
///
/// Several key presses within one poll are applied in order; `new_status`
/// reports the final selection only if it differs from where the poll began.
pub fn process_events<I>(
    selector: &mut Selector,
    events: I,
) -> InputResult
where
    I: IntoIterator<Item = SimulatorEvent>,
{
    let before = selector.selected();
    let mut result = InputResult::default();

    for action in events.into_iter().filter_map(|event| event_action(&event)) {
        if action == Action::Quit {
            result.quit = true;
        } else {
            selector.apply(action);
        }
    }

    if selector.selected() != before {
        result.new_status = Some(selector.selected());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Key Mapping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_action(Keycode::A, false), Some(Action::Toggle));
        assert_eq!(key_action(Keycode::O, false), Some(Action::Select(CarStatus::On)));
        assert_eq!(key_action(Keycode::F, false), Some(Action::Select(CarStatus::Off)));
        assert_eq!(key_action(Keycode::Q, false), Some(Action::Quit));
        assert_eq!(key_action(Keycode::X, false), None, "Unmapped keys do nothing");
    }

    #[test]
    fn test_repeats_ignored() {
        assert_eq!(key_action(Keycode::A, true), None);
        assert_eq!(key_action(Keycode::Q, true), None);
    }

    #[test]
    fn test_window_close_quits() {
        assert_eq!(event_action(&SimulatorEvent::Quit), Some(Action::Quit));
    }

    // -------------------------------------------------------------------------
    // Selector Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_selector_defaults_to_on() {
        assert_eq!(Selector::default().selected(), CarStatus::On);
    }

    #[test]
    fn test_selector_toggle() {
        let mut selector = Selector::default();
        assert!(selector.apply(Action::Toggle));
        assert_eq!(selector.selected(), CarStatus::Off);
        assert!(selector.apply(Action::Toggle));
        assert_eq!(selector.selected(), CarStatus::On);
    }

    #[test]
    fn test_selector_select_same_is_no_change() {
        let mut selector = Selector::new(CarStatus::Off);
        assert!(!selector.apply(Action::Select(CarStatus::Off)));
        assert!(selector.apply(Action::Select(CarStatus::On)));
        assert!(!selector.apply(Action::Quit), "Quit never changes the selection");
    }

    // -------------------------------------------------------------------------
    // Event Processing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_process_quit() {
        let mut selector = Selector::default();
        let result = process_events(&mut selector, [SimulatorEvent::Quit]);
        assert!(result.quit);
        assert_eq!(result.new_status, None);
    }

    #[test]
    fn test_process_no_events() {
        let mut selector = Selector::default();
        assert_eq!(process_events(&mut selector, []), InputResult::default());
    }
}
