//! Menu selection cursor.

/// Move `index` by one step forward or backward, wrapping within `len` slots.
///
/// Returns `index` unchanged when there are no slots.
pub fn wrap_step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return index;
    }
    if forward {
        (index + 1) % len
    } else {
        (index % len + len - 1) % len
    }
}

/// Cursor over the options of a menu plus its optional dismiss slot.
///
/// Invariant: `current_index < slot_count()` whenever `slot_count() > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub current_index: usize,
    pub option_count: usize,
    pub dismissable: bool,
    pub dismissed: bool,
}

impl SelectionState {
    /// Create a cursor at the first option
    pub fn new(option_count: usize, dismissable: bool) -> Self {
        Self {
            current_index: 0,
            option_count,
            dismissable,
            dismissed: false,
        }
    }

    /// Number of navigable slots, including the dismiss slot
    pub fn slot_count(&self) -> usize {
        if self.dismissable {
            self.option_count + 1
        } else {
            self.option_count
        }
    }

    pub fn move_forward(&mut self) {
        self.current_index = wrap_step(self.current_index, self.slot_count(), true);
    }

    pub fn move_back(&mut self) {
        self.current_index = wrap_step(self.current_index, self.slot_count(), false);
    }

    /// Whether the cursor rests on the synthetic dismiss slot
    pub fn on_dismiss_slot(&self) -> bool {
        self.dismissable && self.current_index == self.option_count
    }

    /// Replace the option count, pulling the cursor back into range
    pub fn resize(&mut self, option_count: usize) {
        self.option_count = option_count;
        let slots = self.slot_count();
        if slots == 0 {
            self.current_index = 0;
        } else if self.current_index >= slots {
            self.current_index = slots - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_step() {
        assert_eq!(wrap_step(0, 3, true), 1);
        assert_eq!(wrap_step(2, 3, true), 0);
        assert_eq!(wrap_step(0, 3, false), 2);
        assert_eq!(wrap_step(1, 3, false), 0);
        assert_eq!(wrap_step(0, 1, false), 0);
        assert_eq!(wrap_step(4, 0, true), 4);
    }

    #[test]
    fn test_forward_full_cycle_returns_home() {
        for start in 0..5 {
            let mut state = SelectionState::new(5, false);
            state.current_index = start;
            for _ in 0..state.slot_count() {
                state.move_forward();
            }
            assert_eq!(state.current_index, start);
        }
    }

    #[test]
    fn test_dismiss_slot() {
        let mut state = SelectionState::new(2, true);
        assert_eq!(state.slot_count(), 3);
        state.move_back();
        assert_eq!(state.current_index, 2);
        assert!(state.on_dismiss_slot());
    }

    #[test]
    fn test_resize_clamps_cursor() {
        let mut state = SelectionState::new(4, true);
        state.current_index = 4;
        state.resize(1);
        assert_eq!(state.current_index, 1);
        assert!(state.on_dismiss_slot());

        let mut state = SelectionState::new(3, false);
        state.current_index = 2;
        state.resize(0);
        assert_eq!(state.current_index, 0);
    }
}
