/// Frame loop state.
///
/// The only transition is `Running -> ShouldClose`, triggered from outside
/// the loop (a close request or an app/runtime failure). There is no way back.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    ShouldClose,
}

impl LoopState {
    #[inline]
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }

    /// Moves to `ShouldClose`. Returns `true` if this call made the transition.
    pub fn request_close(&mut self) -> bool {
        let was_running = self.is_running();
        *self = LoopState::ShouldClose;
        was_running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        assert!(LoopState::default().is_running());
    }

    #[test]
    fn close_is_one_way() {
        let mut state = LoopState::Running;
        assert!(state.request_close());
        assert_eq!(state, LoopState::ShouldClose);

        // Repeated requests are harmless and report no transition.
        assert!(!state.request_close());
        assert!(!state.is_running());
    }
}
