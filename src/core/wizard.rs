use crate::core::step::Step;

/// Tracks which step is on screen. Transitions are clamped: advancing past
/// the last step or retreating past the first is a no-op.
pub struct Wizard {
    current: Step,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            current: Step::FirstName,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn has_next(&self) -> bool {
        self.current.next().is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.current.prev().is_some()
    }

    pub fn advance(&mut self) {
        if let Some(next) = self.current.next() {
            self.current = next;
        }
    }

    pub fn retreat(&mut self) {
        if let Some(prev) = self.current.prev() {
            self.current = prev;
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Wizard;
    use crate::core::step::Step;

    #[test]
    fn starts_at_the_first_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.current(), Step::FirstName);
    }

    #[test]
    fn advances_and_retreats_in_order() {
        let mut wizard = Wizard::new();
        wizard.advance();
        assert_eq!(wizard.current(), Step::LastName);
        wizard.advance();
        assert_eq!(wizard.current(), Step::Email);
        wizard.retreat();
        assert_eq!(wizard.current(), Step::LastName);
        wizard.retreat();
        assert_eq!(wizard.current(), Step::FirstName);
    }

    #[test]
    fn retreat_is_clamped_at_the_first_step() {
        let mut wizard = Wizard::new();
        wizard.retreat();
        assert_eq!(wizard.current(), Step::FirstName);
    }

    #[test]
    fn advance_is_clamped_at_the_last_step() {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.current(), Step::Email);
    }

    #[test]
    fn position_tracks_advances_minus_retreats() {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.advance();
        wizard.retreat();
        wizard.advance();
        // 1 + 3 - 1 = 3
        assert_eq!(wizard.current().number(), 3);
    }
}
