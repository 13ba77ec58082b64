// Pointer/click de-duplication for a single circle button.
//
// A pointerup activates immediately and arms the guard; the click the browser
// synthesizes for the same gesture is swallowed until the guard is released.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Fire,
    /// Trailing click from a gesture already handled on pointerup.
    Suppress,
    /// Circle is already spent.
    Ignore,
}

#[derive(Default, Debug, Clone)]
pub struct ActivationGuard {
    armed: bool,
}

impl ActivationGuard {
    /// Returns true if the activation should fire.
    pub fn pointer_up(&mut self, spent: bool) -> bool {
        if spent {
            return false;
        }
        self.armed = true;
        true
    }

    pub fn click(&self, spent: bool) -> ClickOutcome {
        if self.armed {
            ClickOutcome::Suppress
        } else if spent {
            ClickOutcome::Ignore
        } else {
            ClickOutcome::Fire
        }
    }

    pub fn release(&mut self) {
        self.armed = false;
    }
}
