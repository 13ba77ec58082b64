pub mod activation;
pub mod countdown;

pub use activation::{ActivationGuard, ClickOutcome};
pub use countdown::{Countdown, Reading, expiry_due, should_run};
