//! Shared traits implemented by infrastructure crates.

pub mod clock;
pub mod mailer;

pub use clock::{Clock, SystemClock};
pub use mailer::Mailer;
