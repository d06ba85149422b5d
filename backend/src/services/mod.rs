pub mod leave;
pub mod notification;

pub use leave::{LeaveOutcome, LeaveService};
pub use notification::Notifier;
