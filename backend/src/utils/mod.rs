pub mod email;
pub mod time;

pub use email::EmailService;
pub use time::*;
