pub mod address;
pub mod sender;

pub use address::{MailPlan, parse_mailbox};
pub use sender::Mailer;
