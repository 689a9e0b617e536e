pub mod drivers;
mod form;
mod session;

pub use form::prompt_form;
pub use session::{Session, SessionSummary, tomorrow};
