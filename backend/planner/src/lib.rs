pub mod prompt;
pub mod providers;
pub mod session;
pub mod state;
pub mod worker;

pub use prompt::build_user_prompt;
pub use session::{ChatSettings, QaSession};
pub use state::SessionState;
pub use worker::{AskOutcome, AskTicket, AskWorker};
