mod state;
mod token;

pub use state::MAX_PENDING_STATES;
pub use state::STATE_TTL_SECONDS;
pub use state::StateManager;
pub use token::TokenHolder;
