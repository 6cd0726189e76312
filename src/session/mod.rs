/// Session state mutated by the identity endpoints
pub mod state;

pub use state::SessionState;
