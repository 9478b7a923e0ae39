pub mod token;
pub mod token_state;

pub use token::{Token, TokenStatus};
pub use token_state::TokenState;
