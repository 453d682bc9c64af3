//! Core request types.
//!
//! These types enforce request invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod page;
mod token;

pub use page::{MAX_PAGE_SIZE, MIN_PAGE_SIZE, PageRequest};
pub use token::AuthToken;
