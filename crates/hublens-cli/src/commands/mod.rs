//! Command implementations.

pub mod repos;
