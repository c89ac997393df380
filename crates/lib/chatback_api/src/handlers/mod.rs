//! Request handlers.

pub mod message;
