//! Network layer subsystem.
//!
//! # Design Decisions
//! - One listening socket, bound once at startup
//! - A bind failure is fatal; the caller decides how to exit

pub mod listener;

pub use listener::{bind, ListenerError};
