pub mod config;
pub mod presenter;
pub mod types;

pub use presenter::{Emitter, Sink};
