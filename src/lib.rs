pub mod chat;
pub mod config;
pub mod error;
pub mod hub;
pub mod llm;
pub mod responder;
pub mod server;
pub mod timeout;
pub mod translation;

pub use error::{Error, Result};
