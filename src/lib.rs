//! Finny chat — terminal client for a guided home-loan intake conversation.

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod markup;
pub mod session;
pub mod surface;
pub mod transport;
pub mod wizard;
