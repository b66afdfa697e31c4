//! HTTP API module
//!
//! Exposes the prediction pipeline over a small REST surface.

pub mod handlers;
pub mod server;

pub use server::ApiServer;
