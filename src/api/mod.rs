mod auth;
pub mod client;
mod order;
mod product;
mod role;
pub mod types;

pub use client::*;
pub use types::*;
