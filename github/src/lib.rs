//! Types and a client for the repository collaboration parts of Github's v3 API
//! https://docs.github.com/en/rest/collaborators

pub mod client;
mod common;
mod invitation;
mod user;

pub use client::Client;
pub use common::*;
pub use invitation::*;
pub use user::*;
