pub mod adapters;
pub mod api;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod presenters;

pub use api::{GithubAccess, RepoAccess};
pub use commands::Report;
pub use config::{Config, SETTINGS_FILE};
pub use error::{Error, Result};
