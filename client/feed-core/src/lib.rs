//! Feed Core Library
//!
//! In-memory feed state core for the meme-sharing client demo. Owns the post
//! collection for a session and models the client-side workflows (feed load,
//! likes, comments, publish) without a backend: all data is compiled-in
//! fixture content, mutated in place and discarded at session end.
//!
//! # Modules
//!
//! - `models`: Data structures for users, posts, comments, drafts
//! - `fixtures`: Compiled-in sample data standing in for a real backend
//! - `services`: Feed store, publish workflow, active-item selection
//! - `error`: Error types and handling
//! - `config`: Configuration management
//! - `utils`: Id tokens and display helpers

pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, SimulationConfig};
pub use error::{AppError, Result};
pub use services::{
    ActiveItemSelector, FeedStore, ItemBounds, PublishConfig, PublishPhase, PublishSimulator,
};
