//! TTL LRU Cache - A bounded in-memory key-value cache server
//!
//! Combines strict LRU eviction with per-entry TTL expiration, both lazy on
//! read and proactive through a periodic sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::LruCache;
pub use config::Config;
pub use tasks::spawn_sweep_task;
