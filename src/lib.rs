//! Environment configuration profiles for the yprompt backend.
//!
//! The backend resolves one immutable [`config::AppConfig`] at process start
//! by layering an environment override record over the base defaults. Every
//! other subsystem (auth, persistence, logging, web server bootstrap, cache
//! client) reads from that shared profile and never mutates it.

pub mod config;
pub mod observability;
