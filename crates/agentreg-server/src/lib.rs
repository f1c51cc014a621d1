//! HTTP/JSON API over the `agents` table.
//!
//! Exposes list, grouped-by-name, create and delete endpoints backed by a
//! single SQLite connection from `agentreg-storage`, plus the acronym
//! deriver used for `short_name`.

pub mod acronym;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
