//! Hashbox Server Library
//!
//! This crate exposes the server's modules so integration tests can build
//! the router and repositories directly. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `routes`: HTTP handlers for the /file_hashes surface
//! - `db`: SQLite persistence for users and hash records
//! - `upload`: filename validation, content digests, upload-dir writes
//! - `auth`: X-Auth-User API key extractor

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod upload;
