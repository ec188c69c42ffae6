//! Route modules for Hashbox Server

pub mod hashes;
