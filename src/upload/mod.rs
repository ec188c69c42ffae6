//! Upload handling
//!
//! Everything between receiving a multipart `file` field and having a hash
//! record to persist: filename validation and sanitization, content
//! digests, and writing the bytes into the upload directory.

pub mod digest;
pub mod filename;
pub mod store;

pub use digest::{digest_bytes, FileDigests};
pub use filename::{extension_allowed, sanitize_filename, ALLOWED_EXTENSIONS};
pub use store::save_upload;
