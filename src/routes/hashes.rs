//! File hash registry routes
//!
//! Endpoints:
//! - POST /file_hashes/ - upload a file, store its MD5/SHA-256 record
//! - GET /file_hashes/{hash}?hash=md5|sha256 - list records by digest
//! - DELETE /file_hashes/{hash}?hash=md5|sha256 - delete a record by digest

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::db::{FileHash, FileHashRepository, HashAlgo};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::upload::{digest_bytes, extension_allowed, sanitize_filename, save_upload};

/// Create the file hashes router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_file))
        .route("/{hash}", get(lookup_hashes).delete(delete_hash))
}

// ============================================================================
// Wire Types
// ============================================================================

/// Query parameters selecting the hash algorithm
#[derive(Debug, Deserialize)]
struct HashQuery {
    /// Algorithm selector: the literal `md5` or `sha256`
    hash: Option<String>,
}

/// One lookup result, nested under a `FileHash` key for wire compatibility
#[derive(Debug, Serialize)]
struct FileHashEntry {
    #[serde(rename = "FileHash")]
    file_hash: FileHashBody,
}

#[derive(Debug, Serialize)]
struct FileHashBody {
    #[serde(rename = "userId")]
    user_id: i64,
    filename: String,
    sha256: String,
    md5: String,
}

impl From<FileHash> for FileHashEntry {
    fn from(record: FileHash) -> Self {
        Self {
            file_hash: FileHashBody {
                user_id: record.user_id,
                filename: record.filename,
                sha256: record.hash_sha256,
                md5: record.hash_md5,
            },
        }
    }
}

fn parse_algo(query: &HashQuery) -> Result<HashAlgo> {
    query
        .hash
        .as_deref()
        .and_then(HashAlgo::parse)
        .ok_or_else(|| AppError::BadRequest("Invalid hash type, expected md5 or sha256".to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /file_hashes/
///
/// Accepts a multipart `file` field, writes the bytes into the upload
/// directory, and records the content digests for the caller. Re-uploading
/// content the caller already registered (same MD5) inserts nothing; the
/// response is `201 OK` either way.
async fn upload_file(
    auth_user: AuthUser,
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, &'static str)> {
    let mut multipart = multipart.map_err(|_| {
        AppError::BadRequest("Content-Type must be multipart/form-data".to_string())
    })?;

    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().map(|s| s.to_string()).ok_or_else(|| {
                AppError::BadRequest("File field must have a filename".to_string())
            })?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file field: {e}")))?;
            upload = Some((file_name, data));
        }
        // Ignore unknown fields.
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing 'file' field".to_string()))?;

    // The allow-list runs on the client-supplied name, before sanitizing.
    if !extension_allowed(&file_name) {
        let ext = file_name.rsplit('.').next().unwrap_or("").to_string();
        return Err(AppError::UnsupportedFormat(ext));
    }

    let filename = sanitize_filename(&file_name)
        .ok_or_else(|| AppError::BadRequest(format!("Unsafe filename: {file_name}")))?;

    // Digests come from the in-memory bytes; the written file is never
    // re-read.
    let digests = digest_bytes(&data);

    save_upload(&state.config().storage.upload_dir, &filename, &data).await?;

    let repo = FileHashRepository::new(state.db());

    // Advisory dedup probe keyed on MD5 only. Not a database constraint;
    // concurrent uploads can race past it.
    let existing = repo.find_by_user_and_md5(auth_user.id, &digests.md5).await?;

    if let Some(record) = existing {
        tracing::info!(
            user_id = auth_user.id,
            filename = %filename,
            md5 = %digests.md5,
            record_id = record.id,
            "Duplicate upload, record already exists"
        );
    } else {
        let record = repo
            .insert(auth_user.id, &filename, &digests.md5, &digests.sha256)
            .await?;
        tracing::info!(
            user_id = auth_user.id,
            filename = %filename,
            md5 = %digests.md5,
            sha256 = %digests.sha256,
            record_id = record.id,
            size = data.len(),
            "File uploaded and recorded"
        );
    }

    Ok((StatusCode::CREATED, "OK"))
}

/// GET /file_hashes/{hash}?hash=md5|sha256
///
/// Lists every record matching the digest, across all users. Lookups
/// require no authentication.
async fn lookup_hashes(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    Query(query): Query<HashQuery>,
) -> Result<Json<Vec<FileHashEntry>>> {
    let algo = parse_algo(&query)?;

    let records = FileHashRepository::new(state.db())
        .list_by_hash(algo, &hash)
        .await?;

    if records.is_empty() {
        return Err(AppError::NotFound(format!("No files found for hash {hash}")));
    }

    Ok(Json(records.into_iter().map(FileHashEntry::from).collect()))
}

/// DELETE /file_hashes/{hash}?hash=md5|sha256
///
/// Deletes the first matching record. The md5 path only touches the
/// caller's own records; the sha256 path matches regardless of owner. The
/// stored file stays on disk.
async fn delete_hash(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(hash): Path<String>,
    Query(query): Query<HashQuery>,
) -> Result<&'static str> {
    let algo = parse_algo(&query)?;

    let repo = FileHashRepository::new(state.db());

    let record = repo
        .find_for_delete(algo, &hash, auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No files found for hash {hash}")))?;

    repo.delete_by_id(record.id).await?;

    tracing::info!(
        user_id = auth_user.id,
        record_id = record.id,
        filename = %record.filename,
        "Hash record deleted"
    );

    Ok("OK")
}
