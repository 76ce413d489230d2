//! File attachment endpoints: multipart upload and download.
//!
//! Files are stored flat under the configured upload directory, under their
//! original name. Same-name uploads overwrite, last writer wins. Filenames
//! with path separators or parent components are rejected outright.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// Extensions accepted by the upload endpoint, matched case-insensitively
/// against the part after the last dot.
pub const ALLOWED_EXTENSIONS: [&str; 8] =
    ["txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx"];

fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reject names that could escape the upload directory.
fn safe_filename(filename: &str) -> bool {
    !filename.contains('/') && !filename.contains('\\') && !filename.contains("..")
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Handler: POST /templates
///
/// Expects a multipart body with a `file` field carrying a filename.
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!("Rejected malformed multipart body: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Invalid upload body");
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return error_response(StatusCode::BAD_REQUEST, "No selected file");
        }
        if !safe_filename(&filename) {
            return error_response(StatusCode::BAD_REQUEST, "Invalid filename");
        }
        if !allowed_file(&filename) {
            return error_response(StatusCode::BAD_REQUEST, "File type not allowed");
        }

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("Failed to read upload body: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Invalid upload body");
            }
        };

        let path = state.upload_dir.join(&filename);
        if let Err(e) = tokio::fs::write(&path, &data).await {
            tracing::error!("Failed to store upload {:?}: {}", path, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store file");
        }

        tracing::info!(filename = %filename, bytes = data.len(), "Stored upload");
        return Json(json!({
            "message": format!("File {} uploaded successfully", filename)
        }))
        .into_response();
    }

    error_response(StatusCode::BAD_REQUEST, "No file part")
}

/// Handler: GET /templates/{filename} and GET /uploads/{filename}
///
/// Serves raw file bytes from the upload directory; missing files are a
/// plain 404.
pub async fn download(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    if !safe_filename(&filename) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read(state.upload_dir.join(&filename)).await {
        Ok(bytes) => {
            ([(header::CONTENT_TYPE, guess_mime_type(&filename))], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Guess MIME type from the filename extension.
fn guess_mime_type(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_file_case_insensitive() {
        assert!(allowed_file("guide.pdf"));
        assert!(allowed_file("FILE.PDF"));
        assert!(allowed_file("photo.JPeG"));
        assert!(!allowed_file("FILE.exe"));
        assert!(!allowed_file("script.sh"));
    }

    #[test]
    fn test_allowed_file_requires_extension() {
        assert!(!allowed_file("noextension"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn test_allowed_file_uses_last_dot() {
        assert!(allowed_file("archive.tar.png"));
        assert!(!allowed_file("guide.pdf.exe"));
    }

    #[test]
    fn test_safe_filename() {
        assert!(safe_filename("guide.pdf"));
        assert!(!safe_filename("../guide.pdf"));
        assert!(!safe_filename("a/b.pdf"));
        assert!(!safe_filename("a\\b.pdf"));
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("guide.pdf"), "application/pdf");
        assert_eq!(guess_mime_type("photo.JPG"), "image/jpeg");
        assert_eq!(guess_mime_type("unknown.bin"), "application/octet-stream");
    }
}
