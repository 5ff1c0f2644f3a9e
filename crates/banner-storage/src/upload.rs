//! Upload payload and filename handling

use std::path::Path;

/// Raw image bytes handed to an [`crate::ImageStore`]
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original filename as sent by the client
    pub filename: String,
    /// Content type as sent by the client, if any
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    #[must_use]
    pub fn new(filename: String, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            content_type,
            bytes,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The client-declared content type, or a guess from the file extension
    #[must_use]
    pub fn content_type_or_guess(&self) -> String {
        if let Some(ct) = &self.content_type {
            if !ct.is_empty() {
                return ct.clone();
            }
        }
        guess_content_type(&self.filename)
    }
}

/// Guess a content type from a filename extension
fn guess_content_type(filename: &str) -> String {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "jpeg" | "jpg" => "image/jpeg".to_string(),
        "png" => "image/png".to_string(),
        "webp" => "image/webp".to_string(),
        "bmp" => "image/bmp".to_string(),
        "gif" => "image/gif".to_string(),
        "svg" => "image/svg+xml".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}

/// Sanitize a path component to prevent path traversal
pub(crate) fn sanitize_path_component(component: &str) -> String {
    component
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect()
}

/// Reduce a client filename to a safe single path component, keeping the
/// extension readable
pub(crate) fn sanitize_filename(filename: &str) -> String {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect();

    let trimmed = sanitized.trim_start_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collision-resistant storage filename: `<unix-millis>-<sanitized-name>`
pub(crate) fn storage_filename(now_millis: i64, original: &str) -> String {
    format!("{}-{}", now_millis, sanitize_filename(original))
}
