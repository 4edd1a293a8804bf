use std::path::Path;

use anyhow::Context;

use business::domain::product::value_objects::{ImageReference, ImageUpload};

/// Content type guessed from a file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

pub fn is_remote(source: &str) -> bool {
    let source = source.to_ascii_lowercase();
    source.starts_with("http://") || source.starts_with("https://")
}

/// Turns `image <path-or-url>` input into a form image. URLs are kept as
/// they are; anything else is read from disk.
pub async fn resolve(source: &str) -> anyhow::Result<ImageReference> {
    if is_remote(source) {
        return Ok(ImageReference::Url(source.to_string()));
    }

    let path = Path::new(source);
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Cannot read image file {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    Ok(ImageReference::Upload(ImageUpload {
        file_name,
        content_type: content_type_for(path).to_string(),
        bytes,
    }))
}
