//! Content-type resolution for path and URL based uploads.
//!
//! `put_path`/`put_url` derive the `Content-Type` header from the source's
//! file extension. Callers who need anything smarter pass the mime type
//! explicitly through `put_bytes`.

/// Resolve a content type from a file path or URL path.
///
/// The lookup is case-insensitive on the extension. Unknown or missing
/// extensions resolve to `application/octet-stream`.
pub fn for_path(path: &str) -> &'static str {
    let extension = path
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "md" => "text/markdown",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "yaml" | "yml" => "application/yaml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "wasm" => "application/wasm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_extensions() {
        assert_eq!(for_path("/tmp/x.png"), "image/png");
        assert_eq!(for_path("photos/holiday.JPEG"), "image/jpeg");
        assert_eq!(for_path("notes.txt"), "text/plain");
        assert_eq!(for_path("data.json"), "application/json");
    }

    #[test]
    fn test_extension_from_url_path() {
        assert_eq!(for_path("/assets/site/style.css"), "text/css");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        assert_eq!(for_path("file.xyz123"), "application/octet-stream");
    }

    #[test]
    fn test_no_extension_is_octet_stream() {
        assert_eq!(for_path("Makefile"), "application/octet-stream");
        assert_eq!(for_path(""), "application/octet-stream");
    }
}
