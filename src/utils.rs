use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("filename pattern should be valid"));

const MAX_STEM_LEN: usize = 100;
const STEM_HASH_LEN: usize = 12;

/// Convert a page URL to a file stem that is safe on any filesystem.
///
/// The scheme is dropped, runs of anything outside `[A-Za-z0-9._-]` become a
/// single `_`, and the result is capped at 100 bytes. The same URL always
/// maps to the same stem.
pub fn sanitize_filename(url: &str) -> String {
    let without_scheme = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);

    let replaced = UNSAFE_FILENAME_CHARS.replace_all(without_scheme, "_");
    let mut name = replaced.trim_matches(['_', '.']).to_string();

    // Only ASCII is left, so any byte index is a char boundary
    if name.len() > MAX_STEM_LEN {
        name.truncate(MAX_STEM_LEN);
        name = name.trim_end_matches(['_', '.']).to_string();
    }

    if name.is_empty() {
        "page".to_string()
    } else {
        name
    }
}

/// File stem for everything saved for a page: the readable sanitized URL
/// plus the first 12 hex digits of the BLAKE3 hash of the full URL, so two
/// URLs that sanitize alike still get distinct files
pub fn file_stem(url: &str) -> String {
    let hash = blake3::hash(url.as_bytes()).to_hex();
    format!("{}-{}", sanitize_filename(url), &hash.as_str()[..STEM_HASH_LEN])
}

/// Resolve a possibly relative reference against a base URL
pub fn resolve_url(base: &str, reference: &str) -> Result<Url, url::ParseError> {
    Url::parse(base)?.join(reference)
}

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "svg", "avif", "bmp", "ico", "tif", "tiff",
];

/// Pick the file extension for a downloaded image: the URL's own extension
/// when it is a known image type, else the response content type, else `jpg`
pub fn image_extension(image_url: &Url, content_type: Option<&str>) -> String {
    let from_path = image_url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .and_then(|last| last.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));

    if let Some(ext) = from_path {
        return ext;
    }

    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
        .unwrap_or_default();

    let ext = match mime.as_str() {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        "image/avif" => "avif",
        "image/bmp" => "bmp",
        "image/x-icon" | "image/vnd.microsoft.icon" => "ico",
        "image/tiff" => "tiff",
        _ => "jpg",
    };
    ext.to_string()
}
