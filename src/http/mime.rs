//! MIME type detection module
//!
//! Returns the Content-Type registered for a file extension, if any.

use std::path::Path;

/// Look up the MIME type for a path by its extension
///
/// Unknown or missing extensions yield `None`; the response layer then falls
/// back to `text/plain`.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for(Path::new("index.html")), Some("text/html"));
        assert_eq!(content_type_for(Path::new("style.css")), Some("text/css"));
        assert_eq!(content_type_for(Path::new("data.json")), Some("application/json"));
        assert_eq!(content_type_for(Path::new("/srv/img/logo.png")), Some("image/png"));
        assert_eq!(content_type_for(Path::new("clip.mp4")), Some("video/mp4"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Path::new("blob.zzzunknown")), None);
        assert_eq!(content_type_for(Path::new("Makefile")), None);
    }
}
