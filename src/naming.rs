use std::path::Path;

pub static FALLBACK_CONTENT_TYPE: &str = "text/plain";

/// File name split at its last dot. The extension keeps the dot; a name
/// with no dot has no extension, and a dotfile is all extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName {
    pub base_name: String,
    pub extension: String,
}

pub fn split_file_name(path: &Path) -> SplitName {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.rfind('.') {
        Some(idx) => SplitName {
            base_name: file_name[..idx].to_string(),
            extension: file_name[idx..].to_string(),
        },
        None => SplitName {
            base_name: file_name,
            extension: String::new(),
        },
    }
}

pub fn content_type_for(extension: &str) -> String {
    let ext = extension.trim_start_matches('.');
    if ext.is_empty() {
        return FALLBACK_CONTENT_TYPE.to_string();
    }
    mime_guess::from_ext(ext)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string()
}

pub fn object_name(base_name: &str, fingerprint: &str, extension: &str) -> String {
    format!("{}-{}{}", base_name, fingerprint, extension)
}

pub fn public_url(end_point: &str, bucket: &str, object_name: &str) -> String {
    format!("https://{}/{}/{}", end_point, bucket, object_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_name() {
        let split = split_file_name(Path::new("dir/photo.png"));
        assert_eq!(split.base_name, "photo");
        assert_eq!(split.extension, ".png");
    }

    #[test]
    fn only_last_dot_counts() {
        let split = split_file_name(Path::new("backup.tar.gz"));
        assert_eq!(split.base_name, "backup.tar");
        assert_eq!(split.extension, ".gz");
    }

    #[test]
    fn no_extension() {
        let split = split_file_name(Path::new("/tmp/README"));
        assert_eq!(split.base_name, "README");
        assert_eq!(split.extension, "");
    }

    #[test]
    fn dotfile_is_all_extension() {
        let split = split_file_name(Path::new("home/.bashrc"));
        assert_eq!(split.base_name, "");
        assert_eq!(split.extension, ".bashrc");
        assert_eq!(
            object_name(&split.base_name, "FP", &split.extension),
            "-FP.bashrc"
        );
    }

    #[test]
    fn trailing_dot_is_empty_extension_with_dot() {
        let split = split_file_name(Path::new("notes."));
        assert_eq!(split.base_name, "notes");
        assert_eq!(split.extension, ".");
    }

    #[test]
    fn known_extension_resolves() {
        assert_eq!(content_type_for(".png"), "image/png");
        assert_eq!(content_type_for(".html"), "text/html");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(content_type_for(".unknownext"), "text/plain");
        assert_eq!(content_type_for(""), "text/plain");
    }

    #[test]
    fn derives_object_name() {
        assert_eq!(object_name("photo", "Xyz123", ".png"), "photo-Xyz123.png");
        assert_eq!(object_name("README", "Xyz123", ""), "README-Xyz123");
    }

    #[test]
    fn formats_public_url() {
        assert_eq!(
            public_url("s3.example.com:9000", "assets", "photo-Xyz123.png"),
            "https://s3.example.com:9000/assets/photo-Xyz123.png"
        );
    }
}
