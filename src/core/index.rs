// --- File: src/core/index.rs
use crate::core::normalize::{clean_basename, file_stem, normalize};
use crate::core::types::FileEntry;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

/// True when the filename carries one of the servable image extensions,
/// case-insensitive.
pub fn is_image_file(file: &str) -> bool {
    match file.rfind('.') {
        Some(i) => {
            let ext = file[i + 1..].to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

impl FileEntry {
    /// Pre-processes one filename into its comparison keys. Stripping the
    /// trailing digit run may leave `norm_stripped` empty (an all-digit
    /// basename); that entry simply never matches anything.
    pub fn from_filename(file: &str) -> Self {
        let norm = normalize(&clean_basename(file_stem(file)));
        let norm_stripped = norm
            .trim_end_matches(|c: char| c.is_ascii_digit())
            .to_string();
        Self {
            file: file.to_string(),
            norm,
            norm_stripped,
        }
    }
}

/// Builds the index the matcher queries: one `FileEntry` per image file,
/// non-image files dropped. Runs once per manifest build.
pub fn build_file_index(files: &[String]) -> Vec<FileEntry> {
    files
        .iter()
        .filter(|f| is_image_file(f))
        .map(|f| FileEntry::from_filename(f))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_extension_case_insensitively() {
        assert!(is_image_file("roti.JPG"));
        assert!(is_image_file("dal.webp"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("noext"));
    }

    #[test]
    fn entry_precomputes_both_keys() {
        let entry = FileEntry::from_filename("Chana Masala 2.jpg");
        assert_eq!(entry.norm, "chanamasala");
        assert_eq!(entry.norm_stripped, "chanamasala");

        let entry = FileEntry::from_filename("chanamasala2.jpg");
        assert_eq!(entry.norm, "chanamasala2");
        assert_eq!(entry.norm_stripped, "chanamasala");
    }

    #[test]
    fn stripped_is_always_a_prefix_of_norm() {
        for f in ["roti2.jpg", "123.png", "dal fry (3).jpeg", "a.b.webp"] {
            let entry = FileEntry::from_filename(f);
            assert!(entry.norm.starts_with(&entry.norm_stripped));
        }
    }

    #[test]
    fn all_digit_basename_strips_to_empty() {
        let entry = FileEntry::from_filename("123.png");
        assert_eq!(entry.norm, "123");
        assert_eq!(entry.norm_stripped, "");
    }

    #[test]
    fn index_drops_non_images() {
        let files = vec![
            "roti.jpg".to_string(),
            "README.md".to_string(),
            "dal.png".to_string(),
        ];
        let index = build_file_index(&files);
        assert_eq!(index.len(), 2);
    }
}
