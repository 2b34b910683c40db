// File: src/persistence.rs
use crate::core::types::{FileEntry, GalleryManifest, MenuItemRef};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, ErrorKind};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the manifest as pretty JSON. The write goes to a temp file in
/// the target directory first and is persisted atomically, so a consumer
/// never observes a half-written manifest.
pub fn save_manifest(manifest: &GalleryManifest, path: &Path) -> Result<(), Error> {
    write_json(manifest, path)
}

/// Writes a plain filename list as JSON, the static-listing format used
/// where the image directory cannot be read at serve time.
pub fn save_file_list(files: &[String], path: &Path) -> Result<(), Error> {
    write_json(&files, path)
}

fn write_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    serde_json::to_writer_pretty(writer, value)
        .map_err(|e| Error::new(ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

/// Loads a catalog export: a JSON array of `{id, name}` records.
pub fn load_menu_items(path: &Path) -> Result<Vec<MenuItemRef>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Loads a static filename list (JSON array of strings).
pub fn load_file_list(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Caches a prebuilt file index in compact binary form. The index is a
/// pure function of the directory listing, so the cache can be rebuilt
/// at any time; it only saves the preprocessing pass.
pub fn save_index(index: &[FileEntry], path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &index)
        .map_err(|e| Error::new(ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_index(path: &Path) -> Result<Vec<FileEntry>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

/// Lists the plain files of an image directory, sorted by name so runs
/// are reproducible across filesystems.
pub fn list_image_dir(dir: &Path) -> Result<Vec<String>, Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            if let Ok(name) = entry.file_name().into_string() {
                files.push(name);
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");

        let mut manifest = GalleryManifest::new();
        manifest.insert("1".to_string(), vec!["/menu-images/roti.jpg".to_string()]);
        save_manifest(&manifest, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let loaded: GalleryManifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn index_cache_round_trips_through_bincode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache").join("file-index.bin");

        let index = vec![FileEntry {
            file: "chanamasala2.jpg".to_string(),
            norm: "chanamasala2".to_string(),
            norm_stripped: "chanamasala".to_string(),
        }];
        save_index(&index, &path).unwrap();

        let loaded = load_index(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].file, "chanamasala2.jpg");
        assert_eq!(loaded[0].norm_stripped, "chanamasala");
    }

    #[test]
    fn menu_items_load_from_catalog_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"[{"id":"1","name":"Roti (4 pcs)"}]"#).unwrap();

        let items = load_menu_items(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Roti (4 pcs)");
    }

    #[test]
    fn image_dir_listing_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jpg"), b"x").unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();

        let files = list_image_dir(dir.path()).unwrap();
        assert_eq!(files, vec!["a.jpg", "b.jpg"]);
    }
}
