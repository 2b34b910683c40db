// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One catalog entry whose display name has to be matched to an image.
/// Comes straight out of a menu export; never mutated by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub id: String,
    pub name: String,
}

/// A pre-processed image filename.
/// `norm` is the normalized basename with copy markers removed, and
/// `norm_stripped` is `norm` minus any trailing digit run, so a second
/// photo like "chanamasala2.jpg" folds onto the same stem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub file: String,
    pub norm: String,
    pub norm_stripped: String,
}

/// The final output: item id -> sorted list of local image paths.
/// An id absent from the map means no image matched that item.
pub type GalleryManifest = HashMap<String, Vec<String>>;
