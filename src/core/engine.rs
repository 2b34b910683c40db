use crate::core::index::build_file_index;
use crate::core::normalize::{normalize, strip_parenthetical};
use crate::core::types::{FileEntry, GalleryManifest, MenuItemRef};
use crate::fuzzy::aliases::{get_aliases, is_ignorable_suffix, override_target};
use std::collections::HashSet;

/// Where matched files are served from, relative to the site root.
const LOCAL_IMAGE_DIR: &str = "/menu-images";

/// The matcher is composed of the prebuilt file index and the static
/// alias tables; it holds no other state and never mutates its inputs.
pub struct MatcherEngine {
    file_index: Vec<FileEntry>,
}

impl MatcherEngine {
    /// Indexes a directory listing. Non-image files are dropped here, so
    /// every entry the cascade sees is a servable image.
    pub fn new(files: &[String]) -> Self {
        Self {
            file_index: build_file_index(files),
        }
    }

    /// Rebuilds the engine from a previously cached index.
    pub fn from_index(file_index: Vec<FileEntry>) -> Self {
        Self { file_index }
    }

    pub fn file_index(&self) -> &[FileEntry] {
        &self.file_index
    }

    /// Builds the gallery manifest for a catalog. An item may match several
    /// photos of the same dish; the full sorted list is kept. Items with no
    /// match are left out of the map entirely.
    pub fn build_manifest(&self, items: &[MenuItemRef]) -> GalleryManifest {
        let mut manifest = GalleryManifest::new();

        for item in items {
            let mut paths: Vec<String> = self
                .matches_for(&item.name)
                .into_iter()
                .map(|entry| format!("{}/{}", LOCAL_IMAGE_DIR, entry.file))
                .collect();

            if !paths.is_empty() {
                paths.sort();
                paths.dedup();
                manifest.insert(item.id.clone(), paths);
            }
        }

        manifest
    }

    /// All indexed files matching one item name, in index order.
    pub fn matches_for(&self, name: &str) -> Vec<&FileEntry> {
        let item_norm = item_key(name);
        let item_aliases = get_aliases(&item_norm);
        self.file_index
            .iter()
            .filter(|entry| is_match(&item_norm, &item_aliases, entry))
            .collect()
    }

    /// First indexed file matching one item name. This is the pick used
    /// when a single canonical image per item is wanted, e.g. to derive
    /// the URL written back to the catalog record.
    pub fn first_match(&self, name: &str) -> Option<&FileEntry> {
        let item_norm = item_key(name);
        let item_aliases = get_aliases(&item_norm);
        self.file_index
            .iter()
            .find(|entry| is_match(&item_norm, &item_aliases, entry))
    }
}

/// Comparison key for an item display name: parenthetical qualifiers
/// dropped ("Roti (4 pcs)" -> "Roti"), then normalized.
pub fn item_key(name: &str) -> String {
    normalize(strip_parenthetical(name).trim())
}

/// The layered decision procedure. Layers are tried cheapest-first and
/// short-circuit on the first hit; falling all the way through is the
/// normal "no image for this item" outcome, not an error.
fn is_match(item_norm: &str, item_aliases: &HashSet<String>, entry: &FileEntry) -> bool {
    // Reject cross-protein pairs outright; every later rule is lenient
    // enough that a shared stem could otherwise bridge them.
    if cross_protein_conflict(item_norm, entry) {
        return false;
    }

    // 1. Alias cross-product: every item variant against every file variant.
    let file_aliases = get_aliases(&entry.norm_stripped);
    for item_alias in item_aliases {
        for file_alias in &file_aliases {
            if file_alias == item_alias {
                return true;
            }
            if let Some(suffix) = file_alias.strip_prefix(item_alias.as_str()) {
                // A pure digit tail is another photo of the same dish.
                if all_digits(suffix) || is_ignorable_suffix(suffix) {
                    return true;
                }
            }
            if let Some(suffix) = item_alias.strip_prefix(file_alias.as_str()) {
                if is_ignorable_suffix(suffix) || all_digits(suffix) {
                    return true;
                }
            }
        }
    }

    // 2. Raw fallback: the un-expanded normalized name against both keys.
    if entry.norm == item_norm || entry.norm_stripped == item_norm {
        return true;
    }
    if let Some(suffix) = entry.norm.strip_prefix(item_norm) {
        if !suffix.is_empty() && all_digits(suffix) {
            return true;
        }
    }

    // 3. Hand-curated override, for pairs no generic rule can bridge.
    if let Some(target) = override_target(item_norm) {
        if entry.norm_stripped == target || entry.norm == target {
            return true;
        }
        if let Some(suffix) = entry.norm_stripped.strip_prefix(target) {
            if all_digits(suffix) {
                return true;
            }
        }
        if let Some(suffix) = entry.norm.strip_prefix(target) {
            if all_digits(suffix) {
                return true;
            }
        }
    }

    false
}

// True for the empty string, matching the optional-digit-run rules.
fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// A paneer item must never pick up a chicken photo and vice versa, no
// matter how similar the rest of the names are.
fn cross_protein_conflict(item_norm: &str, entry: &FileEntry) -> bool {
    let item_paneer = item_norm.contains("paneer");
    let item_chicken = item_norm.contains("chicken");
    let file_paneer = entry.norm.contains("paneer");
    let file_chicken = entry.norm.contains("chicken");
    (item_paneer && file_chicken) || (item_chicken && file_paneer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(files: &[&str]) -> MatcherEngine {
        let files: Vec<String> = files.iter().map(|s| s.to_string()).collect();
        MatcherEngine::new(&files)
    }

    fn item(id: &str, name: &str) -> MenuItemRef {
        MenuItemRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn exact_normalized_name_always_matches() {
        let engine = engine(&["Paneer Butter Masala.jpg"]);
        assert_eq!(engine.matches_for("Paneer Butter Masala").len(), 1);
    }

    #[test]
    fn numbered_duplicate_photos_match() {
        let engine = engine(&["chanamasala2.jpg"]);
        assert_eq!(engine.matches_for("Chana Masala").len(), 1);
    }

    #[test]
    fn ignorable_suffix_bridges_item_to_bare_file() {
        // "fry" carries no signal and "sambhar" is long enough to stand alone
        let engine = engine(&["sambhar.jpg"]);
        assert_eq!(engine.matches_for("Sambhar Fry").len(), 1);
    }

    #[test]
    fn ignorable_suffix_bridges_file_to_bare_item() {
        let engine = engine(&["sambharfry.jpg"]);
        assert_eq!(engine.matches_for("Sambhar").len(), 1);
    }

    #[test]
    fn spelling_alias_bridges_transliteration_drift() {
        let engine = engine(&["hydrabadi baigan.jpg"]);
        assert_eq!(engine.matches_for("Hyderabadi Baingan").len(), 1);
    }

    #[test]
    fn manual_override_alone_bridges_reordered_compounds() {
        // No alias or prefix rule relates "chickenbhuna" to "bhunachicken";
        // only the curated table does.
        let engine = engine(&["bhunachicken.jpg"]);
        assert_eq!(engine.matches_for("Chicken Bhuna").len(), 1);
    }

    #[test]
    fn cross_protein_names_never_match() {
        let chicken_photos = engine(&["chickenmakhni.jpg"]);
        assert!(chicken_photos.matches_for("Paneer Makhni").is_empty());

        let paneer_photos = engine(&["butterpaneer.jpg"]);
        assert!(paneer_photos.matches_for("Butter Chicken").is_empty());
    }

    #[test]
    fn manifest_lists_are_sorted_and_deduplicated() {
        let engine = engine(&["roti2.jpg", "roti.jpg"]);
        let manifest = engine.build_manifest(&[item("1", "Roti")]);
        assert_eq!(
            manifest["1"],
            vec!["/menu-images/roti.jpg", "/menu-images/roti2.jpg"]
        );
    }

    #[test]
    fn unmatched_items_are_absent_not_empty() {
        let engine = engine(&["roti.jpg"]);
        let manifest = engine.build_manifest(&[item("1", "Zucchini Boats")]);
        assert!(!manifest.contains_key("1"));
    }

    #[test]
    fn first_match_returns_the_first_index_hit() {
        let engine = engine(&["roti.jpg", "roti2.jpg"]);
        let picked = engine.first_match("Roti (4 pcs)").unwrap();
        assert_eq!(picked.file, "roti.jpg");
    }

    #[test]
    fn empty_item_name_flows_through_to_no_match() {
        let engine = engine(&["roti.jpg"]);
        assert!(engine.matches_for("").is_empty());
    }

    #[test]
    fn end_to_end_gallery_build() {
        let engine = engine(&[
            "paneerbuttermasala.jpg",
            "roti.jpg",
            "roti2.jpg",
            "unrelated.jpg",
        ]);
        let items = [
            item("1", "Paneer Butter Masala"),
            item("2", "Roti (4 pcs)"),
        ];
        let manifest = engine.build_manifest(&items);

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest["1"], vec!["/menu-images/paneerbuttermasala.jpg"]);
        assert_eq!(
            manifest["2"],
            vec!["/menu-images/roti.jpg", "/menu-images/roti2.jpg"]
        );
    }
}
