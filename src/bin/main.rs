use matcher_core::persistence;
use matcher_core::MatcherEngine;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_MANIFEST_PATH: &str = "gallery-manifest.json";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut positional: Vec<&str> = Vec::new();
    let mut cache_path: Option<PathBuf> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--cache" => {
                i += 1;
                match args.get(i) {
                    Some(p) => cache_path = Some(PathBuf::from(p)),
                    None => {
                        eprintln!("--cache needs a path");
                        process::exit(1);
                    }
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }

    if positional.len() < 2 {
        eprintln!(
            "Usage: manifest_builder <items.json> <image-dir | files.json> [out.json] [--cache <index.bin>]"
        );
        process::exit(1);
    }

    let items_path = Path::new(positional[0]);
    let files_path = Path::new(positional[1]);
    let out_path = positional
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH));

    let items = match persistence::load_menu_items(items_path) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Could not load menu items from {}: {}", items_path.display(), e);
            process::exit(1);
        }
    };

    let engine = build_engine(files_path, cache_path.as_deref());

    let manifest = engine.build_manifest(&items);
    if let Err(e) = persistence::save_manifest(&manifest, &out_path) {
        eprintln!("Could not write manifest: {}", e);
        process::exit(1);
    }

    println!(
        "Indexed {} image files, matched {} of {} menu items.",
        engine.file_index().len(),
        manifest.len(),
        items.len()
    );
    println!("Manifest written to {}", out_path.display());
}

// A cached index is used when present; otherwise the listing is read and
// indexed fresh, and the cache (if requested) is written for next time.
fn build_engine(files_path: &Path, cache_path: Option<&Path>) -> MatcherEngine {
    if let Some(cache) = cache_path {
        if let Ok(index) = persistence::load_index(cache) {
            return MatcherEngine::from_index(index);
        }
    }

    let files = match load_listing(files_path) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Could not read image listing {}: {}", files_path.display(), e);
            process::exit(1);
        }
    };

    let engine = MatcherEngine::new(&files);
    if let Some(cache) = cache_path {
        if let Err(e) = persistence::save_index(engine.file_index(), cache) {
            eprintln!("Warning: could not write index cache: {}", e);
        }
    }
    engine
}

fn load_listing(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if path.is_dir() {
        Ok(persistence::list_image_dir(path)?)
    } else {
        persistence::load_file_list(path)
    }
}
