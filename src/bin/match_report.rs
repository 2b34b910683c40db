// Coverage report: how much of the menu has a matchable photo.
// Run with: cargo run --bin match_report -- items.json public/menu-images
use crossterm::style::Stylize;
use matcher_core::core::engine::item_key;
use matcher_core::persistence;
use matcher_core::MatcherEngine;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let show_picks = args.iter().any(|a| a == "--picks");
    let positional: Vec<&String> = args.iter().filter(|a| *a != "--picks").collect();

    if positional.len() < 2 {
        eprintln!("Usage: match_report <items.json> <image-dir | files.json> [--picks]");
        process::exit(1);
    }

    let items = match persistence::load_menu_items(Path::new(positional[0])) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Could not load menu items: {}", e);
            process::exit(1);
        }
    };

    let files_path = Path::new(positional[1]);
    let files = if files_path.is_dir() {
        persistence::list_image_dir(files_path)
    } else {
        persistence::load_file_list(files_path).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })
    };
    let files = match files {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Could not read image listing: {}", e);
            process::exit(1);
        }
    };

    let engine = MatcherEngine::new(&files);
    let manifest = engine.build_manifest(&items);

    let matched = items.iter().filter(|i| manifest.contains_key(&i.id)).count();
    let unmatched = items.len() - matched;
    let rate = if items.is_empty() {
        0.0
    } else {
        matched as f64 / items.len() as f64 * 100.0
    };

    println!();
    println!("{}", "--- MENU IMAGE COVERAGE ---".bold());
    println!("Total menu items: {}", items.len());
    println!("Matched: {}", format!("{}", matched).green());
    println!("Still unmatched: {}", format!("{}", unmatched).red());
    println!("Match rate: {:.1}%", rate);

    if unmatched > 0 {
        println!("\nStill unmatched items:");
        for item in &items {
            if !manifest.contains_key(&item.id) {
                println!(
                    "  {} {}  (norm: {})",
                    "x".red(),
                    item.name,
                    item_key(&item.name)
                );
            }
        }
    }

    // The canonical pick is what an upload pass would write back to each
    // catalog record as its single image URL.
    if show_picks {
        println!("\nCanonical image picks:");
        for item in &items {
            match engine.first_match(&item.name) {
                Some(entry) => {
                    println!("  {} {} -> {}", "+".green(), item.name, entry.file)
                }
                None => println!("  {} {} -> (none)", "-".dark_grey(), item.name),
            }
        }
    }
}
