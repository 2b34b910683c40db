// Minimal test harness for the match cascade
// Run with: cargo run --bin matcher_test
use matcher_core::MatcherEngine;

fn main() {
    let files: Vec<String> = [
        "paneerbuttermasala.jpg",
        "roti.jpg",
        "roti2.jpg",
        "bhunachicken.jpg",
        "hydrabadi baigan.jpg",
        "sambhar.jpg",
        "chanamasala2.jpg",
        "vegetablekorma.jpg",
        "unrelated.jpg",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let engine = MatcherEngine::new(&files);

    let test_cases = [
        "Paneer Butter Masala",
        "Roti (4 pcs)",
        "Chicken Bhuna",
        "Hyderabadi Baingan",
        "Sambhar Fry",
        "Chana Masala",
        "Veg Korma",
        "Mystery Dish",
    ];
    for name in test_cases.iter() {
        let matched: Vec<&str> = engine
            .matches_for(name)
            .into_iter()
            .map(|entry| entry.file.as_str())
            .collect();
        println!("{} => {:?}", name, matched);
    }
}
