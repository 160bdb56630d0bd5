//! End-to-end demo: load an embeddings file, build a similarity graph over a
//! human-values vocabulary, and print the summary plus the JSON payload a
//! renderer would consume.
//!
//! Usage: `cargo run --example values_graph -- path/to/embeddings.txt [threshold]`

use std::env;
use std::process;
use std::sync::Arc;

use wordspace::core::EmbeddingStore;
use wordspace::service::EmbeddingService;
use wordspace::DEFAULT_THRESHOLD;

const VALUES: &[&str] = &[
    "intelligence",
    "spirituality",
    "stability",
    "success",
    "temperance",
    "thoughtfulness",
    "tolerance",
    "transparency",
    "trust",
    "truth",
    "understanding",
    "unity",
    "honesty",
    "honor",
    "hope",
    "humor",
    "independence",
    "influence",
    "intimacy",
    "introspection",
    "intuition",
    "invention",
    "reliability",
    "respect",
    "love",
    "loyalty",
    "responsibility",
    "joy",
    "learning",
    "listening",
    "mercy",
    "moderation",
    "nonviolence",
    "openness",
    "optimism",
    "passion",
    "patience",
    "peace",
    "justice",
    "kindness",
    "knowledge",
    "leadership",
    "veracity",
    "vitality",
    "warmth",
    "wealth",
    "wellness",
    "willingness",
    "wit",
    "wonder",
    "zeal",
];

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: values_graph <embeddings-file> [threshold]");
        process::exit(2);
    };
    let threshold: f64 = args
        .next()
        .map(|t| t.parse().expect("threshold must be a number"))
        .unwrap_or(DEFAULT_THRESHOLD);

    let store = match EmbeddingStore::from_path(&path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error loading embeddings: {}", err);
            process::exit(1);
        }
    };

    let service = EmbeddingService::new(Arc::new(store));
    let vocabulary: Vec<String> = VALUES.iter().map(|v| v.to_string()).collect();
    let graph = service.similarity_graph(vocabulary, threshold);

    println!("{}", graph);
    println!("{}", serde_json::to_string_pretty(&graph).unwrap());
}
