use std::sync::Arc;

use crate::core::EmbeddingStore;
use crate::service::{EmbeddingService, DEFAULT_SIMILAR_WORDS};
use crate::tests::test_data::tiny_store;
use crate::tests::TEST_THRESHOLD;

fn service() -> EmbeddingService {
    EmbeddingService::new(Arc::new(tiny_store()))
}

#[test]
fn test_embeddings_for_omits_missing_words() {
    let source = "cat 1.0 0.0\ndog 0.9 0.1\n";
    let store = EmbeddingStore::from_reader(source.as_bytes()).unwrap();
    let service = EmbeddingService::new(Arc::new(store));

    let found = service.embeddings_for(&["cat", "fish"]);
    assert_eq!(found.len(), 1);
    assert_eq!(found["cat"], vec![1.0, 0.0]);
    assert!(!found.contains_key("fish"));
}

#[test]
fn test_embeddings_for_keys_by_requested_spelling() {
    let found = service().embeddings_for(&["CAT", "Dog"]);
    assert_eq!(found.len(), 2);
    assert!(found.contains_key("CAT"));
    assert!(found.contains_key("Dog"));
}

#[test]
fn test_similar_words_returns_words_only() {
    let words = service().similar_words("cat", DEFAULT_SIMILAR_WORDS);
    assert_eq!(words, vec!["dog", "fish"]);
}

#[test]
fn test_similar_words_unknown_word_is_empty() {
    assert!(service().similar_words("unicorn", 3).is_empty());
}

#[test]
fn test_similarity_graph_end_to_end() {
    let vocabulary = vec!["cat".to_string(), "dog".to_string(), "fish".to_string()];
    let graph = service().similarity_graph(vocabulary, TEST_THRESHOLD);

    assert_eq!(graph.node_count(), 3);
    // cat--dog is the only pair above 0.5; fish is orthogonal to both.
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.group_count(), 2);
}

#[test]
fn test_service_shares_one_store() {
    let store = Arc::new(tiny_store());
    let service = EmbeddingService::new(Arc::clone(&store));
    assert_eq!(service.store().len(), store.len());
}
