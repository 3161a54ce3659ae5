//! End-to-end tests for the advisor pipeline
//!
//! Runs the full classify → resolve → fetch → render flow against a fixture
//! catalog with the template-only chain, so no generator backend is needed.

use std::sync::Arc;

use phonesage::advisor::PhoneAdvisor;
use phonesage::catalog::{InMemoryStore, PhoneRecord};
use phonesage::generation::GenerationChain;
use phonesage::query::{classify, resolve_names, Focus, Intent};

fn phone(
    name: &str,
    battery: &str,
    camera: &str,
    ram: &str,
    price: &str,
    display: &str,
) -> PhoneRecord {
    PhoneRecord {
        model_name: name.to_string(),
        battery: battery.to_string(),
        camera: camera.to_string(),
        ram: ram.to_string(),
        price: price.to_string(),
        display: display.to_string(),
        ..Default::default()
    }
}

fn fixture_catalog() -> Vec<PhoneRecord> {
    vec![
        phone(
            "Samsung Galaxy S24 Ultra",
            "5000 mAh",
            "200 MP main",
            "12GB",
            "$1299",
            "6.8\" Dynamic AMOLED 2X, 120Hz",
        ),
        phone(
            "Samsung Galaxy S24",
            "4000 mAh",
            "50 MP main",
            "8GB",
            "$799",
            "6.2\" Dynamic AMOLED 2X, 120Hz",
        ),
        phone(
            "Samsung Galaxy S23 Ultra",
            "5000 mAh",
            "200 MP main",
            "12GB",
            "$1199",
            "6.8\" Dynamic AMOLED 2X, 120Hz",
        ),
        phone(
            "Samsung Galaxy S22 Ultra",
            "5000 mAh",
            "108 MP main",
            "12GB",
            "$999",
            "6.8\" Dynamic AMOLED 2X, 120Hz",
        ),
        phone(
            "Samsung Galaxy A54",
            "5000 mAh",
            "50 MP main",
            "8GB",
            "$449",
            "6.4\" Super AMOLED, 120Hz",
        ),
    ]
}

fn advisor() -> PhoneAdvisor {
    let store = InMemoryStore::from_records(fixture_catalog());
    PhoneAdvisor::new(Arc::new(store), GenerationChain::template_only())
}

#[test]
fn test_comparison_round_trip_classification() {
    let question = "compare Galaxy S23 Ultra and S22 Ultra for photography";

    let (intent, criteria) = classify(question);
    assert_eq!(intent, Intent::Comparison);
    assert_eq!(criteria.focus, Some(Focus::Camera));

    let names: Vec<String> = fixture_catalog()
        .into_iter()
        .map(|r| r.model_name)
        .collect();
    let resolved = resolve_names(question, &names);
    assert_eq!(
        resolved,
        vec!["Samsung Galaxy S23 Ultra", "Samsung Galaxy S22 Ultra"]
    );
}

#[tokio::test]
async fn test_comparison_answer_end_to_end() {
    let answer = advisor()
        .answer("compare Galaxy S23 Ultra and S22 Ultra for photography")
        .await;

    assert!(answer.contains("Comparing Samsung Galaxy S23 Ultra vs Samsung Galaxy S22 Ultra"));
    assert!(answer.contains("200MP vs 108MP"));
    assert!(answer.contains("recommended for photography"));
}

#[tokio::test]
async fn test_recommendation_with_budget_and_focus() {
    let advisor = advisor();
    let result = advisor.retrieve("which Samsung phone has the best battery under $1000");

    assert_eq!(result.intent, Intent::Recommendation);
    assert_eq!(result.criteria.focus, Some(Focus::Battery));
    assert_eq!(result.criteria.price_max, Some(1000.0));
    assert!(result.top_picks.len() <= 3);

    let answer = advisor
        .answer("which Samsung phone has the best battery under $1000")
        .await;
    assert!(answer.starts_with("Best Samsung phones for battery life:"));
    assert!(answer.contains("Top recommendation: Samsung Galaxy S22 Ultra"));
}

#[tokio::test]
async fn test_specs_answer() {
    let answer = advisor().answer("what are the specs of the Galaxy A54?").await;
    assert!(answer.starts_with("Samsung Galaxy A54 specifications:"));
    assert!(answer.contains("• Battery: 5000 mAh"));
}

#[tokio::test]
async fn test_suffix_never_leaks_into_base_model_answer() {
    // Asking about the base S24 must not answer with the Ultra
    let answer = advisor().answer("tell me about the Galaxy S24").await;
    assert!(answer.starts_with("Samsung Galaxy S24 specifications:"));
    assert!(!answer.contains("Ultra specifications"));
}

#[tokio::test]
async fn test_price_fallback_without_entities() {
    let result = advisor().retrieve("anything good under $500?");
    let names: Vec<&str> = result
        .records
        .iter()
        .map(|r| r.model_name.as_str())
        .collect();
    assert_eq!(names, vec!["Samsung Galaxy A54"]);
}

#[tokio::test]
async fn test_unrecognized_query_gets_fixed_message() {
    let answer = advisor().answer("hello there").await;
    assert!(answer.contains("couldn't find any Samsung phones"));
}

#[tokio::test]
async fn test_empty_catalog_never_panics() {
    let store = InMemoryStore::from_records(Vec::new());
    let advisor = PhoneAdvisor::new(Arc::new(store), GenerationChain::template_only());

    for question in [
        "compare Galaxy S24 and S23",
        "which phone is best",
        "specs of the A54",
        "hello",
    ] {
        let answer = advisor.answer(question).await;
        assert!(answer.contains("couldn't find any Samsung phones"));
    }
}

#[test]
fn test_shipped_seed_catalog_loads_and_resolves() {
    let store = InMemoryStore::load(std::path::Path::new("data/catalog.toml")).unwrap();
    assert!(store.len() >= 10);

    let names = phonesage::catalog::PhoneStore::list_model_names(&store);
    let resolved = resolve_names("is the Galaxy Z Fold 6 worth it", &names);
    assert_eq!(resolved, vec!["Samsung Galaxy Z Fold 6"]);
}
