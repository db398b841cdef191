//! Analysis and validation behavior at the public boundary

mod common;

use common::{sample_rich_text, FixedAnalyzer};
use docshift::validate::{validate, validate_rich_text};
use docshift::{
    catalog, AnalysisManager, Content, ContentAnalyzer, ErrorKind, MigrationManager,
};
use serde_json::json;
use std::sync::{Arc, Barrier};
use std::thread;

#[tokio::test]
async fn test_rich_text_link_extraction() {
    let manager = AnalysisManager::with_defaults();
    let analysis = manager
        .analyze(&catalog::RICH_TEXT_V1, &sample_rich_text())
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&analysis).unwrap(),
        json!({ "links": [{ "url": "http://x" }] })
    );
}

#[tokio::test]
async fn test_links_survive_conversion_to_v2() {
    let migrations = MigrationManager::with_defaults();
    let analyzers = AnalysisManager::with_defaults();

    let v2 = migrations
        .convert(sample_rich_text(), &catalog::RICH_TEXT_V1, &catalog::RICH_TEXT_V2)
        .await
        .unwrap();
    let analysis = analyzers.analyze(&catalog::RICH_TEXT_V2, &v2).await.unwrap();
    assert_eq!(analysis.urls(), vec!["http://x"]);
}

#[tokio::test]
async fn test_markdown_and_html_agree_on_links() {
    let migrations = MigrationManager::with_defaults();
    let analyzers = AnalysisManager::with_defaults();
    let markdown = Content::from("Read [this](https://a.example) then [that](https://b.example).");

    let html = migrations
        .convert(markdown.clone(), &catalog::MARKDOWN, &catalog::HTML)
        .await
        .unwrap();

    let from_markdown = analyzers.analyze(&catalog::MARKDOWN, &markdown).await.unwrap();
    let from_html = analyzers.analyze(&catalog::HTML, &html).await.unwrap();
    assert_eq!(from_markdown, from_html);
    assert_eq!(from_html.urls(), vec!["https://a.example", "https://b.example"]);
}

#[tokio::test]
async fn test_unanalyzed_format_is_not_found() {
    let manager = AnalysisManager::with_defaults();
    let err = manager
        .analyze(&catalog::PLAIN_TEXT, &Content::from("http://x"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_heading_level_boundary() {
    let heading = |level: u64| {
        Content::Json(json!([
            { "type": "heading", "level": level, "children": [{ "text": "t" }] }
        ]))
    };

    assert!(validate_rich_text(&heading(6)).is_ok());
    assert!(validate_rich_text(&heading(1)).is_ok());

    let err = validate_rich_text(&heading(7)).unwrap_err();
    assert_eq!(err.path, "$[0].level");
    assert!(validate_rich_text(&heading(0)).is_err());
}

#[test]
fn test_paragraph_rejects_nested_element() {
    let content = Content::Json(json!([
        {
            "type": "paragraph",
            "children": [
                { "text": "ok" },
                { "type": "table", "children": [] }
            ]
        }
    ]));

    let err = validate(&content, &catalog::RICH_TEXT_V1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.as_validation().unwrap().path, "$[0].children[1]");
}

#[test]
fn test_concurrent_registration_admits_one() {
    const THREADS: usize = 8;
    let manager = AnalysisManager::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let manager = &manager;
                let barrier = &barrier;
                scope.spawn(move || {
                    let analyzer = Arc::new(FixedAnalyzer::new(format!("a{}", i), &catalog::MARKDOWN));
                    barrier.wait();
                    manager.register(analyzer, false)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }
    assert_eq!(manager.list().len(), 1);
}

#[test]
fn test_duplicate_registration_list_is_rejected() {
    let analyzers: [Arc<dyn ContentAnalyzer>; 2] = [
        Arc::new(FixedAnalyzer::new("first", &catalog::HTML)),
        Arc::new(FixedAnalyzer::new("second", &catalog::HTML)),
    ];
    let err = AnalysisManager::with_analyzers(analyzers).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    assert_eq!(AnalysisManager::with_defaults().list().len(), 3);
}
