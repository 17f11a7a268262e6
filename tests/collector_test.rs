//! Child-list collection across detail pagination

use district_scrape::content_saver::RunLog;
use district_scrape::crawl_engine::{ChildKind, FindingKind, Severity, collect_children};

mod common;
use common::{FakeDetail, SimulatedDom, fast_config, fixture_url};

struct Harness {
    _dir: tempfile::TempDir,
    config: district_scrape::CrawlConfig,
    log: RunLog,
}

fn harness() -> Harness {
    let dir = common::create_test_dir().unwrap();
    let config = fast_config(dir.path(), &fixture_url("/sg/district/states"));
    let log = RunLog::open(dir.path().join("collector.log")).unwrap();
    Harness {
        _dir: dir,
        config,
        log,
    }
}

#[tokio::test]
async fn merges_numbered_pages_without_duplicates() {
    let mut h = harness();
    let first = fixture_url("/sg/7/sub_districts");
    let second = fixture_url("/sg/7/sub_districts?page=2");
    let mut dom = SimulatedDom::new()
        .with_page(
            &first,
            FakeDetail::rendered(&["Alpha", "Beta"])
                .banner("Showing 4 Sub Districts")
                .link(&first, "1")
                .link(&second, "2")
                .link(&second, "2")
                .link(&second, "Next »"),
        )
        .with_page(&second, FakeDetail::rendered(&["beta", "Gamma", "Delta"]));

    let collection = collect_children(
        &mut dom,
        Some(first.as_str()),
        ChildKind::Subdistrict,
        &h.config,
        &mut h.log,
    )
    .await
    .unwrap();

    assert_eq!(collection.names, ["Alpha", "Beta", "Gamma", "Delta"]);
    assert_eq!(collection.expected, Some(4));
    assert_eq!(collection.pages, 2);
    assert!(collection.findings.is_empty());
    assert_eq!(dom.navigations, [first, second]);

    let log_text = std::fs::read_to_string(h.log.path()).unwrap();
    assert!(log_text.contains("subdistrict page 2: +2"));
    assert!(log_text.contains("[subdistrict] links found: 4 (matches banner 4)"));
}

#[tokio::test]
async fn count_below_banner_is_reported() {
    let mut h = harness();
    let url = fixture_url("/sg/9/blocks");
    let mut dom = SimulatedDom::new().with_page(
        &url,
        FakeDetail::rendered(&["B1", "B2", "B3"]).banner("5 Blocks"),
    );

    let collection = collect_children(
        &mut dom,
        Some(url.as_str()),
        ChildKind::Block,
        &h.config,
        &mut h.log,
    )
    .await
    .unwrap();

    assert_eq!(collection.names.len(), 3);
    assert_eq!(collection.findings.len(), 1);
    let finding = &collection.findings[0];
    assert_eq!(finding.kind, FindingKind::CountMismatch);
    assert_eq!(finding.severity, Severity::Warning);
    assert!(finding.message.contains("Block mismatch: expected 5, got 3"));
}

#[tokio::test]
async fn missing_url_collects_nothing() {
    let mut h = harness();
    let mut dom = SimulatedDom::new();

    let collection = collect_children(&mut dom, None, ChildKind::Block, &h.config, &mut h.log)
        .await
        .unwrap();

    assert!(collection.names.is_empty());
    assert_eq!(collection.expected, None);
    assert!(dom.navigations.is_empty());
}

#[tokio::test]
async fn plain_list_items_are_used_when_no_rows_render() {
    let mut h = harness();
    let url = fixture_url("/sg/3/sub_districts");
    let mut dom = SimulatedDom::new().with_page(
        &url,
        FakeDetail::default().fallback(&["Xeno", "  Yarrow\u{a0} ", "Source: Census 2011"]),
    );

    let collection = collect_children(
        &mut dom,
        Some(url.as_str()),
        ChildKind::Subdistrict,
        &h.config,
        &mut h.log,
    )
    .await
    .unwrap();

    assert_eq!(collection.names, ["Xeno", "Yarrow"]);
    assert!(collection.findings.is_empty());
}

#[tokio::test]
async fn slow_render_is_reported_and_partial_rows_kept() {
    let mut h = harness();
    let url = fixture_url("/sg/4/sub_districts");
    let titles: Vec<String> = (0..100).map(|n| format!("Village {n}")).collect();
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
    let mut dom = SimulatedDom::new().with_page(
        &url,
        FakeDetail::lazy(&titles, 0, 1).banner("Showing 100 results"),
    );

    let collection = collect_children(
        &mut dom,
        Some(url.as_str()),
        ChildKind::Subdistrict,
        &h.config,
        &mut h.log,
    )
    .await
    .unwrap();

    // fast_config allows 40 polls on the first page
    assert_eq!(collection.names.len(), 40);
    let kinds: Vec<FindingKind> = collection.findings.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        [FindingKind::StabilizationTimeout, FindingKind::CountMismatch]
    );
}

#[tokio::test]
async fn navigation_failure_is_an_error() {
    let mut h = harness();
    let mut dom = SimulatedDom::new();
    let url = fixture_url("/sg/5/blocks");

    let result = collect_children(
        &mut dom,
        Some(url.as_str()),
        ChildKind::Block,
        &h.config,
        &mut h.log,
    )
    .await;

    assert!(result.is_err());
}
