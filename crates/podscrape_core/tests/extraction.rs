use podscrape_core::{
    extract_from_html, ExtractionConfig, ExtractionSource, PodLocator, SearchResult,
    SearchStatus, NO_RESULTS_MESSAGE, SALVAGE_TITLE,
};
use pretty_assertions::assert_eq;

fn extract(html: &str) -> podscrape_core::Extraction {
    scrape_logging::initialize_for_tests();
    extract_from_html(html, &ExtractionConfig::default())
}

#[test]
fn quadratic_formula_pod_is_extracted() {
    let html = r#"
    <html><body>
      <section class="_2vZr">
        <h2>Quadratic Formula</h2>
        <img src="/formula.gif" alt="x = (-b ± √(b²-4ac)) / 2a">
      </section>
    </body></html>"#;
    let extraction = extract(html);

    assert_eq!(extraction.pods.len(), 1);
    let pod = &extraction.pods[0];
    assert_eq!(pod.title, "Quadratic Formula");
    assert_eq!(pod.formulas, vec!["x = (-b ± √(b²-4ac)) / 2a".to_string()]);
    assert_eq!(pod.images.len(), 1);
    assert_eq!(pod.images[0].src, "/formula.gif");
    assert_eq!(
        extraction.source,
        ExtractionSource::Structural(PodLocator::class_signature("section", "_2vZr"))
    );
}

#[test]
fn script_json_is_salvaged_when_no_pods_exist() {
    let html = r#"<html><head>
        <script type="application/json">{"a":1}</script>
        <script type="application/json">[1, 2, 3]</script>
        <script type="application/json">{not json</script>
        <script type="application/json"></script>
        <script>{"ignored": true}</script>
    </head><body><p>nothing here</p></body></html>"#;
    let extraction = extract(html);

    assert_eq!(extraction.source, ExtractionSource::Salvage);
    assert_eq!(extraction.pods.len(), 1);
    assert_eq!(extraction.pods[0].title, SALVAGE_TITLE);
    assert_eq!(extraction.pods[0].content, vec![r#"{"a": 1}"#.to_string()]);
    assert!(extraction.pods[0].images.is_empty());
    assert!(extraction.pods[0].formulas.is_empty());

    let result = SearchResult::pending("q", "u").with_pods(extraction.pods);
    assert_eq!(result.status, SearchStatus::Success);
    assert_eq!(result.error, None);
}

#[test]
fn page_without_pods_or_data_has_no_results() {
    let html = r#"<html><body><div class="other"><p>Just some text</p></div>
        <script type="application/json">oops</script></body></html>"#;
    let extraction = extract(html);

    assert_eq!(extraction.source, ExtractionSource::Nothing);
    assert!(extraction.pods.is_empty());

    let result = SearchResult::pending("q", "u").with_pods(extraction.pods);
    assert_eq!(result.status, SearchStatus::NoResults);
    assert!(result.results.is_empty());
    assert_eq!(result.error.as_deref(), Some(NO_RESULTS_MESSAGE));
}

#[test]
fn primary_selector_wins_over_attribute_fallback() {
    let html = r#"<html><body>
        <section class="_2vZr"><h3>Primary</h3></section>
        <div data-testid="podResult"><h3>Fallback</h3></div>
    </body></html>"#;
    let extraction = extract(html);

    let titles: Vec<_> = extraction.pods.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Primary"]);
}

#[test]
fn attribute_fallback_is_used_when_primary_class_is_missing() {
    let html = r#"<html><body>
        <div data-testid="Pod-Input"><h2>Input interpretation</h2><p>pythagorean theorem</p></div>
        <div data-testid="header"><h2>Not a pod</h2></div>
    </body></html>"#;
    let extraction = extract(html);

    assert_eq!(
        extraction.source,
        ExtractionSource::Structural(PodLocator::attribute_contains("data-testid", "pod"))
    );
    assert_eq!(extraction.pods.len(), 1);
    assert_eq!(extraction.pods[0].title, "Input interpretation");
    assert_eq!(extraction.pods[0].content, vec!["pythagorean theorem".to_string()]);
}

#[test]
fn salvage_is_skipped_when_structural_pods_survive() {
    let html = r#"<html><body>
        <section class="_2vZr"><h2>Result</h2></section>
        <script type="application/json">{"a":1}</script>
    </body></html>"#;
    let extraction = extract(html);

    assert_eq!(extraction.pods.len(), 1);
    assert_eq!(extraction.pods[0].title, "Result");
    assert!(matches!(extraction.source, ExtractionSource::Structural(_)));
}

#[test]
fn salvage_runs_when_every_located_pod_is_empty() {
    let html = r#"<html><body>
        <section class="_2vZr"><img src="/only-an-image.png" alt="Plot"></section>
        <script type="application/json">{"pods": ["Result"]}</script>
    </body></html>"#;
    let extraction = extract(html);

    assert_eq!(extraction.source, ExtractionSource::Salvage);
    assert_eq!(extraction.pods[0].content, vec![r#"{"pods": ["Result"]}"#.to_string()]);
}

#[test]
fn nested_containers_contribute_their_own_text() {
    let html = r#"<html><body><section class="_2vZr">
        <h2>Derivative</h2>
        <div><span>d/dx sin(x)</span></div>
        <p>cos(x)</p>
        <p>cos(x)</p>
        <p>ok</p>
    </section></body></html>"#;
    let extraction = extract(html);

    assert_eq!(
        extraction.pods[0].content,
        vec!["d/dx sin(x)".to_string(), "cos(x)".to_string()]
    );
}

#[test]
fn content_dedup_is_per_pod() {
    let html = r#"<html><body>
        <section class="_2vZr"><p>same text</p></section>
        <section class="_2vZr"><p>same text</p></section>
    </body></html>"#;
    let extraction = extract(html);

    assert_eq!(extraction.pods.len(), 2);
    assert_eq!(extraction.pods[0].content, extraction.pods[1].content);
}

#[test]
fn custom_locator_chain_is_honoured() {
    let config = ExtractionConfig {
        locators: vec![PodLocator::class_signature("article", "answer")],
        ..ExtractionConfig::default()
    };
    let html = r#"<html><body>
        <section class="_2vZr"><h2>Old layout</h2></section>
        <article class="answer card"><h2>New layout</h2></article>
    </body></html>"#;
    let extraction = extract_from_html(html, &config);

    assert_eq!(extraction.pods.len(), 1);
    assert_eq!(extraction.pods[0].title, "New layout");
}

#[test]
fn text_is_read_fragment_by_fragment() {
    let html = r#"<html><body><section class="_2vZr">
        <h2>Result <b>1</b></h2>
        <div><span> a </span><span> b</span></div>
        <p>Hello <b>world</b></p>
    </section></body></html>"#;
    let extraction = extract(html);

    assert_eq!(extraction.pods.len(), 1);
    assert_eq!(extraction.pods[0].title, "Result1");
    assert_eq!(extraction.pods[0].content, vec!["Helloworld".to_string()]);
}
