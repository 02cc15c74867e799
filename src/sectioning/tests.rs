use super::*;

fn matchers() -> HeadingMatchers {
    HeadingMatchers::new().expect("heading matchers compile")
}

#[test]
fn chapter_and_section_lines_title_as_numeral_and_text() {
    let matchers = matchers();

    assert_eq!(
        matchers.match_heading("Chapter 1: Introduction"),
        Some("1: Introduction".to_string())
    );
    assert_eq!(
        matchers.match_heading("Section 2.1 Methods overview"),
        Some("2.1: Methods overview".to_string())
    );
    assert_eq!(
        matchers.match_heading("chapter 3 Early Results"),
        Some("3: Early Results".to_string())
    );
}

#[test]
fn numbered_lines_title_as_numeral_and_text() {
    let matchers = matchers();

    assert_eq!(
        matchers.match_heading("2.1 Study Design"),
        Some("2.1: Study Design".to_string())
    );
    assert_eq!(
        matchers.match_heading("10 Conclusions and outlook"),
        Some("10: Conclusions and outlook".to_string())
    );
}

#[test]
fn all_caps_lines_of_five_or_more_chars_are_headings() {
    let matchers = matchers();

    assert_eq!(
        matchers.match_heading("CONCLUSION"),
        Some("CONCLUSION".to_string())
    );
    assert_eq!(matchers.match_heading("SCOPE"), Some("SCOPE".to_string()));
    assert_eq!(matchers.match_heading("ABC"), None);
    assert_eq!(matchers.match_heading("conclusion and outlook"), None);
}

#[test]
fn keyword_lines_match_case_insensitively_and_exactly() {
    let matchers = matchers();

    assert_eq!(
        matchers.match_heading("References"),
        Some("References".to_string())
    );
    assert_eq!(
        matchers.match_heading("methodology"),
        Some("methodology".to_string())
    );
    assert_eq!(matchers.match_heading("Results section"), None);
}

#[test]
fn earlier_matchers_win_over_later_ones() {
    let matchers = matchers();

    // Numbered beats all-caps; chapter keyword beats numbered.
    assert_eq!(
        matchers.match_heading("1 INTRODUCTION"),
        Some("1: INTRODUCTION".to_string())
    );
    assert_eq!(
        matchers.match_heading("Section 4 RESULTS"),
        Some("4: RESULTS".to_string())
    );
}

#[test]
fn normalize_pages_inserts_one_based_markers_in_order() {
    let pages = vec!["alpha page text".to_string(), "beta page text".to_string()];
    let full_text = normalize_pages(&pages);

    let first = full_text
        .find("----- PAGE 1 -----")
        .expect("page 1 marker present");
    let second = full_text
        .find("----- PAGE 2 -----")
        .expect("page 2 marker present");
    assert!(first < second);
    assert!(full_text.contains("alpha page text"));
    assert!(full_text.contains("beta page text"));
}

#[test]
fn normalize_pages_substitutes_placeholders_for_empty_pages() {
    let pages = vec![String::new(), "   \n  ".to_string()];
    let full_text = normalize_pages(&pages);

    assert!(full_text.contains("[No extractable text on page 1]"));
    assert!(full_text.contains("[No extractable text on page 2]"));
}

#[test]
fn degenerate_extraction_requires_at_least_one_page() {
    assert!(is_degenerate_extraction("  tiny  ", 1));
    assert!(!is_degenerate_extraction("tiny", 0));

    let long_text = "prose ".repeat(50);
    assert!(!is_degenerate_extraction(&long_text, 3));
}

#[test]
fn detect_sections_accumulates_bodies_in_document_order() {
    let pages = vec![
        "this opening page carries enough plain prose to keep the detector away from the fallback path.".to_string(),
        "CONCLUSION\n\nthe first closing paragraph has plenty of words in it.\n\nthe second closing paragraph also has plenty of words in it.".to_string(),
        "References\n\nsmith, j. an example reference entry from twenty twenty.".to_string(),
    ];
    let full_text = normalize_pages(&pages);
    let sections = detect_sections(&full_text, &matchers());

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Document Start", "CONCLUSION", "References"]);

    let conclusion = sections.get("CONCLUSION").expect("conclusion section");
    assert!(conclusion.body.contains("## CONCLUSION"));
    assert!(conclusion.body.contains("first closing paragraph"));
    assert!(conclusion.body.contains("second closing paragraph"));

    let start = sections.get("Document Start").expect("document start");
    assert!(start.body.contains("----- PAGE 1 -----"));
    assert!(start.body.contains("opening page carries enough plain prose"));
}

#[test]
fn title_case_fallback_detects_short_interior_headings() {
    let pages = vec![
        "the opening line of the document is long enough to not be a heading at all.\n\nFuture Work\n\nthis body paragraph follows the short title line and provides sufficient length for the scan."
            .to_string(),
    ];
    let full_text = normalize_pages(&pages);
    let sections = detect_sections(&full_text, &matchers());

    let future = sections.get("Future Work").expect("fallback heading");
    assert!(future.body.contains("## Future Work"));
    assert!(future.body.contains("this body paragraph follows"));
}

#[test]
fn duplicate_headings_merge_bodies_by_append() {
    let pages = vec![
        "CONCLUSION\n\nthe body written under the first occurrence of the heading has plenty of words.".to_string(),
        "an interleaved page of ordinary prose that belongs to the same running section as before.\n\nCONCLUSION\n\nthe body written under the second occurrence of the heading is appended after the first.".to_string(),
    ];
    let full_text = normalize_pages(&pages);
    let sections = detect_sections(&full_text, &matchers());

    let conclusion = sections.get("CONCLUSION").expect("merged section");
    assert_eq!(conclusion.body.matches("## CONCLUSION").count(), 2);

    let first = conclusion
        .body
        .find("first occurrence")
        .expect("first body present");
    let second = conclusion
        .body
        .find("second occurrence")
        .expect("second body present");
    assert!(first < second);
}

#[test]
fn detection_below_minimum_content_returns_full_document() {
    let sections = detect_sections("tiny text", &matchers());

    assert_eq!(sections.len(), 1);
    let only = sections.get("Full Document").expect("full document fallback");
    assert_eq!(only.body, "tiny text");
}

#[test]
fn detection_with_no_headings_returns_full_document() {
    let full_text = "lowercase prose line one that runs long enough to contribute real content to the body.\nlowercase prose line two that also runs long enough to contribute real content to the body.";
    let sections = detect_sections(full_text, &matchers());

    assert_eq!(sections.len(), 1);
    let only = sections.get("Full Document").expect("full document fallback");
    assert_eq!(only.body, full_text);
}

#[test]
fn page_markers_never_become_section_titles() {
    let pages = vec![
        "this opening page carries enough plain prose to keep the detector away from the fallback path.".to_string(),
        "CONCLUSION\n\nenough closing prose to keep the detected sections above the minimum content floor.".to_string(),
    ];
    let full_text = normalize_pages(&pages);
    let sections = detect_sections(&full_text, &matchers());

    assert!(sections.iter().all(|s| !s.title.contains("PAGE")));
}

#[test]
fn sparse_extraction_short_circuits_to_single_section() {
    // ~40 characters of extracted text across one page.
    let pages = vec!["a short scanned fragment of forty chars".to_string()];
    let sections = detect_document_sections(&pages, &matchers());

    assert_eq!(sections.len(), 1);
    let only = sections.get("Full Document").expect("full document fallback");
    assert!(only.body.contains("a short scanned fragment of forty chars"));
}

#[test]
fn sectioned_text_round_trips_through_the_marker_regex() {
    let mut sections = SectionMap::default();
    sections.append("Document Start", "prose before any heading with enough words.");
    sections.append("CONCLUSION", "\n\n## CONCLUSION\n\nclosing prose paragraph.");

    let rendered = render_sectioned_text(&sections);
    let marker = section_marker_regex().expect("marker regex compiles");
    let (pre_text, pairs) = split_sectioned_text(&rendered, &marker);

    assert!(pre_text.is_empty());
    let titles: Vec<&str> = pairs.iter().map(|(title, _)| title.as_str()).collect();
    assert_eq!(titles, vec!["Document Start", "CONCLUSION"]);
    assert_eq!(
        pairs[0].1.trim(),
        "prose before any heading with enough words."
    );
    assert_eq!(pairs[1].1.trim(), "## CONCLUSION\n\nclosing prose paragraph.");
}

#[test]
fn split_sectioned_text_keeps_text_before_the_first_marker() {
    let text = "intro prose\n\n--- SECTION: One ---\n\nbody one\n\n";
    let marker = section_marker_regex().expect("marker regex compiles");
    let (pre_text, pairs) = split_sectioned_text(text, &marker);

    assert_eq!(pre_text, "intro prose");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "One");
    assert_eq!(pairs[0].1.trim(), "body one");
}
