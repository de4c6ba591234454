use vaultgraph::extract::extract_markers;

fn payloads(text: &str) -> Vec<String> {
    extract_markers(text)
        .into_iter()
        .map(|m| m.payload)
        .collect()
}

#[test]
fn test_extracts_single_marker() {
    let markers = extract_markers("see [[B]] for details");
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].payload, "B");
    assert_eq!(markers[0].line, 1);
}

#[test]
fn test_extraction_preserves_order_and_count() {
    let text = "first [[A]], then [[B]]\nand finally [[C]]";
    assert_eq!(payloads(text), vec!["A", "B", "C"]);
}

#[test]
fn test_empty_content_yields_no_markers() {
    assert!(extract_markers("").is_empty());
    assert!(extract_markers("plain text without references").is_empty());
}

#[test]
fn test_payload_is_verbatim() {
    assert_eq!(payloads("[[Note|display alias]]"), vec!["Note|display alias"]);
    assert_eq!(payloads("[[sub/Note#Heading]]"), vec!["sub/Note#Heading"]);
    assert_eq!(payloads("[[ spaced  ]]"), vec![" spaced  "]);
}

#[test]
fn test_empty_payload_is_extracted() {
    assert_eq!(payloads("[[]]"), vec![""]);
}

#[test]
fn test_embed_prefix_stays_outside_payload() {
    assert_eq!(payloads("shown inline: ![[diagram]]"), vec!["diagram"]);
}

#[test]
fn test_dangling_open_emits_nothing() {
    assert!(extract_markers("before [[dangling").is_empty());
    assert!(extract_markers("[[").is_empty());
}

#[test]
fn test_dangling_open_after_complete_marker() {
    assert_eq!(payloads("[[A]] and then [[unclosed"), vec!["A"]);
}

#[test]
fn test_stray_close_is_plain_text() {
    assert_eq!(payloads("a ]] b [[X]] c ]]"), vec!["X"]);
}

#[test]
fn test_nested_open_joins_payload() {
    // Shortest match from the first opener, as a lazy regex would do
    assert_eq!(payloads("[[a[[b]]"), vec!["a[[b"]);
}

#[test]
fn test_shortest_match_per_marker() {
    assert_eq!(payloads("[[a]]b]]"), vec!["a"]);
    assert_eq!(payloads("[[x]] ]] [[y]]"), vec!["x", "y"]);
}

#[test]
fn test_adjacent_markers() {
    assert_eq!(payloads("[[A]][[B]]"), vec!["A", "B"]);
}

#[test]
fn test_multiline_payload() {
    let markers = extract_markers("x [[first\nsecond]] y [[Z]]");
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].payload, "first\nsecond");
    assert_eq!(markers[0].line, 1);
    assert_eq!(markers[1].payload, "Z");
    assert_eq!(markers[1].line, 2, "line counter should follow the payload");
}

#[test]
fn test_line_numbers_track_opening_delimiter() {
    let text = "one\ntwo [[A]]\nthree\nfour [[B]] [[C]]\n";
    let markers = extract_markers(text);
    let lines: Vec<u32> = markers.iter().map(|m| m.line).collect();
    assert_eq!(lines, vec![2, 4, 4]);
}
