use clausewise::domain::{DocumentText, ExtractionMethod, PageText};

#[test]
fn given_no_blocks_when_rendering_then_returns_empty_string() {
    let document = DocumentText::default();
    assert!(document.is_empty());
    assert_eq!(document.render(), "");
}

#[test]
fn given_blocks_when_rendering_then_prefixes_each_with_marker() {
    let document = DocumentText::new(vec![
        PageText::new(1, ExtractionMethod::Embedded, "Hello".to_string()),
        PageText::new(2, ExtractionMethod::Ocr, "World".to_string()),
    ]);

    assert_eq!(
        document.render(),
        "--- Page 1 (embedded) ---\nHello\n--- Page 2 (ocr) ---\nWorld\n"
    );
}

#[test]
fn given_blocks_when_counting_by_method_then_counts_each_method() {
    let document = DocumentText::new(vec![
        PageText::new(1, ExtractionMethod::Embedded, "a".to_string()),
        PageText::new(2, ExtractionMethod::Ocr, "b".to_string()),
        PageText::new(3, ExtractionMethod::Ocr, String::new()),
    ]);

    assert_eq!(document.page_count(), 3);
    assert_eq!(document.count_by_method(ExtractionMethod::Embedded), 1);
    assert_eq!(document.count_by_method(ExtractionMethod::Ocr), 2);
}
