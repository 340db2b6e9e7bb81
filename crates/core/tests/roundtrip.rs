use formfill_core::{Document, Header, Paragraph, Table};

fn sample_document() -> Document {
    let mut doc = Document::new(Header {
        version: 1,
        title: "responses worksheet".to_string(),
    });
    doc.push_paragraph(Paragraph::tagged("Name: ________", "name"));
    doc.push_paragraph(Paragraph::plain("Question a"));
    let mut table = Table::with_dims(1, 1);
    table.cell_mut(0, 0).unwrap().set_text("write answer a here");
    doc.push_table(table);
    doc.push_paragraph(Paragraph::plain("Question b"));
    doc.push_table(Table::with_dims(2, 3));
    doc
}

#[test]
fn document_roundtrip_bin() {
    let doc = sample_document();
    let bytes = doc.to_bytes().expect("serialize");
    let decoded = Document::from_bytes(&bytes).expect("decode");
    assert_eq!(doc, decoded);
    assert_eq!(decoded.paragraph_count(), 3);
    assert_eq!(decoded.table_count(), 2);
    assert_eq!(
        decoded.table(0).unwrap().cell(0, 0).unwrap().text(),
        "write answer a here"
    );
}

#[test]
fn document_roundtrip_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worksheet.json");
    let doc = sample_document();
    doc.save_json(&path).expect("save json");
    let decoded = Document::load_json(&path).expect("load json");
    assert_eq!(doc, decoded);
}

#[test]
fn save_and_load_bin_via_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worksheet.ffd");
    let doc = sample_document();
    doc.save_bin(&path).expect("save bin");
    let loaded = Document::load_bin(&path).expect("load bin");
    assert_eq!(doc, loaded);
}

#[test]
fn load_bin_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-a-doc.ffd");
    std::fs::write(&path, b"plainly not zstd").unwrap();
    assert!(Document::load_bin(&path).is_err());
}

#[test]
fn load_bin_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ffd");
    match Document::load_bin(&path) {
        Err(formfill_core::FillError::Io(_)) => {}
        other => panic!("unexpected: {other:?}"),
    }
}
