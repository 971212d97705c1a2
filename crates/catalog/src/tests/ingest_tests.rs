use super::*;

fn resource(id: &str, title: &str, download_ref: &str) -> Resource {
    Resource {
        id: ResourceId::new(id),
        title: title.to_string(),
        branch: "Civil".to_string(),
        year: "1st Year".to_string(),
        kind: "Notes".to_string(),
        thumbnail_ref: String::new(),
        download_ref: download_ref.to_string(),
        document_ref: None,
        companion_ref: None,
    }
}

#[test]
fn ingest_preserves_order() {
    let catalog = Catalog::ingest(vec![
        resource("b", "Second", "b.pdf"),
        resource("a", "First", "a.pdf"),
    ])
    .expect("catalog");
    let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(
        catalog.get(&ResourceId::new("a")).map(|r| r.title.as_str()),
        Some("First")
    );
}

#[test]
fn rejects_blank_required_fields() {
    let err = Catalog::ingest(vec![resource("1", "ok", "a.pdf"), resource("2", " ", "b.pdf")])
        .expect_err("blank title");
    assert!(matches!(
        err,
        IngestError::EmptyField {
            index: 1,
            field: "title"
        }
    ));

    let err = Catalog::ingest(vec![resource("", "t", "a.pdf")]).expect_err("blank id");
    assert!(matches!(err, IngestError::EmptyField { field: "id", .. }));

    let err = Catalog::ingest(vec![resource("1", "t", "")]).expect_err("blank download");
    assert!(matches!(
        err,
        IngestError::EmptyField {
            field: "downloadUrl",
            ..
        }
    ));
}

#[test]
fn rejects_duplicate_ids() {
    let err = Catalog::ingest(vec![resource("7", "a", "a.pdf"), resource("7", "b", "b.pdf")])
        .expect_err("duplicate");
    assert!(matches!(err, IngestError::DuplicateId(id) if id.as_str() == "7"));
}

#[test]
fn parses_bare_array_and_envelope() {
    let bare = br#"[{"id":"1","title":"A","branch":"Civil","year":"1st Year","type":"Notes","downloadUrl":"a.pdf"}]"#;
    let envelope = br#"{"resources":[{"id":"1","title":"A","branch":"Civil","year":"1st Year","type":"Notes","downloadUrl":"a.pdf"}]}"#;

    let from_bare = Catalog::from_json_slice(bare).expect("bare");
    let from_envelope = Catalog::from_json_slice(envelope).expect("envelope");
    assert_eq!(from_bare, from_envelope);
    assert_eq!(from_bare.len(), 1);
}

#[test]
fn malformed_json_is_an_ingest_error() {
    let err = Catalog::from_json_slice(b"{\"resources\": 3}").expect_err("bad payload");
    assert!(matches!(err, IngestError::Json(_)));
}
