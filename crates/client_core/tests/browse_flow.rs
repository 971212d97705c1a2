use catalog::{demo_catalog, Catalog, FilterSelection};
use client_core::{
    load_catalog, BrowseSession, DownloadRequest, LoadStatus, ResultsView, StaticCatalogProvider,
    ViewMode, ViewerCommand,
};
use shared::domain::{DocumentId, FilterAxis, Resource, ResourceId};

fn paper(id: &str, title: &str, companion: Option<&str>) -> Resource {
    Resource {
        id: ResourceId::new(id),
        title: title.to_string(),
        branch: "Civil".to_string(),
        year: "4th Year".to_string(),
        kind: "Question Papers".to_string(),
        thumbnail_ref: String::new(),
        download_ref: format!("https://files.example/{id}.pdf"),
        document_ref: Some(format!("https://view.example/{id}.pdf")),
        companion_ref: companion.map(str::to_string),
    }
}

#[tokio::test]
async fn live_catalog_browse_open_and_download() {
    let provider = StaticCatalogProvider::new(vec![
        paper("s1", "Structural Analysis", Some("https://files.example/s1-iq.pdf")),
        paper("s2", "Surveying", None),
    ]);
    let loaded = load_catalog(&provider, &FilterSelection::new(), demo_catalog()).await;
    let mut session = BrowseSession::new(loaded);
    assert!(!session.is_fallback());

    session.toggle_filter(FilterAxis::Branch, "civil", true);
    session.toggle_filter(FilterAxis::ResourceType, "papers", true);
    session.set_query("struct");
    let ResultsView::Matches(matches) = session.results_view() else {
        panic!("expected matches");
    };
    let picked = matches[0].clone();
    assert_eq!(matches.len(), 1);

    assert!(session.open_from_resource(&picked).is_applied());
    let id = DocumentId::from("s1");
    for command in [
        ViewerCommand::MarkLoaded(id.clone()),
        ViewerCommand::SetViewMode {
            id: id.clone(),
            mode: ViewMode::Alternate,
        },
        ViewerCommand::MarkLoaded(id.clone()),
        ViewerCommand::ZoomOut(id.clone()),
    ] {
        assert!(session.viewer_mut().apply(command).is_applied());
    }

    let document = session.viewer().active_document().expect("active");
    assert_eq!(document.load_status(), LoadStatus::Loaded);
    assert_eq!(document.zoom_percent(), 75);
    assert_eq!(
        session.download_active(),
        Some(DownloadRequest {
            url: "https://files.example/s1-iq.pdf".to_string(),
            filename: "Structural Analysis.pdf".to_string(),
        })
    );
    assert_eq!(
        DownloadRequest::for_resource(&picked).url,
        "https://files.example/s1.pdf"
    );
}

#[tokio::test]
async fn empty_live_catalog_is_not_mistaken_for_no_matches() {
    let provider = StaticCatalogProvider::new(Vec::new());
    let loaded = load_catalog(&provider, &FilterSelection::new(), demo_catalog()).await;
    assert_eq!(loaded.catalog, Catalog::empty());

    let mut session = BrowseSession::new(loaded);
    session.set_query("anything");
    assert_eq!(session.results_view(), ResultsView::EmptyCatalog);
    assert!(!session.open_by_id(&ResourceId::new("1")).is_applied());
}
