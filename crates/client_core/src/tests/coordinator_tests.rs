use super::*;
use catalog::demo_catalog;
use crate::viewer::{LoadStatus, ViewMode};

fn demo_session() -> BrowseSession {
    BrowseSession::new(LoadedCatalog::live(demo_catalog()))
}

fn titles(results: &[&Resource]) -> Vec<String> {
    results.iter().map(|resource| resource.title.clone()).collect()
}

#[test]
fn branch_filter_and_query_combine_to_no_matches() {
    let mut session = demo_session();
    assert!(session.toggle_filter(FilterAxis::Branch, "cs", true));
    assert_eq!(
        titles(&session.results()),
        [
            "Data Structures and Algorithms",
            "Operating Systems",
            "Database Management Systems"
        ]
    );

    session.set_query("thermo");
    assert!(session.results().is_empty());
    assert_eq!(session.results_view(), ResultsView::NoMatches);

    session.clear_filters();
    assert_eq!(titles(&session.results()), ["Thermodynamics Fundamentals"]);
}

#[test]
fn results_view_separates_empty_catalog_from_no_matches() {
    let empty = BrowseSession::new(LoadedCatalog::live(Catalog::empty()));
    assert_eq!(empty.results_view(), ResultsView::EmptyCatalog);

    let mut session = demo_session();
    session.set_query("  quantum  ");
    assert_eq!(session.results_view(), ResultsView::NoMatches);
    session.clear_query();
    assert!(matches!(session.results_view(), ResultsView::Matches(all) if all.len() == 8));
}

#[test]
fn filters_or_within_axis_and_across_axes() {
    let mut session = demo_session();
    session.toggle_filter(FilterAxis::Branch, "mechanical", true);
    session.toggle_filter(FilterAxis::Branch, "electrical", true);
    session.toggle_filter(FilterAxis::Year, "2", true);

    assert_eq!(
        titles(&session.results()),
        ["Circuit Theory", "Fluid Mechanics"]
    );

    session.toggle_filter(FilterAxis::Year, "2", false);
    assert_eq!(session.results().len(), 5);
}

#[test]
fn open_from_resource_uses_companion_as_alternate() {
    let mut session = BrowseSession::new(LoadedCatalog::live(Catalog::empty()));
    let resource = Resource {
        id: ResourceId::new("42"),
        title: "Compiler Design".to_string(),
        branch: "Computer Science".to_string(),
        year: "3rd Year".to_string(),
        kind: "Notes".to_string(),
        thumbnail_ref: String::new(),
        download_ref: "https://files.example/cd.pdf".to_string(),
        document_ref: None,
        companion_ref: Some("https://files.example/cd-questions.pdf".to_string()),
    };

    assert!(session.open_from_resource(&resource).is_applied());
    let id = DocumentId::from("42");
    session.viewer_mut().set_view_mode(&id, ViewMode::Alternate);

    let document = session.viewer().active_document().expect("active");
    assert_eq!(document.document_ref(), "https://files.example/cd.pdf");
    assert_eq!(document.active_reference(), "https://files.example/cd-questions.pdf");
    assert_eq!(
        session.download_active().map(|request| request.url),
        Some("https://files.example/cd-questions.pdf".to_string())
    );
}

#[test]
fn open_by_id_ignores_unknown_resources() {
    let mut session = demo_session();
    assert_eq!(
        session.open_by_id(&ResourceId::new("999")),
        Transition::Ignored(IgnoredTransition::UnknownDocument)
    );
    assert!(session.viewer().is_empty());

    assert!(session.open_by_id(&ResourceId::new("4")).is_applied());
    assert!(session.open_by_id(&ResourceId::new("1")).is_applied());
    assert!(session.open_by_id(&ResourceId::new("4")).is_applied());
    assert_eq!(session.viewer().len(), 2);
    assert_eq!(session.viewer().active_id(), Some(&DocumentId::from("4")));
}

#[test]
fn viewer_scenario_runs_through_coordinator() {
    let mut session = demo_session();
    let a = DocumentId::from("1");
    let b = DocumentId::from("2");
    session.open_by_id(&ResourceId::new("1"));
    session.viewer_mut().mark_loaded(&a);
    session.open_by_id(&ResourceId::new("2"));

    session.viewer_mut().close(&a);

    let viewer = session.viewer();
    assert_eq!(viewer.active_id(), Some(&b));
    assert_eq!(viewer.documents().len(), 1);
    assert_eq!(
        viewer.document(&b).map(ViewerDocument::load_status),
        Some(LoadStatus::Pending)
    );
}

#[test]
fn fallback_source_is_reported() {
    let session = BrowseSession::new(LoadedCatalog {
        catalog: demo_catalog(),
        source: CatalogSource::Fallback {
            reason: "catalog service answered 502".to_string(),
        },
    });
    assert!(session.is_fallback());
    assert!(!demo_session().is_fallback());
    assert!(session.download_active().is_none());
}
