use std::io::Write;

use catalog::{demo_catalog, FilterSelection};
use client_core::{
    load_catalog, BrowseSession, CatalogProvider, CatalogSource, LoadedCatalog, ResultsView,
    Transition,
};
use shared::domain::{FilterAxis, Resource};

use crate::script::{parse_line, ScriptCommand};

/// Loads the full catalog, or the demo catalog when no source is configured.
pub async fn open_session(provider: Option<&dyn CatalogProvider>) -> BrowseSession {
    let loaded = match provider {
        Some(provider) => load_catalog(provider, &FilterSelection::new(), demo_catalog()).await,
        None => LoadedCatalog {
            catalog: demo_catalog(),
            source: CatalogSource::Fallback {
                reason: "no catalog source configured".to_string(),
            },
        },
    };
    BrowseSession::new(loaded)
}

/// Filters apply to the loaded catalog, never to the fetch, so a selection
/// that matches nothing still reports "no matches".
pub async fn search_session(
    provider: Option<&dyn CatalogProvider>,
    query: &str,
    selection: &FilterSelection,
) -> BrowseSession {
    let mut session = open_session(provider).await;
    for axis in FilterAxis::ALL {
        for code in selection.codes(axis) {
            session.toggle_filter(axis, code, true);
        }
    }
    session.set_query(query);
    session
}

pub fn write_resource(out: &mut impl Write, resource: &Resource) -> std::io::Result<()> {
    writeln!(
        out,
        "[{}] {} | {} | {} | {}",
        resource.id, resource.title, resource.branch, resource.year, resource.kind
    )
}

pub fn write_results(out: &mut impl Write, session: &BrowseSession) -> std::io::Result<()> {
    match session.results_view() {
        ResultsView::Matches(resources) => {
            for resource in resources {
                write_resource(out, resource)?;
            }
            Ok(())
        }
        ResultsView::EmptyCatalog => writeln!(out, "catalog is empty"),
        ResultsView::NoMatches => writeln!(out, "no resources match the current search and filters"),
    }
}

fn write_transition(out: &mut impl Write, transition: Transition) -> std::io::Result<()> {
    match transition {
        Transition::Applied => Ok(()),
        Transition::Ignored(reason) => writeln!(out, "ignored: {reason}"),
    }
}

pub fn execute(
    session: &mut BrowseSession,
    command: ScriptCommand,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match command {
        ScriptCommand::Search(query) => session.set_query(query),
        ScriptCommand::ClearSearch => session.clear_query(),
        ScriptCommand::Filter {
            axis,
            code,
            selected,
        } => {
            session.toggle_filter(axis, &code, selected);
        }
        ScriptCommand::ClearFilters => session.clear_filters(),
        ScriptCommand::Results => write_results(out, session)?,
        ScriptCommand::Open(id) => {
            let transition = session.open_by_id(&id);
            write_transition(out, transition)?;
        }
        ScriptCommand::Viewer(command) => {
            let transition = session.viewer_mut().apply(command);
            write_transition(out, transition)?;
        }
        ScriptCommand::Download => match session.download_active() {
            Some(request) => writeln!(out, "download {} as \"{}\"", request.url, request.filename)?,
            None => writeln!(out, "no active document")?,
        },
        ScriptCommand::Show => writeln!(out, "{}", session.viewer())?,
    }
    Ok(())
}

/// Runs every line of `script`. Lines that fail to parse are reported and
/// skipped; returns how many were skipped.
pub fn run_script(
    session: &mut BrowseSession,
    script: &str,
    out: &mut impl Write,
    errors: &mut impl Write,
) -> std::io::Result<usize> {
    let mut skipped = 0;
    for (index, line) in script.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(command)) => execute(session, command, out)?,
            Ok(None) => {}
            Err(err) => {
                skipped += 1;
                tracing::debug!(line = index + 1, error = %err, "skipping script line");
                writeln!(errors, "line {}: {err}", index + 1)?;
            }
        }
    }
    Ok(skipped)
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod tests;
