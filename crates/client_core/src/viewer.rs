//! Multi-document viewer session.
//!
//! Every open document owns its load status, zoom and view mode. The session
//! owns the ordered tab list, the active tab and the fullscreen flag. No
//! transition fails: requests that do not apply (stale renderer callbacks,
//! tabs closed mid-click) come back as [`Transition::Ignored`].

use std::{fmt, str::FromStr};

use shared::domain::DocumentId;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const ZOOM_MIN: u16 = 50;
pub const ZOOM_MAX: u16 = 200;
pub const ZOOM_STEP: u16 = 25;
pub const ZOOM_DEFAULT: u16 = 100;

/// Renderer options appended to the reference handed to the embedded viewer.
const RENDER_FRAGMENT: &str = "#toolbar=1&navpanes=1&scrollbar=1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The document itself.
    #[default]
    Primary,
    /// The companion reference (important questions).
    Alternate,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Primary => "Document",
            ViewMode::Alternate => "Important Questions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode '{0}'")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "primary" | "document" => Ok(ViewMode::Primary),
            "alternate" | "questions" => Ok(ViewMode::Alternate),
            _ => Err(UnknownViewMode(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerDocument {
    id: DocumentId,
    title: String,
    document_ref: String,
    alternate_ref: Option<String>,
    load_status: LoadStatus,
    zoom_percent: u16,
    view_mode: ViewMode,
}

impl ViewerDocument {
    pub fn new(id: DocumentId, title: impl Into<String>, document_ref: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            document_ref: document_ref.into(),
            alternate_ref: None,
            load_status: LoadStatus::Pending,
            zoom_percent: ZOOM_DEFAULT,
            view_mode: ViewMode::Primary,
        }
    }

    pub fn with_alternate(mut self, alternate_ref: impl Into<String>) -> Self {
        self.alternate_ref = Some(alternate_ref.into());
        self
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn document_ref(&self) -> &str {
        &self.document_ref
    }

    pub fn alternate_ref(&self) -> Option<&str> {
        self.alternate_ref.as_deref()
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn zoom_percent(&self) -> u16 {
        self.zoom_percent
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Reference for the current view mode. Alternate without a companion
    /// reference renders the primary one.
    pub fn active_reference(&self) -> &str {
        match self.view_mode {
            ViewMode::Primary => &self.document_ref,
            ViewMode::Alternate => self.alternate_ref.as_deref().unwrap_or(&self.document_ref),
        }
    }

    pub fn render_target(&self) -> String {
        let reference = self.active_reference();
        if reference.contains('#') {
            reference.to_string()
        } else {
            format!("{reference}{RENDER_FRAGMENT}")
        }
    }

    pub fn view_label(&self) -> String {
        format!("{} - {}", self.title, self.view_mode.label())
    }

    fn reset(&mut self) {
        self.load_status = LoadStatus::Pending;
        self.zoom_percent = ZOOM_DEFAULT;
        self.view_mode = ViewMode::Primary;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoredTransition),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

/// Why a transition left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IgnoredTransition {
    #[error("document is not open")]
    UnknownDocument,
    #[error("document is already active")]
    AlreadyActive,
    #[error("view mode is unchanged")]
    SameViewMode,
    #[error("zoom is already at its limit")]
    ZoomLimit,
    #[error("document is not waiting for the renderer")]
    NotPending,
    #[error("document has not failed")]
    NotFailed,
    #[error("no documents are open")]
    EmptySession,
}

#[derive(Debug, Clone)]
pub enum ViewerCommand {
    Open(ViewerDocument),
    Close(DocumentId),
    CloseAll,
    SwitchTab(DocumentId),
    SetViewMode { id: DocumentId, mode: ViewMode },
    ZoomIn(DocumentId),
    ZoomOut(DocumentId),
    MarkLoaded(DocumentId),
    MarkFailed(DocumentId),
    Retry(DocumentId),
    ToggleFullscreen,
}

impl ViewerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ViewerCommand::Open(_) => "open",
            ViewerCommand::Close(_) => "close",
            ViewerCommand::CloseAll => "close_all",
            ViewerCommand::SwitchTab(_) => "switch_tab",
            ViewerCommand::SetViewMode { .. } => "set_view_mode",
            ViewerCommand::ZoomIn(_) => "zoom_in",
            ViewerCommand::ZoomOut(_) => "zoom_out",
            ViewerCommand::MarkLoaded(_) => "mark_loaded",
            ViewerCommand::MarkFailed(_) => "mark_failed",
            ViewerCommand::Retry(_) => "retry",
            ViewerCommand::ToggleFullscreen => "toggle_fullscreen",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerSession {
    documents: Vec<ViewerDocument>,
    active: Option<DocumentId>,
    fullscreen: bool,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: ViewerCommand) -> Transition {
        let name = command.name();
        let outcome = match command {
            ViewerCommand::Open(document) => self.open(document),
            ViewerCommand::Close(id) => self.close(&id),
            ViewerCommand::CloseAll => self.close_all(),
            ViewerCommand::SwitchTab(id) => self.switch_tab(&id),
            ViewerCommand::SetViewMode { id, mode } => self.set_view_mode(&id, mode),
            ViewerCommand::ZoomIn(id) => self.zoom_in(&id),
            ViewerCommand::ZoomOut(id) => self.zoom_out(&id),
            ViewerCommand::MarkLoaded(id) => self.mark_loaded(&id),
            ViewerCommand::MarkFailed(id) => self.mark_failed(&id),
            ViewerCommand::Retry(id) => self.retry(&id),
            ViewerCommand::ToggleFullscreen => self.toggle_fullscreen(),
        };
        match outcome {
            Transition::Applied => debug!(command = name, "viewer command applied"),
            Transition::Ignored(reason) => debug!(command = name, %reason, "viewer command ignored"),
        }
        outcome
    }

    /// Opens `document` as the active tab. An id that is already open is
    /// re-activated with its state intact.
    pub fn open(&mut self, mut document: ViewerDocument) -> Transition {
        if self.position(&document.id).is_some() {
            return self.switch_tab(&document.id);
        }
        document.reset();
        info!(document_id = %document.id, title = %document.title, "opening document");
        self.active = Some(document.id.clone());
        self.documents.push(document);
        Transition::Applied
    }

    pub fn close(&mut self, id: &DocumentId) -> Transition {
        let Some(index) = self.position(id) else {
            return Transition::Ignored(IgnoredTransition::UnknownDocument);
        };
        let removed = self.documents.remove(index);
        info!(document_id = %removed.id, remaining = self.documents.len(), "closed document");

        if self.documents.is_empty() {
            self.clear();
            return Transition::Applied;
        }
        if self.active.as_ref() == Some(&removed.id) {
            let fallback = index.saturating_sub(1);
            self.active = Some(self.documents[fallback].id.clone());
        }
        Transition::Applied
    }

    pub fn close_all(&mut self) -> Transition {
        if self.documents.is_empty() && !self.fullscreen {
            return Transition::Ignored(IgnoredTransition::EmptySession);
        }
        info!(closed = self.documents.len(), "closing viewer session");
        self.clear();
        Transition::Applied
    }

    pub fn switch_tab(&mut self, id: &DocumentId) -> Transition {
        if self.position(id).is_none() {
            return Transition::Ignored(IgnoredTransition::UnknownDocument);
        }
        if self.active.as_ref() == Some(id) {
            return Transition::Ignored(IgnoredTransition::AlreadyActive);
        }
        self.active = Some(id.clone());
        Transition::Applied
    }

    /// Switches the rendered reference. When the reference actually changes
    /// the renderer starts over, so the document goes back to `Pending`.
    pub fn set_view_mode(&mut self, id: &DocumentId, mode: ViewMode) -> Transition {
        self.update(id, |document| {
            if document.view_mode == mode {
                return Err(IgnoredTransition::SameViewMode);
            }
            let previous = document.active_reference().to_string();
            document.view_mode = mode;
            if document.active_reference() != previous {
                document.load_status = LoadStatus::Pending;
            }
            Ok(())
        })
    }

    pub fn zoom_in(&mut self, id: &DocumentId) -> Transition {
        self.update(id, |document| {
            if document.zoom_percent >= ZOOM_MAX {
                return Err(IgnoredTransition::ZoomLimit);
            }
            document.zoom_percent = (document.zoom_percent + ZOOM_STEP).min(ZOOM_MAX);
            Ok(())
        })
    }

    pub fn zoom_out(&mut self, id: &DocumentId) -> Transition {
        self.update(id, |document| {
            if document.zoom_percent <= ZOOM_MIN {
                return Err(IgnoredTransition::ZoomLimit);
            }
            document.zoom_percent = document.zoom_percent.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
            Ok(())
        })
    }

    pub fn mark_loaded(&mut self, id: &DocumentId) -> Transition {
        self.update(id, |document| {
            if document.load_status != LoadStatus::Pending {
                return Err(IgnoredTransition::NotPending);
            }
            document.load_status = LoadStatus::Loaded;
            Ok(())
        })
    }

    pub fn mark_failed(&mut self, id: &DocumentId) -> Transition {
        self.update(id, |document| {
            if document.load_status != LoadStatus::Pending {
                return Err(IgnoredTransition::NotPending);
            }
            warn!(
                document_id = %document.id,
                reference = document.active_reference(),
                "document failed to render"
            );
            document.load_status = LoadStatus::Failed;
            Ok(())
        })
    }

    pub fn retry(&mut self, id: &DocumentId) -> Transition {
        self.update(id, |document| {
            if document.load_status != LoadStatus::Failed {
                return Err(IgnoredTransition::NotFailed);
            }
            document.load_status = LoadStatus::Pending;
            Ok(())
        })
    }

    /// Flips fullscreen regardless of which documents are open.
    pub fn toggle_fullscreen(&mut self) -> Transition {
        self.fullscreen = !self.fullscreen;
        Transition::Applied
    }

    pub fn documents(&self) -> &[ViewerDocument] {
        &self.documents
    }

    pub fn document(&self, id: &DocumentId) -> Option<&ViewerDocument> {
        self.documents.iter().find(|document| &document.id == id)
    }

    pub fn active_id(&self) -> Option<&DocumentId> {
        self.active.as_ref()
    }

    pub fn active_document(&self) -> Option<&ViewerDocument> {
        self.active.as_ref().and_then(|id| self.document(id))
    }

    pub fn is_open(&self) -> bool {
        !self.documents.is_empty()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn position(&self, id: &DocumentId) -> Option<usize> {
        self.documents.iter().position(|document| &document.id == id)
    }

    fn update(
        &mut self,
        id: &DocumentId,
        change: impl FnOnce(&mut ViewerDocument) -> Result<(), IgnoredTransition>,
    ) -> Transition {
        let Some(document) = self.documents.iter_mut().find(|document| &document.id == id) else {
            return Transition::Ignored(IgnoredTransition::UnknownDocument);
        };
        match change(document) {
            Ok(()) => Transition::Applied,
            Err(reason) => Transition::Ignored(reason),
        }
    }

    fn clear(&mut self) {
        self.documents.clear();
        self.active = None;
        self.fullscreen = false;
    }
}

impl fmt::Display for ViewerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.documents.is_empty() {
            return write!(f, "viewer closed");
        }
        writeln!(
            f,
            "viewer: {} open{}",
            self.documents.len(),
            if self.fullscreen { " (fullscreen)" } else { "" }
        )?;
        for document in &self.documents {
            let marker = if self.active.as_ref() == Some(&document.id) { '*' } else { ' ' };
            writeln!(
                f,
                "{marker} [{}] {} {:?} {}% -> {}",
                document.id,
                document.view_label(),
                document.load_status,
                document.zoom_percent,
                document.active_reference()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/viewer_tests.rs"]
mod tests;
