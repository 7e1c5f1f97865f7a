//! Which project, if any, is shown in the detail overlay.

use crate::content::Project;

/// At most one open project; opening another replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectOverlay {
    open: Option<&'static Project>,
}

impl ProjectOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, project: &'static Project) {
        tracing::debug!(project = project.id, "Project overlay opened");
        self.open = Some(project);
    }

    /// Clears the selection. A no-op when nothing is open.
    pub fn close(&mut self) {
        if let Some(project) = self.open.take() {
            tracing::debug!(project = project.id, "Project overlay closed");
        }
    }

    pub fn current(&self) -> Option<&'static Project> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}
