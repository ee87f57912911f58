//! The project library: every project, snippet and snippet folder, stored
//! as one JSON blob.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::CardConfig;
use super::project::Project;
use super::snippet::{PerStrategy, Snippet, SnippetFolder};
use super::new_id;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::stats::StatValues;
use crate::domain::value_objects::Strategy;

/// Key under which the library blob is stored.
pub const LIBRARY_KEY: &str = "roundsStudioDataV2";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    #[serde(default)]
    projects: Vec<Project>,
    // Older blobs predate snippets; `default` fills them in on load.
    #[serde(default)]
    snippets: PerStrategy<Snippet>,
    #[serde(default)]
    snippet_folders: PerStrategy<SnippetFolder>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a backup, requiring both `projects` and `snippets` keys.
    pub fn import_json(text: &str) -> DomainResult<Self> {
        let invalid = |reason: String| DomainError::InvalidBackup { reason };
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| invalid(format!("not valid JSON: {e}")))?;

        let object = value
            .as_object()
            .ok_or_else(|| invalid("top level is not an object".into()))?;
        for key in ["projects", "snippets"] {
            if !object.contains_key(key) {
                return Err(invalid(format!("missing '{key}'")));
            }
        }

        serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
    }

    /// Pretty-printed JSON, readable by [`Library::import_json`].
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    // ── projects ─────────────────────────────────────────────────────────

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> DomainResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::ProjectNotFound { id: id.into() })
    }

    pub fn project_mut(&mut self, id: &str) -> DomainResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::ProjectNotFound { id: id.into() })
    }

    pub fn create_project(&mut self, name: &str, strategy: Strategy) -> DomainResult<&Project> {
        let project = Project::new(name, strategy)?;
        debug!(id = %project.id, %strategy, "project created");
        self.projects.push(project);
        Ok(&self.projects[self.projects.len() - 1])
    }

    pub fn delete_project(&mut self, id: &str) -> DomainResult<Project> {
        let idx = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::ProjectNotFound { id: id.into() })?;
        Ok(self.projects.remove(idx))
    }

    /// Mark a project as opened.
    pub fn touch_project(&mut self, id: &str) -> DomainResult<()> {
        self.project_mut(id)?.touch();
        Ok(())
    }

    /// Reorder projects. `ids` must be a permutation of the existing ids;
    /// otherwise nothing changes.
    pub fn reorder_projects<S: AsRef<str>>(&mut self, ids: &[S]) -> DomainResult<()> {
        let mismatch = |reason: String| DomainError::ReorderMismatch { reason };

        if ids.len() != self.projects.len() {
            return Err(mismatch(format!(
                "expected {} ids, got {}",
                self.projects.len(),
                ids.len()
            )));
        }

        let mut seen = HashSet::new();
        for id in ids {
            let id = id.as_ref();
            if !seen.insert(id) {
                return Err(mismatch(format!("'{id}' listed twice")));
            }
            if !self.projects.iter().any(|p| p.id == id) {
                return Err(mismatch(format!("unknown project '{id}'")));
            }
        }

        let mut remaining = std::mem::take(&mut self.projects);
        for id in ids {
            if let Some(pos) = remaining.iter().position(|p| p.id == id.as_ref()) {
                self.projects.push(remaining.swap_remove(pos));
            }
        }
        Ok(())
    }

    // ── cards ────────────────────────────────────────────────────────────

    /// Add a card with freshly generated code; returns its index.
    pub fn create_card(&mut self, project_id: &str) -> DomainResult<usize> {
        Ok(self.project_mut(project_id)?.add_card())
    }

    pub fn delete_card(&mut self, project_id: &str, index: usize) -> DomainResult<CardConfig> {
        self.project_mut(project_id)?.remove_card(index)
    }

    pub fn update_card(
        &mut self,
        project_id: &str,
        index: usize,
        field: &str,
        value: &str,
    ) -> DomainResult<()> {
        let project = self.project_mut(project_id)?;
        project.card_mut(index)?.set_field(field, value)?;
        project.touch();
        Ok(())
    }

    /// Inject `values` into a card's code.
    pub fn apply_stats(
        &mut self,
        project_id: &str,
        index: usize,
        values: &StatValues,
    ) -> DomainResult<&CardConfig> {
        let project = self.project_mut(project_id)?;
        project.card(index)?;
        project.touch();
        let card = project.card_mut(index)?;
        card.apply_stats(values);
        Ok(card)
    }

    // ── snippets ─────────────────────────────────────────────────────────

    pub fn snippets(&self, strategy: Strategy) -> &[Snippet] {
        self.snippets.get(strategy)
    }

    pub fn snippet_folders(&self, strategy: Strategy) -> &[SnippetFolder] {
        self.snippet_folders.get(strategy)
    }

    fn ensure_folder(&self, strategy: Strategy, folder_id: Option<&str>) -> DomainResult<()> {
        match folder_id {
            Some(id) if !self.snippet_folders(strategy).iter().any(|f| f.id == id) => {
                Err(DomainError::FolderNotFound { id: id.into() })
            }
            _ => Ok(()),
        }
    }

    pub fn save_snippet(
        &mut self,
        strategy: Strategy,
        name: &str,
        code: &str,
        folder_id: Option<&str>,
    ) -> DomainResult<&Snippet> {
        self.ensure_folder(strategy, folder_id)?;
        let list = self.snippets.get_mut(strategy);
        list.push(Snippet {
            id: new_id(),
            name: name.into(),
            code: code.into(),
            folder_id: folder_id.map(String::from),
        });
        Ok(&list[list.len() - 1])
    }

    pub fn move_snippet(
        &mut self,
        strategy: Strategy,
        id: &str,
        folder_id: Option<&str>,
    ) -> DomainResult<()> {
        self.ensure_folder(strategy, folder_id)?;
        let snippet = self
            .snippets
            .get_mut(strategy)
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::SnippetNotFound { id: id.into() })?;
        snippet.folder_id = folder_id.map(String::from);
        Ok(())
    }

    pub fn delete_snippet(&mut self, strategy: Strategy, id: &str) -> DomainResult<Snippet> {
        let list = self.snippets.get_mut(strategy);
        let idx = list
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DomainError::SnippetNotFound { id: id.into() })?;
        Ok(list.remove(idx))
    }

    pub fn create_snippet_folder(&mut self, strategy: Strategy, name: &str) -> &SnippetFolder {
        let list = self.snippet_folders.get_mut(strategy);
        list.push(SnippetFolder {
            id: new_id(),
            name: name.into(),
        });
        &list[list.len() - 1]
    }

    /// Delete a folder; its snippets move back to the root.
    pub fn delete_snippet_folder(
        &mut self,
        strategy: Strategy,
        id: &str,
    ) -> DomainResult<SnippetFolder> {
        let folders = self.snippet_folders.get_mut(strategy);
        let idx = folders
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| DomainError::FolderNotFound { id: id.into() })?;
        let folder = folders.remove(idx);

        for snippet in self.snippets.get_mut(strategy) {
            if snippet.folder_id.as_deref() == Some(id) {
                snippet.folder_id = None;
            }
        }
        Ok(folder)
    }

    pub fn snippet_count(&self) -> usize {
        self.snippets.total()
    }
}
