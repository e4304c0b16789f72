//! Live resolver adapter backed by a [`ProjectTable`].

use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::ports::resolver::ProjectResolver;
use crate::projects::ProjectTable;

/// Resolves projects through a project table, anchoring relative roots at
/// a base directory (the working directory of the run).
pub struct TableResolver {
    table: ProjectTable,
    base: PathBuf,
}

impl TableResolver {
    /// Creates a resolver over `table` with relative roots joined onto `base`.
    #[must_use]
    pub fn new(table: ProjectTable, base: &Path) -> Self {
        Self { table, base: base.to_path_buf() }
    }
}

impl ProjectResolver for TableResolver {
    fn resolve_roots(&self, project: &str) -> Result<Vec<PathBuf>, ResolveError> {
        let roots = self.table.roots(project).ok_or_else(|| ResolveError::NotFound {
            project: project.to_string(),
            known: self.table.known_projects().join(", "),
        })?;
        Ok(roots.iter().map(|root| self.base.join(root)).collect())
    }

    fn root_project(&self) -> &str {
        &self.table.root_project
    }
}
