//! Project table: which source roots belong to which OpenJDK project.
//!
//! The table is plain configuration. It is either the built-in OpenJDK 8
//! forest layout or a YAML file of the form:
//!
//! ```yaml
//! root_project: jdk
//! projects:
//!   jdk: [jdk/src/share/classes]
//!   langtools: [langtools/src/share/classes]
//! ```
//!
//! Relative roots are resolved against the working directory by the live
//! resolver adapter.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SrcfileError;

/// Identifier of the JDK itself in the built-in table.
pub const JDK_PROJECT: &str = "jdk";

fn default_root_project() -> String {
    JDK_PROJECT.to_string()
}

/// Mapping of project identifiers to their ordered source roots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectTable {
    /// Identifier whose manifest is marked as the JDK root project.
    #[serde(default = "default_root_project")]
    pub root_project: String,
    /// Source roots per project, in scan order.
    pub projects: BTreeMap<String, Vec<PathBuf>>,
}

impl ProjectTable {
    /// The OpenJDK 8 forest layout, relative to the forest checkout.
    #[must_use]
    pub fn openjdk_default() -> Self {
        let mut projects = BTreeMap::new();
        projects.insert(
            JDK_PROJECT.to_string(),
            vec![
                PathBuf::from("jdk/src/share/classes"),
                PathBuf::from("jdk/src/solaris/classes"),
                PathBuf::from("jdk/src/macosx/classes"),
                PathBuf::from("jdk/src/windows/classes"),
            ],
        );
        projects
            .insert("langtools".to_string(), vec![PathBuf::from("langtools/src/share/classes")]);
        projects.insert("nashorn".to_string(), vec![PathBuf::from("nashorn/src")]);
        Self { root_project: default_root_project(), projects }
    }

    /// Reads and validates a table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`SrcfileError::Config`] if the file cannot be read, is not
    /// valid YAML for this shape, or fails [`ProjectTable::validate`].
    pub fn load(path: &Path) -> Result<Self, SrcfileError> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SrcfileError::Config { origin: origin.clone(), reason: e.to_string() })?;
        Self::from_yaml_str(&content, &origin)
    }

    /// Parses and validates a table from YAML text.
    ///
    /// `origin` only appears in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`SrcfileError::Config`] on parse or validation failure.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, SrcfileError> {
        let table: Self = serde_yaml::from_str(content)
            .map_err(|e| SrcfileError::Config { origin: origin.to_string(), reason: e.to_string() })?;
        table.validate(origin)?;
        Ok(table)
    }

    /// Checks that the root project is listed and every project has roots.
    ///
    /// # Errors
    ///
    /// Returns [`SrcfileError::Config`] describing the first problem found.
    pub fn validate(&self, origin: &str) -> Result<(), SrcfileError> {
        let invalid =
            |reason: String| SrcfileError::Config { origin: origin.to_string(), reason };

        if !self.projects.contains_key(&self.root_project) {
            return Err(invalid(format!(
                "root project '{}' is not listed under projects",
                self.root_project
            )));
        }
        if let Some((id, _)) = self.projects.iter().find(|(_, roots)| roots.is_empty()) {
            return Err(invalid(format!("project '{id}' has no source roots")));
        }
        Ok(())
    }

    /// Source roots for `project`, if the table knows it.
    #[must_use]
    pub fn roots(&self, project: &str) -> Option<&[PathBuf]> {
        self.projects.get(project).map(Vec::as_slice)
    }

    /// Known project identifiers, sorted.
    #[must_use]
    pub fn known_projects(&self) -> Vec<&str> {
        self.projects.keys().map(String::as_str).collect()
    }
}

impl Default for ProjectTable {
    fn default() -> Self {
        Self::openjdk_default()
    }
}
