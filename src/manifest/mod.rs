//! Source file descriptor data model and its JSON form.
//!
//! The serialized layout is srclib's Srcfile:
//!
//! ```json
//! {
//!   "SourceUnits": [
//!     {
//!       "Name": "jdk",
//!       "Type": "Java",
//!       "Files": ["src/share/classes/java/lang/Object.java"],
//!       "Data": { "Type": "JDK", "JDKProjectName": "jdk" }
//!     }
//!   ],
//!   "Scanners": []
//! }
//! ```

pub mod builder;
pub mod paths;

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::SrcfileError;

/// Language tag carried by every unit this tool emits.
pub const UNIT_TYPE: &str = "Java";

/// Whether a unit is the JDK itself or a project built on top of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectMarker {
    /// The JDK root project.
    #[serde(rename = "JDK")]
    JdkRoot,
    /// A JDK-derived project such as langtools or nashorn.
    #[serde(rename = "JDKBased")]
    JdkBased,
}

impl ProjectMarker {
    /// Exact, case-sensitive match of `project` against `root_project`.
    ///
    /// Anything else, including identifiers no resolver knows, is
    /// `JdkBased`; rejecting unknown projects is the resolver's job.
    #[must_use]
    pub fn for_project(project: &str, root_project: &str) -> Self {
        if project == root_project {
            Self::JdkRoot
        } else {
            Self::JdkBased
        }
    }
}

/// Extension payload of a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitData {
    #[serde(rename = "Type")]
    marker: ProjectMarker,
    #[serde(rename = "JDKProjectName")]
    project_name: String,
}

impl UnitData {
    /// The JDK root / JDK-based marker.
    #[must_use]
    pub fn marker(&self) -> ProjectMarker {
        self.marker
    }

    /// The project identifier the unit was generated for.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }
}

/// One logical compilation unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceUnit {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    unit_type: String,
    #[serde(rename = "Files")]
    files: Vec<String>,
    #[serde(rename = "Data")]
    data: UnitData,
}

impl SourceUnit {
    /// A Java unit named after `project` holding `files` in the given order.
    #[must_use]
    pub fn java(project: &str, files: Vec<String>, marker: ProjectMarker) -> Self {
        Self {
            name: project.to_string(),
            unit_type: UNIT_TYPE.to_string(),
            files,
            data: UnitData { marker, project_name: project.to_string() },
        }
    }

    /// Unit name (the project identifier).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Language tag, always [`UNIT_TYPE`] for units built here.
    #[must_use]
    pub fn unit_type(&self) -> &str {
        &self.unit_type
    }

    /// Files relative to the working directory, `/`-separated.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Extension payload.
    #[must_use]
    pub fn data(&self) -> &UnitData {
        &self.data
    }
}

/// The document handed to downstream tooling.
///
/// `scanners` is always empty: the file list is final and must not be
/// re-derived downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    #[serde(rename = "SourceUnits")]
    units: Vec<SourceUnit>,
    #[serde(rename = "Scanners")]
    scanners: Vec<String>,
}

impl Manifest {
    /// Wraps a single unit with an empty scanner list.
    #[must_use]
    pub fn single(unit: SourceUnit) -> Self {
        Self { units: vec![unit], scanners: Vec::new() }
    }

    /// Source units, in order.
    #[must_use]
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Downstream scanners to run.
    #[must_use]
    pub fn scanners(&self) -> &[String] {
        &self.scanners
    }

    /// Renders the manifest as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`SrcfileError::Serialize`] if rendering fails.
    pub fn to_json(&self) -> Result<String, SrcfileError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Renders the manifest fully, then writes and flushes it to `out`.
    ///
    /// Nothing is written if rendering fails.
    ///
    /// # Errors
    ///
    /// Returns [`SrcfileError::Serialize`] or [`SrcfileError::Output`].
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), SrcfileError> {
        let json = self.to_json()?;
        out.write_all(json.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn marker_is_root_only_for_exact_match() {
        assert_eq!(ProjectMarker::for_project("jdk", "jdk"), ProjectMarker::JdkRoot);
        assert_eq!(ProjectMarker::for_project("JDK", "jdk"), ProjectMarker::JdkBased);
        assert_eq!(ProjectMarker::for_project("jdk ", "jdk"), ProjectMarker::JdkBased);
        assert_eq!(ProjectMarker::for_project("langtools", "jdk"), ProjectMarker::JdkBased);
        assert_eq!(ProjectMarker::for_project("nashorn", "jdk"), ProjectMarker::JdkBased);
        assert_eq!(ProjectMarker::for_project("", "jdk"), ProjectMarker::JdkBased);
    }

    #[test]
    fn serializes_srcfile_layout() {
        let manifest = Manifest::single(SourceUnit::java(
            "jdk",
            vec!["jdk/A.java".into()],
            ProjectMarker::JdkRoot,
        ));
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            value,
            json!({
                "SourceUnits": [{
                    "Name": "jdk",
                    "Type": "Java",
                    "Files": ["jdk/A.java"],
                    "Data": {"Type": "JDK", "JDKProjectName": "jdk"}
                }],
                "Scanners": []
            })
        );
    }

    #[test]
    fn jdk_based_marker_serializes_distinctly() {
        let unit = SourceUnit::java("nashorn", Vec::new(), ProjectMarker::JdkBased);
        let value = serde_json::to_value(unit.data()).unwrap();
        assert_eq!(value, json!({"Type": "JDKBased", "JDKProjectName": "nashorn"}));
    }

    #[test]
    fn unknown_marker_value_is_rejected() {
        let parsed: Result<UnitData, _> =
            serde_json::from_value(json!({"Type": "Other", "JDKProjectName": "x"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn write_to_emits_one_document_with_newline() {
        let manifest = Manifest::single(SourceUnit::java(
            "langtools",
            vec!["langtools/C.java".into()],
            ProjectMarker::JdkBased,
        ));
        let mut out = Vec::new();
        manifest.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: Manifest = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, manifest);
        assert!(parsed.scanners().is_empty());
    }
}
