//! Pure path algebra for expressing scanned files relative to the working
//! directory. Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::error::SrcfileError;

/// Removes `.` components and folds `..` into the preceding normal
/// component. A `..` directly under the root is dropped; a leading `..` in
/// a relative path is kept.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Expresses `path` relative to `working_dir`, joined with `/`.
///
/// Joining the result back onto `working_dir` yields `path` (modulo `.` and
/// `..` segments).
///
/// # Errors
///
/// Returns [`SrcfileError::PathMismatch`] if `path` is not strictly below
/// `working_dir`, and [`SrcfileError::NonUtf8Path`] if a segment is not
/// valid UTF-8.
pub fn relativize(path: &Path, working_dir: &Path) -> Result<String, SrcfileError> {
    let mismatch = || SrcfileError::PathMismatch {
        path: path.to_path_buf(),
        working_dir: working_dir.to_path_buf(),
    };

    let normalized = normalize_lexically(path);
    let base = normalize_lexically(working_dir);
    let relative = normalized.strip_prefix(&base).map_err(|_| mismatch())?;

    let mut segments = Vec::new();
    for component in relative.components() {
        let Component::Normal(segment) = component else {
            return Err(mismatch());
        };
        let segment = segment
            .to_str()
            .ok_or_else(|| SrcfileError::NonUtf8Path { path: path.to_path_buf() })?;
        segments.push(segment);
    }
    if segments.is_empty() {
        return Err(mismatch());
    }
    Ok(segments.join("/"))
}
