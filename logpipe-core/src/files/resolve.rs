use std::path::{Component, Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    NotFound,
    Forbidden,
    BadPath,
}

/// Resolves `file_name` to a regular file inside `data_dir`.
///
/// Traversal is rejected twice: lexically (`..`, absolute paths) before
/// touching the filesystem, and again after canonicalization so symlinks
/// cannot escape the directory.
pub fn resolve_data_file(data_dir: &Path, file_name: &str) -> Result<PathBuf, ResolveError> {
    if file_name.is_empty() || file_name.contains('\0') {
        return Err(ResolveError::BadPath);
    }

    let relative_path = PathBuf::from(file_name);

    // Path component validation (no traversal, no absolute paths)
    let mut has_normal = false;
    for component in relative_path.components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            _ => {
                // ParentDir, RootDir and Prefix (Windows) are forbidden
                return Err(ResolveError::Forbidden);
            }
        }
    }

    if !has_normal {
        return Err(ResolveError::BadPath);
    }

    let full_path = data_dir.join(&relative_path);

    let base_canon = data_dir
        .canonicalize()
        .map_err(|_| ResolveError::NotFound)?;

    let target_canon = match full_path.canonicalize() {
        Ok(p) => p,
        Err(_) => return Err(ResolveError::NotFound),
    };

    // Enforce containment
    if !target_canon.starts_with(&base_canon) {
        return Err(ResolveError::Forbidden);
    }

    if !target_canon.is_file() {
        return Err(ResolveError::NotFound);
    }

    Ok(target_canon)
}
