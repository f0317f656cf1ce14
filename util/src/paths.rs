use crate::config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Global storage root (absolute), from `config::storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let root = config::storage_root();
    let p = PathBuf::from(root);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Root of all uploaded course content: {STORAGE_ROOT}/uploads
pub fn uploads_root() -> PathBuf {
    storage_root().join("uploads")
}

/// A single course's upload folder: {STORAGE_ROOT}/uploads/{course_id}
pub fn course_upload_dir(course_id: i64) -> PathBuf {
    uploads_root().join(course_id.to_string())
}

/// Absolute path for a stored content row. `relative` is the value held in
/// `course_contents.content`, i.e. "{course_id}/{file_name}".
pub fn content_file_path(relative: &str) -> PathBuf {
    uploads_root().join(relative)
}

/// Reduce a client-supplied filename to a single safe path component.
///
/// Strips directory components (both `/` and `\` separators), drops control
/// characters, and rejects names that would resolve outside the course
/// directory. Returns `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or("").trim();

    let cleaned: String = name.chars().filter(|c| !c.is_control()).collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return None;
    }

    Some(cleaned)
}
