use std::fs::OpenOptions;
use std::path::Path;

/// Path of the database file behind a file-backed SQLite url, if any.
fn sqlite_file(db_url: &str) -> Option<&str> {
    let rest = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(':') || db_url.contains("mode=memory") {
        return None;
    }
    Some(path)
}

fn touch(file_name: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(file_name).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name)
        .map(|_| ())
}

/// Makes sure the SQLite file exists before the pool tries to open it.
/// Other backends are left alone.
pub fn create_dev_db(db_url: &str) {
    let Some(path) = sqlite_file(db_url) else {
        return;
    };
    match touch(path) {
        Ok(()) => tracing::debug!("using sqlite database at {}", path),
        Err(e) => tracing::warn!("could not create sqlite database {}: {}", path, e),
    }
}
