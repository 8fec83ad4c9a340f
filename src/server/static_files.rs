//! Document-root path resolution and bounded file reading.
//!
//! The resolver turns a request path into an opened file in at most two
//! attempts: the concatenated candidate itself, then once more with the
//! index filename appended. The traversal guard is a plain substring test
//! that runs before anything touches the filesystem, so no syscall is ever
//! made on a path containing `..`.

use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::config::StaticFilesConfig;

/// Filename substituted when the requested path is absent or a directory.
pub const INDEX_FILE: &str = "index.html";
/// Resolved paths stay under this length; appends that would reach it are
/// skipped and the unmodified path is retried instead.
pub const MAX_RESOLVED_PATH_LEN: usize = 512;
/// Upper bound on the bytes read from a file into memory. Larger files are
/// served truncated, with Content-Length matching what was actually read.
pub const MAX_FILE_SIZE: usize = 1024 * 1024;

/// Outcome of resolving one request path against the document root.
#[derive(Debug)]
pub enum Resolution {
    /// The path contained `..`; answer with the canned 400.
    Blocked,
    /// Nothing servable even after the index fallback; answer with 404.
    NotFound,
    /// An opened regular file plus the final path it was opened under,
    /// which is what the MIME classifier should see.
    Found { file: File, path: String },
}

/// Resolves a request path to a file under the document root.
///
/// The candidate is built by plain string concatenation, so the request path
/// keeps its leading `/`. The index fallback is attempted exactly once before
/// giving up.
pub async fn resolve(cfg: &StaticFilesConfig, request_path: &str) -> Resolution {
    // Sole traversal defense; must come before any filesystem access.
    if request_path.contains("..") {
        return Resolution::Blocked;
    }

    let mut path = format!("{}{}", cfg.root, request_path);

    if let Some(file) = open_regular(&path).await {
        return Resolution::Found { file, path };
    }

    debug!("{} not servable, retrying with {}", path, INDEX_FILE);

    if !path.ends_with('/') && path.len() + 1 < MAX_RESOLVED_PATH_LEN {
        path.push('/');
    }
    if path.len() + INDEX_FILE.len() < MAX_RESOLVED_PATH_LEN {
        path.push_str(INDEX_FILE);
    }

    match open_regular(&path).await {
        Some(file) => Resolution::Found { file, path },
        None => Resolution::NotFound,
    }
}

/// Opens `path` if it exists and is not a directory.
async fn open_regular(path: &str) -> Option<File> {
    let file = File::open(path).await.ok()?;
    let meta = file.metadata().await.ok()?;

    if meta.is_dir() {
        return None;
    }

    Some(file)
}

/// Reads at most [`MAX_FILE_SIZE`] bytes from an opened file.
///
/// A file larger than the bound is silently truncated on the wire; the
/// shortfall is logged here because nothing downstream can tell.
pub async fn read_contents(file: File) -> std::io::Result<Vec<u8>> {
    let size = file.metadata().await?.len();

    let mut contents = Vec::with_capacity(size.min(MAX_FILE_SIZE as u64) as usize);
    file.take(MAX_FILE_SIZE as u64)
        .read_to_end(&mut contents)
        .await?;

    if (contents.len() as u64) < size {
        warn!(
            "serving {} of {} bytes, file exceeds the in-memory read bound",
            contents.len(),
            size
        );
    }

    Ok(contents)
}
