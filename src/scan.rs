//! Posts directory scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Lists the posts directory once and produces
//! the [`Manifest`] the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! ./                               # Source root
//! ├── config.toml                  # Site configuration (optional)
//! └── pages/
//!     └── posts/                   # Posts directory (configurable)
//!         ├── bowling.md
//!         ├── fizzbuzz.md
//!         └── roman-numerals.md
//! ```
//!
//! Every entry of the posts directory is listed: files and subdirectories
//! alike, with no filtering. Only names are read, never contents.
//!
//! ## Ordering
//!
//! By default entries keep the order the directory listing returns. That
//! order is platform dependent, so `order = "name"` in `config.toml` sorts
//! them instead.
//!
//! ## Filesystem Access
//!
//! The listing goes through [`DirectoryLister`], so tests can substitute an
//! in-memory listing for the real [`FsLister`].

use crate::config::{self, EntryOrder, SiteConfig};
use crate::types::{Manifest, PostRef};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read posts directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Source of directory entry names.
pub trait DirectoryLister {
    /// Return the names of all entries in `dir`, in enumeration order.
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}

/// Lists directories on the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }
}

/// List the entries of `dir` as post references.
///
/// The result holds exactly the names the lister returned, in its order.
/// A missing or unreadable directory, or a name that is not valid UTF-8,
/// fails with [`ScanError::DirectoryAccess`] naming `dir`.
pub fn load_post_list(
    lister: &impl DirectoryLister,
    dir: &Path,
) -> Result<Vec<PostRef>, ScanError> {
    let access_error = |source| ScanError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    lister
        .list(dir)
        .map_err(access_error)?
        .into_iter()
        .map(|name| {
            name.into_string().map_err(|raw| {
                access_error(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("entry name is not valid UTF-8: {raw:?}"),
                ))
            })
        })
        .collect()
}

/// Apply the configured listing order.
pub fn apply_order(mut posts: Vec<PostRef>, order: EntryOrder) -> Vec<PostRef> {
    if order == EntryOrder::Name {
        posts.sort();
    }
    posts
}

/// Scan the source root: load `config.toml`, then list the posts directory.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    scan_with(&FsLister, root, config)
}

/// Scan with an explicit lister and an already-resolved config.
pub fn scan_with(
    lister: &impl DirectoryLister,
    root: &Path,
    config: SiteConfig,
) -> Result<Manifest, ScanError> {
    let posts_dir = root.join(&config.posts_dir);
    let posts = apply_order(load_post_list(lister, &posts_dir)?, config.order);
    Ok(Manifest { posts, config })
}
