//! Shared test utilities for the post-index test suite.
//!
//! Provides fixture setup, an in-memory [`DirectoryLister`], and extractors
//! that pull the heading and navigation links back out of rendered markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let lister = MemoryLister::new().with_dir("/site/pages/posts", &["a.md"]);
//! let manifest = scan_with(&lister, Path::new("/site"), SiteConfig::default()).unwrap();
//!
//! let html = render_page(&manifest.posts, &manifest.config, "").into_string();
//! assert_eq!(nav_labels(&html), vec!["a"]);
//! ```

use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::scan::DirectoryLister;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// In-memory directory listing
// =========================================================================

/// A [`DirectoryLister`] backed by a map of directory → entry names.
///
/// Unknown directories fail with `NotFound`, like a missing path on disk.
#[derive(Debug, Default)]
pub struct MemoryLister {
    dirs: HashMap<PathBuf, Vec<OsString>>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>, entries: &[&str]) -> Self {
        self.dirs
            .insert(dir.into(), entries.iter().map(OsString::from).collect());
        self
    }
}

impl DirectoryLister for MemoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        self.dirs.get(dir).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir.display()),
            )
        })
    }
}

// =========================================================================
// Markup extractors
// =========================================================================

/// Text content of the first `<h1>`. Panics if there is none.
pub fn heading_text(html: &str) -> &str {
    let start = html.find("<h1>").expect("no <h1> in page") + "<h1>".len();
    let end = html[start..].find("</h1>").expect("unterminated <h1>") + start;
    &html[start..end]
}

/// All navigation links as `(href, label)` pairs, in document order.
pub fn nav_links(html: &str) -> Vec<(String, String)> {
    const OPEN: &str = "<li><a href=\"";
    let mut links = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(OPEN) {
        rest = &rest[start + OPEN.len()..];
        let href_end = rest.find('"').expect("unterminated href");
        let href = rest[..href_end].to_string();
        rest = &rest[href_end..];
        let label_start = rest.find('>').expect("unterminated <a>") + 1;
        let label_end = rest.find("</a>").expect("unterminated <a>");
        links.push((href, rest[label_start..label_end].to_string()));
        rest = &rest[label_end..];
    }
    links
}

/// Navigation link labels, in document order.
pub fn nav_labels(html: &str) -> Vec<String> {
    nav_links(html).into_iter().map(|(_, label)| label).collect()
}

/// Navigation link targets, in document order.
pub fn nav_hrefs(html: &str) -> Vec<String> {
    nav_links(html).into_iter().map(|(href, _)| href).collect()
}
