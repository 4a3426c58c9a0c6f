//! # post-index
//!
//! A minimal static site generator that turns a directory of blog posts into a
//! single navigation page. The directory is the data source: every entry in it
//! becomes one link, listed below a fixed heading.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      pages/posts/  →  manifest.json    (directory listing → post list)
//! 2. Generate  manifest      →  dist/index.html  (post list → static page)
//! ```
//!
//! The scan stage reads the posts directory exactly once per build. The
//! generate stage never touches the posts directory: it only sees the
//! manifest, validates it, and renders.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists the posts directory through a [`scan::DirectoryLister`] |
//! | [`generate`] | Stage 2 — validates the post list and renders the page using Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | The manifest shared between stages |
//! | [`naming`] | Post name → navigation link derivation |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Injected Directory Listing
//!
//! The only filesystem read goes through [`scan::DirectoryLister`]. The real
//! build uses [`scan::FsLister`]; tests use an in-memory listing.
//!
//! ## Styles as Data
//!
//! The page CSS is produced from [`config::StyleConfig`] by
//! [`config::generate_page_css`] and handed to the renderer as a string, so
//! [`generate::render_page`] is a pure function of its arguments.
//!
//! ## Listing Order
//!
//! Directory enumeration order is platform dependent. It is kept as-is by
//! default; `order = "name"` sorts entries for reproducible builds.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
