//! Shared types passed between pipeline stages.
//!
//! The scan stage serializes a [`Manifest`] to JSON and the generate stage
//! reads it back, so both sides must agree on this shape.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};

/// A post file name, extension included, relative to the posts directory.
///
/// Names are kept exactly as the directory listing returned them. Link
/// derivation happens later in [`crate::naming`].
pub type PostRef = String;

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Post references in listing order (or name order, see [`crate::config::EntryOrder`]).
    pub posts: Vec<PostRef>,
    pub config: SiteConfig,
}
