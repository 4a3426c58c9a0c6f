//! HTML page generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest, validates its post
//! list, and writes a single static page.
//!
//! ## Generated Page
//!
//! ```text
//! dist/
//! └── index.html      # Heading + scrollable navigation list
//! ```
//!
//! The page has two stacked regions of equal height: a centered heading
//! showing the configured title (line breaks preserved), and a scrollable
//! container with one link per post, in manifest order. Nothing is
//! paginated or filtered.
//!
//! ## CSS
//!
//! Styles come from [`config::generate_page_css`] and are inlined verbatim in
//! a `<style>` element. Style values cannot contain `<` or `>` (see
//! [`config::StyleConfig::validate`]), so the CSS cannot close the element.
//! The rules are scoped under the `post-index` body class.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated post names are escaped.

use crate::config::{self, LinksConfig, SiteConfig};
use crate::naming::{NavLink, nav_link};
use crate::types::PostRef;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid post list: {0}")]
    InvalidInput(String),
}

/// What a successful generate run produced.
#[derive(Debug)]
pub struct Generated {
    /// Path of the written page.
    pub page: PathBuf,
    /// Links rendered on the page, in order.
    pub links: Vec<NavLink>,
}

/// Read the manifest at `manifest_path` and write `index.html` into `output_dir`.
///
/// The page is rendered completely before anything is written, so a failure
/// leaves no partial output behind.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<Generated, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: serde_json::Value = serde_json::from_str(&manifest_content)?;

    let posts = validate_posts(&manifest)?;
    let site_config: SiteConfig = match manifest.get("config") {
        Some(value) => serde_json::from_value(value.clone())?,
        None => SiteConfig::default(),
    };
    site_config.validate()?;

    let css = config::generate_page_css(&site_config.style);
    let page = render_page(&posts, &site_config, &css);

    fs::create_dir_all(output_dir)?;
    let page_path = output_dir.join("index.html");
    fs::write(&page_path, page.into_string())?;

    Ok(Generated {
        page: page_path,
        links: posts
            .iter()
            .map(|post| nav_link(post, &site_config.links.base_path))
            .collect(),
    })
}

/// Extract the post list from a raw manifest, failing fast on malformed data.
///
/// Rejects a missing or non-array `posts` field, non-string items, and names
/// that cannot be a single directory entry (empty, `.`, `..`, or containing
/// `/` or NUL).
pub fn validate_posts(manifest: &serde_json::Value) -> Result<Vec<PostRef>, GenerateError> {
    let posts = manifest
        .get("posts")
        .ok_or_else(|| GenerateError::InvalidInput("manifest has no `posts` field".into()))?;
    let items = posts.as_array().ok_or_else(|| {
        GenerateError::InvalidInput(format!(
            "`posts` must be an array, found {}",
            json_kind(posts)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let name = item.as_str().ok_or_else(|| {
                GenerateError::InvalidInput(format!(
                    "posts[{idx}] must be a string, found {}",
                    json_kind(item)
                ))
            })?;
            if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\0']) {
                return Err(GenerateError::InvalidInput(format!(
                    "posts[{idx}] is not a valid entry name: {name:?}"
                )));
            }
            Ok(name.to_string())
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body.post-index {
                (content)
            }
        }
    }
}

/// Renders the post navigation list, one link per post in input order.
pub fn render_nav(posts: &[PostRef], links: &LinksConfig) -> Markup {
    html! {
        nav.post-nav {
            ul {
                @for post in posts {
                    @let link = nav_link(post, &links.base_path);
                    li { a href=(link.href) { (link.label) } }
                }
            }
        }
    }
}

/// Renders the page: heading plus scrollable navigation container.
///
/// Only the title, language and link settings of `site` are read; the
/// style arrives already rendered as `css`. Pure: the same inputs always
/// produce byte-identical markup.
pub fn render_page(posts: &[PostRef], site: &SiteConfig, css: &str) -> Markup {
    let document_title = site.title.lines().collect::<Vec<_>>().join(" ");

    let content = html! {
        h1 { (site.title) }
        div.nav-container {
            (render_nav(posts, &site.links))
        }
    };

    base_document(&document_title, &site.lang, css, content)
}

// ============================================================================
// Tests
// ============================================================================
