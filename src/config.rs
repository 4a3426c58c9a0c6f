//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Stock defaults fill in any
//! key the optional `config.toml` in the source root leaves out.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! posts_dir = "pages/posts"     # Directory listed at build time
//! title = "Gomi의 NextJS Code Kata\n(그 카타 아님)"
//! lang = "ko"                   # Document language (`<html lang>`)
//! order = "filesystem"          # "filesystem" or "name"
//!
//! [links]
//! base_path = "/posts"          # Prefix for every navigation link
//!
//! [style]
//! section_height = "40vh"       # Height of both the heading and the nav list
//! heading_color = "white"
//! heading_font_size = "2rem"
//! heading_padding = "10px"
//! scrollbar_width = "5px"
//! scrollbar_thumb = "gray"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [style]
//! heading_color = "#222"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults reproducing the stock page. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Posts directory, relative to the source root.
    pub posts_dir: String,
    /// Heading text. Line breaks are preserved on the page.
    pub title: String,
    /// Document language tag, e.g. `ko` or `en-US`.
    pub lang: String,
    /// Order in which posts are listed.
    pub order: EntryOrder,
    /// Navigation link settings.
    pub links: LinksConfig,
    /// Page style values fed into the generated CSS.
    pub style: StyleConfig,
}

pub const DEFAULT_TITLE: &str = "Gomi의 NextJS Code Kata\n(그 카타 아님)";

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posts_dir: "pages/posts".to_string(),
            title: DEFAULT_TITLE.to_string(),
            lang: "ko".to_string(),
            order: EntryOrder::default(),
            links: LinksConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "posts_dir must not be empty".into(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.lang.is_empty()
            || !self
                .lang
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::Validation(format!(
                "lang must be a language tag like \"en\" or \"ko-KR\", got {:?}",
                self.lang
            )));
        }
        if !self.links.base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "links.base_path must start with '/'".into(),
            ));
        }
        self.style.validate()
    }
}

/// How the posts listing is ordered.
///
/// `Filesystem` keeps whatever order the directory listing returns, which
/// differs between platforms. `Name` sorts by name for reproducible output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    #[default]
    Filesystem,
    Name,
}

/// Navigation link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// URL path every post link is placed under.
    pub base_path: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            base_path: "/posts".to_string(),
        }
    }
}

/// Style values for the page. Each one is a raw CSS value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Height of the heading and of the scrollable nav container.
    pub section_height: String,
    pub heading_color: String,
    pub heading_font_size: String,
    pub heading_padding: String,
    /// Scrollbar width, only honoured by engines that style scrollbars.
    pub scrollbar_width: String,
    /// Scrollbar thumb color.
    pub scrollbar_thumb: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            section_height: "40vh".to_string(),
            heading_color: "white".to_string(),
            heading_font_size: "2rem".to_string(),
            heading_padding: "10px".to_string(),
            scrollbar_width: "5px".to_string(),
            scrollbar_thumb: "gray".to_string(),
        }
    }
}

impl StyleConfig {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("section_height", self.section_height.as_str()),
            ("heading_color", self.heading_color.as_str()),
            ("heading_font_size", self.heading_font_size.as_str()),
            ("heading_padding", self.heading_padding.as_str()),
            ("scrollbar_width", self.scrollbar_width.as_str()),
            ("scrollbar_thumb", self.scrollbar_thumb.as_str()),
        ]
    }

    /// Reject empty values and anything that could escape the declaration
    /// or the `<style>` element.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "style.{key} must not be empty"
                )));
            }
            if value.contains([';', '{', '}', '<', '>']) {
                return Err(ConfigError::Validation(format!(
                    "style.{key} contains a forbidden character: {value:?}"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse config text. Missing keys take their defaults; the result is validated.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Stock defaults are used when the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    parse_config(&fs::read_to_string(&config_path)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# post-index Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as config.toml in the source root.
# Unknown keys will cause an error.

# Directory whose entries become navigation links, relative to the source root.
posts_dir = "pages/posts"

# Page heading. "\n" starts a new line on the page.
title = "Gomi의 NextJS Code Kata\n(그 카타 아님)"

# Language of the page, written to <html lang="...">.
lang = "ko"

# Listing order: "filesystem" keeps the directory's own order (platform
# dependent), "name" sorts entries by name.
order = "filesystem"

# ---------------------------------------------------------------------------
# Navigation links
# ---------------------------------------------------------------------------
[links]
# Each post links to <base_path>/<file name without extension>.
base_path = "/posts"

# ---------------------------------------------------------------------------
# Style (raw CSS values)
# ---------------------------------------------------------------------------
[style]
# Height of the heading and of the scrollable list below it.
section_height = "40vh"

heading_color = "white"
heading_font_size = "2rem"
heading_padding = "10px"

# Thin scrollbar, applied where the browser supports scrollbar styling.
scrollbar_width = "5px"
scrollbar_thumb = "gray"
"##
}

/// Generate the page's scoped CSS from style config.
///
/// Every selector is nested under `.post-index` so the rules only apply to
/// the page body they were generated for.
pub fn generate_page_css(style: &StyleConfig) -> String {
    format!(
        r#".post-index h1 {{
    display: flex;
    justify-content: center;
    align-items: center;
    height: {height};
    white-space: pre-wrap;
    color: {color};
    padding: {padding};
    text-align: center;
    font-size: {font_size};
    font-weight: bolder;
}}

.post-index .nav-container {{
    overflow-y: auto;
    overflow-x: hidden;
    box-sizing: border-box;
    height: {height};
    margin: auto;
}}

.post-index .nav-container::-webkit-scrollbar {{
    width: {scrollbar_width};
}}

.post-index .nav-container::-webkit-scrollbar-thumb {{
    background-color: {scrollbar_thumb};
}}"#,
        height = style.section_height,
        color = style.heading_color,
        padding = style.heading_padding,
        font_size = style.heading_font_size,
        scrollbar_width = style.scrollbar_width,
        scrollbar_thumb = style.scrollbar_thumb,
    )
}
