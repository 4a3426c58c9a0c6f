//! CLI output formatting for all pipeline stages.
//!
//! Each post is shown by its positional index and name, with the source
//! directory and the generated link as indented context.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Posts (3)
//!     Source: pages/posts/
//!     001 bowling.md
//!     002 fizzbuzz.md
//!     003 roman-numerals.md
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//!     001 bowling → /posts/bowling
//!     002 fizzbuzz → /posts/fizzbuzz
//!
//! Generated 1 page, 2 links
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::generate::Generated;
use crate::types::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output: the listed posts, then the config source.
///
/// `has_config_file` says whether a `config.toml` was found in the source root.
pub fn format_scan_output(manifest: &Manifest, has_config_file: bool) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Posts ({})", manifest.posts.len()));
    lines.push(format!(
        "{}Source: {}/",
        indent(1),
        manifest.config.posts_dir.trim_end_matches('/')
    ));
    if manifest.posts.is_empty() {
        lines.push(format!("{}(empty)", indent(1)));
    }
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), post));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if has_config_file {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    let has_config_file = source_root.join("config.toml").is_file();
    for line in format_scan_output(manifest, has_config_file) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: the page, each link it carries, and a summary.
pub fn format_generate_output(generated: &Generated, output_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    let page = generated
        .page
        .strip_prefix(output_root)
        .unwrap_or(&generated.page);
    lines.push(format!("Home → {}", page.display()));
    for (i, link) in generated.links.iter().enumerate() {
        lines.push(format!(
            "{}{} {} → {}",
            indent(1),
            format_index(i + 1),
            link.label,
            link.href
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}",
        plural(generated.links.len(), "link")
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(generated: &Generated, output_root: &Path) {
    for line in format_generate_output(generated, output_root) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::naming::nav_link;
    use std::path::PathBuf;

    fn manifest(posts: &[&str]) -> Manifest {
        Manifest {
            posts: posts.iter().map(|p| p.to_string()).collect(),
            config: SiteConfig::default(),
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn scan_output_lists_posts_in_order() {
        let lines = format_scan_output(&manifest(&["b.md", "a.md"]), true);
        assert_eq!(
            lines,
            vec![
                "Posts (2)",
                "    Source: pages/posts/",
                "    001 b.md",
                "    002 a.md",
                "",
                "Config",
                "    config.toml",
            ]
        );
    }

    #[test]
    fn scan_output_empty_directory() {
        let lines = format_scan_output(&manifest(&[]), false);
        assert_eq!(lines[0], "Posts (0)");
        assert_eq!(lines[2], "    (empty)");
        assert_eq!(lines.last().unwrap(), "    (stock defaults)");
    }

    #[test]
    fn generate_output_lists_links() {
        let generated = Generated {
            page: PathBuf::from("dist/index.html"),
            links: vec![
                nav_link("bowling.md", "/posts"),
                nav_link("fizzbuzz.md", "/posts"),
            ],
        };
        let lines = format_generate_output(&generated, Path::new("dist"));
        assert_eq!(
            lines,
            vec![
                "Home → index.html",
                "    001 bowling → /posts/bowling",
                "    002 fizzbuzz → /posts/fizzbuzz",
                "",
                "Generated 1 page, 2 links",
            ]
        );
    }

    #[test]
    fn generate_output_singular_link() {
        let generated = Generated {
            page: PathBuf::from("out/index.html"),
            links: vec![nav_link("a.md", "/posts")],
        };
        let lines = format_generate_output(&generated, Path::new("out"));
        assert_eq!(lines.last().unwrap(), "Generated 1 page, 1 link");
    }
}
