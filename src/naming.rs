//! Post file name parsing and navigation link derivation.
//!
//! Every entry in the posts directory becomes one link. The label is the file
//! name without its final extension, and the target is that same stem,
//! percent-encoded, under the configured base path:
//!
//! - `fizzbuzz.md` → label "fizzbuzz", href `/posts/fizzbuzz`
//! - `hello world.mdx` → label "hello world", href `/posts/hello%20world`
//! - `archive.tar.gz` → label "archive.tar", href `/posts/archive.tar`
//! - `.drafts` → label ".drafts" (a leading dot is not an extension)
//!
//! Entries that differ only in their extension (`kata.md`, `kata.txt`) map
//! to the same label and href. Each still gets its own link, in listing order.

/// A navigation link derived from one post reference.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// The post name without its final extension.
///
/// A dot in first or last position does not start an extension, so
/// dotfiles and names ending in `.` are returned whole.
pub fn post_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

/// Derive the navigation link for a post under `base_path`.
pub fn nav_link(name: &str, base_path: &str) -> NavLink {
    let stem = post_stem(name);
    NavLink {
        label: stem.to_string(),
        href: format!(
            "{}/{}",
            base_path.trim_end_matches('/'),
            urlencoding::encode(stem)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_file() {
        assert_eq!(post_stem("fizzbuzz.md"), "fizzbuzz");
    }

    #[test]
    fn only_last_extension_is_stripped() {
        assert_eq!(post_stem("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn no_extension() {
        assert_eq!(post_stem("README"), "README");
    }

    #[test]
    fn dotfile_is_not_an_extension() {
        assert_eq!(post_stem(".drafts"), ".drafts");
    }

    #[test]
    fn trailing_dot_kept() {
        assert_eq!(post_stem("notes."), "notes.");
    }

    #[test]
    fn names_differing_only_by_extension_share_a_link() {
        let md = nav_link("kata.md", "/posts");
        let txt = nav_link("kata.txt", "/posts");
        assert_eq!(md, txt);
        assert_eq!(md.href, "/posts/kata");
    }

    #[test]
    fn link_under_base_path() {
        let link = nav_link("bowling.md", "/posts");
        assert_eq!(link.label, "bowling");
        assert_eq!(link.href, "/posts/bowling");
    }

    #[test]
    fn link_base_path_trailing_slash() {
        assert_eq!(nav_link("bowling.md", "/posts/").href, "/posts/bowling");
        assert_eq!(nav_link("bowling.md", "/").href, "/bowling");
    }

    #[test]
    fn link_percent_encodes_stem() {
        let link = nav_link("hello world.mdx", "/posts");
        assert_eq!(link.label, "hello world");
        assert_eq!(link.href, "/posts/hello%20world");
    }

    #[test]
    fn link_encodes_non_ascii() {
        let link = nav_link("카타.md", "/posts");
        assert_eq!(link.label, "카타");
        assert_eq!(link.href, "/posts/%EC%B9%B4%ED%83%80");
    }
}
