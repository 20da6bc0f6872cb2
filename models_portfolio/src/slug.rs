//! URL slug derivation for projects.

/// Derive a URL-safe slug from a title: lowercase, alphanumeric runs kept,
/// everything else collapsed into single hyphens.
///
/// Idempotent, so a slug fed back through derivation is unchanged. Called
/// only when a project is created without an explicit slug; an existing slug
/// is never re-derived.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Cool App!"), "my-cool-app");
        assert_eq!(slugify("Hello, World"), "hello-world");
        assert_eq!(slugify("rust 2024 edition"), "rust-2024-edition");
    }

    #[test]
    fn test_slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  spaced -- out  "), "spaced-out");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("--a--b--"), "a-b");
    }

    #[test]
    fn test_slugify_non_ascii_acts_as_separator() {
        // No accent folding: non-ASCII letters are treated like any other
        // separator, they are not transliterated.
        assert_eq!(slugify("Título"), "t-tulo");
        assert_eq!(slugify("naïve approach"), "na-ve-approach");
    }

    #[test]
    fn test_slugify_idempotent() {
        for title in ["My Cool App!", "Ünicode – Dashes", "a_b_c", "CAPS 99"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn test_slugify_url_safe() {
        let slug = slugify("Crazy ~!@#$%^&*() Título 100%");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in {slug:?}"
        );
    }
}
