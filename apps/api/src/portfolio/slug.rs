//! Slug generation for portfolio URLs.
//!
//! Uniqueness is probabilistic only: the 5-character random suffix is the
//! sole collision mitigation, and no existence check is made before use.

use rand::Rng;

const SUFFIX_LEN: usize = 5;
const BASE36: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Reduces a display string to a URL-safe fragment: lowercase, strip
/// everything outside word characters/whitespace/hyphen, collapse
/// whitespace and underscore runs into single hyphens, trim hyphens.
fn slugify(input: &str) -> String {
    let lower = input.to_lowercase();
    let kept: String = lower
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut pending_hyphen = false;
    for c in kept.chars() {
        if c.is_whitespace() || c == '_' {
            pending_hyphen = !out.is_empty();
        } else {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(c);
        }
    }
    out.trim_matches('-').to_string()
}

/// Derives the slug for a new portfolio from display name and title, plus a
/// random base-36 suffix. Empty inputs fall back to the literal "portfolio".
pub fn generate_slug(name: &str, title: &str) -> String {
    let parts: Vec<String> = [slugify(name), slugify(title)]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    let base = if parts.is_empty() {
        "portfolio".to_string()
    } else {
        parts.join("-")
    };

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{base}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_slug_shape(slug: &str) {
        assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in slug {slug:?}"
        );
        let suffix = &slug[slug.len() - SUFFIX_LEN..];
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(slug.as_bytes()[slug.len() - SUFFIX_LEN - 1], b'-');
    }

    #[test]
    fn test_slug_shape_for_name_and_title() {
        let slug = generate_slug("Ada Lovelace", "Software Engineer");
        assert!(slug.starts_with("ada-lovelace-software-engineer-"));
        assert_slug_shape(&slug);
    }

    #[test]
    fn test_empty_inputs_fall_back_to_portfolio() {
        let slug = generate_slug("", "");
        assert!(slug.starts_with("portfolio-"));
        assert_eq!(slug.len(), "portfolio-".len() + SUFFIX_LEN);
        assert_slug_shape(&slug);
    }

    #[test]
    fn test_name_only_when_title_empty() {
        let slug = generate_slug("Grace Hopper", "");
        assert!(slug.starts_with("grace-hopper-"));
        assert_slug_shape(&slug);
    }

    #[test]
    fn test_punctuation_stripped() {
        let slug = generate_slug("José Álvarez-Núñez, Jr.", "C++ / Rust Dev!");
        assert_slug_shape(&slug);
        assert!(!slug.contains('+'));
        assert!(!slug.contains(','));
        assert!(!slug.contains('.'));
    }

    #[test]
    fn test_underscores_and_whitespace_collapse_to_single_hyphen() {
        assert_eq!(slugify("snake_case  name"), "snake-case-name");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_hyphens_preserved() {
        assert_eq!(slugify("Jean-Luc"), "jean-luc");
    }

    #[test]
    fn test_suffix_length_is_five() {
        let slug = generate_slug("Ada", "Engineer");
        let parts: Vec<&str> = slug.rsplitn(2, '-').collect();
        assert_eq!(parts[0].len(), SUFFIX_LEN);
    }
}
