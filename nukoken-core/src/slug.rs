//! URL slug generation for recipes and blog posts.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a URL slug from a title: lowercase, strip diacritics, drop
/// everything that is not alphanumeric, and hyphenate word boundaries.
///
/// The result is deterministic, so regenerating after a title edit always
/// yields the same slug for the same title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    // NFD splits accented letters into base + combining mark; dropping the
    // marks leaves the ASCII base ("é" -> "e").
    for c in title.to_lowercase().nfd().filter(|&c| !is_combining_mark(c)) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Romige Pasta Carbonara"), "romige-pasta-carbonara");
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(slugify("Gegrilde Groenten à la Crème"), "gegrilde-groenten-a-la-creme");
        assert_eq!(slugify("Püree"), "puree");
    }

    #[test]
    fn test_drops_special_characters() {
        assert_eq!(slugify("Taarten & Cakes!"), "taarten-cakes");
        assert_eq!(slugify("Kip (pittig)"), "kip-pittig");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("Soep  -  van   de dag"), "soep-van-de-dag");
        assert_eq!(slugify("  Brood  "), "brood");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(slugify("Appeltaart"), slugify("Appeltaart"));
    }
}
