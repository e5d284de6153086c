//! The recipe browse engine: filter criteria, matching, and sorting.
//!
//! Criteria deserialize straight from the browse page's query string and
//! serialize back to it, so a filtered view is fully described by its URL.

use serde::{Deserialize, Deserializer};

use crate::types::Recipe;

/// Sort order for the browse view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Popular,
    Alphabetical,
    TimeAsc,
    TimeDesc,
    ServingsAsc,
    ServingsDesc,
}

impl SortKey {
    pub const ALL: &'static [SortKey] = &[
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Popular,
        SortKey::Alphabetical,
        SortKey::TimeAsc,
        SortKey::TimeDesc,
        SortKey::ServingsAsc,
        SortKey::ServingsDesc,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Alphabetical => "alphabetical",
            SortKey::TimeAsc => "time-asc",
            SortKey::TimeDesc => "time-desc",
            SortKey::ServingsAsc => "servings-asc",
            SortKey::ServingsDesc => "servings-desc",
        }
    }

    /// Parse a query-string value; unknown values fall back to the default
    /// order instead of failing the whole request.
    pub fn from_param(value: &str) -> Option<SortKey> {
        SortKey::ALL.iter().copied().find(|s| s.as_param() == value)
    }
}

fn lenient_sort<'de, D>(deserializer: D) -> Result<SortKey, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(SortKey::from_param)
        .unwrap_or_default())
}

/// Browse filters as they appear in the query string. Empty or missing
/// values leave the corresponding filter inactive; numeric bounds keep
/// their raw text so a malformed value degrades to "no constraint" and
/// the URL round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Criteria {
    pub search: Option<String>,
    pub category: Option<String>,
    /// `difficulty` is the parameter name old bookmarked URLs used for
    /// this filter; both resolve to the tag match.
    #[serde(alias = "difficulty")]
    pub tag: Option<String>,
    pub ingredient: Option<String>,
    #[serde(rename = "servings")]
    pub max_servings: Option<String>,
    #[serde(rename = "maxTime")]
    pub max_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_sort")]
    pub sort: SortKey,
}

/// Treat whitespace-only values the same as absent ones.
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(value: &Option<String>) -> Option<i32> {
    active(value).and_then(|v| v.parse().ok())
}

impl Criteria {
    /// Upper bound on servings, if a parseable one was supplied.
    pub fn max_servings(&self) -> Option<i32> {
        parse_bound(&self.max_servings)
    }

    /// Upper bound on total time in minutes, if a parseable one was supplied.
    pub fn max_time(&self) -> Option<i32> {
        parse_bound(&self.max_time)
    }

    /// True when no filter is active and the sort is the default, i.e. the
    /// view should live at the bare path.
    pub fn is_empty(&self) -> bool {
        active(&self.search).is_none()
            && active(&self.category).is_none()
            && active(&self.tag).is_none()
            && active(&self.ingredient).is_none()
            && active(&self.max_servings).is_none()
            && active(&self.max_time).is_none()
            && self.sort == SortKey::default()
    }

    /// The canonical query string for this view, or the empty string when
    /// nothing is active. The default sort is omitted, so clearing all
    /// filters resets the URL to its bare path.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(v) = active(&self.search) {
            params.push(("search", v));
        }
        if let Some(v) = active(&self.category) {
            params.push(("category", v));
        }
        if let Some(v) = active(&self.tag) {
            params.push(("tag", v));
        }
        if let Some(v) = active(&self.ingredient) {
            params.push(("ingredient", v));
        }
        if let Some(v) = active(&self.max_servings) {
            params.push(("servings", v));
        }
        if let Some(v) = active(&self.max_time) {
            params.push(("maxTime", v));
        }
        if self.sort != SortKey::default() {
            params.push(("sort", self.sort.as_param()));
        }
        serde_urlencoded::to_string(&params).unwrap_or_default()
    }

    /// True when the recipe satisfies every active filter.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(term) = active(&self.search) {
            let term = term.to_lowercase();
            let hit = recipe.title.to_lowercase().contains(&term)
                || recipe.description.to_lowercase().contains(&term)
                || recipe.tags.to_lowercase().contains(&term)
                || recipe.ingredients.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(category) = active(&self.category) {
            let category = category.to_lowercase();
            if !recipe
                .categories
                .iter()
                .any(|c| c.to_lowercase() == category)
            {
                return false;
            }
        }

        if let Some(tag) = active(&self.tag) {
            if !recipe.tags.to_lowercase().contains(&tag.to_lowercase()) {
                return false;
            }
        }

        if let Some(ingredient) = active(&self.ingredient) {
            if !recipe
                .ingredients
                .to_lowercase()
                .contains(&ingredient.to_lowercase())
            {
                return false;
            }
        }

        if let Some(bound) = self.max_servings() {
            if recipe.servings > bound {
                return false;
            }
        }

        if let Some(bound) = self.max_time() {
            if recipe.total_time() > bound {
                return false;
            }
        }

        true
    }

    /// Filter the full collection down to the matching recipes, then apply
    /// the single selected sort. The sort is stable, so ties keep their
    /// input-relative order.
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let mut matched: Vec<Recipe> = recipes
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortKey::Popular => matched.sort_by(|a, b| b.is_popular.cmp(&a.is_popular)),
            SortKey::Alphabetical => {
                matched.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            }
            SortKey::TimeAsc => matched.sort_by_key(|r| r.total_time()),
            SortKey::TimeDesc => matched.sort_by_key(|r| std::cmp::Reverse(r.total_time())),
            SortKey::ServingsAsc => matched.sort_by_key(|r| r.servings),
            SortKey::ServingsDesc => matched.sort_by_key(|r| std::cmp::Reverse(r.servings)),
        }

        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_param_roundtrip() {
        for sort in SortKey::ALL {
            assert_eq!(SortKey::from_param(sort.as_param()), Some(*sort));
        }
        assert_eq!(SortKey::from_param("random"), None);
    }

    #[test]
    fn test_deserialize_from_query_string() {
        let criteria: Criteria =
            serde_urlencoded::from_str("search=kip&maxTime=30&sort=time-asc").unwrap();
        assert_eq!(criteria.search.as_deref(), Some("kip"));
        assert_eq!(criteria.max_time(), Some(30));
        assert_eq!(criteria.sort, SortKey::TimeAsc);
    }

    #[test]
    fn test_legacy_difficulty_param_maps_to_tag() {
        let criteria: Criteria = serde_urlencoded::from_str("difficulty=makkelijk").unwrap();
        assert_eq!(criteria.tag.as_deref(), Some("makkelijk"));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_newest() {
        let criteria: Criteria = serde_urlencoded::from_str("sort=definitely-not-a-sort").unwrap();
        assert_eq!(criteria.sort, SortKey::Newest);
    }

    #[test]
    fn test_malformed_bounds_are_inactive() {
        let criteria: Criteria =
            serde_urlencoded::from_str("servings=veel&maxTime=1uur").unwrap();
        assert_eq!(criteria.max_servings(), None);
        assert_eq!(criteria.max_time(), None);
    }

    #[test]
    fn test_query_string_roundtrip() {
        let criteria: Criteria =
            serde_urlencoded::from_str("search=pasta&tag=vegetarisch&sort=oldest").unwrap();
        assert_eq!(
            criteria.to_query_string(),
            "search=pasta&tag=vegetarisch&sort=oldest"
        );
    }

    #[test]
    fn test_empty_criteria_serialize_to_bare_path() {
        let criteria = Criteria::default();
        assert!(criteria.is_empty());
        assert_eq!(criteria.to_query_string(), "");

        let whitespace_only: Criteria = serde_urlencoded::from_str("search=++&tag=").unwrap();
        assert!(whitespace_only.is_empty());
        assert_eq!(whitespace_only.to_query_string(), "");
    }

    #[test]
    fn test_default_sort_omitted_from_query_string() {
        let criteria: Criteria = serde_urlencoded::from_str("search=kip&sort=newest").unwrap();
        assert_eq!(criteria.to_query_string(), "search=kip");
    }
}
