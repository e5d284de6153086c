//! The fixed category lists for recipes and blog posts.
//!
//! Both lists are closed enums so the label/icon mappings are exhaustive
//! and checked at compile time; unknown strings coming from old data fall
//! through an explicit default instead of a missing-key lookup.

use serde::{Deserialize, Serialize};

/// Dish-type categories a recipe can carry (multi-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeCategory {
    Pasta,
    Ovenschotel,
    Rijst,
    Aardappel,
    Groenten,
    Eigerechten,
    Salades,
    Sauzen,
    Soep,
    #[serde(rename = "Taarten & Cakes")]
    TaartenCakes,
    Koekjes,
    Drankjes,
    Brood,
    #[serde(rename = "Zoete snacks")]
    ZoeteSnacks,
    #[serde(rename = "Hartige snacks")]
    HartigeSnacks,
}

impl RecipeCategory {
    /// Every category, in the order the admin form presents them.
    pub const ALL: &'static [RecipeCategory] = &[
        RecipeCategory::Pasta,
        RecipeCategory::Ovenschotel,
        RecipeCategory::Rijst,
        RecipeCategory::Aardappel,
        RecipeCategory::Groenten,
        RecipeCategory::Eigerechten,
        RecipeCategory::Salades,
        RecipeCategory::Sauzen,
        RecipeCategory::Soep,
        RecipeCategory::TaartenCakes,
        RecipeCategory::Koekjes,
        RecipeCategory::Drankjes,
        RecipeCategory::Brood,
        RecipeCategory::ZoeteSnacks,
        RecipeCategory::HartigeSnacks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecipeCategory::Pasta => "Pasta",
            RecipeCategory::Ovenschotel => "Ovenschotel",
            RecipeCategory::Rijst => "Rijst",
            RecipeCategory::Aardappel => "Aardappel",
            RecipeCategory::Groenten => "Groenten",
            RecipeCategory::Eigerechten => "Eigerechten",
            RecipeCategory::Salades => "Salades",
            RecipeCategory::Sauzen => "Sauzen",
            RecipeCategory::Soep => "Soep",
            RecipeCategory::TaartenCakes => "Taarten & Cakes",
            RecipeCategory::Koekjes => "Koekjes",
            RecipeCategory::Drankjes => "Drankjes",
            RecipeCategory::Brood => "Brood",
            RecipeCategory::ZoeteSnacks => "Zoete snacks",
            RecipeCategory::HartigeSnacks => "Hartige snacks",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RecipeCategory::Pasta => "🍝",
            RecipeCategory::Ovenschotel => "🥘",
            RecipeCategory::Rijst => "🍚",
            RecipeCategory::Aardappel => "🥔",
            RecipeCategory::Groenten => "🥦",
            RecipeCategory::Eigerechten => "🍳",
            RecipeCategory::Salades => "🥗",
            RecipeCategory::Sauzen => "🫕",
            RecipeCategory::Soep => "🍲",
            RecipeCategory::TaartenCakes => "🎂",
            RecipeCategory::Koekjes => "🍪",
            RecipeCategory::Drankjes => "🥤",
            RecipeCategory::Brood => "🍞",
            RecipeCategory::ZoeteSnacks => "🧁",
            RecipeCategory::HartigeSnacks => "🥨",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<RecipeCategory> {
        let label = label.trim();
        RecipeCategory::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

/// Icon for a stored category label, falling back to a generic plate for
/// labels that predate the fixed list.
pub fn category_icon(label: &str) -> &'static str {
    RecipeCategory::from_label(label)
        .map(|c| c.icon())
        .unwrap_or("🍽️")
}

/// Blog post categories (single-select), identified by URL slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogCategory {
    #[serde(rename = "starter-van-scratch")]
    StarterVanScratch,
    #[default]
    #[serde(rename = "voor-beginners")]
    VoorBeginners,
    #[serde(rename = "tips-en-tricks")]
    TipsEnTricks,
    #[serde(rename = "recepten")]
    Recepten,
}

impl BlogCategory {
    pub const ALL: &'static [BlogCategory] = &[
        BlogCategory::StarterVanScratch,
        BlogCategory::VoorBeginners,
        BlogCategory::TipsEnTricks,
        BlogCategory::Recepten,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            BlogCategory::StarterVanScratch => "starter-van-scratch",
            BlogCategory::VoorBeginners => "voor-beginners",
            BlogCategory::TipsEnTricks => "tips-en-tricks",
            BlogCategory::Recepten => "recepten",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BlogCategory::StarterVanScratch => "Sourdough Starter van Scratch",
            BlogCategory::VoorBeginners => "Voor Beginners",
            BlogCategory::TipsEnTricks => "Tips & Tricks",
            BlogCategory::Recepten => "Sourdough Recepten",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BlogCategory::StarterVanScratch => "🧪",
            BlogCategory::VoorBeginners => "🌱",
            BlogCategory::TipsEnTricks => "💡",
            BlogCategory::Recepten => "🍞",
        }
    }

    pub fn from_slug(slug: &str) -> Option<BlogCategory> {
        let slug = slug.trim();
        BlogCategory::ALL
            .iter()
            .copied()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for category in RecipeCategory::ALL {
            assert_eq!(RecipeCategory::from_label(category.label()), Some(*category));
        }
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(
            RecipeCategory::from_label("taarten & cakes"),
            Some(RecipeCategory::TaartenCakes)
        );
        assert_eq!(RecipeCategory::from_label("PASTA"), Some(RecipeCategory::Pasta));
    }

    #[test]
    fn test_icon_falls_back_for_unknown_label() {
        assert_eq!(category_icon("Hoofdgerecht"), "🍽️");
        assert_eq!(category_icon("Soep"), "🍲");
    }

    #[test]
    fn test_recipe_category_serializes_as_label() {
        let json = serde_json::to_string(&RecipeCategory::ZoeteSnacks).unwrap();
        assert_eq!(json, "\"Zoete snacks\"");
    }

    #[test]
    fn test_blog_category_slug_roundtrip() {
        for category in BlogCategory::ALL {
            assert_eq!(BlogCategory::from_slug(category.slug()), Some(*category));
        }
        assert_eq!(BlogCategory::from_slug("nonsense"), None);
    }
}
