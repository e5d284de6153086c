use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::BlogCategory;

/// A recipe as stored, with the ingredient block and instruction steps kept
/// as raw newline-delimited text. Parsing into groups/steps happens at
/// render time (see [`crate::ingredients`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    /// Category labels in the order the author selected them.
    pub categories: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time: i32,
    /// Cooking time in minutes.
    pub cook_time: i32,
    /// Baseline number of servings the quantities are written for.
    pub servings: i32,
    /// Comma-separated free-text tags.
    pub tags: String,
    /// Newline-delimited ingredient lines; `[Name]` lines open a subgroup.
    pub ingredients: String,
    /// Newline-delimited preparation steps.
    pub instructions: String,
    pub serving_suggestions: Option<String>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Total time in minutes (prep + cook), the value time filters and
    /// sorts operate on.
    pub fn total_time(&self) -> i32 {
        self.prep_time + self.cook_time
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: BlogCategory,
    /// Comma-separated free-text tags.
    pub tags: String,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
