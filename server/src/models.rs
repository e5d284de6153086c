use chrono::{DateTime, Utc};
use diesel::prelude::*;
use nukoken_core::{BlogCategory, BlogPost, Recipe};
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    pub categories: Vec<Option<String>>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub tags: String,
    pub ingredients: String,
    pub instructions: String,
    pub serving_suggestions: Option<String>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeRow {
    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            image_url: self.image_url,
            categories: self.categories.into_iter().flatten().collect(),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
            serving_suggestions: self.serving_suggestions,
            is_popular: self.is_popular,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub categories: &'a [Option<String>],
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub tags: &'a str,
    pub ingredients: &'a str,
    pub instructions: &'a str,
    pub serving_suggestions: Option<&'a str>,
    pub is_popular: bool,
}

/// Partial update; `None` fields keep their stored value (merge semantics),
/// which diesel implements by skipping them in the SET clause.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChanges<'a> {
    pub title: Option<&'a str>,
    pub slug: Option<String>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub categories: Option<Vec<Option<String>>>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub tags: Option<&'a str>,
    pub ingredients: Option<&'a str>,
    pub instructions: Option<&'a str>,
    pub serving_suggestions: Option<&'a str>,
    pub is_popular: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::blog_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BlogPostRow {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: String,
    pub tags: String,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostRow {
    pub fn into_post(self) -> BlogPost {
        BlogPost {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            image_url: self.image_url,
            // Rows written before the category list was closed fall back
            // to the default category rather than failing the read.
            category: BlogCategory::from_slug(&self.category).unwrap_or_default(),
            tags: self.tags,
            is_featured: self.is_featured,
            is_published: self.is_published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::blog_posts)]
pub struct NewBlogPost<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub excerpt: &'a str,
    pub content: &'a str,
    pub image_url: &'a str,
    pub category: &'a str,
    pub tags: &'a str,
    pub is_featured: bool,
    pub is_published: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::blog_posts)]
pub struct BlogPostChanges<'a> {
    pub title: Option<&'a str>,
    pub slug: Option<String>,
    pub excerpt: Option<&'a str>,
    pub content: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub category: Option<&'a str>,
    pub tags: Option<&'a str>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Image {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImage<'a> {
    pub filename: &'a str,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

/// Wrap category labels for storage in a text array column.
pub fn categories_to_column(categories: &[String]) -> Vec<Option<String>> {
    categories.iter().cloned().map(Some).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_flattens_categories() {
        let row = RecipeRow {
            id: 1,
            title: "Tomatensoep".to_string(),
            slug: "tomatensoep".to_string(),
            description: "Soep".to_string(),
            image_url: "/placeholder-recipe.jpg".to_string(),
            categories: vec![Some("Soep".to_string()), None, Some("Groenten".to_string())],
            prep_time: 5,
            cook_time: 25,
            servings: 4,
            tags: String::new(),
            ingredients: "1 kg tomaten".to_string(),
            instructions: "Kook".to_string(),
            serving_suggestions: None,
            is_popular: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let recipe = row.into_recipe();
        assert_eq!(recipe.categories, vec!["Soep", "Groenten"]);
    }

    #[test]
    fn test_unknown_blog_category_falls_back() {
        let row = BlogPostRow {
            id: 1,
            title: "Post".to_string(),
            slug: "post".to_string(),
            excerpt: "e".to_string(),
            content: "c".to_string(),
            image_url: String::new(),
            category: "iets-ouds".to_string(),
            tags: String::new(),
            is_featured: false,
            is_published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(row.into_post().category, BlogCategory::VoorBeginners);
    }
}
