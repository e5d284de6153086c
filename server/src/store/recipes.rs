use chrono::Utc;
use diesel::prelude::*;
use nukoken_core::{slugify, Recipe};

use crate::db::DbPool;
use crate::models::{categories_to_column, NewRecipe, RecipeChanges, RecipeRow};
use crate::schema::recipes;

/// The full collection, newest first.
pub fn list(pool: &DbPool) -> Vec<Recipe> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return Vec::new();
        }
    };

    match recipes::table
        .order(recipes::created_at.desc())
        .select(RecipeRow::as_select())
        .load::<RecipeRow>(&mut conn)
    {
        Ok(rows) => rows.into_iter().map(RecipeRow::into_recipe).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            Vec::new()
        }
    }
}

/// Popular picks for the home page, newest first.
pub fn popular(pool: &DbPool, limit: i64) -> Vec<Recipe> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return Vec::new();
        }
    };

    match recipes::table
        .filter(recipes::is_popular.eq(true))
        .order(recipes::created_at.desc())
        .limit(limit)
        .select(RecipeRow::as_select())
        .load::<RecipeRow>(&mut conn)
    {
        Ok(rows) => rows.into_iter().map(RecipeRow::into_recipe).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch popular recipes: {}", e);
            Vec::new()
        }
    }
}

pub fn get_by_slug(pool: &DbPool, slug: &str) -> Option<Recipe> {
    let mut conn = pool.get().ok()?;
    recipes::table
        .filter(recipes::slug.eq(slug))
        .select(RecipeRow::as_select())
        .first::<RecipeRow>(&mut conn)
        .optional()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to fetch recipe by slug: {}", e);
            None
        })
        .map(RecipeRow::into_recipe)
}

pub fn get_by_id(pool: &DbPool, id: i32) -> Option<Recipe> {
    let mut conn = pool.get().ok()?;
    recipes::table
        .find(id)
        .select(RecipeRow::as_select())
        .first::<RecipeRow>(&mut conn)
        .optional()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to fetch recipe by id: {}", e);
            None
        })
        .map(RecipeRow::into_recipe)
}

pub struct CreateRecipe {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub categories: Vec<String>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub tags: String,
    pub ingredients: String,
    pub instructions: String,
    pub serving_suggestions: Option<String>,
    pub is_popular: bool,
}

/// Insert a new recipe. The slug is derived from the title here so every
/// write path shares one generation rule.
pub fn create(pool: &DbPool, input: &CreateRecipe) -> Option<Recipe> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return None;
        }
    };

    let slug = slugify(&input.title);
    let categories = categories_to_column(&input.categories);
    let new_recipe = NewRecipe {
        title: &input.title,
        slug: &slug,
        description: &input.description,
        image_url: &input.image_url,
        categories: &categories,
        prep_time: input.prep_time,
        cook_time: input.cook_time,
        servings: input.servings,
        tags: &input.tags,
        ingredients: &input.ingredients,
        instructions: &input.instructions,
        serving_suggestions: input.serving_suggestions.as_deref(),
        is_popular: input.is_popular,
    };

    match diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(RecipeRow::as_returning())
        .get_result::<RecipeRow>(&mut conn)
    {
        Ok(row) => Some(row.into_recipe()),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            None
        }
    }
}

#[derive(Default)]
pub struct UpdateRecipe {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub categories: Option<Vec<String>>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub tags: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub serving_suggestions: Option<String>,
    pub is_popular: Option<bool>,
}

/// Build the changeset for a partial update: `None` fields stay out of the
/// SET clause so their stored values survive, and a new title carries a
/// freshly generated slug with it.
fn changes_for(input: &UpdateRecipe) -> RecipeChanges<'_> {
    RecipeChanges {
        title: input.title.as_deref(),
        slug: input.title.as_deref().map(slugify),
        description: input.description.as_deref(),
        image_url: input.image_url.as_deref(),
        categories: input.categories.as_deref().map(categories_to_column),
        prep_time: input.prep_time,
        cook_time: input.cook_time,
        servings: input.servings,
        tags: input.tags.as_deref(),
        ingredients: input.ingredients.as_deref(),
        instructions: input.instructions.as_deref(),
        serving_suggestions: input.serving_suggestions.as_deref(),
        is_popular: input.is_popular,
        updated_at: Utc::now(),
    }
}

/// Apply a partial update; absent fields keep their stored value. A new
/// title regenerates the slug.
pub fn update(pool: &DbPool, id: i32, input: &UpdateRecipe) -> Option<Recipe> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return None;
        }
    };

    let changes = changes_for(input);

    match diesel::update(recipes::table.find(id))
        .set(&changes)
        .returning(RecipeRow::as_returning())
        .get_result::<RecipeRow>(&mut conn)
    {
        Ok(row) => Some(row.into_recipe()),
        Err(diesel::NotFound) => None,
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            None
        }
    }
}

/// Hard delete. Returns whether a row was removed.
pub fn delete(pool: &DbPool, id: i32) -> bool {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return false;
        }
    };

    match diesel::delete(recipes::table.find(id)).execute(&mut conn) {
        Ok(count) => count > 0,
        Err(e) => {
            tracing::error!("Failed to delete recipe: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_leaves_absent_fields_out_of_the_set_clause() {
        let input = UpdateRecipe {
            description: Some("Nieuwe beschrijving".to_string()),
            prep_time: Some(20),
            ..UpdateRecipe::default()
        };
        let changes = changes_for(&input);

        assert_eq!(changes.description, Some("Nieuwe beschrijving"));
        assert_eq!(changes.prep_time, Some(20));
        // Text and numeric fields that were not supplied stay untouched.
        assert_eq!(changes.title, None);
        assert_eq!(changes.slug, None);
        assert_eq!(changes.servings, None);
        assert_eq!(changes.tags, None);
        assert!(changes.categories.is_none());
    }

    #[test]
    fn test_new_title_carries_a_regenerated_slug() {
        let input = UpdateRecipe {
            title: Some("Gegrilde Groenten à la Crème".to_string()),
            ..UpdateRecipe::default()
        };
        let changes = changes_for(&input);

        assert_eq!(changes.title, Some("Gegrilde Groenten à la Crème"));
        assert_eq!(
            changes.slug,
            Some("gegrilde-groenten-a-la-creme".to_string())
        );
    }
}
