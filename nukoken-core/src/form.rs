//! Admin form state machines for recipes and blog posts.
//!
//! Each form is one explicit state value advanced by reducer-style
//! transitions, so the validation and merge rules are plain functions
//! over data instead of a pile of independent field setters.

use thiserror::Error;

use crate::category::BlogCategory;
use crate::types::{BlogPost, Recipe};

/// Pre-submission validation failures, with the user-visible message as
/// the error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Titel, beschrijving, ingrediënten en bereidingswijze zijn verplicht")]
    MissingRequiredRecipeFields,
    #[error("Selecteer minimaal één categorie")]
    NoCategorySelected,
    #[error("Titel, excerpt, inhoud en categorie zijn verplicht")]
    MissingRequiredPostFields,
}

/// Outcome banner shown above the form after a submit or delete attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMessage {
    Success { text: String, link: String },
    Error(String),
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

/// Two-step delete confirmation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Pending,
}

/// Editable recipe fields, mirroring the admin form controls.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFields {
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
    pub serving_suggestions: String,
    pub is_popular: bool,
}

impl Default for RecipeFields {
    fn default() -> Self {
        RecipeFields {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            categories: Vec::new(),
            prep_time: 15,
            cook_time: 30,
            servings: 4,
            tags: String::new(),
            ingredients: String::new(),
            instructions: String::new(),
            serving_suggestions: String::new(),
            is_popular: false,
        }
    }
}

impl RecipeFields {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        RecipeFields {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            image_url: recipe.image_url.clone(),
            categories: recipe.categories.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            tags: recipe.tags.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            serving_suggestions: recipe.serving_suggestions.clone().unwrap_or_default(),
            is_popular: recipe.is_popular,
        }
    }
}

/// Text and numeric inputs on the recipe form. Numeric fields arrive as
/// raw input text and parse leniently (invalid input becomes 0, matching
/// the form control behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeField {
    Title,
    Description,
    Tags,
    Ingredients,
    Instructions,
    ServingSuggestions,
    PrepTime,
    CookTime,
    Servings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeFormEvent {
    Set(RecipeField, String),
    SetPopular(bool),
    /// Add the category if absent, remove it if present; newly toggled
    /// categories append at the end.
    ToggleCategory(String),
    AttachImage(String),
    SubmitSucceeded(Recipe),
    SubmitFailed(String),
    RequestDelete,
    CancelDelete,
    DeleteFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    pub mode: FormMode,
    pub fields: RecipeFields,
    pub message: Option<FormMessage>,
    pub delete: DeleteConfirm,
}

impl RecipeForm {
    pub fn create() -> Self {
        RecipeForm {
            mode: FormMode::Create,
            fields: RecipeFields::default(),
            message: None,
            delete: DeleteConfirm::Idle,
        }
    }

    pub fn edit(recipe: &Recipe) -> Self {
        RecipeForm {
            mode: FormMode::Edit(recipe.id),
            fields: RecipeFields::from_recipe(recipe),
            message: None,
            delete: DeleteConfirm::Idle,
        }
    }

    pub fn apply(&mut self, event: RecipeFormEvent) {
        match event {
            RecipeFormEvent::Set(field, value) => self.set(field, value),
            RecipeFormEvent::SetPopular(value) => self.fields.is_popular = value,
            RecipeFormEvent::ToggleCategory(category) => {
                let existing = self
                    .fields
                    .categories
                    .iter()
                    .position(|c| c == &category);
                match existing {
                    Some(index) => {
                        self.fields.categories.remove(index);
                    }
                    None => self.fields.categories.push(category),
                }
            }
            RecipeFormEvent::AttachImage(url) => self.fields.image_url = url,
            RecipeFormEvent::SubmitSucceeded(saved) => {
                let link = format!("/recepten/{}", saved.slug);
                let text = match self.mode {
                    FormMode::Create => {
                        self.fields = RecipeFields::default();
                        "Recept succesvol toegevoegd!"
                    }
                    FormMode::Edit(_) => {
                        self.fields = RecipeFields::from_recipe(&saved);
                        "Recept succesvol bijgewerkt!"
                    }
                };
                self.message = Some(FormMessage::Success {
                    text: text.to_string(),
                    link,
                });
            }
            RecipeFormEvent::SubmitFailed(error) => {
                self.message = Some(FormMessage::Error(error));
            }
            RecipeFormEvent::RequestDelete => self.delete = DeleteConfirm::Pending,
            RecipeFormEvent::CancelDelete => self.delete = DeleteConfirm::Idle,
            RecipeFormEvent::DeleteFailed(error) => {
                self.delete = DeleteConfirm::Idle;
                self.message = Some(FormMessage::Error(error));
            }
        }
    }

    fn set(&mut self, field: RecipeField, value: String) {
        match field {
            RecipeField::Title => self.fields.title = value,
            RecipeField::Description => self.fields.description = value,
            RecipeField::Tags => self.fields.tags = value,
            RecipeField::Ingredients => self.fields.ingredients = value,
            RecipeField::Instructions => self.fields.instructions = value,
            RecipeField::ServingSuggestions => self.fields.serving_suggestions = value,
            RecipeField::PrepTime => self.fields.prep_time = lenient_number(&value),
            RecipeField::CookTime => self.fields.cook_time = lenient_number(&value),
            RecipeField::Servings => self.fields.servings = lenient_number(&value),
        }
    }

    /// Validate the current state; on success the fields are ready to be
    /// sent as the create/update payload.
    pub fn validate(&self) -> Result<&RecipeFields, FormError> {
        let f = &self.fields;
        if f.title.trim().is_empty()
            || f.description.trim().is_empty()
            || f.ingredients.trim().is_empty()
            || f.instructions.trim().is_empty()
        {
            return Err(FormError::MissingRequiredRecipeFields);
        }
        if f.categories.is_empty() {
            return Err(FormError::NoCategorySelected);
        }
        Ok(f)
    }

    /// True when the confirmed delete may be sent to the server.
    pub fn delete_confirmed(&self) -> bool {
        self.delete == DeleteConfirm::Pending
    }
}

fn lenient_number(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Editable blog post fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostFields {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: BlogCategory,
    pub tags: String,
    pub is_featured: bool,
    pub is_published: bool,
}

impl Default for BlogPostFields {
    fn default() -> Self {
        BlogPostFields {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            image_url: String::new(),
            category: BlogCategory::VoorBeginners,
            tags: String::new(),
            is_featured: false,
            is_published: false,
        }
    }
}

impl BlogPostFields {
    pub fn from_post(post: &BlogPost) -> Self {
        BlogPostFields {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            category: post.category,
            tags: post.tags.clone(),
            is_featured: post.is_featured,
            is_published: post.is_published,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlogFormEvent {
    SetTitle(String),
    SetExcerpt(String),
    SetContent(String),
    SetTags(String),
    SetCategory(BlogCategory),
    SetFeatured(bool),
    SetPublished(bool),
    AttachImage(String),
    SubmitSucceeded(BlogPost),
    SubmitFailed(String),
    RequestDelete,
    CancelDelete,
    DeleteFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostForm {
    pub mode: FormMode,
    pub fields: BlogPostFields,
    pub message: Option<FormMessage>,
    pub delete: DeleteConfirm,
}

impl BlogPostForm {
    pub fn create() -> Self {
        BlogPostForm {
            mode: FormMode::Create,
            fields: BlogPostFields::default(),
            message: None,
            delete: DeleteConfirm::Idle,
        }
    }

    pub fn edit(post: &BlogPost) -> Self {
        BlogPostForm {
            mode: FormMode::Edit(post.id),
            fields: BlogPostFields::from_post(post),
            message: None,
            delete: DeleteConfirm::Idle,
        }
    }

    pub fn apply(&mut self, event: BlogFormEvent) {
        match event {
            BlogFormEvent::SetTitle(v) => self.fields.title = v,
            BlogFormEvent::SetExcerpt(v) => self.fields.excerpt = v,
            BlogFormEvent::SetContent(v) => self.fields.content = v,
            BlogFormEvent::SetTags(v) => self.fields.tags = v,
            BlogFormEvent::SetCategory(v) => self.fields.category = v,
            BlogFormEvent::SetFeatured(v) => self.fields.is_featured = v,
            BlogFormEvent::SetPublished(v) => self.fields.is_published = v,
            BlogFormEvent::AttachImage(url) => self.fields.image_url = url,
            BlogFormEvent::SubmitSucceeded(saved) => {
                let link = format!("/sourdough/post/{}", saved.slug);
                let text = match self.mode {
                    FormMode::Create => {
                        self.fields = BlogPostFields::default();
                        "Blogpost succesvol toegevoegd!"
                    }
                    FormMode::Edit(_) => {
                        self.fields = BlogPostFields::from_post(&saved);
                        "Blogpost succesvol bijgewerkt!"
                    }
                };
                self.message = Some(FormMessage::Success {
                    text: text.to_string(),
                    link,
                });
            }
            BlogFormEvent::SubmitFailed(error) => {
                self.message = Some(FormMessage::Error(error));
            }
            BlogFormEvent::RequestDelete => self.delete = DeleteConfirm::Pending,
            BlogFormEvent::CancelDelete => self.delete = DeleteConfirm::Idle,
            BlogFormEvent::DeleteFailed(error) => {
                self.delete = DeleteConfirm::Idle;
                self.message = Some(FormMessage::Error(error));
            }
        }
    }

    pub fn validate(&self) -> Result<&BlogPostFields, FormError> {
        let f = &self.fields;
        if f.title.trim().is_empty() || f.excerpt.trim().is_empty() || f.content.trim().is_empty() {
            return Err(FormError::MissingRequiredPostFields);
        }
        Ok(f)
    }

    pub fn delete_confirmed(&self) -> bool {
        self.delete == DeleteConfirm::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn saved_recipe() -> Recipe {
        Recipe {
            id: 7,
            title: "Romige Pasta Carbonara".to_string(),
            slug: "romige-pasta-carbonara".to_string(),
            description: "Klassieker".to_string(),
            image_url: "/api/images/abc".to_string(),
            categories: vec!["Pasta".to_string()],
            prep_time: 10,
            cook_time: 20,
            servings: 4,
            tags: "italiaans".to_string(),
            ingredients: "250 gr spaghetti".to_string(),
            instructions: "Kook de pasta".to_string(),
            serving_suggestions: None,
            is_popular: false,
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    fn filled_form() -> RecipeForm {
        let mut form = RecipeForm::create();
        form.apply(RecipeFormEvent::Set(RecipeField::Title, "Test".into()));
        form.apply(RecipeFormEvent::Set(RecipeField::Description, "Lekker".into()));
        form.apply(RecipeFormEvent::Set(RecipeField::Ingredients, "2 eieren".into()));
        form.apply(RecipeFormEvent::Set(RecipeField::Instructions, "Bak ze".into()));
        form.apply(RecipeFormEvent::ToggleCategory("Eigerechten".into()));
        form
    }

    #[test]
    fn test_toggle_category_adds_and_removes() {
        let mut form = RecipeForm::create();
        form.apply(RecipeFormEvent::ToggleCategory("Pasta".into()));
        form.apply(RecipeFormEvent::ToggleCategory("Soep".into()));
        assert_eq!(form.fields.categories, vec!["Pasta", "Soep"]);

        form.apply(RecipeFormEvent::ToggleCategory("Pasta".into()));
        assert_eq!(form.fields.categories, vec!["Soep"]);

        // Re-toggling appends at the end.
        form.apply(RecipeFormEvent::ToggleCategory("Pasta".into()));
        assert_eq!(form.fields.categories, vec!["Soep", "Pasta"]);
    }

    #[test]
    fn test_numeric_fields_parse_leniently() {
        let mut form = RecipeForm::create();
        form.apply(RecipeFormEvent::Set(RecipeField::Servings, "6".into()));
        assert_eq!(form.fields.servings, 6);

        form.apply(RecipeFormEvent::Set(RecipeField::PrepTime, "abc".into()));
        assert_eq!(form.fields.prep_time, 0);
    }

    #[test]
    fn test_validate_requires_core_fields() {
        let form = RecipeForm::create();
        assert_eq!(form.validate(), Err(FormError::MissingRequiredRecipeFields));

        let mut form = filled_form();
        form.apply(RecipeFormEvent::Set(RecipeField::Description, "   ".into()));
        assert_eq!(form.validate(), Err(FormError::MissingRequiredRecipeFields));
    }

    #[test]
    fn test_validate_requires_a_category() {
        let mut form = filled_form();
        form.apply(RecipeFormEvent::ToggleCategory("Eigerechten".into()));
        assert_eq!(form.validate(), Err(FormError::NoCategorySelected));
        assert_eq!(
            FormError::NoCategorySelected.to_string(),
            "Selecteer minimaal één categorie"
        );
    }

    #[test]
    fn test_create_submit_success_resets_fields() {
        let mut form = filled_form();
        assert!(form.validate().is_ok());

        form.apply(RecipeFormEvent::SubmitSucceeded(saved_recipe()));
        assert_eq!(form.fields, RecipeFields::default());
        assert_eq!(
            form.message,
            Some(FormMessage::Success {
                text: "Recept succesvol toegevoegd!".to_string(),
                link: "/recepten/romige-pasta-carbonara".to_string(),
            })
        );
    }

    #[test]
    fn test_edit_submit_success_adopts_saved_record() {
        let recipe = saved_recipe();
        let mut form = RecipeForm::edit(&recipe);
        form.apply(RecipeFormEvent::Set(RecipeField::Title, "Nieuwe titel".into()));

        let mut saved = recipe.clone();
        saved.title = "Nieuwe titel".to_string();
        saved.slug = "nieuwe-titel".to_string();
        form.apply(RecipeFormEvent::SubmitSucceeded(saved));

        assert_eq!(form.fields.title, "Nieuwe titel");
        assert_eq!(
            form.message,
            Some(FormMessage::Success {
                text: "Recept succesvol bijgewerkt!".to_string(),
                link: "/recepten/nieuwe-titel".to_string(),
            })
        );
    }

    #[test]
    fn test_submit_failure_preserves_fields() {
        let mut form = filled_form();
        let before = form.fields.clone();
        form.apply(RecipeFormEvent::SubmitFailed("Er ging iets mis".into()));
        assert_eq!(form.fields, before);
        assert_eq!(
            form.message,
            Some(FormMessage::Error("Er ging iets mis".to_string()))
        );
    }

    #[test]
    fn test_delete_requires_explicit_confirmation() {
        let mut form = RecipeForm::edit(&saved_recipe());
        assert!(!form.delete_confirmed());

        form.apply(RecipeFormEvent::RequestDelete);
        assert!(form.delete_confirmed());

        form.apply(RecipeFormEvent::CancelDelete);
        assert!(!form.delete_confirmed());
    }

    #[test]
    fn test_delete_failure_surfaces_error_and_rearms() {
        let mut form = RecipeForm::edit(&saved_recipe());
        form.apply(RecipeFormEvent::RequestDelete);
        form.apply(RecipeFormEvent::DeleteFailed("Recept niet gevonden".into()));
        assert!(!form.delete_confirmed());
        assert_eq!(
            form.message,
            Some(FormMessage::Error("Recept niet gevonden".to_string()))
        );
    }

    #[test]
    fn test_blog_form_validation_and_reset() {
        let mut form = BlogPostForm::create();
        assert_eq!(form.validate(), Err(FormError::MissingRequiredPostFields));

        form.apply(BlogFormEvent::SetTitle("Starter dag 1".into()));
        form.apply(BlogFormEvent::SetExcerpt("Zo begin je".into()));
        form.apply(BlogFormEvent::SetContent("Meng bloem en water".into()));
        form.apply(BlogFormEvent::SetCategory(BlogCategory::StarterVanScratch));
        form.apply(BlogFormEvent::SetPublished(true));
        assert!(form.validate().is_ok());

        let saved = BlogPost {
            id: 3,
            title: "Starter dag 1".to_string(),
            slug: "starter-dag-1".to_string(),
            excerpt: "Zo begin je".to_string(),
            content: "Meng bloem en water".to_string(),
            image_url: String::new(),
            category: BlogCategory::StarterVanScratch,
            tags: String::new(),
            is_featured: false,
            is_published: true,
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
        };
        form.apply(BlogFormEvent::SubmitSucceeded(saved));
        assert_eq!(form.fields, BlogPostFields::default());
        assert_eq!(
            form.message,
            Some(FormMessage::Success {
                text: "Blogpost succesvol toegevoegd!".to_string(),
                link: "/sourdough/post/starter-dag-1".to_string(),
            })
        );
    }
}
