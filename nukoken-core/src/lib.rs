pub mod category;
pub mod filter;
pub mod form;
pub mod ingredients;
pub mod slug;
pub mod types;

pub use category::{category_icon, BlogCategory, RecipeCategory};
pub use filter::{Criteria, SortKey};
pub use form::{BlogPostForm, FormError, FormMessage, RecipeForm};
pub use ingredients::{parse_groups, scale_line, scaled_groups, IngredientGroup};
pub use slug::slugify;
pub use types::{BlogPost, Recipe};
