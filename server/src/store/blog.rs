use chrono::Utc;
use diesel::prelude::*;
use nukoken_core::{slugify, BlogCategory, BlogPost};

use crate::db::DbPool;
use crate::models::{BlogPostChanges, BlogPostRow, NewBlogPost};
use crate::schema::blog_posts;

/// Published posts, newest first, optionally restricted to one category.
pub fn list_published(pool: &DbPool, category: Option<BlogCategory>) -> Vec<BlogPost> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return Vec::new();
        }
    };

    let mut query = blog_posts::table
        .filter(blog_posts::is_published.eq(true))
        .order(blog_posts::created_at.desc())
        .into_boxed();

    if let Some(category) = category {
        query = query.filter(blog_posts::category.eq(category.slug()));
    }

    match query
        .select(BlogPostRow::as_select())
        .load::<BlogPostRow>(&mut conn)
    {
        Ok(rows) => rows.into_iter().map(BlogPostRow::into_post).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch blog posts: {}", e);
            Vec::new()
        }
    }
}

/// Every post including drafts, for the admin overview.
pub fn list_all(pool: &DbPool) -> Vec<BlogPost> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return Vec::new();
        }
    };

    match blog_posts::table
        .order(blog_posts::created_at.desc())
        .select(BlogPostRow::as_select())
        .load::<BlogPostRow>(&mut conn)
    {
        Ok(rows) => rows.into_iter().map(BlogPostRow::into_post).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch blog posts: {}", e);
            Vec::new()
        }
    }
}

/// Featured, published posts for the home page, newest first.
pub fn featured(pool: &DbPool, limit: i64) -> Vec<BlogPost> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return Vec::new();
        }
    };

    match blog_posts::table
        .filter(blog_posts::is_featured.eq(true))
        .filter(blog_posts::is_published.eq(true))
        .order(blog_posts::created_at.desc())
        .limit(limit)
        .select(BlogPostRow::as_select())
        .load::<BlogPostRow>(&mut conn)
    {
        Ok(rows) => rows.into_iter().map(BlogPostRow::into_post).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch featured blog posts: {}", e);
            Vec::new()
        }
    }
}

pub fn get_by_slug(pool: &DbPool, slug: &str) -> Option<BlogPost> {
    let mut conn = pool.get().ok()?;
    blog_posts::table
        .filter(blog_posts::slug.eq(slug))
        .select(BlogPostRow::as_select())
        .first::<BlogPostRow>(&mut conn)
        .optional()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to fetch blog post by slug: {}", e);
            None
        })
        .map(BlogPostRow::into_post)
}

pub fn get_by_id(pool: &DbPool, id: i32) -> Option<BlogPost> {
    let mut conn = pool.get().ok()?;
    blog_posts::table
        .find(id)
        .select(BlogPostRow::as_select())
        .first::<BlogPostRow>(&mut conn)
        .optional()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to fetch blog post by id: {}", e);
            None
        })
        .map(BlogPostRow::into_post)
}

pub struct CreateBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: BlogCategory,
    pub tags: String,
    pub is_featured: bool,
    pub is_published: bool,
}

pub fn create(pool: &DbPool, input: &CreateBlogPost) -> Option<BlogPost> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return None;
        }
    };

    let slug = slugify(&input.title);
    let new_post = NewBlogPost {
        title: &input.title,
        slug: &slug,
        excerpt: &input.excerpt,
        content: &input.content,
        image_url: &input.image_url,
        category: input.category.slug(),
        tags: &input.tags,
        is_featured: input.is_featured,
        is_published: input.is_published,
    };

    match diesel::insert_into(blog_posts::table)
        .values(&new_post)
        .returning(BlogPostRow::as_returning())
        .get_result::<BlogPostRow>(&mut conn)
    {
        Ok(row) => Some(row.into_post()),
        Err(e) => {
            tracing::error!("Failed to create blog post: {}", e);
            None
        }
    }
}

#[derive(Default)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<BlogCategory>,
    pub tags: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

pub fn update(pool: &DbPool, id: i32, input: &UpdateBlogPost) -> Option<BlogPost> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return None;
        }
    };

    let changes = BlogPostChanges {
        title: input.title.as_deref(),
        slug: input.title.as_deref().map(slugify),
        excerpt: input.excerpt.as_deref(),
        content: input.content.as_deref(),
        image_url: input.image_url.as_deref(),
        category: input.category.map(|c| c.slug()),
        tags: input.tags.as_deref(),
        is_featured: input.is_featured,
        is_published: input.is_published,
        updated_at: Utc::now(),
    };

    match diesel::update(blog_posts::table.find(id))
        .set(&changes)
        .returning(BlogPostRow::as_returning())
        .get_result::<BlogPostRow>(&mut conn)
    {
        Ok(row) => Some(row.into_post()),
        Err(diesel::NotFound) => None,
        Err(e) => {
            tracing::error!("Failed to update blog post: {}", e);
            None
        }
    }
}

pub fn delete(pool: &DbPool, id: i32) -> bool {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return false;
        }
    };

    match diesel::delete(blog_posts::table.find(id)).execute(&mut conn) {
        Ok(count) => count > 0,
        Err(e) => {
            tracing::error!("Failed to delete blog post: {}", e);
            false
        }
    }
}
