//! Blog service: the CRUD and ownership rules for blog records

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{BlogRecord, BlogRepository, UserRepository};
use bloglist_shared::types::{BlogResponse, BlogWithOwner, NewBlog, OwnerRef};
use bloglist_shared::validation::{validate_likes, validate_new_blog};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

/// Blog service for CRUD operations
pub struct BlogService;

impl BlogService {
    /// List all blogs, each with a reduced owner projection
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogWithOwner>, ApiError> {
        let blogs = BlogRepository::find_all_with_owner(pool).await?;

        Ok(blogs
            .into_iter()
            .map(|b| BlogWithOwner {
                id: b.id,
                title: b.title,
                author: b.author,
                url: b.url,
                likes: b.likes,
                user: match (b.owner_username, b.owner_name) {
                    (Some(username), Some(name)) => Some(OwnerRef { username, name }),
                    _ => None,
                },
            })
            .collect())
    }

    /// Fetch a single blog by identifier
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<BlogResponse, ApiError> {
        let blog = BlogRepository::find_by_id(pool, id)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(to_response(blog))
    }

    /// Create a blog owned by the authenticated user
    ///
    /// The blog insert and the append to the owner's blog list are two
    /// separate writes with no transaction. The owner reference on the blog
    /// itself is the source of truth for ownership, so a failed append is
    /// logged and tolerated rather than failing the request.
    pub async fn create(
        pool: &PgPool,
        user: &AuthUser,
        req: NewBlog,
    ) -> Result<BlogResponse, ApiError> {
        validate_new_blog(&req)?;

        // validate_new_blog guarantees title and url are present
        let title = req.title.as_deref().unwrap_or_default();
        let url = req.url.as_deref().unwrap_or_default();
        let likes = req.likes.unwrap_or(0);

        let blog =
            BlogRepository::insert(pool, title, req.author.as_deref(), url, likes, user.id).await?;

        if let Err(e) = UserRepository::append_blog(pool, user.id, blog.id).await {
            warn!(
                blog_id = %blog.id,
                user_id = %user.id,
                error = %e,
                "blog created but not recorded in owner's blog list"
            );
        }

        Ok(to_response(blog))
    }

    /// Set the likes counter on a blog; open to any caller
    pub async fn update_likes(
        pool: &PgPool,
        id: Uuid,
        likes: i32,
    ) -> Result<BlogResponse, ApiError> {
        validate_likes(likes)?;

        let blog = BlogRepository::update_likes(pool, id, likes)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(to_response(blog))
    }

    /// Delete a blog on behalf of the authenticated user
    ///
    /// Deletion is idempotent: a missing record is acknowledged as success.
    /// A record owned by a different user is likewise acknowledged but left
    /// untouched, and the response does not reveal which case occurred.
    pub async fn delete(pool: &PgPool, user: &AuthUser, id: Uuid) -> Result<(), ApiError> {
        let Some(blog) = BlogRepository::find_by_id(pool, id).await? else {
            return Ok(());
        };

        if blog.user_id == user.id {
            BlogRepository::delete_by_id(pool, id).await?;
        }

        Ok(())
    }
}

fn to_response(blog: BlogRecord) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user: blog.user_id,
    }
}
