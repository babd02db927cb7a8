//! Blog repository for database operations

use sqlx::PgPool;
use uuid::Uuid;

/// Blog record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogRecord {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    /// Owner back-reference, set at creation and never changed
    pub user_id: Uuid,
}

/// Blog joined with the username and name of its owner
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogWithOwnerRecord {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user_id: Uuid,
    pub owner_username: Option<String>,
    pub owner_name: Option<String>,
}

/// Reduced blog projection for nesting under a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogRefRecord {
    pub title: String,
    pub url: String,
}

/// Blog repository for database operations
pub struct BlogRepository;

impl BlogRepository {
    /// List all blogs with their owner's username and name.
    /// A dangling owner reference comes back with NULL owner columns.
    pub async fn find_all_with_owner(
        pool: &PgPool,
    ) -> Result<Vec<BlogWithOwnerRecord>, sqlx::Error> {
        sqlx::query_as::<_, BlogWithOwnerRecord>(
            r#"
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id,
                   u.username AS owner_username, u.name AS owner_name
            FROM blogs b
            LEFT JOIN users u ON u.id = b.user_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Find blog by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<BlogRecord>, sqlx::Error> {
        sqlx::query_as::<_, BlogRecord>(
            r#"
            SELECT id, title, author, url, likes, user_id
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new blog owned by the given user
    pub async fn insert(
        pool: &PgPool,
        title: &str,
        author: Option<&str>,
        url: &str,
        likes: i32,
        user_id: Uuid,
    ) -> Result<BlogRecord, sqlx::Error> {
        sqlx::query_as::<_, BlogRecord>(
            r#"
            INSERT INTO blogs (title, author, url, likes, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, url, likes, user_id
            "#,
        )
        .bind(title)
        .bind(author)
        .bind(url)
        .bind(likes)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Set the likes counter; returns None when the blog does not exist
    pub async fn update_likes(
        pool: &PgPool,
        id: Uuid,
        likes: i32,
    ) -> Result<Option<BlogRecord>, sqlx::Error> {
        sqlx::query_as::<_, BlogRecord>(
            r#"
            UPDATE blogs
            SET likes = $2
            WHERE id = $1
            RETURNING id, title, author, url, likes, user_id
            "#,
        )
        .bind(id)
        .bind(likes)
        .fetch_optional(pool)
        .await
    }

    /// Delete a blog; returns the number of rows removed (0 or 1)
    pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Fetch reduced projections for the given blog identifiers,
    /// preserving the order of the input list
    pub async fn refs_by_ids(
        pool: &PgPool,
        ids: &[Uuid],
    ) -> Result<Vec<BlogRefRecord>, sqlx::Error> {
        sqlx::query_as::<_, BlogRefRecord>(
            r#"
            SELECT title, url
            FROM blogs
            WHERE id = ANY($1)
            ORDER BY array_position($1, id)
            "#,
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see tests/blogs_api_test.rs
    // Run with: cargo test --features integration -- --ignored
}
