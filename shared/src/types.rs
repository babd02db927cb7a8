//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: the bearer token plus the display fields the client
/// keeps in its session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// User as returned by the API. The password hash is never part of any
/// serialized representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    /// Identifiers of the blogs this user owns, in creation order
    pub blogs: Vec<Uuid>,
}

/// User with the owned blogs expanded to a reduced projection,
/// as returned by `GET /api/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithBlogs {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogRef>,
}

/// Reduced blog projection nested under a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRef {
    pub title: String,
    pub url: String,
}

/// Blog creation request. `title` and `url` are required; `author` and
/// `likes` are optional, `likes` defaulting to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlog {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<i32>,
}

/// Likes update request for `PUT /api/blogs/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikesUpdate {
    pub likes: i32,
}

/// Full blog record, with the owner as a raw identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user: Uuid,
}

/// Blog with the owner expanded to a reduced projection,
/// as returned by `GET /api/blogs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogWithOwner {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    /// Only username and name of the owner are ever exposed here
    pub user: Option<OwnerRef>,
}

/// Reduced owner projection nested under a blog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerRef {
    pub username: String,
    pub name: String,
}

/// Uniform error body returned for every failed request that carries one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_blog_deserializes_with_missing_fields() {
        let blog: NewBlog = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(blog.title.as_deref(), Some("t"));
        assert!(blog.url.is_none());
        assert!(blog.likes.is_none());
    }

    #[test]
    fn blog_response_omits_absent_author() {
        let blog = BlogResponse {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            author: None,
            url: "http://example.com".to_string(),
            likes: 0,
            user: Uuid::new_v4(),
        };
        let json = serde_json::to_value(&blog).unwrap();
        assert!(json.get("author").is_none());
    }

    #[test]
    fn new_user_defaults_empty_name() {
        let user: NewUser =
            serde_json::from_str(r#"{"username":"u","password":"p"}"#).unwrap();
        assert_eq!(user.name, "");
    }
}
