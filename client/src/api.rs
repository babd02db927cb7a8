//! HTTP calls against the Bloglist API

use crate::error::ClientError;
use crate::session::Session;
use bloglist_shared::types::{
    BlogResponse, BlogWithOwner, ErrorBody, LikesUpdate, LoginRequest, LoginResponse, NewBlog,
    NewUser, UserResponse, UserWithBlogs,
};
use reqwest::header::AUTHORIZATION;
use reqwest::{Response, StatusCode};
use uuid::Uuid;

/// Client for the Bloglist HTTP API
///
/// Calls that mutate blog state take the [`Session`] explicitly; the client
/// itself holds no authentication state.
#[derive(Debug, Clone)]
pub struct BlogApi {
    base_url: String,
    http: reqwest::Client,
}

impl BlogApi {
    /// Create a client for the API at `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a new session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(&request)
            .send()
            .await?;
        let login: LoginResponse = check(response).await?.json().await?;
        Ok(login.into())
    }

    /// Register a new user
    pub async fn register(&self, user: &NewUser) -> Result<UserResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/users"))
            .json(user)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// List all users with their owned blogs
    pub async fn list_users(&self) -> Result<Vec<UserWithBlogs>, ClientError> {
        let response = self.http.get(self.url("/api/users")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// List all blogs with their owners
    pub async fn list_blogs(&self) -> Result<Vec<BlogWithOwner>, ClientError> {
        let response = self.http.get(self.url("/api/blogs")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// Fetch a single blog
    pub async fn get_blog(&self, id: Uuid) -> Result<BlogResponse, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/blogs/{id}")))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Create a blog owned by the session's user
    pub async fn create_blog(
        &self,
        session: &Session,
        blog: &NewBlog,
    ) -> Result<BlogResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/blogs"))
            .header(AUTHORIZATION, session.bearer())
            .json(blog)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Set a blog's likes counter
    pub async fn update_likes(&self, id: Uuid, likes: i32) -> Result<BlogResponse, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/blogs/{id}")))
            .json(&LikesUpdate { likes })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Increment a blog's likes by one
    pub async fn like_blog(&self, id: Uuid) -> Result<BlogResponse, ClientError> {
        let blog = self.get_blog(id).await?;
        self.update_likes(id, blog.likes + 1).await
    }

    /// Delete a blog owned by the session's user
    pub async fn delete_blog(&self, session: &Session, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/blogs/{id}")))
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Turn a failure status into a `ClientError::Api`, keeping the server's
/// `error` message when the body carries one
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => default_message(status),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_joined_without_double_slash() {
        let api = BlogApi::new("http://localhost:3003");
        assert_eq!(api.url("/api/blogs"), "http://localhost:3003/api/blogs");
    }

    #[test]
    fn test_default_message_falls_back_to_reason() {
        assert_eq!(default_message(StatusCode::NOT_FOUND), "Not Found");
    }
}
