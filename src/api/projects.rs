//! Project endpoints (`/projects`).
//!
//! Listing and detail are public; mutations require the ADMIN role.

use crate::error::Result;
use crate::models::page::{Page, PageParams};
use crate::models::project::{Project, ProjectRequest};
use crate::transport::HttpClient;

const PROJECTS_PATH: &str = "/projects";

/// List projects, newest first.
pub async fn list(http: &HttpClient, params: &PageParams) -> Result<Page<Project>> {
    http.get_json_with_query(PROJECTS_PATH, params).await
}

/// Fetch one project by ID.
pub async fn detail(http: &HttpClient, id: i64) -> Result<Project> {
    http.get_json(&format!("{}/{}", PROJECTS_PATH, id)).await
}

/// Create a project.
pub async fn create(http: &HttpClient, request: &ProjectRequest) -> Result<Project> {
    http.post_json(PROJECTS_PATH, request).await
}

/// Update a project.
pub async fn update(http: &HttpClient, id: i64, request: &ProjectRequest) -> Result<Project> {
    http.put_json(&format!("{}/{}", PROJECTS_PATH, id), request).await
}

/// Delete a project.
pub async fn delete(http: &HttpClient, id: i64) -> Result<()> {
    http.delete(&format!("{}/{}", PROJECTS_PATH, id)).await
}
