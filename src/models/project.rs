//! Portfolio project types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Short summary shown in listings.
    pub summary: String,
    /// Full description.
    pub description: String,
    /// Comma-separated list of technologies used.
    pub skills: String,
    /// Live project link, if any.
    #[serde(default)]
    pub project_link: Option<String>,
    /// Repository link, if any.
    #[serde(default)]
    pub github_link: Option<String>,
    /// Thumbnail image URL, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Project start date.
    pub start_date: NaiveDateTime,
    /// Project end date.
    pub end_date: NaiveDateTime,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-update timestamp.
    pub updated_at: NaiveDateTime,
}

/// Project create/update body (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    /// Title.
    pub title: String,
    /// Short summary shown in listings.
    pub summary: String,
    /// Full description.
    pub description: String,
    /// Comma-separated list of technologies used.
    pub skills: String,
    /// Live project link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,
    /// Repository link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    /// Thumbnail image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Project start date.
    pub start_date: NaiveDateTime,
    /// Project end date.
    pub end_date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_wire_format() {
        let json = r#"{
            "id": 1,
            "title": "Portfolio",
            "summary": "This site",
            "description": "Long text",
            "skills": "Spring Boot, React",
            "projectLink": "https://example.com",
            "githubLink": null,
            "imageUrl": null,
            "startDate": "2024-01-01T00:00:00",
            "endDate": "2024-03-01T00:00:00",
            "createdAt": "2024-03-02T08:00:00",
            "updatedAt": "2024-03-02T08:00:00"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.title, "Portfolio");
        assert_eq!(project.project_link.as_deref(), Some("https://example.com"));
        assert!(project.github_link.is_none());
    }

    #[test]
    fn test_request_date_serialization() {
        let request = ProjectRequest {
            title: "t".into(),
            summary: "s".into(),
            description: "d".into(),
            skills: "Rust".into(),
            project_link: None,
            github_link: None,
            image_url: None,
            start_date: "2024-01-01T00:00:00".parse().unwrap(),
            end_date: "2024-02-01T00:00:00".parse().unwrap(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["startDate"], "2024-01-01T00:00:00");
        assert!(value.get("projectLink").is_none());
    }
}
