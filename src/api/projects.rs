//
//  sentry-client
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project API types and operations.
//!
//! Projects are the unit events are reported to. Each project belongs to an
//! organization and is created on behalf of a team.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`list_projects`](SentryClient::list_projects) | `GET projects/` |
//! | [`get_project`](SentryClient::get_project) | `GET projects/{org}/{slug}/` |
//! | [`create_project`](SentryClient::create_project) | `POST teams/{org}/{team}/projects/` |
//! | [`update_project`](SentryClient::update_project) | `PUT projects/{org}/{slug}/` |
//! | [`delete_project`](SentryClient::delete_project) | `DELETE projects/{org}/{slug}/` |
//!
//! # Example
//!
//! ```rust,no_run
//! use sentry_client::api::SentryClient;
//! use sentry_client::api::projects::{CreateProjectRequest, ProjectListQuery};
//!
//! # async fn example() -> sentry_client::api::Result<()> {
//! let client = SentryClient::new("your-token", None, None)?;
//!
//! for project in client.list_projects(&ProjectListQuery::default()).await? {
//!     println!("{} ({})", project.name, project.slug);
//! }
//!
//! let request = CreateProjectRequest {
//!     name: "web".to_string(),
//!     slug: None,
//!     platform: Some("javascript".to_string()),
//! };
//! let project = client.create_project("acme", "frontend", &request).await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::SentryClient;
use super::error::Result;
use super::query::{encode_pairs, QueryParams};

/// A Sentry project as returned by the project endpoints.
///
/// Only `id` and `name` are guaranteed; the list and detail endpoints return
/// different subsets of the remaining fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric identifier, serialized as a string.
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL-safe identifier, unique within the organization.
    #[serde(default)]
    pub slug: String,

    /// SDK platform (e.g., `python`, `javascript-react`).
    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,

    /// `active`, `disabled`, `pending_deletion` or `deletion_in_progress`.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub is_bookmarked: bool,

    #[serde(default)]
    pub is_member: bool,

    #[serde(default)]
    pub has_access: bool,

    /// The owning organization. Present on list responses.
    #[serde(default)]
    pub organization: Option<OrganizationRef>,
}

/// Minimal organization reference embedded in project payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub id: String,
    pub slug: String,
    pub name: String,
}

/// Body of a project creation request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,

    /// Derived from `name` by Sentry when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Body of a project update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bookmarked: Option<bool>,
}

impl UpdateProjectRequest {
    /// Returns `true` if the request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.platform.is_none()
            && self.is_bookmarked.is_none()
    }
}

/// Query parameters of the project list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectListQuery {
    /// Opaque cursor taken from the `Link` header of a previous page.
    pub cursor: Option<String>,
}

impl QueryParams for ProjectListQuery {
    fn to_query_string(&self) -> Result<String> {
        encode_pairs(self.cursor.as_deref().map(|cursor| ("cursor", cursor)))
    }
}

impl SentryClient {
    /// Lists the projects the token has access to.
    pub async fn list_projects(&self, query: &ProjectListQuery) -> Result<Vec<Project>> {
        self.get_with_query("projects", query).await
    }

    /// Fetches a single project.
    pub async fn get_project(&self, organization: &str, slug: &str) -> Result<Project> {
        self.get(&format!("projects/{}/{}", organization, slug)).await
    }

    /// Creates a project owned by `team`.
    pub async fn create_project(
        &self,
        organization: &str,
        team: &str,
        request: &CreateProjectRequest,
    ) -> Result<Project> {
        self.post(&format!("teams/{}/{}/projects", organization, team), request)
            .await
    }

    /// Updates a project and returns its new state.
    pub async fn update_project(
        &self,
        organization: &str,
        slug: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project> {
        self.put(&format!("projects/{}/{}", organization, slug), request)
            .await
    }

    /// Schedules a project for deletion.
    pub async fn delete_project(&self, organization: &str, slug: &str) -> Result<()> {
        self.delete(&format!("projects/{}/{}", organization, slug))
            .await
    }
}
