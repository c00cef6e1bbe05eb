//! Filter data models

use serde::Deserialize;

/// Minimal filter record from the search endpoint, enough to drive a detail
/// lookup
#[derive(Deserialize, Debug, Clone)]
pub struct FilterSummary {
    pub id: String,
    pub name: String,
}

/// One page of the filter search endpoint.
///
/// `values` is required: a successful response without it is malformed and
/// stops the listing loop. `isLast` defaults to true when absent, matching
/// the API's single-page behavior on Server instances.
#[derive(Deserialize, Debug)]
pub struct FilterSearchPage {
    pub values: Vec<FilterSummary>,
    #[serde(rename = "isLast", default = "default_is_last")]
    pub is_last: bool,
}

fn default_is_last() -> bool {
    true
}

/// Filter owner
#[derive(Deserialize, Debug, Clone)]
pub struct Owner {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Full filter record from the detail endpoint
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FilterDetail {
    pub id: String,
    pub name: String,
    pub owner: Owner,
    #[serde(default)]
    pub share_permissions: Vec<PermissionGrant>,
    #[serde(default)]
    pub edit_permissions: Vec<PermissionGrant>,
    #[serde(default)]
    pub is_writable: bool,
    pub approximate_last_used: Option<String>,
}

/// A single share/edit permission grant, tagged by `type`.
///
/// Grant kinds outside user/group/projectRole (global, authenticated,
/// project, ...) fold into `Other` and contribute nothing to the formatted
/// string.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PermissionGrant {
    User {
        user: UserRef,
    },
    Group {
        group: GroupRef,
    },
    ProjectRole {
        #[serde(rename = "projectRole")]
        project_role: RoleRef,
    },
    #[serde(other)]
    Other,
}

/// User reference inside a grant
#[derive(Deserialize, Debug, Clone)]
pub struct UserRef {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Group reference inside a grant
#[derive(Deserialize, Debug, Clone)]
pub struct GroupRef {
    pub name: String,
}

/// Project role reference inside a grant
#[derive(Deserialize, Debug, Clone)]
pub struct RoleRef {
    pub name: String,
}

/// Flatten a list of grants into one human-readable string.
///
/// Grants contribute in input order; unknown kinds contribute nothing.
/// An empty list yields an empty string.
pub fn format_grants(grants: &[PermissionGrant]) -> String {
    grants
        .iter()
        .filter_map(|grant| match grant {
            PermissionGrant::User { user } => Some(user.display_name.clone()),
            PermissionGrant::Group { group } => Some(format!("Group: {}", group.name)),
            PermissionGrant::ProjectRole { project_role } => {
                Some(format!("Project Role: {}", project_role.name))
            }
            PermissionGrant::Other => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}
