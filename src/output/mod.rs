//! Report assembly and CSV serialization

mod csv;

pub use csv::write_report;

use crate::jira::{format_grants, FilterDetail};

/// One flattened row of the permission report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub filter_name: String,
    pub owner: String,
    pub share_permissions: String,
    pub edit_permissions: String,
    pub is_writable: bool,
    pub approximate_last_used: Option<String>,
}

impl ReportRow {
    /// Flatten a filter detail into a report row
    pub fn from_detail(detail: &FilterDetail) -> Self {
        Self {
            filter_name: detail.name.clone(),
            owner: detail.owner.display_name.clone(),
            share_permissions: format_grants(&detail.share_permissions),
            edit_permissions: format_grants(&detail.edit_permissions),
            is_writable: detail.is_writable,
            approximate_last_used: detail.approximate_last_used.clone(),
        }
    }
}

/// Build report rows from fetched details, one row per detail
pub fn build_rows(details: &[FilterDetail]) -> Vec<ReportRow> {
    details.iter().map(ReportRow::from_detail).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_detail(json: &str) -> FilterDetail {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_row_from_detail() {
        let detail = sample_detail(
            r#"{
                "id": "10042",
                "name": "Team board",
                "owner": {"displayName": "Alice"},
                "sharePermissions": [
                    {"type": "group", "group": {"name": "engineering"}}
                ],
                "editPermissions": [
                    {"type": "user", "user": {"displayName": "Bob"}}
                ],
                "isWritable": true,
                "approximateLastUsed": "2025-11-03T09:12:00.000+0000"
            }"#,
        );

        let row = ReportRow::from_detail(&detail);
        assert_eq!(row.filter_name, "Team board");
        assert_eq!(row.owner, "Alice");
        assert_eq!(row.share_permissions, "Group: engineering");
        assert_eq!(row.edit_permissions, "Bob");
        assert!(row.is_writable);
        assert!(row.approximate_last_used.is_some());
    }

    #[test]
    fn test_row_without_last_used() {
        let detail = sample_detail(
            r#"{
                "id": "10001",
                "name": "Old filter",
                "owner": {"displayName": "Bob"},
                "isWritable": false
            }"#,
        );

        let row = ReportRow::from_detail(&detail);
        assert_eq!(row.share_permissions, "");
        assert_eq!(row.edit_permissions, "");
        assert!(row.approximate_last_used.is_none());
    }

    #[test]
    fn test_build_rows_one_per_detail() {
        let details = vec![
            sample_detail(r#"{"id": "1", "name": "A", "owner": {"displayName": "X"}}"#),
            sample_detail(r#"{"id": "2", "name": "B", "owner": {"displayName": "Y"}}"#),
        ];

        let rows = build_rows(&details);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].filter_name, "A");
        assert_eq!(rows[1].owner, "Y");
    }
}
