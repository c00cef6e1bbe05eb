//! Filter models and API operations

mod api;
mod models;

pub use models::{
    format_grants, FilterDetail, FilterSearchPage, FilterSummary, GroupRef, Owner,
    PermissionGrant, RoleRef, UserRef,
};
