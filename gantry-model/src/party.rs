//! Thin shared party and site structs.
//!
//! Plain wire shapes consumed by several services; no custom codec logic
//! beyond the scalar id types.

use gantry_types::IntString;
use serde::{Deserialize, Serialize};

/// A platform user as exchanged between services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: IntString,
    pub user_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// A works contract a site operates under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub contract_id: IntString,
    pub contract_no: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// A location within a site (block, floor, chainage...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: IntString,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<IntString>,
    #[serde(default)]
    pub sort_no: IntString,
}
