use serde::{Deserialize, Serialize};

use super::Role;

/// A managed catalog user (admin screens only).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Required on create, ignored on update when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserPageResponse {
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserWriteResponse {
    #[serde(default)]
    pub message: Option<String>,
}
