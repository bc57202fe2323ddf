//! Domain records exchanged with the board API.
//!
//! Records are stored verbatim: the identifier fields the store needs by
//! name (`_id`, `teamId`) are typed, everything else the backend sends
//! rides along in `extra` untouched. No client-side derived fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login / registration credentials, forwarded to the auth backend as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The authenticated identity for the current session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Post {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "teamId", default)]
    pub team_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Team {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Event {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "teamId", default)]
    pub team_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Player {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "teamId", default)]
    pub team_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
