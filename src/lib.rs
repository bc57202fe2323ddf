//! Teamboard client state layer.
//!
//! In-memory store of board data (user, posts, teams, events, players)
//! synchronized against the backend REST API. The UI owns one
//! [`core::store::Store`] per session and dispatches intents against it;
//! responses are committed wholesale into [`core::state::AppState`].

pub mod api;
pub mod auth;
pub mod core;
pub mod router;

#[cfg(test)]
pub mod test_support;
