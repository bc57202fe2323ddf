//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Map;

use crate::api::types::{Credentials, Event, Player, Post, Team, User};
use crate::auth::{AuthError, AuthService};
use crate::router::{Route, Router};

/// Auth stub that always succeeds with a fixed user.
pub struct StubAuth {
    user: User,
    logout_acknowledged: bool,
}

impl StubAuth {
    pub fn with_user(user: User) -> Self {
        Self {
            user,
            logout_acknowledged: true,
        }
    }

    pub fn logout_acknowledged(mut self, acknowledged: bool) -> Self {
        self.logout_acknowledged = acknowledged;
        self
    }
}

#[async_trait]
impl AuthService for StubAuth {
    async fn register(&self, _creds: &Credentials) -> Result<User, AuthError> {
        Ok(self.user.clone())
    }

    async fn login(&self, _creds: &Credentials) -> Result<User, AuthError> {
        Ok(self.user.clone())
    }

    async fn logout(&self) -> Result<bool, AuthError> {
        Ok(self.logout_acknowledged)
    }
}

/// Auth stub where every call errors.
pub struct FailingAuth;

#[async_trait]
impl AuthService for FailingAuth {
    async fn register(&self, _creds: &Credentials) -> Result<User, AuthError> {
        Err(AuthError::Rejected {
            status: 401,
            message: "nope".to_string(),
        })
    }

    async fn login(&self, _creds: &Credentials) -> Result<User, AuthError> {
        Err(AuthError::Rejected {
            status: 401,
            message: "nope".to_string(),
        })
    }

    async fn logout(&self) -> Result<bool, AuthError> {
        Err(AuthError::Network("connection refused".to_string()))
    }
}

/// Router that records every pushed route.
#[derive(Default)]
pub struct RecordingRouter {
    routes: Mutex<Vec<Route>>,
}

impl RecordingRouter {
    pub fn names(&self) -> Vec<&'static str> {
        self.routes.lock().unwrap().iter().map(|r| r.name()).collect()
    }
}

impl Router for RecordingRouter {
    fn push(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub fn creds() -> Credentials {
    Credentials {
        email: "a@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

pub fn test_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        extra: Map::new(),
    }
}

pub fn post(id: &str, team_id: &str) -> Post {
    Post {
        id: id.to_string(),
        team_id: team_id.to_string(),
        extra: Map::new(),
    }
}

pub fn team(id: &str) -> Team {
    Team {
        id: id.to_string(),
        name: String::new(),
        extra: Map::new(),
    }
}

pub fn event(id: &str, team_id: &str) -> Event {
    Event {
        id: id.to_string(),
        team_id: team_id.to_string(),
        extra: Map::new(),
    }
}

pub fn player(id: &str, team_id: &str) -> Player {
    Player {
        id: id.to_string(),
        team_id: team_id.to_string(),
        extra: Map::new(),
    }
}
