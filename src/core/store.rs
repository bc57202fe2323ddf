//! # Store
//!
//! The per-session context object the UI dispatches intents against. It
//! owns the state, the API client, and the two external collaborators
//! (auth backend, router).
//!
//! ```text
//! UI → action → await network call → commit(mutator) → state updated
//! ```
//!
//! Each action is one round trip: call the backend, then commit exactly
//! one mutator with the response, or chain into another action that does.
//! Auth actions swallow failures with a warning and leave state intact;
//! data actions hand the error back to the caller, also leaving state
//! intact. Nothing here retries, caches, or dedups in-flight calls —
//! dispatching the same action twice produces two commits, last write
//! wins.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

use crate::api::types::{Credentials, Event, Player, Post, Team};
use crate::api::{ApiClient, ApiError};
use crate::auth::AuthService;
use crate::core::state::AppState;
use crate::router::{Route, Router};

pub struct Store {
    state: AppState,
    api: ApiClient,
    auth: Arc<dyn AuthService>,
    router: Arc<dyn Router>,
}

impl Store {
    pub fn new(api: ApiClient, auth: Arc<dyn AuthService>, router: Arc<dyn Router>) -> Self {
        Self {
            state: AppState::new(),
            api,
            auth,
            router,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Remember which team the UI is looking at. No action reads this
    /// slot back; it exists for the UI alone.
    pub fn set_active_team(&mut self, team_id: impl Into<String>) {
        self.state.set_active_team_id(team_id.into());
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub async fn register(&mut self, creds: &Credentials) {
        match self.auth.register(creds).await {
            Ok(user) => {
                self.state.set_user(user);
                self.router.push(Route::Login);
            }
            Err(e) => warn!("register failed: {e}"),
        }
    }

    pub async fn login(&mut self, creds: &Credentials) {
        match self.auth.login(creds).await {
            Ok(user) => {
                self.state.set_user(user);
                self.router.push(Route::Boards);
            }
            Err(e) => warn!("login failed: {e}"),
        }
    }

    /// Ends the session. The backend's acknowledgement flag is advisory:
    /// local state is cleared either way once the call completes.
    pub async fn logout(&mut self) {
        match self.auth.logout().await {
            Ok(acknowledged) => {
                if !acknowledged {
                    debug!("logout not acknowledged by auth backend");
                }
                self.state.reset_state();
                self.router.push(Route::Login);
            }
            Err(e) => warn!("logout failed: {e}"),
        }
    }

    // ========================================================================
    // Posts
    // ========================================================================

    pub async fn add_post(&mut self, data: &Value) -> Result<(), ApiError> {
        let post: Post = self.api.post("posts", data).await?;
        self.state.add_post(post);
        Ok(())
    }

    pub async fn get_posts(&mut self) -> Result<(), ApiError> {
        let posts: Vec<Post> = self.api.get("posts").await?;
        self.state.all_posts(posts);
        Ok(())
    }

    pub async fn get_posts_by_team_id(&mut self, team_id: &str) -> Result<(), ApiError> {
        let posts: Vec<Post> = self.api.get(&format!("teams/{team_id}/posts")).await?;
        self.state.all_posts(posts);
        Ok(())
    }

    /// Deletes the post, then re-fetches the posts of the team it
    /// belonged to.
    pub async fn delete_post(&mut self, post: &Post) -> Result<(), ApiError> {
        self.api.delete(&format!("posts/{}", post.id)).await?;
        self.get_posts_by_team_id(&post.team_id).await
    }

    /// Updates the post, then re-fetches the full unscoped list (unlike
    /// `delete_post`, which re-fetches scoped).
    pub async fn edit_post(&mut self, post: &Post) -> Result<(), ApiError> {
        self.api.put(&format!("posts/{}", post.id), post).await?;
        self.get_posts().await
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub async fn get_events(&mut self) -> Result<(), ApiError> {
        let events: Vec<Event> = self.api.get("events").await?;
        self.state.set_events(events);
        Ok(())
    }

    pub async fn get_events_by_team_id(&mut self, team_id: &str) -> Result<(), ApiError> {
        let events: Vec<Event> = self.api.get(&format!("teams/{team_id}/events")).await?;
        self.state.set_events(events);
        Ok(())
    }

    pub async fn create_event(&mut self, data: &Value) -> Result<(), ApiError> {
        let event: Event = self.api.post("events", data).await?;
        self.state.put_event(event);
        Ok(())
    }

    pub async fn edit_event(&mut self, event: &Event) -> Result<(), ApiError> {
        self.api.put(&format!("events/{}", event.id), event).await?;
        self.get_events().await
    }

    // TODO: the re-fetch passes the deleted event's id where a team id is
    // expected; confirm the intended scope with the backend before changing.
    pub async fn delete_event(&mut self, event_id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("events/{event_id}")).await?;
        self.get_events_by_team_id(event_id).await
    }

    // ========================================================================
    // Teams
    // ========================================================================

    pub async fn get_teams(&mut self) -> Result<(), ApiError> {
        let teams: Vec<Team> = self.api.get("teams").await?;
        self.state.set_teams(teams);
        Ok(())
    }

    // TODO: the create response is committed as the entire teams list;
    // confirm whether this should append or re-fetch instead.
    pub async fn create_team(&mut self, data: &Value) -> Result<(), ApiError> {
        let teams: Vec<Team> = self.api.post("teams", data).await?;
        self.state.set_teams(teams);
        Ok(())
    }

    pub async fn delete_team(&mut self, team_id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("teams/{team_id}")).await?;
        self.get_teams().await
    }

    // ========================================================================
    // Players
    // ========================================================================

    pub async fn get_players(&mut self) -> Result<(), ApiError> {
        let players: Vec<Player> = self.api.get("players").await?;
        debug!("fetched {} players", players.len());
        self.state.all_players(players);
        Ok(())
    }

    pub async fn get_players_by_team_id(&mut self, team_id: &str) -> Result<(), ApiError> {
        let players: Vec<Player> = self.api.get(&format!("teams/{team_id}/players")).await?;
        self.state.all_players(players);
        Ok(())
    }

    pub async fn add_player(&mut self, data: &Value) -> Result<(), ApiError> {
        let player: Player = self.api.post("players", data).await?;
        self.state.create_player(player);
        Ok(())
    }

    pub async fn delete_player(&mut self, player_id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("players/{player_id}")).await?;
        self.get_players().await
    }

    pub async fn edit_player(&mut self, player: &Player) -> Result<(), ApiError> {
        self.api.put(&format!("players/{}", player.id), player).await?;
        self.get_players().await
    }
}
