//! # Application State
//!
//! All board data held client-side, one slot per domain record or
//! collection:
//!
//! ```text
//! AppState
//! ├── user: Option<User>             // authenticated identity
//! ├── posts: Vec<Post>               // scoped to the last-fetched team
//! ├── teams: Vec<Team>
//! ├── notes: Vec<Value>
//! ├── active_post: Option<Post>
//! ├── events: Vec<Event>
//! ├── active_admin: Option<Value>
//! ├── players: Vec<Player>
//! └── active_team_id: Option<String> // set-only
//! ```
//!
//! Every slot is replaced wholesale by the latest successful fetch; there
//! is no merge or patch semantics. The only writers are the `pub(crate)`
//! mutators below, committed exclusively from the action methods in
//! `store.rs`. Reads go through the public getters.

use serde_json::Value;

use crate::api::types::{Event, Player, Post, Team, User};

#[derive(Debug, Default)]
pub struct AppState {
    user: Option<User>,
    posts: Vec<Post>,
    teams: Vec<Team>,
    notes: Vec<Value>,
    active_post: Option<Post>,
    events: Vec<Event>,
    active_admin: Option<Value>,
    players: Vec<Player>,
    active_team_id: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn notes(&self) -> &[Value] {
        &self.notes
    }

    pub fn active_post(&self) -> Option<&Post> {
        self.active_post.as_ref()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn active_admin(&self) -> Option<&Value> {
        self.active_admin.as_ref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn active_team_id(&self) -> Option<&str> {
        self.active_team_id.as_deref()
    }

    // ------------------------------------------------------------------
    // Mutators. Synchronous slot replacement, nothing else.
    // ------------------------------------------------------------------

    pub(crate) fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Clears every slot back to its empty shape (logout).
    pub(crate) fn reset_state(&mut self) {
        *self = AppState::default();
    }

    pub(crate) fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub(crate) fn all_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub(crate) fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub(crate) fn put_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(crate) fn set_teams(&mut self, teams: Vec<Team>) {
        self.teams = teams;
    }

    pub(crate) fn all_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    pub(crate) fn create_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub(crate) fn set_active_team_id(&mut self, team_id: String) {
        self.active_team_id = Some(team_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{event, player, post, team, test_user};

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new();
        assert!(state.user().is_none());
        assert!(state.posts().is_empty());
        assert!(state.teams().is_empty());
        assert!(state.notes().is_empty());
        assert!(state.active_post().is_none());
        assert!(state.events().is_empty());
        assert!(state.active_admin().is_none());
        assert!(state.players().is_empty());
        assert!(state.active_team_id().is_none());
    }

    #[test]
    fn test_set_user_replaces_slot() {
        let mut state = AppState::new();
        let user = test_user("1", "a");
        state.set_user(user.clone());
        assert_eq!(state.user(), Some(&user));

        let other = test_user("2", "b");
        state.set_user(other.clone());
        assert_eq!(state.user(), Some(&other));
    }

    #[test]
    fn test_all_posts_replaces_wholesale() {
        let mut state = AppState::new();
        state.all_posts(vec![post("p1", "t1"), post("p2", "t1")]);
        state.all_posts(vec![post("p3", "t2")]);
        assert_eq!(state.posts().len(), 1);
        assert_eq!(state.posts()[0].id, "p3");
    }

    #[test]
    fn test_add_post_appends_preserving_order() {
        let mut state = AppState::new();
        state.all_posts(vec![post("p1", "t1")]);
        state.add_post(post("p2", "t1"));
        assert_eq!(state.posts().len(), 2);
        assert_eq!(state.posts()[0].id, "p1");
        assert_eq!(state.posts()[1].id, "p2");
    }

    #[test]
    fn test_add_post_does_not_dedup() {
        let mut state = AppState::new();
        state.add_post(post("p1", "t1"));
        state.add_post(post("p1", "t1"));
        assert_eq!(state.posts().len(), 2);
    }

    #[test]
    fn test_put_event_appends() {
        let mut state = AppState::new();
        state.set_events(vec![event("e1", "t1")]);
        state.put_event(event("e2", "t1"));
        assert_eq!(state.events().len(), 2);
        assert_eq!(state.events()[1].id, "e2");
    }

    #[test]
    fn test_create_player_appends() {
        let mut state = AppState::new();
        state.all_players(vec![player("pl1", "t1")]);
        state.create_player(player("pl2", "t1"));
        assert_eq!(state.players().len(), 2);
        assert_eq!(state.players()[1].id, "pl2");
    }

    #[test]
    fn test_set_teams_replaces_wholesale() {
        let mut state = AppState::new();
        state.set_teams(vec![team("t1"), team("t2")]);
        state.set_teams(vec![team("t3")]);
        assert_eq!(state.teams().len(), 1);
        assert_eq!(state.teams()[0].id, "t3");
    }

    #[test]
    fn test_set_active_team_id() {
        let mut state = AppState::new();
        state.set_active_team_id("t9".to_string());
        assert_eq!(state.active_team_id(), Some("t9"));
    }

    #[test]
    fn test_reset_state_clears_every_slot() {
        let mut state = AppState::new();
        state.set_user(test_user("1", "a"));
        state.all_posts(vec![post("p1", "t1")]);
        state.set_teams(vec![team("t1")]);
        state.set_events(vec![event("e1", "t1")]);
        state.all_players(vec![player("pl1", "t1")]);
        state.set_active_team_id("t1".to_string());

        state.reset_state();

        assert!(state.user().is_none());
        assert!(state.posts().is_empty());
        assert!(state.teams().is_empty());
        assert!(state.notes().is_empty());
        assert!(state.active_post().is_none());
        assert!(state.events().is_empty());
        assert!(state.active_admin().is_none());
        assert!(state.players().is_empty());
        assert!(state.active_team_id().is_none());
    }
}
