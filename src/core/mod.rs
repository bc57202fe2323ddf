//! # Core
//!
//! The state/action layer. It knows nothing about how the UI renders.
//!
//! ```text
//! UI → dispatch(action on Store) → await network call
//!    → commit(mutator on AppState) → state updated → UI re-renders
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `AppState` struct — every slot of board data, plus the
//!   crate-private mutators that are its only writers
//! - [`store`]: the `Store` — the per-session context object whose async
//!   action methods call the backend and commit results
//! - [`config`]: base URL and timeout resolution

pub mod config;
pub mod state;
pub mod store;
