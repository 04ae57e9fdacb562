//! In-memory session tracking.
//!
//! Authentication is a simulated flow that always succeeds, so sessions
//! are ephemeral by design. Only token hashes are held.

use crate::state::{AppState, UserProfile};

use super::crypto::{generate_token, hash_token};

/// Issue a session token for a username.
pub fn create_session(state: &AppState, username: &str) -> String {
    let token = generate_token();
    state
        .sessions
        .write()
        .unwrap()
        .insert(hash_token(&token), username.to_string());
    token
}

/// Resolve a bearer token to its user profile, if the session exists.
pub fn user_for_token(state: &AppState, token: &str) -> Option<UserProfile> {
    let username = {
        let sessions = state.sessions.read().unwrap();
        sessions.get(&hash_token(token)).cloned()?
    };
    state.users.read().unwrap().get(&username).cloned()
}

/// Issue an admin session token.
pub fn create_admin_session(state: &AppState) -> String {
    let token = generate_token();
    state
        .admin_sessions
        .write()
        .unwrap()
        .insert(hash_token(&token), ());
    token
}

pub fn admin_token_valid(state: &AppState, token: &str) -> bool {
    state
        .admin_sessions
        .read()
        .unwrap()
        .contains_key(&hash_token(token))
}
