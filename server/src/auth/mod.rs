mod crypto;
mod extractor;
mod middleware;
mod sessions;

pub use crypto::{generate_token, hash_token};
pub use extractor::{AdminSession, AuthUser};
pub use middleware::require_auth;
pub use sessions::{admin_token_valid, create_admin_session, create_session, user_for_token};
