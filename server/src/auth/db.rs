use chrono::{Duration, Utc};
use diesel::prelude::*;

use crate::db::DbPool;
use crate::models::NewSession;
use crate::schema::sessions;

use super::crypto::{generate_token, hash_token};

/// How long an admin session stays valid.
const SESSION_LIFETIME_DAYS: i64 = 30;

/// Create a new admin session and return the bearer token.
pub fn create_session(pool: &DbPool) -> Option<String> {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return None;
        }
    };

    let token = generate_token();
    let new_session = NewSession {
        token_hash: &hash_token(&token),
        expires_at: Utc::now() + Duration::days(SESSION_LIFETIME_DAYS),
    };

    match diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(&mut conn)
    {
        Ok(_) => Some(token),
        Err(e) => {
            tracing::error!("Failed to create session: {}", e);
            None
        }
    }
}

/// True when the token belongs to an unexpired session.
pub fn session_is_valid(pool: &DbPool, token: &str) -> bool {
    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(_) => return false,
    };

    let token_hash = hash_token(token);
    diesel::select(diesel::dsl::exists(
        sessions::table
            .filter(sessions::token_hash.eq(&token_hash))
            .filter(sessions::expires_at.gt(Utc::now())),
    ))
    .get_result(&mut conn)
    .unwrap_or(false)
}
