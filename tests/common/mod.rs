#![allow(dead_code)]

use shorturl::application::services::LinkService;
use shorturl::infrastructure::persistence::PgLinkRepository;
use shorturl::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// DNS checks in tests stay within the hosts file, so a short bound is
/// plenty.
pub const TEST_DNS_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgLinkRepository::new(pool));
    let link_service = Arc::new(LinkService::new(repository, TEST_DNS_TIMEOUT));

    AppState::new(link_service)
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}
