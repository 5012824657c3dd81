//! Connection pool setup and schema bootstrap for the Postgres-backed store.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tracing::info;

/// A type alias for the database connection pool (`Pool<Postgres>`).
pub type DbPool = Pool<Postgres>;

const MAX_CONNECTIONS: u32 = 5;

// The unique (user_id, check_in_day) pair is what makes a second check-in on the
// same day lose the race instead of inserting a duplicate.
const CREATE_SIGN_INS: &str = r#"
CREATE TABLE IF NOT EXISTS user_sign_ins (
    id BIGSERIAL PRIMARY KEY,
    user_id BIGINT NOT NULL,
    username TEXT NOT NULL,
    sign_in_time TEXT NOT NULL,
    check_in_day DATE NOT NULL,
    UNIQUE (user_id, check_in_day)
)"#;

pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates the check-in table if it does not exist yet.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_SIGN_INS).execute(pool).await?;
    info!(table = "user_sign_ins", "schema ready");
    Ok(())
}
