//! Seeding helpers for tests that run against a real database.

use credcheck::core::config::DatabaseConfig;
use sqlx::{Connection, PgConnection};
use std::path::Path;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    email TEXT NOT NULL,
    access_token TEXT NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE
)";

/// A user row inserted for one test.
pub struct SeededUser {
    pub email: String,
    pub token: String,
}

impl SeededUser {
    /// Credentials file contents for this user.
    pub fn credentials(&self) -> String {
        format!("{}\n{}\n", self.email, self.token)
    }
}

/// Insert a user with a unique email into the database described by
/// `config_path`, creating the `users` table first if needed.
pub fn seed_user(config_path: &Path, active: bool) -> SeededUser {
    let config = DatabaseConfig::load(config_path).expect("failed to load test database config");
    let user = SeededUser {
        email: format!("{}@credcheck.test", uuid::Uuid::new_v4()),
        token: uuid::Uuid::new_v4().to_string(),
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let mut conn = PgConnection::connect_with(&config.connect_options())
            .await
            .expect("failed to connect to test database");

        // Parallel tests may race on creation; the table exists either way.
        let _ = sqlx::query(CREATE_USERS).execute(&mut conn).await;

        sqlx::query("INSERT INTO users (email, access_token, is_active) VALUES ($1, $2, $3)")
            .bind(&user.email)
            .bind(&user.token)
            .bind(active)
            .execute(&mut conn)
            .await
            .expect("failed to insert test user");

        let _ = conn.close().await;
    });

    user
}
