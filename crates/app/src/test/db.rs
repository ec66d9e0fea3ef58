//! Per-test Postgres databases inside one shared container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const PG_USER: &str = "offora_test";
const PG_PASSWORD: &str = "offora_test_password";

/// Started on first use, reused by every test in the binary.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> =
    Lazy::new(OnceCell::new);

/// Receives the names of databases whose `TestDb` was dropped.
static DROP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(PG_USER)
        .with_password(PG_PASSWORD)
        .with_db_name("offora_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn spawn_dropper() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(err) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {err}");
            }
        }
    });

    sender
}

/// Connection URL for `database` on the shared container.
async fn server_url(database: &str) -> Option<String> {
    let container = POSTGRES_CONTAINER.get()?;
    let port = container.get_host_port_ipv4(5432).await.ok()?;

    let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
        .unwrap_or_else(|_| "localhost".to_string());

    Some(format!(
        "postgresql://{PG_USER}:{PG_PASSWORD}@{host}:{port}/{database}"
    ))
}

/// Only names produced by [`TestDb::new`] are ever interpolated into DDL.
fn is_generated_name(name: &str) -> bool {
    name.strip_prefix("offora_test_")
        .is_some_and(|rest| rest.len() == 32 && rest.chars().all(|c| c.is_ascii_hexdigit()))
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if !is_generated_name(name) {
        return Ok(());
    }

    let Some(url) = server_url("postgres").await else {
        return Ok(());
    };

    let mut conn = PgConnection::connect(&url).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database that only one test uses.
///
/// Services commit normally; isolation comes from every test having its own database.
/// The database is dropped in the background once the `TestDb` goes out of scope.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        DROP_SENDER.get_or_init(spawn_dropper).await;
        POSTGRES_CONTAINER.get_or_init(start_container).await;

        let name = format!("offora_test_{}", Uuid::now_v7().simple());

        let admin_url = server_url("postgres")
            .await
            .expect("PostgreSQL container should expose its port");

        let mut admin = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin
            .close()
            .await
            .expect("Failed to close admin connection");

        let url = server_url(&name)
            .await
            .expect("PostgreSQL container should expose its port");

        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to create pool for test database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_generated_names_are_dropped() {
        let generated = format!("offora_test_{}", Uuid::now_v7().simple());

        assert!(is_generated_name(&generated));
        assert!(!is_generated_name("offora_test"));
        assert!(!is_generated_name("postgres"));
        assert!(!is_generated_name("offora_test_\"; DROP TABLE users; --"));
    }

    #[tokio::test]
    async fn migrations_create_marketplace_tables() {
        let test_db = TestDb::new().await;

        for table in [
            "users",
            "api_tokens",
            "shop_owners",
            "stores",
            "offers",
            "offer_reviews",
            "shop_reviews",
            "subscriptions",
            "favorite_offers",
            "favorite_stores",
        ] {
            let exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
                .bind(format!("public.{table}"))
                .fetch_one(test_db.pool())
                .await
                .expect("Failed to query catalog");

            assert!(exists, "missing table {table}");
        }
    }

    #[tokio::test]
    async fn databases_are_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        sqlx::query("INSERT INTO users (uuid, username, email) VALUES ($1, 'solo', 'solo@example.com')")
            .bind(Uuid::now_v7())
            .execute(first.pool())
            .await
            .expect("Failed to insert user");

        let count: i64 = sqlx::query_scalar("SELECT count(*) FROM users")
            .fetch_one(second.pool())
            .await
            .expect("Failed to count users");

        assert_eq!(count, 0);
    }
}
