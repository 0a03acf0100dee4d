use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

const MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects, runs pending migrations and wraps the pool for sea-orm.
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");

        Ok(Self {
            db: SqlxPostgresConnector::from_sqlx_postgres_pool(pool),
        })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
