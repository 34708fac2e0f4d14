use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::TradeStoreConfig;

#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub database_url: String,
}

impl From<&TradeStoreConfig> for PostgresConfig {
    fn from(config: &TradeStoreConfig) -> Self {
        Self {
            database_url: config.database.database_url(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            e
        })?;

        info!("Connected to database");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::DatabaseConfig;

    #[test]
    fn test_postgres_config_from_trade_store_config() {
        let config = TradeStoreConfig {
            database: DatabaseConfig {
                host: "db".to_string(),
                port: 5433,
                username: "trade".to_string(),
                password: "trade".to_string(),
                name: "trades".to_string(),
            },
        };

        assert_eq!(
            PostgresConfig::from(&config).database_url,
            "postgres://trade:trade@db:5433/trades"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_unsupported_driver() {
        let result = Postgres::new(PostgresConfig {
            database_url: "mysql://trade@localhost/trades".to_string(),
        })
        .await;

        assert!(result.is_err());
    }
}
