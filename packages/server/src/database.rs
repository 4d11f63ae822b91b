use std::time::Duration;

use sea_orm::sea_query::{
    Index, IndexCreateStatement, MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::show;

/// Connect, sync the schema from the entity registry and ensure indexes.
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    // Each in-memory SQLite connection is its own database.
    let max_connections = if is_sqlite_memory(&config.url) {
        1
    } else {
        config.max_connections
    };

    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("booking_server::entity::*")
        .sync(&db)
        .await?;
    ensure_indexes(&db).await?;

    Ok(db)
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

fn render(db: &DatabaseConnection, stmt: &IndexCreateStatement) -> String {
    match db.get_database_backend() {
        DbBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
        DbBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        _ => stmt.to_string(PostgresQueryBuilder),
    }
}

/// Ensure the secondary indexes used by per-venue and per-artist show lookups.
///
/// Schema sync creates the foreign keys but not these lookup indexes.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let indexes = [
        ("idx_show_venue_id", show::Column::VenueId),
        ("idx_show_artist_id", show::Column::ArtistId),
    ];

    for (name, column) in indexes {
        let stmt = Index::create()
            .if_not_exists()
            .name(name)
            .table(show::Entity)
            .col(column)
            .to_owned();

        match db.execute_unprepared(&render(db, &stmt)).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) => tracing::warn!("Failed to create index {}: {}", name, e),
        }
    }

    Ok(())
}
