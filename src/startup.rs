//! Database initialization: bootstrap, connection, migrations, and seeding.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};

use crate::{config::Config, data::group::GroupRepository, error::AppError, seed};

/// Creates the application database and role when they do not exist yet.
///
/// Connects to the `postgres` maintenance database, checks `pg_database` for
/// the configured database name and creates it if missing. When `PG_ROLE` is
/// configured, the role is created (if missing) and granted the database.
/// Identifiers come from trusted operator configuration and are quoted before
/// interpolation.
///
/// # Arguments
/// - `config` - Application configuration with database identity
///
/// # Returns
/// - `Ok(())` - Database (and role) present after the call
/// - `Err(AppError::DbErr)` - Maintenance connection or DDL statement failed
pub async fn ensure_database(config: &Config) -> Result<(), AppError> {
    let mut opt = ConnectOptions::new(config.maintenance_url());
    opt.sqlx_logging(false);

    let admin = Database::connect(opt).await?;

    let exists = admin
        .query_one_raw(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [config.pg_db.clone().into()],
        ))
        .await?
        .is_some();

    if exists {
        tracing::info!("database '{}' already exists", config.pg_db);
    } else {
        admin
            .execute_unprepared(&format!("CREATE DATABASE \"{}\"", config.pg_db))
            .await?;
        tracing::info!("database '{}' has been created", config.pg_db);
    }

    if let Some(role) = &config.pg_role {
        let role_exists = admin
            .query_one_raw(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT 1 FROM pg_roles WHERE rolname = $1",
                [role.clone().into()],
            ))
            .await?
            .is_some();

        if !role_exists {
            admin
                .execute_unprepared(&format!("CREATE ROLE \"{}\"", role))
                .await?;
            tracing::info!("role '{}' has been created", role);
        }

        admin
            .execute_unprepared(&format!(
                "GRANT ALL PRIVILEGES ON DATABASE \"{}\" TO \"{}\"",
                config.pg_db, role
            ))
            .await?;
        admin
            .execute_unprepared(&format!("GRANT \"{}\" TO \"{}\"", role, config.pg_user))
            .await?;
    }

    Ok(())
}

/// Connects to the application database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the first request.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(config.database_url());
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds development fixtures when the database is empty.
///
/// An existing group is taken as evidence that seeding already ran; the
/// seeder itself inserts groups first, so a partially failed run is retried
/// on the next start.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    if GroupRepository::new(db).count().await? > 0 {
        tracing::info!("database already seeded");
        return Ok(());
    }

    tracing::info!("seeding development fixtures");
    seed::insert_fixtures(db, &seed::SeedConfig::default()).await?;

    Ok(())
}
