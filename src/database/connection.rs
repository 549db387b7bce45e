use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// How the store is opened. The dashboard only reads; setup needs to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

pub fn create_pool(database_path: &str, mode: AccessMode) -> Result<DbPool> {
    if mode == AccessMode::ReadOnly && !std::path::Path::new(database_path).exists() {
        anyhow::bail!("Database file not found: {}", database_path);
    }
    let manager = build_manager(database_path, mode);
    build_pool(manager)
}

fn build_manager(path: &str, mode: AccessMode) -> SqliteConnectionManager {
    let access = match mode {
        AccessMode::ReadOnly => OpenFlags::SQLITE_OPEN_READ_ONLY,
        AccessMode::ReadWrite => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
    };
    let flags = access | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    SqliteConnectionManager::file(path).with_flags(flags)
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
