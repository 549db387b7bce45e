pub mod connection;
pub mod history;
pub mod models;
pub mod players;
pub mod ratings;
pub mod setup;
pub mod snapshots;

#[cfg(test)]
pub(crate) mod fixtures;

pub use connection::{create_pool, get_connection, AccessMode, DbConn, DbPool};
pub use models::*;
