//! SQLite database adapters for certcache.

pub mod certificate_store;
pub mod connection;
pub mod migrations;

pub use certificate_store::SqliteCertificateStore;
pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError, PoolConfig};
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};
