// PostgreSQL persistence for Vigil events
//
// This crate implements the core EventStore trait against PostgreSQL.
//
// Key design decisions:
// - Every store call opens, uses, and closes its own connection; no pool or
//   shared session state, so concurrent handler invocations never interact
// - The insert runs inside an explicit transaction
// - The target table name comes from configuration and is embedded as a
//   quoted identifier, never via raw interpolation

pub mod config;
pub mod postgres;

// Re-exports for convenience
pub use config::DbConfig;
pub use postgres::PostgresEventStore;
