// Database service module
// SQLite connection and schema for the planner's key-value storage

mod connection;
mod schema;

pub use connection::Database;
