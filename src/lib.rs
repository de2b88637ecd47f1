//! acme-notes: notes and flavors CRUD over PostgreSQL.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod resources;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use bootstrap::bootstrap_schema;
pub use config::{SchemaMode, Settings};
pub use error::{AppError, ConfigError};
pub use resources::{Flavor, FlavorInput, Flavors, Note, NoteInput, Notes, Resource};
pub use routes::app;
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
