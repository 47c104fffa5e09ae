pub mod tables;

pub use tables::{DEFAULT_FETCH_TIMEOUT, PgDataProvider};
