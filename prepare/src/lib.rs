pub mod config;
pub mod error;
pub mod output;
pub mod tables;

pub use config::TablesConfig;
pub use config::UNICODE_VERSION;

pub use error::ConfigError;
pub use error::IntegrityError;
pub use error::PrepareError;
