pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Platform, VideoRecord};
pub use resolver::TitleResolver;
pub use store::VideoStore;
