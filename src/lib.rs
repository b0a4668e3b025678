pub mod error;
pub mod generator;
pub mod models;
pub mod scraper;

pub use error::{GenerateError, ScrapeError};
pub use models::{Endpoint, Model, ScrapeResult};
