pub mod definitions;
pub mod devops_scraper;
pub mod endpoint;
mod html;
pub mod toc;

pub use definitions::ModelAggregator;
pub use devops_scraper::{DevopsScraper, ScrapeReport, ScraperConfig, write_result};
pub use endpoint::parse_endpoint;
pub use toc::collect_leaves;
