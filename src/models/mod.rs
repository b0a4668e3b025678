mod api_docs;
mod toc;

pub use api_docs::{BodyParameter, Endpoint, Model, Parameter, Property, ScrapeResult};
pub use toc::{Toc, TocNode};
