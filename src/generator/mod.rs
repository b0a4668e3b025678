pub mod classify;
pub mod pipeline;
pub mod render;
pub mod tables;

pub use classify::{ModelKind, classify};
pub use pipeline::{ModelGenerator, load_renderer, load_result, write_models};
pub use render::{RenderedUnit, TemplateRenderer, escape_identifier, fill, normalize_type};
