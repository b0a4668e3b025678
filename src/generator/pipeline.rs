use crate::error::GenerateError;
use crate::generator::render::{RenderedUnit, TemplateRenderer};
use crate::models::ScrapeResult;
use std::path::Path;
use tracing::{debug, info, warn};

pub const CLASS_TEMPLATE_FILE: &str = "ClassTemplate.txt";
pub const PROPERTY_TEMPLATE_FILE: &str = "PropertyTemplate.txt";
pub const DEFAULT_NAMESPACE: &str = "NamespaceRoot";
pub const SOURCE_EXTENSION: &str = "cs";

fn read(path: &Path) -> Result<String, GenerateError> {
    std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads the interchange file into its typed schema.
pub fn load_result(path: &Path) -> Result<ScrapeResult, GenerateError> {
    let text = read(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Loads `ClassTemplate.txt` and `PropertyTemplate.txt` from `dir`.
pub fn load_renderer(dir: &Path, namespace: &str) -> Result<TemplateRenderer, GenerateError> {
    let class_template = read(&dir.join(CLASS_TEMPLATE_FILE))?;
    let property_template = read(&dir.join(PROPERTY_TEMPLATE_FILE))?;
    Ok(TemplateRenderer::new(
        class_template,
        property_template,
        namespace,
    ))
}

/// File stem for a model name. Separators and characters that are not
/// portable in file names become `_`, and leading dots are dropped so the
/// file always lands directly inside the output directory.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim_start_matches('.').trim();
    if stem.is_empty() {
        "_".to_string()
    } else {
        stem.to_string()
    }
}

/// Writes each unit to `{dir}/{name}.cs`, creating `dir` and overwriting
/// existing files. A unit that cannot be written is logged and skipped.
/// Returns the number of files written.
pub fn write_models(dir: &Path, units: &[RenderedUnit]) -> Result<usize, GenerateError> {
    std::fs::create_dir_all(dir).map_err(|source| GenerateError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut written = 0usize;
    for unit in units {
        let path = dir.join(format!("{}.{}", file_stem(&unit.name), SOURCE_EXTENSION));
        debug!("Writing {}", path.display());
        match std::fs::write(&path, &unit.source) {
            Ok(()) => written += 1,
            Err(e) => warn!("Skipping model '{}': {}: {}", unit.name, path.display(), e),
        }
    }
    Ok(written)
}

pub struct ModelGenerator {
    result: ScrapeResult,
    renderer: TemplateRenderer,
}

impl ModelGenerator {
    pub fn new(result: ScrapeResult, renderer: TemplateRenderer) -> Self {
        Self { result, renderer }
    }

    pub fn render_all(&self) -> Vec<RenderedUnit> {
        self.result
            .models
            .iter()
            .map(|model| self.renderer.render(model))
            .collect()
    }

    /// Renders every model and writes them under `dir`. Returns the number of
    /// files written.
    pub fn generate(&self, dir: &Path) -> Result<usize, GenerateError> {
        let units = self.render_all();
        let written = write_models(dir, &units)?;
        if written < units.len() {
            warn!("{} of {} models could not be written", units.len() - written, units.len());
        }
        info!("Generated {} model files in {}", written, dir.display());
        Ok(written)
    }
}
