use crate::generator::classify::{ModelKind, classify_model};
use crate::generator::tables::{
    DYNAMIC_TYPE, ESCAPED_IDENTIFIERS, FALLBACK_TYPE, SCALAR_ALIASES, UNRESOLVED_TYPES,
};
use crate::models::{Model, Property};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `{{`, `}}` or a positional `{n}` slot.
static SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(\d+)\}").expect("static regex"));

/// The docs print maps as `<K, V>`, either raw-escaped or decoded, possibly
/// followed by an array suffix.
static MAP_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:&lt;|<)\s*([^,<>&]+?)\s*,(?:\s|&nbsp;)*([^,<>&]+?)\s*(?:&gt;|>)")
        .expect("static regex")
});

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    pub name: String,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    class_template: String,
    property_template: String,
    namespace: String,
}

impl TemplateRenderer {
    pub fn new(
        class_template: impl Into<String>,
        property_template: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            class_template: class_template.into(),
            property_template: property_template.into(),
            namespace: namespace.into(),
        }
    }

    pub fn render(&self, model: &Model) -> RenderedUnit {
        let kind = classify_model(model);
        let body: String = match kind {
            ModelKind::Enum => model.properties.iter().map(enum_case).collect(),
            ModelKind::Class => model
                .properties
                .iter()
                .map(|property| self.field(property))
                .collect(),
        };

        let source = fill(
            &self.class_template,
            &[
                &self.namespace,
                &model.description,
                kind.keyword(),
                &model.name,
                &body,
            ],
        );

        RenderedUnit {
            name: model.name.clone(),
            source,
        }
    }

    fn field(&self, property: &Property) -> String {
        fill(
            &self.property_template,
            &[
                &property.description,
                &attributes(&property.name, &property.description),
                &normalize_type(&property.r#type),
                &escape_identifier(&property.name),
            ],
        )
    }
}

fn enum_case(property: &Property) -> String {
    let mut case = String::new();
    let description = property.description.trim();
    if !description.is_empty() {
        case.push_str(&format!(
            "    /// <summary>\n    /// {description}\n    /// </summary>\n"
        ));
    }
    case.push_str("    ");
    case.push_str(&escape_identifier(&property.name));
    case.push_str(",\n");
    case
}

/// Annotations placed between a field's doc comment and its declaration.
fn attributes(name: &str, description: &str) -> String {
    let mut out = String::new();
    if name.contains('$') {
        out.push_str(&format!(
            "\n    [System.Text.Json.Serialization.JsonPropertyName(\"{name}\")]\
             \n    [Newtonsoft.Json.JsonProperty(\"{name}\")]"
        ));
    }
    if description.contains("Deprecated") {
        out.push_str(&format!(
            "\n    [Obsolete(\"{}\")]",
            description.replace('\\', "\\\\").replace('"', "\\\"")
        ));
    }
    out
}

/// Substitutes positional slots. Slots without an argument render empty.
pub fn fill(template: &str, args: &[&str]) -> String {
    SLOT.replace_all(template, |caps: &Captures| match &caps[0] {
        "{{" => "{".to_string(),
        "}}" => "}".to_string(),
        _ => caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| args.get(index))
            .map(|arg| arg.to_string())
            .unwrap_or_default(),
    })
    .into_owned()
}

/// Maps a documented type name onto a C# type. Never fails: anything that
/// cannot be resolved becomes `dynamic` or `object`.
pub fn normalize_type(raw: &str) -> String {
    let mut ty = raw.trim().to_string();
    for (from, to) in SCALAR_ALIASES {
        ty = ty.replace(from, to);
    }

    ty = MAP_MARKER
        .replace_all(&ty, "Dictionary<${1}, ${2}>")
        .into_owned();

    if UNRESOLVED_TYPES.iter().any(|unresolved| *unresolved == ty) {
        return DYNAMIC_TYPE.to_string();
    }
    if ty.is_empty() {
        return FALLBACK_TYPE.to_string();
    }
    ty
}

/// Looks `name` up in the escape table; names not listed pass through.
pub fn escape_identifier(name: &str) -> String {
    ESCAPED_IDENTIFIERS
        .iter()
        .find(|(word, _)| *word == name)
        .map(|(_, escaped)| escaped.to_string())
        .unwrap_or_else(|| name.to_string())
}
