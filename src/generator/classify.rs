use crate::generator::tables::ENUM_SUFFIXES;
use crate::models::Model;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Enum,
    Class,
}

impl ModelKind {
    /// Keyword emitted in the class template's kind slot.
    pub fn keyword(self) -> &'static str {
        match self {
            ModelKind::Enum => "enum",
            ModelKind::Class => "class",
        }
    }
}

/// Classifies by name suffix. This is a naming convention of the docs, not a
/// structural fact, so some records will be misread as enums.
pub fn classify(name: &str) -> ModelKind {
    if ENUM_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        ModelKind::Enum
    } else {
        ModelKind::Class
    }
}

pub fn classify_model(model: &Model) -> ModelKind {
    let kind = classify(&model.name);
    if kind == ModelKind::Enum
        && model
            .properties
            .iter()
            .any(|p| !p.r#type.is_empty() && p.r#type != "string")
    {
        debug!(
            "{} is named like an enum but has typed members; it may be a record",
            model.name
        );
    }
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_decides_kind() {
        assert_eq!(classify("WorkItemType"), ModelKind::Enum);
        assert_eq!(classify("WorkItemState"), ModelKind::Enum);
        assert_eq!(classify("WorkItem"), ModelKind::Class);
        assert_eq!(classify("TypeInfo"), ModelKind::Class);
    }

    #[test]
    fn keywords() {
        assert_eq!(ModelKind::Enum.keyword(), "enum");
        assert_eq!(ModelKind::Class.keyword(), "class");
    }
}
