use serde::{Deserialize, Deserializer};

/// Navigation document served as `toc.json` by the documentation host.
#[derive(Debug, Clone, Deserialize)]
pub struct Toc {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<TocNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TocNode {
    #[serde(rename = "toc_title", default)]
    pub title: String,
    #[serde(rename = "href")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The host writes `"children": null` for some leaves.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TocNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TocNode>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_children_are_leaves() {
        let json = r#"{
          "items": [
            {
              "toc_title": "Projects",
              "children": [
                { "toc_title": "List", "href": "core/projects/list", "children": null },
                { "toc_title": "Get", "href": "core/projects/get" }
              ]
            }
          ]
        }"#;
        let toc: Toc = serde_json::from_str(json).unwrap();
        let children = &toc.items[0].children;
        assert!(children[0].is_leaf());
        assert!(children[1].is_leaf());
        assert_eq!(children[0].link.as_deref(), Some("core/projects/list"));
    }

    #[test]
    fn null_items_is_an_empty_toc() {
        let toc: Toc = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(toc.items.is_empty());
    }
}
