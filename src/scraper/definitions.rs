use crate::models::{Model, Property};
use crate::scraper::html::{
    cell, data_rows, element_text, find_heading, following_tables, previous_element,
};
use scraper::Html;
use std::collections::HashSet;
use tracing::debug;

const DEFINITIONS: &str = "Definitions";

/// Collects model definitions across every page of a crawl.
///
/// Models are keyed by name and the first definition seen wins; later pages
/// redefining the same model are ignored without parsing their tables.
#[derive(Debug, Default)]
pub struct ModelAggregator {
    models: Vec<Model>,
    names: HashSet<String>,
}

impl ModelAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the models defined under the page's "Definitions" heading.
    pub fn collect(&mut self, document: &Html) {
        let Some(heading) = find_heading(document, DEFINITIONS) else {
            return;
        };

        // The first table only links to the definitions that follow it.
        for table in following_tables(heading).skip(1) {
            let Some(preceding) = previous_element(table) else {
                continue;
            };

            let (title, description) = if preceding.value().name() == "p" {
                match previous_element(preceding) {
                    Some(title) => (title, element_text(preceding)),
                    None => continue,
                }
            } else {
                (preceding, String::new())
            };

            let name = element_text(title);
            if name.is_empty() || self.names.contains(&name) {
                continue;
            }

            let properties = data_rows(table)
                .iter()
                .map(|row| Property {
                    name: cell(row, 0),
                    r#type: cell(row, 1),
                    description: cell(row, 2),
                })
                .collect();

            debug!("Collected model {}", name);
            self.names.insert(name.clone());
            self.models.push(Model {
                name,
                description,
                properties,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn into_models(self) -> Vec<Model> {
        self.models
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(definitions: &str) -> Html {
        Html::parse_document(&format!(
            "<h2>Responses</h2><table><tr><th>Name</th></tr></table>\
             <h2>Definitions</h2>\
             <table><tr><th>Name</th><th>Description</th></tr><tr><td>index</td><td></td></tr></table>\
             {definitions}"
        ))
    }

    const WORK_ITEM: &str = "<h3>WorkItem</h3>\
        <p>Describes a work item.</p>\
        <table>\
          <tr><th>Name</th><th>Type</th><th>Description</th></tr>\
          <tr><td>id</td><td>integer</td><td>The id.</td></tr>\
          <tr><td>rev</td><td>integer</td><td>Revision.</td></tr>\
        </table>";

    const WORK_ITEM_STATE: &str = "<h3>WorkItemState</h3>\
        <table>\
          <tr><th>Name</th><th>Type</th><th>Description</th></tr>\
          <tr><td>active</td><td>string</td><td>Active.</td></tr>\
        </table>";

    #[test]
    fn skips_index_table_and_reads_description_paragraph() {
        let mut models = ModelAggregator::new();
        models.collect(&page(&format!("{WORK_ITEM}{WORK_ITEM_STATE}")));
        let models = models.into_models();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "WorkItem");
        assert_eq!(models[0].description, "Describes a work item.");
        assert_eq!(models[0].properties.len(), 2);
        assert_eq!(models[0].properties[1].name, "rev");
        assert_eq!(models[0].properties[1].r#type, "integer");
        assert_eq!(models[1].name, "WorkItemState");
        assert_eq!(models[1].description, "");
    }

    #[test]
    fn first_definition_wins_across_pages() {
        let mut models = ModelAggregator::new();
        models.collect(&page(WORK_ITEM));
        models.collect(&page(
            "<h3>WorkItem</h3><table><tr><th>Name</th></tr><tr><td>other</td></tr></table>",
        ));
        models.collect(&page(WORK_ITEM));

        let models = models.into_models();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].properties[0].name, "id");
    }

    #[test]
    fn never_holds_duplicate_names() {
        let mut models = ModelAggregator::new();
        for _ in 0..3 {
            models.collect(&page(&format!("{WORK_ITEM_STATE}{WORK_ITEM}{WORK_ITEM_STATE}")));
        }
        let names: HashSet<_> = models.models.iter().map(|m| m.name.clone()).collect();
        assert_eq!(names.len(), models.len());
        assert_eq!(models.len(), 2);
    }

    #[test]
    fn page_without_definitions_contributes_nothing() {
        let mut models = ModelAggregator::new();
        models.collect(&Html::parse_document("<h2>Responses</h2><table></table>"));
        assert!(models.is_empty());
    }
}
