use crate::error::{Result, ScrapeError};
use crate::models::{BodyParameter, Endpoint, Parameter};
use crate::scraper::definitions::ModelAggregator;
use crate::scraper::html::{cell, data_rows, element_text, section_table, strip_control_chars};
use scraper::{Html, Selector};
use std::sync::LazyLock;

const URI_PARAMETERS: &str = "URI Parameters";
const REQUEST_BODY: &str = "Request Body";
const RESPONSES: &str = "Responses";

static CODE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("code").expect("static selector"));

/// Parses one reference page into an [`Endpoint`], feeding any model
/// definitions it carries into `models`.
///
/// Models are collected last, so a page that fails on an earlier facet
/// contributes nothing to the aggregator.
pub fn parse_endpoint(raw_html: &str, models: &mut ModelAggregator) -> Result<Endpoint> {
    let document = Html::parse_document(&strip_control_chars(raw_html));

    let url = document
        .select(&CODE)
        .next()
        .map(element_text)
        .ok_or(ScrapeError::MissingSection("code"))?;

    let uri_parameters = uri_parameters(&document)?;
    let body_parameters = body_parameters(&document);
    let response_body = response_type(&document)?;

    models.collect(&document);

    Ok(Endpoint {
        url,
        uri_parameters,
        body_parameters,
        response_body,
    })
}

// Columns: Name, In, Required, Type, Description
fn uri_parameters(document: &Html) -> Result<Vec<Parameter>> {
    let table =
        section_table(document, URI_PARAMETERS).ok_or(ScrapeError::MissingSection(URI_PARAMETERS))?;

    Ok(data_rows(table)
        .iter()
        .map(|row| Parameter {
            name: cell(row, 0),
            r#in: cell(row, 1),
            required: cell(row, 2),
            r#type: cell(row, 3),
            description: cell(row, 4),
        })
        .collect())
}

// Columns: Name, Type, Description
fn body_parameters(document: &Html) -> Option<Vec<BodyParameter>> {
    let table = section_table(document, REQUEST_BODY)?;

    Some(
        data_rows(table)
            .iter()
            .map(|row| BodyParameter {
                name: cell(row, 0),
                r#type: cell(row, 1),
                description: cell(row, 2),
            })
            .collect(),
    )
}

// Columns: Name, Type, Description. Only the type of the first response is kept.
fn response_type(document: &Html) -> Result<Option<String>> {
    let table = section_table(document, RESPONSES).ok_or(ScrapeError::MissingSection(RESPONSES))?;
    let rows = data_rows(table);
    let first = rows.first().ok_or(ScrapeError::MissingSection(RESPONSES))?;

    Ok(first.get(1).filter(|ty| !ty.is_empty()).cloned())
}
