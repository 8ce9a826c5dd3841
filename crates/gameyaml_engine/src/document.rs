use scraper::{ElementRef, Html, Selector};

use crate::StructuralParseError;

/// A parsed page. Never mutated after parsing; extractors only query it.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, StructuralParseError> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).collect())
    }

    pub fn first(&self, selector: &str) -> Result<Option<ElementRef<'_>>, StructuralParseError> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).next())
    }

    /// First element matching `selector`, or a structural error naming it.
    pub fn require(&self, selector: &str) -> Result<ElementRef<'_>, StructuralParseError> {
        self.first(selector)?
            .ok_or_else(|| StructuralParseError::MissingElement {
                selector: selector.to_string(),
            })
    }

    pub fn contains(&self, selector: &str) -> Result<bool, StructuralParseError> {
        Ok(self.first(selector)?.is_some())
    }
}

pub(crate) fn compile(selector: &str) -> Result<Selector, StructuralParseError> {
    Selector::parse(selector).map_err(|err| StructuralParseError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Concatenated text of an element and its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub fn require_attr<'a>(
    element: ElementRef<'a>,
    selector: &str,
    attribute: &str,
) -> Result<&'a str, StructuralParseError> {
    element
        .value()
        .attr(attribute)
        .ok_or_else(|| StructuralParseError::MissingAttribute {
            selector: selector.to_string(),
            attribute: attribute.to_string(),
        })
}

/// Drops everything from the first `?` on.
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(head, _)| head)
}
