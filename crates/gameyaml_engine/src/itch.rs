//! itch.io game pages.
//!
//! Most fields come from the "More information" panel, which is read row by
//! row on a best-effort basis: a row that is missing or does not have the
//! expected label/value shape is skipped and the remaining rows are still
//! used. Unknown platform or language names are still hard failures.
use std::cell::OnceCell;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use serde_json::Value;
use spider_logging::{spider_debug, spider_trace};

use crate::convert::{Converter, Html2MdConverter};
use crate::document::{element_text, require_attr, Document};
use crate::language::resolve_languages;
use crate::link_rules::{rewrite_links, ITCH_LINK_RULES};
use crate::normalize::{misc_tags, normalize_platforms, push_unique};
use crate::{
    Author, AuthorRole, Link, Screenshot, SiteExtractor, SpiderConfig, SpiderError,
    StructuralParseError,
};

static ITCH_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://.+\.itch\.io/.+").expect("valid itch url pattern"));

const INFO_PANEL_ROW: &str = "div.info_panel_wrapper > div > table > tbody > tr";
const DESCRIPTION: &str = "div.formatted_description.user_formatted";
const THUMBNAIL: &str = "#header > img";

/// Outcome of probing one info panel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLookup {
    Absent,
    Malformed(&'static str),
    Present { label: String, values: Vec<String> },
}

/// Probes positions `1..=rows` of the info panel.
pub fn scan_info_panel(document: &Document, rows: usize) -> Vec<RowLookup> {
    (1..=rows)
        .map(|position| {
            let selector = format!("{INFO_PANEL_ROW}:nth-child({position})");
            match document.first(&selector) {
                Ok(Some(row)) => read_row(row),
                Ok(None) => RowLookup::Absent,
                Err(_) => RowLookup::Malformed("unparsable row selector"),
            }
        })
        .collect()
}

fn read_row(row: ElementRef<'_>) -> RowLookup {
    let cells: Vec<ElementRef<'_>> = row.children().filter_map(ElementRef::wrap).collect();
    let [label_cell, value_cell, ..] = cells.as_slice() else {
        return RowLookup::Malformed("row has fewer than two cells");
    };

    let label = element_text(*label_cell).trim().to_string();
    if label.is_empty() {
        return RowLookup::Malformed("row label is empty");
    }
    let values = element_text(*value_cell)
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    RowLookup::Present { label, values }
}

/// Label -> values harvested from the rows that were present.
#[derive(Debug, Default)]
struct InfoPanel {
    rows: HashMap<String, Vec<String>>,
}

impl InfoPanel {
    fn harvest(lookups: Vec<RowLookup>) -> Self {
        let mut rows = HashMap::new();
        for (index, lookup) in lookups.into_iter().enumerate() {
            match lookup {
                RowLookup::Present { label, values } => {
                    rows.insert(label, values);
                }
                RowLookup::Malformed(reason) => {
                    spider_debug!("Skipping info panel row {}: {}", index + 1, reason);
                }
                RowLookup::Absent => {
                    spider_trace!("No info panel row at position {}", index + 1);
                }
            }
        }
        Self { rows }
    }

    fn values(&self, label: &str) -> &[String] {
        self.rows.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub struct ItchExtractor {
    document: Document,
    info_panel_rows: usize,
    converter: Html2MdConverter,
    json_ld: OnceCell<Option<Value>>,
    info_panel: OnceCell<InfoPanel>,
}

impl ItchExtractor {
    pub fn new(document: Document, config: &SpiderConfig) -> Self {
        Self {
            document,
            info_panel_rows: config.info_panel_rows,
            converter: Html2MdConverter,
            json_ld: OnceCell::new(),
            info_panel: OnceCell::new(),
        }
    }

    fn info_panel(&self) -> &InfoPanel {
        self.info_panel.get_or_init(|| {
            InfoPanel::harvest(scan_info_panel(&self.document, self.info_panel_rows))
        })
    }

    /// The first JSON-LD object describing the game (the one with a `name`).
    fn json_ld(&self) -> Result<&Value, SpiderError> {
        self.json_ld
            .get_or_init(|| {
                let scripts = self
                    .document
                    .select(r#"script[type="application/ld+json"]"#)
                    .ok()?;
                scripts.into_iter().find_map(|script| {
                    match serde_json::from_str::<Value>(&element_text(script)) {
                        Ok(value) if value.get("name").is_some() => Some(value),
                        Ok(_) => None,
                        Err(err) => {
                            spider_debug!("Ignoring unparsable JSON-LD block: {}", err);
                            None
                        }
                    }
                })
            })
            .as_ref()
            .ok_or_else(|| StructuralParseError::MissingJsonLd.into())
    }
}

impl SiteExtractor for ItchExtractor {
    fn verify(url: &str) -> bool {
        ITCH_URL.is_match(url)
    }

    fn name(&self) -> Result<String, SpiderError> {
        self.json_ld()?
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StructuralParseError::MissingJsonLd.into())
    }

    fn brief_description(&self) -> Result<Option<String>, SpiderError> {
        Ok(self
            .json_ld()?
            .get("aggregateRating")
            .and_then(|rating| rating.get("description"))
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn description(&self) -> Result<String, SpiderError> {
        let block = self.document.require(DESCRIPTION)?;
        Ok(self.converter.to_text(&block.html()))
    }

    fn authors(&self) -> Result<Vec<Author>, SpiderError> {
        let panel = self.info_panel();
        let names = match panel.values("Author") {
            [] => panel.values("Authors"),
            names => names,
        };
        Ok(names
            .iter()
            .map(|name| Author::new(name.as_str(), vec![AuthorRole::Developer]))
            .collect())
    }

    fn generated_tags(&self) -> Result<Vec<String>, SpiderError> {
        let panel = self.info_panel();
        let mut tags = Vec::new();
        for label in ["Tags", "Made with", "Genre"] {
            for tag in panel.values(label) {
                push_unique(&mut tags, tag);
            }
        }
        Ok(tags)
    }

    fn misc_tags(&self) -> Result<Vec<String>, SpiderError> {
        Ok(misc_tags(&self.generated_tags()?))
    }

    fn languages(&self) -> Result<Vec<String>, SpiderError> {
        let labels = self.info_panel().values("Languages");
        Ok(resolve_languages(labels.iter().map(String::as_str))?)
    }

    fn platforms(&self) -> Result<Vec<String>, SpiderError> {
        let raw = self.info_panel().values("Platforms");
        Ok(normalize_platforms(raw.iter().map(String::as_str))?)
    }

    fn links(&self) -> Result<Vec<Link>, SpiderError> {
        let mut hrefs: Vec<&str> = Vec::new();
        for anchor in self.document.select("a[href]")? {
            if let Some(href) = anchor.value().attr("href") {
                if !hrefs.contains(&href) {
                    hrefs.push(href);
                }
            }
        }
        Ok(rewrite_links(hrefs, &ITCH_LINK_RULES))
    }

    fn thumbnail(&self) -> Result<String, SpiderError> {
        let image = self.document.require(THUMBNAIL)?;
        Ok(require_attr(image, THUMBNAIL, "src")?.to_string())
    }

    fn screenshots(&self) -> Result<Vec<Screenshot>, SpiderError> {
        Ok(self
            .document
            .select("img.screenshot")?
            .into_iter()
            .filter_map(|image| image.value().attr("src"))
            .map(|src| Screenshot::Image(src.to_string()))
            .collect())
    }
}
