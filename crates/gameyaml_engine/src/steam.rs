//! Steam store pages.
//!
//! Unlike the itch.io panel scan, every element read here is mandatory: a
//! missing one fails the accessor and with it the whole record.
use std::sync::LazyLock;

use regex::Regex;
use spider_logging::spider_debug;

use crate::convert::{Converter, Html2MdConverter};
use crate::document::{compile, element_text, require_attr, strip_query, Document};
use crate::language::resolve_languages;
use crate::{
    Author, AuthorRole, Link, Screenshot, SiteExtractor, SpiderError, StructuralParseError,
    VideoEntry,
};

static STEAM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://store\.steampowered\.com/app/\d+").expect("valid steam url pattern")
});

const BRIEF_DESCRIPTION: &str = r#"meta[name="Description"]"#;
const NAME: &str = r#".blockbg span[itemprop="name"]"#;
const DESCRIPTION: &str = "div.game_area_description";
const LANGUAGE_TABLE: &str = "table.game_language_options";
const LANGUAGE_CELL: &str = r#"td[style="width: 94px; text-align: left"]"#;
const TAG: &str = "a.app_tag";
const DEV_ROW: &str = "div.dev_row";
const HEADER_IMAGE: &str = "img.game_header_image_full";
const MOVIE: &str = "div.highlight_player_item.highlight_movie";
const SCREENSHOT: &str = "a.highlight_screenshot_link";
const CONTENT_DESCRIPTORS: &str = "#game_area_content_descriptors";
const SOCIAL_BLOCK: &str = r#"div[style="padding-top: 14px;"]"#;
const SOCIAL_LINK: &str = "a[data-tooltip-text]";

pub struct SteamExtractor {
    document: Document,
    app_id: String,
    converter: Html2MdConverter,
}

impl SteamExtractor {
    /// Binds `document` to the store page at `url`; the app id is the path
    /// segment after `/app/`.
    pub fn new(document: Document, url: &str) -> Result<Self, SpiderError> {
        let app_id = app_id(url).ok_or_else(|| StructuralParseError::MalformedUrl(url.into()))?;
        Ok(Self {
            document,
            app_id,
            converter: Html2MdConverter,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    fn is_sensitive(&self) -> Result<bool, SpiderError> {
        Ok(self.document.contains(CONTENT_DESCRIPTORS)?)
    }

    fn videos(&self) -> Result<Vec<Screenshot>, SpiderError> {
        let sensitive = self.is_sensitive()?;
        self.document
            .select(MOVIE)?
            .into_iter()
            .map(|movie| -> Result<Screenshot, SpiderError> {
                let mp4 = require_attr(movie, MOVIE, "data-mp4-source")?;
                let webm = require_attr(movie, MOVIE, "data-webm-source")?;
                Ok(Screenshot::Video(VideoEntry::webm_mp4(
                    strip_query(webm).to_string(),
                    strip_query(mp4).to_string(),
                    sensitive,
                )))
            })
            .collect()
    }

    fn images(&self) -> Result<Vec<Screenshot>, SpiderError> {
        self.document
            .select(SCREENSHOT)?
            .into_iter()
            .map(|link| -> Result<Screenshot, SpiderError> {
                let href = require_attr(link, SCREENSHOT, "href")?;
                Ok(Screenshot::Image(strip_query(href).to_string()))
            })
            .collect()
    }
}

fn app_id(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    match (segments.next(), segments.next()) {
        (Some("app"), Some(id)) if !id.is_empty() => Some(id.to_string()),
        _ => None,
    }
}

fn strip_control(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\n' | '\t' | '\r'))
        .collect()
}

impl SiteExtractor for SteamExtractor {
    fn verify(url: &str) -> bool {
        STEAM_URL.is_match(url)
    }

    fn name(&self) -> Result<String, SpiderError> {
        Ok(element_text(self.document.require(NAME)?))
    }

    fn brief_description(&self) -> Result<Option<String>, SpiderError> {
        let meta = self.document.require(BRIEF_DESCRIPTION)?;
        Ok(Some(require_attr(meta, BRIEF_DESCRIPTION, "content")?.to_string()))
    }

    fn description(&self) -> Result<String, SpiderError> {
        let block = self.document.require(DESCRIPTION)?;
        Ok(self.converter.to_text(&block.html()))
    }

    /// The first two dev rows name the publisher and the producer.
    fn authors(&self) -> Result<Vec<Author>, SpiderError> {
        let rows = self.document.select(DEV_ROW)?;
        let link = compile("a")?;
        let mut names = Vec::with_capacity(2);
        for row in rows.into_iter().take(2) {
            let name = row
                .select(&link)
                .next()
                .map(element_text)
                .ok_or_else(|| StructuralParseError::MissingElement {
                    selector: format!("{DEV_ROW} a"),
                })?;
            names.push(name);
        }

        match names.as_slice() {
            [first, second] if first == second => Ok(vec![Author::new(
                first.as_str(),
                vec![AuthorRole::Publisher, AuthorRole::Producer],
            )]),
            [first, second] => Ok(vec![
                Author::new(first.as_str(), vec![AuthorRole::Publisher]),
                Author::new(second.as_str(), vec![AuthorRole::Producer]),
            ]),
            _ => Err(StructuralParseError::MissingElement {
                selector: format!("{DEV_ROW}:nth-of-type(2)"),
            }
            .into()),
        }
    }

    fn generated_tags(&self) -> Result<Vec<String>, SpiderError> {
        let tags = self.document.select(TAG)?;
        if tags.is_empty() {
            return Err(StructuralParseError::MissingElement {
                selector: TAG.to_string(),
            }
            .into());
        }
        Ok(tags
            .into_iter()
            .map(|tag| strip_control(&element_text(tag)))
            .collect())
    }

    fn languages(&self) -> Result<Vec<String>, SpiderError> {
        let table = self.document.require(LANGUAGE_TABLE)?;
        let cell = compile(LANGUAGE_CELL)?;
        let labels: Vec<String> = table
            .select(&cell)
            .map(|td| strip_control(&element_text(td)))
            .collect();
        Ok(resolve_languages(labels.iter().map(String::as_str))?)
    }

    /// Store link first, then the social links.
    ///
    /// Candidates come from the first social block only. Only the first
    /// candidate is classified; the rest are dropped.
    fn links(&self) -> Result<Vec<Link>, SpiderError> {
        let mut links = vec![Link::new(".steam", format!("steam:{}", self.app_id))];
        let Some(block) = self.document.first(SOCIAL_BLOCK)? else {
            return Ok(links);
        };
        let anchor = compile(SOCIAL_LINK)?;
        let candidates: Vec<&str> = block
            .select(&anchor)
            .filter_map(|anchor| anchor.value().attr("data-tooltip-text"))
            .collect();

        if let Some(href) = candidates.first() {
            links.push(classify_social_link(href));
        }
        if candidates.len() > 1 {
            spider_debug!(
                "Ignoring {} unclassified social links after the first",
                candidates.len() - 1
            );
        }
        Ok(links)
    }

    fn thumbnail(&self) -> Result<String, SpiderError> {
        let image = self.document.require(HEADER_IMAGE)?;
        Ok(strip_query(require_attr(image, HEADER_IMAGE, "src")?).to_string())
    }

    /// Trailers first, then still screenshots.
    fn screenshots(&self) -> Result<Vec<Screenshot>, SpiderError> {
        let mut media = self.videos()?;
        media.extend(self.images()?);
        Ok(media)
    }
}

/// Twitter and YouTube links get catalogue names; anything else passes
/// through with the href as both name and uri.
pub fn classify_social_link(href: &str) -> Link {
    if href.contains("twitter") {
        let handle = href.rsplit('/').next().unwrap_or(href);
        Link::new("Twitter", format!("twitter:{handle}")).with_icon("twitter")
    } else if href.contains("youtube") {
        Link::new(".youtube", href)
    } else {
        Link::new(href, href)
    }
}
