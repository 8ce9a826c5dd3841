use std::io::{self, Read};
use std::time::Duration;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use spider_logging::{spider_debug, spider_info};

use crate::{FailureKind, FetchError, FetchMetadata, FetchedPage, SpiderConfig};

/// Media types a storefront page may be served as.
const PAGE_MEDIA_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        SpiderConfig::default().fetch_settings()
    }
}

/// Retrieves the text of a single page. Blocking; one attempt, no retries.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// [`Fetcher`] over a blocking `reqwest` client built once from the settings.
pub struct ReqwestFetcher {
    client: Result<Client, FetchError>,
    max_bytes: u64,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        let limit = settings.redirect_limit;
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent)
            .redirect(Policy::custom(move |attempt| {
                if attempt.previous().len() >= limit {
                    attempt.error("redirect limit exceeded")
                } else {
                    attempt.follow()
                }
            }))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()));
        Self {
            client,
            max_bytes: settings.max_bytes,
        }
    }

    fn too_large(&self, actual: u64) -> FetchError {
        let kind = FailureKind::TooLarge {
            max_bytes: self.max_bytes,
            actual: Some(actual),
        };
        FetchError::new(kind, format!("page exceeds {} bytes", self.max_bytes))
    }

    /// Rejects error statuses, declared oversize bodies and non-page media types.
    fn check_headers(&self, response: &Response) -> Result<Option<String>, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let kind = FailureKind::HttpStatus(status.as_u16());
            return Err(FetchError::new(kind, status.to_string()));
        }

        match response.content_length() {
            Some(declared) if declared > self.max_bytes => return Err(self.too_large(declared)),
            _ => {}
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        match content_type.as_deref() {
            Some(value) if !is_page_media_type(value) => {
                let kind = FailureKind::UnsupportedContentType {
                    content_type: value.to_string(),
                };
                Err(FetchError::new(kind, "not an HTML page"))
            }
            _ => Ok(content_type),
        }
    }

    /// Reads at most one byte past the cap, so undeclared oversize bodies fail too.
    fn read_capped(&self, response: Response) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        response
            .take(self.max_bytes + 1)
            .read_to_end(&mut body)
            .map_err(map_io_error)?;
        let len = body.len() as u64;
        if len > self.max_bytes {
            return Err(self.too_large(len));
        }
        Ok(body)
    }
}

impl Fetcher for ReqwestFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let target = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.client.as_ref().map_err(Clone::clone)?;

        spider_info!("Fetching {}", url);
        let response = client.get(target).send().map_err(map_reqwest_error)?;
        let content_type = self.check_headers(&response)?;
        let final_url = response.url().to_string();
        let body = self.read_capped(response)?;

        let (text, encoding) = decode_body(&body, content_type.as_deref());
        spider_debug!(
            "Read {} bytes from {} as {}",
            body.len(),
            final_url,
            encoding.name()
        );

        Ok(FetchedPage {
            text,
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url,
                content_type,
                encoding_label: encoding.name().to_string(),
                byte_len: body.len() as u64,
            },
        })
    }
}

fn is_page_media_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    PAGE_MEDIA_TYPES
        .iter()
        .any(|media_type| media_type.eq_ignore_ascii_case(essence))
}

/// Decodes a body to UTF-8, choosing the encoding by BOM, then the
/// Content-Type charset, then a chardetng guess. Malformed sequences are
/// replaced rather than rejected.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> (String, &'static Encoding) {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| {
            content_type
                .and_then(charset_param)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        });

    let (text, actual, _) = encoding.decode(bytes);
    (text.into_owned(), actual)
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_redirect() {
        FailureKind::RedirectLimitExceeded
    } else {
        FailureKind::Network
    };
    FetchError::new(kind, err.to_string())
}

fn map_io_error(err: io::Error) -> FetchError {
    let kind = match err.kind() {
        io::ErrorKind::TimedOut => FailureKind::Timeout,
        _ => FailureKind::Network,
    };
    FetchError::new(kind, err.to_string())
}
