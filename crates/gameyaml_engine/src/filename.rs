/// Local filename for a downloaded image: `stem` plus the extension of the
/// URL's last path segment, e.g. `thumbnail.jpg`. Query strings are ignored
/// and a segment without an extension yields the bare stem.
pub fn thumbnail_filename(stem: &str, url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    match last_segment.rfind('.') {
        Some(idx) if idx + 1 < last_segment.len() => format!("{stem}{}", &last_segment[idx..]),
        _ => stem.to_string(),
    }
}
