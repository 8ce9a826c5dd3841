/// Turns a description fragment into the plain-text form stored in the record.
pub trait Converter {
    fn to_text(&self, html: &str) -> String;
}

/// Markdown-flavoured text via html2md. Lines are never wrapped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_text(&self, html: &str) -> String {
        html2md::parse_html(html).trim().to_string()
    }
}
