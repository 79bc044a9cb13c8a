use comrak::{ComrakOptions, markdown_to_html};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.escape = true;
    options
});

/// Render a model reply. Raw HTML in the reply is escaped.
pub fn reply_to_html(md: &str) -> String {
    markdown_to_html(md, &MARKDOWN_OPTIONS)
}
