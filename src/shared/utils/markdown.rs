//! Markdown → HTML for answers
//!
//! Fenced code blocks with a language tag are highlighted with syntect.
//! Raw HTML in the answer is escaped and shown as text; everything else goes
//! through pulldown-cmark's HTML writer unchanged.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::shared::constants::CODE_THEME;
use crate::shared::logging;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Code block collected between its start and end events
struct FencedBlock {
    language: Option<String>,
    body: String,
}

/// Render a markdown answer to HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events: Vec<Event> = Vec::new();
    let mut block: Option<FencedBlock> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                block = Some(FencedBlock {
                    language: fence_language(&kind),
                    body: String::new(),
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(done) = block.take() {
                    events.extend(code_block_events(done));
                }
            }
            Event::Text(text) if block.is_some() => {
                if let Some(open) = block.as_mut() {
                    open.body.push_str(&text);
                }
            }
            // Never emit markup coming from the answer itself
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());
    html_output
}

/// First word of the info string, e.g. "rust" for ```rust,ignore
fn fence_language(kind: &CodeBlockKind) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .filter(|lang| !lang.is_empty())
            .map(str::to_string),
        CodeBlockKind::Indented => None,
    }
}

fn code_block_events<'a>(block: FencedBlock) -> Vec<Event<'a>> {
    let body = block.body.strip_suffix('\n').unwrap_or(&block.body).to_string();

    if let Some(language) = block.language {
        if let Some(highlighted) = highlight(&body, &language) {
            return vec![Event::Html(CowStr::from(highlighted))];
        }
    }

    // Untagged fence: plain code, escaped by the HTML writer
    vec![
        Event::Html(CowStr::Borrowed(r#"<pre class="c-code c-code--plain"><code>"#)),
        Event::Text(CowStr::from(body)),
        Event::Html(CowStr::Borrowed("</code></pre>\n")),
    ]
}

fn code_theme() -> Option<&'static Theme> {
    THEME_SET
        .themes
        .get(CODE_THEME)
        .or_else(|| THEME_SET.themes.values().next())
}

fn highlight(code: &str, language: &str) -> Option<String> {
    let syntax = match SYNTAX_SET.find_syntax_by_token(language) {
        Some(syntax) => syntax,
        None => {
            logging::log_unknown_language(language);
            SYNTAX_SET.find_syntax_plain_text()
        }
    };

    let highlighted = highlighted_html_for_string(code, &SYNTAX_SET, syntax, code_theme()?).ok()?;
    Some(format!(
        "<div class=\"c-code-block\" data-language=\"{}\">{}</div>\n",
        escape_attribute(language),
        highlighted
    ))
}

fn escape_attribute(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#' | '.'))
        .collect()
}
