//! Markdown-to-HTML rendering for assistant answers.
//!
//! Answers are GitHub-flavored markdown. Raw HTML from the answer is dropped
//! before rendering. Tables, cells, links, bullet lists and list items are
//! emitted with fixed inline styles, and every link opens in a new tab with
//! no opener access.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, html};

pub const TABLE_STYLE: &str =
    "border-collapse: collapse; width: 100%; margin: 8px 0; border: 1px solid #ccc; font-size: 14px;";
pub const TH_STYLE: &str = "border: 1px solid #ccc; padding: 6px; text-align: left; background: #f3f3f3;";
pub const TD_STYLE: &str = "border: 1px solid #ccc; padding: 6px;";
pub const LINK_STYLE: &str = "color: #667eea;";
pub const UL_STYLE: &str = "padding-left: 20px; margin: 4px 0;";
pub const LI_STYLE: &str = "margin-bottom: 4px;";

/// Attributes that detach a new tab from the page that opened it.
pub const LINK_TARGET_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Render an assistant answer to an HTML fragment.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut in_table_head = false;
    let events = parser.map(move |event| match event {
        Event::Start(tag) => styled_start(tag, &mut in_table_head),
        Event::End(tag) => styled_end(tag, &mut in_table_head),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

fn styled_start<'a>(tag: Tag<'a>, in_table_head: &mut bool) -> Event<'a> {
    let markup = match tag {
        Tag::Table(_) => format!(r#"<table style="{TABLE_STYLE}">"#),
        Tag::TableHead => {
            *in_table_head = true;
            "<thead><tr>".to_owned()
        }
        Tag::TableRow => "<tr>".to_owned(),
        Tag::TableCell if *in_table_head => format!(r#"<th style="{TH_STYLE}">"#),
        Tag::TableCell => format!(r#"<td style="{TD_STYLE}">"#),
        Tag::Link { link_type, dest_url, title, .. } => link_open(link_type, &dest_url, &title),
        Tag::List(None) => format!(r#"<ul style="{UL_STYLE}">"#),
        Tag::Item => format!(r#"<li style="{LI_STYLE}">"#),
        other => return Event::Start(other),
    };
    Event::Html(CowStr::from(markup))
}

fn styled_end(tag: TagEnd, in_table_head: &mut bool) -> Event<'static> {
    let markup = match tag {
        TagEnd::Table => "</tbody></table>",
        TagEnd::TableHead => {
            *in_table_head = false;
            "</tr></thead><tbody>"
        }
        TagEnd::TableRow => "</tr>",
        TagEnd::TableCell if *in_table_head => "</th>",
        TagEnd::TableCell => "</td>",
        TagEnd::Link => "</a>",
        TagEnd::List(false) => "</ul>",
        TagEnd::Item => "</li>",
        other => return Event::End(other),
    };
    Event::Html(CowStr::Borrowed(markup))
}

fn link_open(link_type: LinkType, dest_url: &str, title: &str) -> String {
    let mut markup = String::from("<a");
    if let Some(href) = safe_href(dest_url) {
        let href = match link_type {
            LinkType::Email => format!("mailto:{href}"),
            _ => href.to_owned(),
        };
        markup.push_str(&format!(r#" href="{}""#, escape_attr(&href)));
    }
    if !title.is_empty() {
        markup.push_str(&format!(r#" title="{}""#, escape_attr(title)));
    }
    markup.push_str(&format!(r#" style="{LINK_STYLE}" {LINK_TARGET_ATTRS}>"#));
    markup
}

/// Pass `dest_url` through as an `href`, or `None` when its scheme can run script.
pub fn safe_href(dest_url: &str) -> Option<&str> {
    // Browsers ignore embedded whitespace/control chars when parsing a scheme.
    let scheme: String = dest_url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|blocked| scheme.starts_with(blocked)) {
        return None;
    }
    Some(dest_url)
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
