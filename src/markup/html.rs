//! HTML helpers built on html5ever's reference DOM

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements whose content is never rendered as text
const SKIPPED: [&str; 6] = ["head", "script", "style", "template", "noscript", "title"];

/// Elements that separate blocks of text with a blank line
const PARAGRAPH_BLOCKS: [&str; 10] = [
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "table",
];

/// Elements that start on their own line
const LINE_BLOCKS: [&str; 14] = [
    "div", "section", "article", "header", "footer", "nav", "aside", "main", "ul", "ol", "li",
    "tr", "dl", "dt",
];

fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Escape text for use inside HTML element content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates rendered text, collapsing whitespace outside `<pre>`
struct TextWriter {
    out: String,
    preformatted: usize,
}

impl TextWriter {
    fn push_text(&mut self, text: &str) {
        if self.preformatted > 0 {
            self.out.push_str(text);
            return;
        }

        let mut collapsed = String::with_capacity(text.len());
        let mut in_space = false;
        for c in text.chars() {
            if c.is_whitespace() {
                in_space = true;
            } else {
                if in_space {
                    collapsed.push(' ');
                }
                in_space = false;
                collapsed.push(c);
            }
        }
        if in_space {
            collapsed.push(' ');
        }

        if self.out.is_empty() || self.out.ends_with('\n') {
            self.out.push_str(collapsed.trim_start());
        } else if !(self.out.ends_with(' ') && collapsed.starts_with(' ')) {
            self.out.push_str(&collapsed);
        } else {
            self.out.push_str(&collapsed[1..]);
        }
    }

    fn trim_trailing_spaces(&mut self) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
    }

    fn line_break(&mut self) {
        self.trim_trailing_spaces();
        self.out.push('\n');
    }

    /// Ensure the output ends with at least `newlines` line breaks
    fn block_break(&mut self, newlines: usize) {
        self.trim_trailing_spaces();
        if self.out.is_empty() {
            return;
        }
        let present = self.out.len() - self.out.trim_end_matches('\n').len();
        for _ in present..newlines {
            self.out.push('\n');
        }
    }

    fn finish(self) -> String {
        self.out.trim().to_string()
    }
}

fn render(handle: &Handle, writer: &mut TextWriter) {
    match &handle.data {
        NodeData::Text { contents } => writer.push_text(&contents.borrow()),
        NodeData::Element { .. } => {
            let tag = tag_name(handle).unwrap_or_default();
            if SKIPPED.contains(&tag.as_str()) {
                return;
            }
            if tag == "br" {
                writer.line_break();
                return;
            }

            let breaks = if PARAGRAPH_BLOCKS.contains(&tag.as_str()) {
                2
            } else if LINE_BLOCKS.contains(&tag.as_str()) {
                1
            } else {
                0
            };

            if breaks > 0 {
                writer.block_break(breaks);
            }
            if tag == "pre" {
                writer.preformatted += 1;
            }
            for child in handle.children.borrow().iter() {
                render(child, writer);
            }
            if tag == "pre" {
                writer.preformatted -= 1;
            }
            if breaks > 0 {
                writer.block_break(breaks);
            }
        }
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                render(child, writer);
            }
        }
        _ => {}
    }
}

/// Rendered text content of an HTML document or fragment
///
/// Paragraph-like blocks are separated by a blank line, other blocks and
/// `<br>` by a single newline. Scripts, styles and the document head are
/// skipped.
pub fn to_plain_text(html: &str) -> String {
    let dom = parse(html);
    let mut writer = TextWriter {
        out: String::new(),
        preformatted: 0,
    };
    render(&dom.document, &mut writer);
    writer.finish()
}

/// `href` values of every `<a>` element, in document order
pub fn link_targets(html: &str) -> Vec<String> {
    fn walk(handle: &Handle, links: &mut Vec<String>) {
        if let NodeData::Element { name, attrs, .. } = &handle.data {
            if &*name.local == "a" {
                let href = attrs
                    .borrow()
                    .iter()
                    .find(|attr| &*attr.name.local == "href")
                    .map(|attr| attr.value.to_string());
                if let Some(href) = href {
                    links.push(href);
                }
            }
        }
        for child in handle.children.borrow().iter() {
            walk(child, links);
        }
    }

    let dom = parse(html);
    let mut links = Vec::new();
    walk(&dom.document, &mut links);
    links
}
