//! Markdown helpers built on pulldown-cmark

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Render markdown to an HTML fragment
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Strip markup, keeping the text
///
/// Paragraphs, headings and code blocks are separated by a blank line; list
/// items by a single newline. Raw HTML is dropped.
pub fn to_plain_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());

    let block_break = |out: &mut String, newlines: usize| {
        if out.is_empty() {
            return;
        }
        let present = out.len() - out.trim_end_matches('\n').len();
        for _ in present..newlines {
            out.push('\n');
        }
    };

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => {
                block_break(&mut out, 2)
            }
            Event::End(TagEnd::CodeBlock) => block_break(&mut out, 2),
            Event::End(TagEnd::Item) => block_break(&mut out, 1),
            _ => {}
        }
    }

    out.trim_end_matches('\n').to_string()
}

/// Escape plain text so it renders literally as markdown
///
/// Inline markup characters are backslash-escaped everywhere; characters
/// that only matter at the start of a line (list markers, setext underlines,
/// ordered-list numbers) are escaped there. Leading indentation is written as
/// character references so it can neither open a code block nor be stripped.
pub fn escape(text: &str) -> String {
    const INLINE: &[char] = &[
        '\\', '`', '*', '_', '[', ']', '<', '>', '#', '!', '|', '~', '&',
    ];
    const LINE_START: &[char] = &['-', '+', '='];

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let indent = line.len() - line.trim_start().len();
        let (lead, rest) = line.split_at(indent);
        if rest.is_empty() {
            out.push_str(lead);
            continue;
        }
        for c in lead.chars() {
            match c {
                ' ' => out.push_str("&#32;"),
                '\t' => out.push_str("&#9;"),
                other => out.push(other),
            }
        }

        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        for (j, c) in rest.chars().enumerate() {
            let at_start = j == 0 && LINE_START.contains(&c);
            let ordered_marker = digits > 0 && j == digits && (c == '.' || c == ')');
            if INLINE.contains(&c) || at_start || ordered_marker {
                out.push('\\');
            }
            out.push(c);
        }
    }
    out
}

/// Link destinations in document order: inline, reference and autolinks,
/// followed by `[[wikilinks]]`
///
/// Wikilinks are only recognized in prose; code spans and code blocks are
/// taken literally.
pub fn link_targets(markdown: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut wiki = Vec::new();
    // Brackets arrive as separate text events, so runs are joined first
    let mut prose = String::new();
    let mut in_code_block = false;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Text(text) if !in_code_block => {
                prose.push_str(&text);
                continue;
            }
            Event::Start(Tag::Link { dest_url, .. }) => links.push(dest_url.to_string()),
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            _ => {}
        }
        wiki.extend(wikilinks(&prose));
        prose.clear();
    }
    wiki.extend(wikilinks(&prose));

    links.extend(wiki);
    links
}

/// Extract `[[target]]` and `[[target|display]]` targets
fn wikilinks(content: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut chars = content.chars().peekable();
    let mut in_link = false;
    let mut link_text = String::new();

    while let Some(c) = chars.next() {
        if c == '[' && chars.peek() == Some(&'[') {
            chars.next();
            in_link = true;
            link_text.clear();
        } else if in_link && c == ']' && chars.peek() == Some(&']') {
            chars.next();
            in_link = false;

            let target = match link_text.split_once('|') {
                Some((target, _display)) => target.trim(),
                None => link_text.trim(),
            };
            if !target.is_empty() {
                links.push(target.to_string());
            }
        } else if in_link {
            link_text.push(c);
        }
    }

    links
}
