//! Markdown-lite rendering of chat text
//!
//! Plain text is escaped first, then a fixed set of substitutions runs in
//! this order:
//! 1. newline -> `<br>`
//! 2. ```` ```block``` ```` -> `<pre class="code-block">`
//! 3. `` `span` `` -> `<code>`
//! 4. `**bold**` -> `<strong>`
//! 5. `*italic*` -> `<em>`
//!
//! Emphasis is only applied outside code, and unterminated delimiters stay
//! literal.

/// Escape text for insertion into HTML
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render plain text as chat bubble markup
pub fn format_content(text: &str) -> String {
    let prepared = html_escape(text).replace('\n', "<br>");

    let mut result = String::with_capacity(prepared.len());
    for segment in split_code(&prepared) {
        match segment {
            Segment::Block(code) => {
                result.push_str("<pre class=\"code-block\">");
                result.push_str(code);
                result.push_str("</pre>");
            }
            Segment::Inline(code) => {
                result.push_str("<code>");
                result.push_str(code);
                result.push_str("</code>");
            }
            Segment::Text(text) => result.push_str(&emphasize(text)),
        }
    }
    result
}

/// `<img>` tag for an attachment preview
pub fn image_tag(data_url: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"Image uploaded by user\">",
        html_escape(data_url)
    )
}

/// Seed text of a fresh transcript
pub fn welcome_text(document_name: &str) -> String {
    format!(
        "Hello! You can ask questions about **{}**.\n\nYou can upload an image to ask questions related to the information in the PDF.",
        document_name
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Block(&'a str),
    Inline(&'a str),
}

/// Cut text into fenced blocks, inline code spans and the rest
fn split_code(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    for (outside, block) in pairs(input, "```") {
        segments.extend(
            pairs(outside, "`")
                .into_iter()
                .flat_map(|(text, inline)| {
                    std::iter::once(Segment::Text(text)).chain(inline.map(Segment::Inline))
                }),
        );
        if let Some(code) = block {
            segments.push(Segment::Block(code));
        }
    }
    segments.retain(|s| !matches!(s, Segment::Text("")));
    segments
}

/// Splits on the first closed `delim ... delim` pair after each text run.
///
/// Yields `(text_before, Some(enclosed))` per pair and `(text, None)` for
/// literal runs, the last entry always being the literal rest. A pair must
/// enclose something.
fn pairs<'a>(input: &'a str, delim: &str) -> Vec<(&'a str, Option<&'a str>)> {
    let mut out = Vec::new();
    let mut rest = input;
    while let Some(open) = rest.find(delim) {
        let inner_start = open + delim.len();
        let Some(close) = rest[inner_start..].find(delim) else {
            break;
        };
        if close == 0 {
            out.push((&rest[..inner_start], None));
            rest = &rest[inner_start..];
            continue;
        }
        let inner_end = inner_start + close;
        out.push((&rest[..open], Some(&rest[inner_start..inner_end])));
        rest = &rest[inner_end + delim.len()..];
    }
    out.push((rest, None));
    out
}

fn emphasize(text: &str) -> String {
    let bold = wrap_pairs(text, "**", "strong");
    wrap_pairs(&bold, "*", "em")
}

fn wrap_pairs(text: &str, delim: &str, tag: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (before, inner) in pairs(text, delim) {
        result.push_str(before);
        if let Some(inner) = inner {
            result.push_str(&format!("<{tag}>{inner}</{tag}>"));
        }
    }
    result
}
