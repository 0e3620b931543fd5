//! Inline markup parsing for rendered directive output.
//!
//! The host build system owns full document parsing; this module covers
//! only the narrow seam a directive needs: turning its rendered text
//! lines into document nodes. `InlineParser` understands exactly the
//! inline forms the tag renderer emits (`*emphasis*` and ``literal``)
//! plus plain text. Host integrations substitute their own `LineParser`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Inline element within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Emphasis(String),
    Literal(String),
}

/// Document node handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Paragraph(Vec<Inline>),
}

/// Line-based text-to-node parsing, as provided by the host build.
pub trait LineParser {
    /// Parse rendered text lines into document nodes.
    ///
    /// Empty lines contribute no nodes. Failures are host failures and
    /// propagate unchanged.
    fn parse_lines(&self, lines: &[String]) -> Result<Vec<Node>>;
}

/// Default parser for the inline forms the tag renderer produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineParser;

impl LineParser for InlineParser {
    fn parse_lines(&self, lines: &[String]) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            nodes.push(Node::Paragraph(parse_inlines(line)));
        }
        Ok(nodes)
    }
}

/// Split one line into inline elements.
///
/// Unterminated markers fall back to plain text.
fn parse_inlines(line: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("``") {
            if let Some(end) = after.find("``") {
                flush_text(&mut inlines, &mut text);
                inlines.push(Inline::Literal(after[..end].to_string()));
                rest = &after[end + 2..];
                continue;
            }
        }

        if let Some(after) = rest.strip_prefix('*') {
            if let Some(end) = after.find('*') {
                flush_text(&mut inlines, &mut text);
                inlines.push(Inline::Emphasis(after[..end].to_string()));
                rest = &after[end + 1..];
                continue;
            }
        }

        if let Some(ch) = rest.chars().next() {
            text.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    flush_text(&mut inlines, &mut text);
    inlines
}

fn flush_text(inlines: &mut Vec<Inline>, text: &mut String) {
    if !text.is_empty() {
        inlines.push(Inline::Text(std::mem::take(text)));
    }
}
