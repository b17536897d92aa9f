// SPDX-License-Identifier: MPL-2.0
//! Highlighted source markup.
//!
//! Demo files ship source that an external highlighter already turned into
//! markup of the form:
//!
//! ```text
//! <pre class="shiki"><code><span class="line"><span style="color:#D73A49">const</span> …</span>
//! <span class="line">…</span></code></pre>
//! ```
//!
//! This module reads that markup into lines of colored segments that the
//! view renders as rich text. Inline styles may carry a single `color` or
//! dual-theme `--shiki-light` / `--shiki-dark` variables.
//!
//! Besides the XML entities and character references, the HTML named
//! entities highlighters commonly emit (`&nbsp;`, typographic quotes and
//! dashes) are resolved. Any other named entity makes the strict parse fail
//! and is kept literally by the plain-text fallback.

use crate::error::DecodeError;
use crate::ui::design_tokens::sizing::{CODE_LINE_HEIGHT, CODE_PADDING};
use iced::Color;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A run of text sharing one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub light: Option<Color>,
    pub dark: Option<Color>,
}

impl Segment {
    /// Color for the active theme, if the highlighter set one.
    #[must_use]
    pub fn color(&self, dark_theme: bool) -> Option<Color> {
        if dark_theme {
            self.dark.or(self.light)
        } else {
            self.light.or(self.dark)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceLine {
    pub segments: Vec<Segment>,
}

impl SourceLine {
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Parsed highlighted source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceMarkup {
    lines: Vec<SourceLine>,
    highlighted: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct SpanColor {
    light: Option<Color>,
    dark: Option<Color>,
}

impl SourceMarkup {
    /// Parses highlighter output, falling back to tag-stripped plain text
    /// when the markup is not well formed.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        match Self::try_parse(html) {
            Ok(markup) => markup,
            Err(err) => {
                tracing::warn!(error = %err, "highlighted markup unreadable, showing plain text");
                Self::plain(&strip_tags(html))
            }
        }
    }

    /// Strict parse of highlighter output.
    pub fn try_parse(html: &str) -> Result<Self, DecodeError> {
        let mut reader = Reader::from_str(html);
        reader.config_mut().trim_text(false);

        let mut lines = Vec::new();
        let mut current = SourceLine::default();
        let mut colors: Vec<SpanColor> = Vec::new();
        let mut highlighted = false;

        loop {
            match reader.read_event()? {
                Event::Start(tag) => {
                    if tag.name().as_ref() == b"span" {
                        let color = span_color(&tag)?;
                        highlighted |= color.light.is_some() || color.dark.is_some();
                        let inherited = colors.last().copied().unwrap_or_default();
                        colors.push(SpanColor {
                            light: color.light.or(inherited.light),
                            dark: color.dark.or(inherited.dark),
                        });
                    }
                }
                Event::End(tag) => {
                    if tag.name().as_ref() == b"span" {
                        colors.pop();
                    }
                }
                Event::Empty(tag) => {
                    if tag.name().as_ref() == b"br" {
                        lines.push(std::mem::take(&mut current));
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape_with(resolve_entity)?;
                    let color = colors.last().copied().unwrap_or_default();
                    for (i, part) in text.split('\n').enumerate() {
                        if i > 0 {
                            lines.push(std::mem::take(&mut current));
                        }
                        if !part.is_empty() {
                            push_segment(&mut current, part, color);
                        }
                    }
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    push_segment(&mut current, &text, SpanColor::default());
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !current.segments.is_empty() {
            lines.push(current);
        }
        while lines.last().is_some_and(|line| line.segments.is_empty()) {
            lines.pop();
        }

        Ok(Self { lines, highlighted })
    }

    /// Uncolored markup from plain source text.
    #[must_use]
    pub fn plain(source: &str) -> Self {
        let lines = source
            .trim_end_matches('\n')
            .split('\n')
            .map(|line| SourceLine {
                segments: if line.is_empty() {
                    Vec::new()
                } else {
                    vec![Segment {
                        text: line.to_string(),
                        light: None,
                        dark: None,
                    }]
                },
            })
            .collect();
        Self {
            lines,
            highlighted: false,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether any segment carries a highlighter color.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// The text content without colors, lines joined by `\n`.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(SourceLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Laid-out height of the rendered source block.
    #[must_use]
    pub fn measured_height(&self) -> f32 {
        self.lines.len() as f32 * CODE_LINE_HEIGHT + 2.0 * CODE_PADDING
    }
}

fn push_segment(line: &mut SourceLine, text: &str, color: SpanColor) {
    if let Some(last) = line.segments.last_mut() {
        if last.light == color.light && last.dark == color.dark {
            last.text.push_str(text);
            return;
        }
    }
    line.segments.push(Segment {
        text: text.to_string(),
        light: color.light,
        dark: color.dark,
    });
}

fn span_color(tag: &BytesStart<'_>) -> Result<SpanColor, DecodeError> {
    let style = tag
        .try_get_attribute("style")
        .map_err(|err| DecodeError::Markup(err.to_string()))?;
    let Some(style) = style else {
        return Ok(SpanColor::default());
    };
    let style = style.unescape_value_with(resolve_entity)?;
    Ok(parse_style(&style))
}

/// Reads the color declarations of an inline style.
fn parse_style(style: &str) -> SpanColor {
    let mut color = SpanColor::default();
    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let parsed = value.trim().parse::<Color>().ok();
        match property.trim().to_ascii_lowercase().as_str() {
            "color" | "--shiki-light" => color.light = parsed.or(color.light),
            "--shiki-dark" => color.dark = parsed.or(color.dark),
            _ => {}
        }
    }
    color
}

/// Drops every `<…>` tag and resolves entities where possible.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    match quick_xml::escape::unescape_with(&text, resolve_entity) {
        Ok(unescaped) => unescaped.into_owned(),
        Err(_) => text,
    }
}

/// XML entities plus the HTML ones found in highlighter output.
fn resolve_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "ensp" => "\u{2002}",
        "emsp" => "\u{2003}",
        "thinsp" => "\u{2009}",
        "ndash" => "–",
        "mdash" => "—",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        "hellip" => "…",
        "middot" => "·",
        "times" => "×",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        _ => return None,
    })
}
