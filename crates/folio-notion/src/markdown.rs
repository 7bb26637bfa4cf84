//! Block tree to markdown.
//!
//! Blocks are separated by a blank line, except consecutive list items which
//! stay on adjacent lines. Nested children are indented under their list
//! item, quoted under their quote, and placed after any other parent.

use crate::blocks::{BlockKind, BlockNode};
use crate::page::{RichText, plain_text};

/// Render a block tree as markdown.
#[must_use]
pub fn render(nodes: &[BlockNode]) -> String {
    let mut out = String::new();
    let mut previous_was_item = false;
    let mut number = 0_usize;

    // Blocks that render nothing neither end a list nor restart its numbering.
    for node in nodes {
        let candidate = if matches!(node.block.kind, BlockKind::NumberedListItem { .. }) {
            number + 1
        } else {
            0
        };
        let Some(chunk) = render_node(node, candidate) else {
            continue;
        };
        number = candidate;
        let is_item = is_list_item(&node.block.kind);
        if !out.is_empty() {
            out.push_str(if previous_was_item && is_item { "\n" } else { "\n\n" });
        }
        out.push_str(&chunk);
        previous_was_item = is_item;
    }
    out
}

const fn is_list_item(kind: &BlockKind) -> bool {
    matches!(
        kind,
        BlockKind::BulletedListItem { .. }
            | BlockKind::NumberedListItem { .. }
            | BlockKind::ToDo { .. }
    )
}

fn render_node(node: &BlockNode, number: usize) -> Option<String> {
    let children = render(&node.children);
    let text = match &node.block.kind {
        BlockKind::Paragraph { paragraph } => rich_text(&paragraph.rich_text),
        BlockKind::Heading1 { heading_1 } => format!("# {}", rich_text(&heading_1.rich_text)),
        BlockKind::Heading2 { heading_2 } => format!("## {}", rich_text(&heading_2.rich_text)),
        BlockKind::Heading3 { heading_3 } => format!("### {}", rich_text(&heading_3.rich_text)),
        BlockKind::BulletedListItem { bulleted_list_item } => {
            return Some(list_item("- ", &rich_text(&bulleted_list_item.rich_text), &children));
        }
        BlockKind::NumberedListItem { numbered_list_item } => {
            let marker = format!("{number}. ");
            return Some(list_item(&marker, &rich_text(&numbered_list_item.rich_text), &children));
        }
        BlockKind::ToDo { to_do } => {
            let marker = if to_do.checked { "- [x] " } else { "- [ ] " };
            return Some(list_item(marker, &rich_text(&to_do.rich_text), &children));
        }
        BlockKind::Quote { quote } => {
            return Some(quoted(&join_blocks(&rich_text(&quote.rich_text), &children)));
        }
        BlockKind::Callout { callout } => {
            let mut head = rich_text(&callout.rich_text);
            if let Some(emoji) = callout.icon.as_ref().and_then(|i| i.emoji.as_deref()) {
                head = format!("{emoji} {head}");
            }
            return Some(quoted(&join_blocks(&head, &children)));
        }
        BlockKind::Toggle { toggle } => rich_text(&toggle.rich_text),
        BlockKind::Code { code } => {
            format!("```{}\n{}\n```", code.language, plain_text(&code.rich_text))
        }
        BlockKind::Image { image } => {
            let url = image.url()?;
            format!("![{}]({url})", plain_text(&image.caption))
        }
        BlockKind::Bookmark { bookmark } => {
            if bookmark.url.is_empty() {
                return None;
            }
            let caption = plain_text(&bookmark.caption);
            let label = if caption.is_empty() { &bookmark.url } else { &caption };
            format!("[{label}]({})", bookmark.url)
        }
        BlockKind::Equation { equation } => format!("$$\n{}\n$$", equation.expression),
        BlockKind::ChildPage { child_page } => format!("**{}**", child_page.title),
        BlockKind::Divider => "---".to_string(),
        BlockKind::Unsupported => return None,
    };

    let joined = join_blocks(&text, &children);
    if joined.trim().is_empty() { None } else { Some(joined) }
}

fn join_blocks(head: &str, children: &str) -> String {
    match (head.is_empty(), children.is_empty()) {
        (_, true) => head.to_string(),
        (true, false) => children.to_string(),
        (false, false) => format!("{head}\n\n{children}"),
    }
}

/// `marker text`, with children indented to the text column.
fn list_item(marker: &str, text: &str, children: &str) -> String {
    let mut item = format!("{marker}{text}");
    if !children.is_empty() {
        let pad = " ".repeat(marker.len());
        for line in children.lines() {
            item.push('\n');
            if !line.is_empty() {
                item.push_str(&pad);
                item.push_str(line);
            }
        }
    }
    item
}

fn quoted(text: &str) -> String {
    text.lines()
        .map(|line| if line.is_empty() { ">".to_string() } else { format!("> {line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown for a run of rich-text segments.
#[must_use]
pub fn rich_text(segments: &[RichText]) -> String {
    segments.iter().map(segment).collect()
}

fn segment(text: &RichText) -> String {
    let raw = text.plain_text.as_str();
    let core = raw.trim();
    if core.is_empty() {
        return raw.to_string();
    }
    // Markers must hug the text, so surrounding whitespace stays outside.
    let start = raw.len() - raw.trim_start().len();
    let (leading, trailing) = (&raw[..start], &raw[start + core.len()..]);

    let a = text.annotations;
    let mut out = core.to_string();
    if a.code {
        out = format!("`{out}`");
    }
    if a.bold {
        out = format!("**{out}**");
    }
    if a.italic {
        out = format!("_{out}_");
    }
    if a.strikethrough {
        out = format!("~~{out}~~");
    }
    if let Some(href) = &text.href {
        out = format!("[{out}]({href})");
    }
    format!("{leading}{out}{trailing}")
}
