//! Page body blocks: fetching the block tree and rendering it as markdown.

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;

use crate::page::RichText;
use crate::{NotionClient, error::NotionError, http, markdown};

/// Nesting levels fetched below the page before children are dropped.
pub const MAX_DEPTH: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Icon {
    #[serde(default)]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalloutBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileUrl {
    pub url: String,
}

/// Image payload: either hosted by Notion (`file`) or linked (`external`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileBlock {
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(default)]
    pub external: Option<FileUrl>,
    #[serde(default)]
    pub file: Option<FileUrl>,
}

impl FileBlock {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.external
            .as_ref()
            .or(self.file.as_ref())
            .map(|f| f.url.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookmarkBlock {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EquationBlock {
    #[serde(default)]
    pub expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChildPageBlock {
    #[serde(default)]
    pub title: String,
}

/// Block payload, keyed by the block's `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph {
        paragraph: TextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: TextBlock,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: TextBlock,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: TextBlock,
    },
    BulletedListItem {
        bulleted_list_item: TextBlock,
    },
    NumberedListItem {
        numbered_list_item: TextBlock,
    },
    ToDo {
        to_do: ToDoBlock,
    },
    Quote {
        quote: TextBlock,
    },
    Callout {
        callout: CalloutBlock,
    },
    Toggle {
        toggle: TextBlock,
    },
    Code {
        code: CodeBlock,
    },
    Image {
        image: FileBlock,
    },
    Bookmark {
        bookmark: BookmarkBlock,
    },
    Equation {
        equation: EquationBlock,
    },
    ChildPage {
        child_page: ChildPageBlock,
    },
    Divider,
    #[serde(other)]
    Unsupported,
}

impl BlockKind {
    /// Whether nested blocks are part of this block's rendered output.
    /// Child pages are linked documents, not inline content.
    #[must_use]
    pub const fn renders_children(&self) -> bool {
        !matches!(self, Self::ChildPage { .. } | Self::Unsupported)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub kind: BlockKind,
}

/// A block with its fetched children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub block: Block,
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    #[must_use]
    pub const fn leaf(block: Block) -> Self {
        Self {
            block,
            children: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct BlockList {
    results: Vec<serde_json::Value>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

type TreeFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<BlockNode>, NotionError>> + Send + 'a>>;

impl NotionClient {
    /// Fetch the direct children of a block (or page), following cursors.
    ///
    /// Blocks whose payload does not match the expected shape are skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if a request fails, the API returns a
    /// non-success status, or the list envelope cannot be parsed.
    pub async fn block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        let base = format!(
            "{}/v1/blocks/{}/children?page_size={}",
            self.base_url,
            urlencoding::encode(block_id),
            crate::PAGE_SIZE
        );
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let url = match &cursor {
                Some(c) => format!("{base}&start_cursor={}", urlencoding::encode(c)),
                None => base.clone(),
            };
            tracing::debug!(block_id, cursor = cursor.as_deref(), "fetching block children");
            let resp = http::check_response(self.http.get(&url).send().await?).await?;
            let list: BlockList = http::decode(resp, "blocks/children").await?;

            for raw in list.results {
                match serde_json::from_value::<Block>(raw) {
                    Ok(block) => blocks.push(block),
                    Err(error) => tracing::warn!(block_id, %error, "skipping unreadable block"),
                }
            }

            match list.next_cursor {
                Some(next) if list.has_more && cursor.as_deref() != Some(next.as_str()) => {
                    cursor = Some(next);
                }
                _ => break,
            }
        }
        Ok(blocks)
    }

    /// Fetch the block tree below `block_id`, down to [`MAX_DEPTH`] levels.
    ///
    /// # Errors
    ///
    /// Same as [`Self::block_children`].
    pub fn block_tree<'a>(&'a self, block_id: &'a str) -> TreeFuture<'a> {
        self.block_tree_at(block_id, 0)
    }

    fn block_tree_at<'a>(&'a self, block_id: &'a str, depth: usize) -> TreeFuture<'a> {
        Box::pin(async move {
            let blocks = self.block_children(block_id).await?;
            let mut nodes = Vec::with_capacity(blocks.len());
            for block in blocks {
                if !(block.has_children && block.kind.renders_children()) {
                    nodes.push(BlockNode::leaf(block));
                    continue;
                }
                if depth + 1 >= MAX_DEPTH {
                    tracing::warn!(block_id = %block.id, max_depth = MAX_DEPTH, "dropping nested blocks below depth limit");
                    nodes.push(BlockNode::leaf(block));
                    continue;
                }
                let children = self.block_tree_at(&block.id, depth + 1).await?;
                nodes.push(BlockNode { block, children });
            }
            Ok(nodes)
        })
    }

    /// Render a page's body as markdown.
    ///
    /// # Errors
    ///
    /// Same as [`Self::block_children`].
    pub async fn page_markdown(&self, page_id: &str) -> Result<String, NotionError> {
        let tree = self.block_tree(page_id).await?;
        Ok(markdown::render(&tree))
    }
}
