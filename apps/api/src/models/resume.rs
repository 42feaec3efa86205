#![allow(dead_code)]

//! Resume document model — the aggregate root (`Resume`) owning pages,
//! which own positioned content blocks.
//!
//! Blocks are polymorphic over a fixed kind set (`text`, `image`,
//! `signature`); the payload is a tagged union so a block can never carry
//! the wrong field for its kind. Content is opaque to this layer: it is
//! stored and returned verbatim, never interpreted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Errors from block construction / validation. Mapped to a 400 at the
/// transport boundary.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("invalid block kind '{0}': expected one of text, image, signature")]
    InvalidKind(String),

    #[error("invalid block geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid content for '{kind}' block: expected a string")]
    InvalidContent { kind: &'static str },
}

/// Page-local coordinates. Units are defined by the consuming renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Optional presentation hints. All fields independent; no cross-field
/// validation here — the presentation layer owns their meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
}

/// Kind-tagged block payload. Wire shape is `{"kind": ..., "content": ...}`,
/// flattened into the enclosing `Block`. Unknown kinds fail deserialization,
/// so they are rejected at the boundary and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum BlockContent {
    /// Rich-text markup, carried verbatim.
    Text(String),
    /// Image URL or upload reference.
    Image(String),
    /// Signature capture blob (renderer-defined shape).
    Signature(Value),
}

impl BlockContent {
    pub fn kind(&self) -> &'static str {
        match self {
            BlockContent::Text(_) => "text",
            BlockContent::Image(_) => "image",
            BlockContent::Signature(_) => "signature",
        }
    }
}

/// A single positioned content unit on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(flatten)]
    pub content: BlockContent,
    pub position: Position,
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
    /// Paint order within the page: lower paints first. Defaults to 0.
    #[serde(default)]
    pub layer_index: i32,
}

impl Block {
    /// Constructs a block from an untyped kind string and content value,
    /// validating kind and geometry. `layer_index` defaults to 0.
    pub fn new(
        kind: &str,
        content: Value,
        position: Position,
        size: Size,
        style: Option<BlockStyle>,
        layer_index: Option<i32>,
    ) -> Result<Self, BlockError> {
        let content = match kind {
            "text" => match content {
                Value::String(s) => BlockContent::Text(s),
                _ => return Err(BlockError::InvalidContent { kind: "text" }),
            },
            "image" => match content {
                Value::String(s) => BlockContent::Image(s),
                _ => return Err(BlockError::InvalidContent { kind: "image" }),
            },
            "signature" => BlockContent::Signature(content),
            other => return Err(BlockError::InvalidKind(other.to_string())),
        };

        let block = Block {
            content,
            position,
            size,
            style,
            layer_index: layer_index.unwrap_or(0),
        };
        block.validate()?;
        Ok(block)
    }

    /// Geometry check, re-run on deserialized input (serde already
    /// guarantees kind and field presence).
    pub fn validate(&self) -> Result<(), BlockError> {
        if self.size.width < 0.0 || self.size.height < 0.0 {
            return Err(BlockError::InvalidGeometry(format!(
                "size must be non-negative, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        Ok(())
    }
}

/// One page of a resume: an ordered block list plus page-level decoration.
/// Block sequence order is preserved for serialization; rendering order is
/// derived via [`Page::paint_order`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_pattern: Option<String>,
}

impl Page {
    /// Blocks in paint order: ascending `layer_index`, ties broken by
    /// original sequence index. Computed on demand, never stored.
    pub fn paint_order(&self) -> Vec<&Block> {
        let mut order: Vec<&Block> = self.blocks.iter().collect();
        // sort_by_key is stable, which is what preserves tie order
        order.sort_by_key(|b| b.layer_index);
        order
    }

    pub fn validate(&self) -> Result<(), BlockError> {
        for block in &self.blocks {
            block.validate()?;
        }
        Ok(())
    }
}

/// The aggregate root. Pages and blocks have no identity or lifecycle
/// outside their resume — they are written and replaced only as part of a
/// whole-document mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    /// Visual template identifier; opaque to the core.
    pub template: String,
    /// Reading order.
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Grants read access to non-owners. Never affects listing or writes.
    #[serde(default)]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pos() -> Position {
        Position { x: 10.0, y: 20.0 }
    }

    fn size(w: f64, h: f64) -> Size {
        Size {
            width: w,
            height: h,
        }
    }

    fn text_block(layer_index: i32, markup: &str) -> Block {
        Block::new(
            "text",
            json!(markup),
            pos(),
            size(100.0, 40.0),
            None,
            Some(layer_index),
        )
        .unwrap()
    }

    #[test]
    fn test_construct_text_block() {
        let b = text_block(3, "<b>Hello</b>");
        assert_eq!(b.content, BlockContent::Text("<b>Hello</b>".to_string()));
        assert_eq!(b.layer_index, 3);
    }

    #[test]
    fn test_layer_index_defaults_to_zero() {
        let b = Block::new(
            "image",
            json!("s3://img.png"),
            pos(),
            size(50.0, 50.0),
            None,
            None,
        )
        .unwrap();
        assert_eq!(b.layer_index, 0);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err =
            Block::new("video", json!("clip.mp4"), pos(), size(1.0, 1.0), None, None).unwrap_err();
        assert!(matches!(err, BlockError::InvalidKind(k) if k == "video"));
    }

    #[test]
    fn test_negative_width_rejected() {
        let err =
            Block::new("text", json!("hi"), pos(), size(-1.0, 10.0), None, None).unwrap_err();
        assert!(matches!(err, BlockError::InvalidGeometry(_)));
    }

    #[test]
    fn test_negative_height_rejected() {
        let err =
            Block::new("text", json!("hi"), pos(), size(10.0, -0.5), None, None).unwrap_err();
        assert!(matches!(err, BlockError::InvalidGeometry(_)));
    }

    #[test]
    fn test_zero_size_allowed() {
        assert!(Block::new("text", json!("hi"), pos(), size(0.0, 0.0), None, None).is_ok());
    }

    #[test]
    fn test_non_string_text_content_rejected() {
        let err = Block::new("text", json!({"rich": true}), pos(), size(1.0, 1.0), None, None)
            .unwrap_err();
        assert!(matches!(err, BlockError::InvalidContent { kind: "text" }));
    }

    #[test]
    fn test_signature_content_is_opaque() {
        let blob = json!({"points": [[0, 1], [2, 3]], "stroke": "#000"});
        let b =
            Block::new("signature", blob.clone(), pos(), size(80.0, 30.0), None, None).unwrap();
        assert_eq!(b.content, BlockContent::Signature(blob));
    }

    #[test]
    fn test_paint_order_ascending_with_stable_ties() {
        let page = Page {
            blocks: vec![text_block(2, "b0"), text_block(0, "b1"), text_block(2, "b2")],
            background_pattern: None,
        };
        let order: Vec<&str> = page
            .paint_order()
            .into_iter()
            .map(|b| match &b.content {
                BlockContent::Text(t) => t.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(order, vec!["b1", "b0", "b2"]);
    }

    #[test]
    fn test_paint_order_does_not_reorder_storage() {
        let page = Page {
            blocks: vec![text_block(5, "first"), text_block(1, "second")],
            background_pattern: None,
        };
        let _ = page.paint_order();
        assert!(matches!(&page.blocks[0].content, BlockContent::Text(t) if t == "first"));
    }

    #[test]
    fn test_block_wire_shape() {
        let b = text_block(1, "<p>hi</p>");
        let v = serde_json::to_value(&b).unwrap();
        assert_eq!(v["kind"], "text");
        assert_eq!(v["content"], "<p>hi</p>");
        assert_eq!(v["layerIndex"], 1);
        assert_eq!(v["position"]["x"], 10.0);
        assert_eq!(v["size"]["height"], 40.0);
    }

    #[test]
    fn test_block_deserialize_unknown_kind_fails() {
        let raw = json!({
            "kind": "video",
            "content": "clip.mp4",
            "position": {"x": 0.0, "y": 0.0},
            "size": {"width": 1.0, "height": 1.0}
        });
        assert!(serde_json::from_value::<Block>(raw).is_err());
    }

    #[test]
    fn test_block_deserialize_missing_size_fails() {
        let raw = json!({
            "kind": "text",
            "content": "hi",
            "position": {"x": 0.0, "y": 0.0}
        });
        assert!(serde_json::from_value::<Block>(raw).is_err());
    }

    #[test]
    fn test_block_style_round_trips_camel_case() {
        let raw = json!({
            "kind": "text",
            "content": "hi",
            "position": {"x": 0.0, "y": 0.0},
            "size": {"width": 10.0, "height": 10.0},
            "style": {"fontFamily": "Inter", "fontSize": 11.0, "alignment": "left"}
        });
        let b: Block = serde_json::from_value(raw).unwrap();
        let style = b.style.as_ref().unwrap();
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
        assert_eq!(style.font_size, Some(11.0));
        assert!(style.color.is_none());
        let back = serde_json::to_value(&b).unwrap();
        assert_eq!(back["style"]["fontFamily"], "Inter");
        assert!(back["style"].get("color").is_none());
    }

    #[test]
    fn test_page_validate_reports_bad_block() {
        let mut page = Page::default();
        page.blocks.push(text_block(0, "ok"));
        page.blocks.push(Block {
            content: BlockContent::Text("bad".to_string()),
            position: pos(),
            size: size(10.0, -1.0),
            style: None,
            layer_index: 0,
        });
        assert!(page.validate().is_err());
    }
}
