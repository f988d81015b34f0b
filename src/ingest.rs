//! Input classification.
//!
//! A stream that starts with the PNG signature is a tileset image to convert.
//! Anything else is treated as an existing tileset description to read back,
//! which is not supported yet.

use crate::decode::is_png;
use crate::error::{Result, TscError};
use crate::types::TilesetDescription;

/// What kind of input a byte stream holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A PNG tile sheet.
    Image,
    /// A tileset description document.
    Tileset,
}

/// Classify input by its leading signature bytes.
pub fn classify(bytes: &[u8]) -> InputKind {
    if is_png(bytes) {
        InputKind::Image
    } else {
        InputKind::Tileset
    }
}

/// Read a tileset description back in.
pub fn read_tileset(_bytes: &[u8]) -> Result<TilesetDescription> {
    Err(TscError::NotImplemented {
        feature: "Reading tileset descriptions".to_string(),
    })
}
