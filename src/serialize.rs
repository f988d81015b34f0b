//! Tileset XML output.
//!
//! Renders a tileset description into the fixed `<tileset version="1.0">`
//! schema. Output is deterministic: authors appear in the given order and
//! tiles in row-major tile order.

use std::fmt::Write as _;
use std::io;

use crate::types::{AuthorEntry, BoundingBox, TileGridShape, TilesetDescription};

/// Render the tileset document as a string.
pub fn serialize(shape: TileGridShape, authors: &[AuthorEntry], bboxes: &[BoundingBox]) -> String {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<tileset version=\"1.0\">\n");
    let _ = writeln!(out, "  <cols>{}</cols>", shape.columns);
    let _ = writeln!(out, "  <rows>{}</rows>", shape.rows);

    out.push_str("  <authors>\n");
    for author in authors {
        let _ = writeln!(
            out,
            "    <author><name>{}</name><detail>{}</detail></author>",
            escape(&author.name),
            escape(&author.detail)
        );
    }
    out.push_str("  </authors>\n");

    out.push_str("  <tiles>\n");
    for b in bboxes {
        let _ = writeln!(
            out,
            "    <tile><colrect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></tile>",
            b.x, b.y, b.w, b.h
        );
    }
    out.push_str("  </tiles>\n");
    out.push_str("</tileset>\n");

    out
}

/// Write the tileset document for `desc` to any byte sink.
pub fn write_tileset<W: io::Write>(desc: &TilesetDescription, mut sink: W) -> io::Result<()> {
    let document = serialize(desc.shape, &desc.authors, &desc.tiles);
    sink.write_all(document.as_bytes())?;
    sink.flush()
}

/// Escape XML markup characters in text and attribute content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
