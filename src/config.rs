//! Conversion configuration.
//!
//! The configuration can come from a YAML project file, from command-line
//! values, or both; command-line values win.
//!
//! ```yaml
//! columns: 8
//! rows: 4
//! authors:
//!   - name: Jane Doe
//!     detail: Artwork
//! output: ground.tileset.xml
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TscError};
use crate::types::{AuthorEntry, TileGridShape};

/// Everything a conversion needs besides the input bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Number of tile columns; zero means "not given".
    pub columns: u32,

    /// Number of tile rows; zero means "not given".
    pub rows: u32,

    /// Authors in display order.
    pub authors: Vec<AuthorEntry>,

    /// Destination file. Standard output when unset.
    pub output: Option<PathBuf>,
}

impl ConvertConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TscError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TscError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Expected keys: columns, rows, authors, output".to_string()),
        })
    }

    /// The validated tile grid shape.
    pub fn shape(&self) -> Result<TileGridShape> {
        TileGridShape::new(self.columns, self.rows)
    }
}

/// Parse a "COLSxROWS" tile grid string into (columns, rows).
pub fn parse_tiles(s: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = s.splitn(2, |c| c == 'x' || c == 'X').collect();
    if parts.len() != 2 {
        return Err(TscError::Configuration {
            message: format!("Invalid tile grid '{}': expected COLSxROWS (e.g. 8x4)", s),
            help: Some("Use the format COLSxROWS, for example: 8x4, 16x1".to_string()),
        });
    }

    let columns: u32 = parts[0].trim().parse().map_err(|_| TscError::Configuration {
        message: format!("Invalid column count '{}' in tile grid '{}'", parts[0], s),
        help: Some("Columns must be a positive integer".to_string()),
    })?;

    let rows: u32 = parts[1].trim().parse().map_err(|_| TscError::Configuration {
        message: format!("Invalid row count '{}' in tile grid '{}'", parts[1], s),
        help: Some("Rows must be a positive integer".to_string()),
    })?;

    TileGridShape::new(columns, rows)?;

    Ok((columns, rows))
}

/// Parse a "NAME:DETAIL" author credit. The detail may be omitted.
pub fn parse_author(s: &str) -> Result<AuthorEntry> {
    let (name, detail) = s.split_once(':').unwrap_or((s, ""));
    let name = name.trim();

    if name.is_empty() {
        return Err(TscError::Configuration {
            message: format!("Invalid author '{}': name is empty", s),
            help: Some("Use the format NAME:DETAIL, for example: \"Jane Doe:Artwork\"".to_string()),
        });
    }

    Ok(AuthorEntry::new(name, detail.trim()))
}
