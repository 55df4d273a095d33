//! Result and template types for the search pipeline.

use std::path::Path;

use serde::Serialize;

use crate::bitmap;
use crate::error::SearchError;
use crate::raster::Image;

/// A single confirmed match of a scaled template in the reference image.
///
/// Presentation order is ascending by template id, then x, then y; the
/// derived `Ord` follows from the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MatchResult {
    pub template_id: i32,
    pub position_x: u32,
    pub position_y: u32,
}

/// A template image loaded from disk, keyed by its numeric id.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: i32,
    pub image: Image,
}

impl Template {
    /// Load a template bitmap.
    ///
    /// The id is parsed from the first three characters of the file name;
    /// a non-numeric prefix fails with [`SearchError::TemplateId`], a
    /// decode failure is wrapped with the offending path. Either aborts
    /// this template only.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let id = template_id_from_name(path)?;
        let image = bitmap::decode(path).map_err(|source| SearchError::Bitmap {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { id, image })
    }
}

/// Extract the numeric template id from the leading three characters of the file name.
pub fn template_id_from_name(path: &Path) -> Result<i32, SearchError> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    name.get(..3)
        .and_then(|prefix| prefix.parse::<i32>().ok())
        .ok_or_else(|| SearchError::TemplateId {
            name: name.to_string(),
        })
}
