//! Layout parameters and extent derivation.

use cf_core::{CfError, CfResult};

/// Fixed pixel margins around the diagram. The wide right margin leaves
/// room for destination labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 100.0,
            right: 200.0,
            top: 50.0,
            bottom: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Horizontal thickness of a node rectangle.
    pub node_width: f32,
    /// Vertical gap between stacked nodes.
    pub node_padding: f32,
    pub margins: Margins,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            node_width: 15.0,
            node_padding: 20.0,
            margins: Margins::default(),
        }
    }
}

/// The rectangle the layout may use, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Extent {
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

impl LayoutParams {
    /// Derive the layout extent from the viewport's pixel dimensions.
    pub fn extent(&self, viewport_width: f32, viewport_height: f32) -> CfResult<Extent> {
        let extent = Extent {
            x0: self.margins.left,
            y0: self.margins.top,
            x1: viewport_width - self.margins.right,
            y1: viewport_height - self.margins.bottom,
        };
        if extent.width() <= 0.0 || extent.height() <= 0.0 {
            return Err(CfError::InvalidArg {
                what: "viewport smaller than layout margins",
            });
        }
        Ok(extent)
    }
}
