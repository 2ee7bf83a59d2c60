//! Surfaces a tracker is bound to, with hit testing

use serde::{Deserialize, Serialize};

/// Rectangular area for surface hit testing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle (edges included)
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        pos[0] >= self.x
            && pos[0] <= self.x + self.width
            && pos[1] >= self.y
            && pos[1] <= self.y + self.height
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }

    /// True when the rectangle has a finite, non-empty area
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Surface identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

/// The element a tracker listens on for presses and moves
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub id: SurfaceId,
    pub name: String,
    pub rect: Rect,
}

impl Surface {
    pub fn new(id: SurfaceId, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            rect,
        }
    }

    pub fn contains(&self, pos: [f32; 2]) -> bool {
        self.rect.contains(pos)
    }
}

/// Region that still reports contact-end after the pointer leaves the target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReleaseSurface {
    /// Releases are accepted everywhere
    #[default]
    Anywhere,
    /// Releases must land on the target surface itself
    Target,
    /// Releases must land inside a dedicated region
    Region(Rect),
}

impl ReleaseSurface {
    /// Whether a release at `pos` should end the contact
    pub fn accepts(&self, target: &Surface, pos: [f32; 2]) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Target => target.contains(pos),
            Self::Region(rect) => rect.contains(pos),
        }
    }
}
