use bevy::math::{IRect, IVec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in play-area coordinates.
///
/// `(x, y)` is the top-left corner; the rectangle spans
/// `[x, x + width)` horizontally and `[y, y + height)` vertically.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle of the given size at `(x, y)`.
    pub const fn at(x: i32, y: i32, size: EntitySize) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Width and height as a pair.
    pub const fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Returns true if the open interiors of the two rectangles intersect.
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true if `self` overlaps any rectangle in `others`.
    pub fn overlaps_any(&self, others: &[Rect]) -> bool {
        others.iter().any(|other| self.overlaps(other))
    }
}

impl From<IRect> for Rect {
    fn from(rect: IRect) -> Self {
        Self::new(rect.min.x, rect.min.y, rect.width(), rect.height())
    }
}

/// Extent of the play area. The origin is always `(0, 0)`.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns true if `rect` lies fully inside the play area.
    pub const fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.right() <= self.width && rect.bottom() <= self.height
    }

    /// Returns true if an entity of `size` fits somewhere inside.
    pub const fn fits(&self, size: EntitySize) -> bool {
        self.width >= size.width && self.height >= size.height
    }
}

impl From<IVec2> for Bounds {
    fn from(extent: IVec2) -> Self {
        Self::new(extent.x, extent.y)
    }
}

/// Width and height of a spawned entity.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct EntitySize {
    pub width: i32,
    pub height: i32,
}

impl EntitySize {
    /// Standard enemy footprint: 15×15.
    pub const ENEMY: EntitySize = EntitySize::new(15, 15);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for EntitySize {
    fn default() -> Self {
        Self::ENEMY
    }
}
