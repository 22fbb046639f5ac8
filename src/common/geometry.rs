//! Interval and axis-aligned box tests.
//!
//! Intervals are closed: ranges that only touch at an edge overlap.

use bevy::prelude::*;

/// True when `[a_low, a_high]` and `[b_low, b_high]` share no point.
#[inline]
pub fn is_exclusive_intervals(a_low: f32, a_high: f32, b_low: f32, b_high: f32) -> bool {
    a_high < b_low || b_high < a_low
}

/// Axis-aligned rectangle, +Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitBox {
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Both axes overlap.
    #[inline]
    pub fn overlaps(&self, other: &HitBox) -> bool {
        !is_exclusive_intervals(self.left(), self.right(), other.left(), other.right())
            && !is_exclusive_intervals(self.bottom(), self.top(), other.bottom(), other.top())
    }

    /// Move `center` so a box of `size` lies inside `self` (per axis).
    pub fn clamp_center(&self, center: Vec2, size: Vec2) -> Vec2 {
        let half = size * 0.5;
        let lo = self.min + half;
        let hi = (self.max - half).max(lo);
        center.clamp(lo, hi)
    }
}
