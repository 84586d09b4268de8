//
// Copyright 2020, Gobsmacked Labs, LLC.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `Bounds` is a closed vertical span `[start, end]` along the document axis.
//!
//! `Alignment` positions a generated `Bounds` around an anchor point and
//! `Intersection` is the three-way result of comparing an item to a region.

use alloc::string::String;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Vertical span defined by `start` (top edge) and `end` (bottom edge).
///
/// `start <= end` is expected but not checked.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Bounds<T = f64> {
    /// Top edge.
    pub start: T,
    /// Bottom edge.
    pub end: T,
}

impl<T> Bounds<T> {
    /// Constructor.
    #[must_use]
    pub const fn new(start: T, end: T) -> Self {
        Bounds { start, end }
    }
}

impl<T: Float> Bounds<T> {
    /// Distance between start and end.
    #[must_use]
    pub fn height(&self) -> T {
        self.end - self.start
    }

    /// Half the height plus the top edge.
    #[must_use]
    pub fn center(&self) -> T {
        self.start + self.height() / two()
    }

    /// Shift both edges by `amount`, positive or negative.
    #[must_use]
    pub fn offset(&self, amount: T) -> Self {
        Bounds {
            start: self.start + amount,
            end: self.end + amount,
        }
    }

    /// Bounds of `height` situated at `point`.
    ///
    /// `Alignment::Top` means the top of the box sits at the point and the box
    /// extends fully below it.
    #[must_use]
    pub fn from_point(point: T, height: T, align: Alignment) -> Self {
        match align {
            Alignment::Top => Bounds::new(point, point + height),
            Alignment::Bottom => Bounds::new(point - height, point),
            Alignment::Center => {
                let half = height / two();
                Bounds::new(point - half, point + half)
            }
        }
    }
}

impl<T: PartialOrd> Bounds<T> {
    /// Where `self`, taken as an item, lies relative to `region`.
    ///
    /// Touching edges count as overlapping.
    #[must_use]
    pub fn compare(&self, region: &Bounds<T>) -> Intersection {
        if region.start > self.end {
            Intersection::Above
        } else if region.end < self.start {
            Intersection::Below
        } else {
            Intersection::Overlapping
        }
    }

    /// Tests whether self and other share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Bounds<T>) -> bool {
        self.compare(other) == Intersection::Overlapping
    }
}

impl<T> From<(T, T)> for Bounds<T> {
    fn from((start, end): (T, T)) -> Self {
        Bounds { start, end }
    }
}

impl<T> From<[T; 2]> for Bounds<T> {
    fn from([start, end]: [T; 2]) -> Self {
        Bounds { start, end }
    }
}

fn two<T: Float>() -> T {
    T::one() + T::one()
}

/// Where a generated `Bounds` sits relative to its anchor point.
///
/// Serializes as `"top"`, `"center"` or `"bottom"`. Deserializing goes through
/// `Alignment::from_name`, so unknown names become `Center`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Alignment {
    /// Box starts at the point and extends below it.
    Top,
    /// Box is centered on the point.
    Center,
    /// Box ends at the point and extends above it.
    Bottom,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Center
    }
}

impl Alignment {
    /// Parse an alignment name. Anything other than `top` or `bottom` is `Center`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => Alignment::Top,
            "bottom" => Alignment::Bottom,
            _ => Alignment::Center,
        }
    }
}

impl From<&str> for Alignment {
    fn from(name: &str) -> Self {
        Alignment::from_name(name)
    }
}

impl From<String> for Alignment {
    fn from(name: String) -> Self {
        Alignment::from_name(&name)
    }
}

/// Result of comparing an item to a region.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Intersection {
    /// The item ends before the region starts.
    Above,
    /// The item and region share at least one point.
    Overlapping,
    /// The item starts after the region ends.
    Below,
}

impl Intersection {
    /// Directional code: -1 above, 0 overlapping, 1 below.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Intersection::Above => -1,
            Intersection::Overlapping => 0,
            Intersection::Below => 1,
        }
    }

    /// The direction seen from the region instead of the item.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Intersection::Above => Intersection::Below,
            Intersection::Overlapping => Intersection::Overlapping,
            Intersection::Below => Intersection::Above,
        }
    }
}

impl From<Intersection> for i8 {
    fn from(i: Intersection) -> i8 {
        i.code()
    }
}
