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

//! Bridge between host measurements and `Bounds`.
//!
//! The host is anything implementing `Viewport`. `ViewportAdapter` snapshots the
//! window and document extents when it is built; call `refresh` after a resize.

use crate::bounds::{Alignment, Bounds};
use crate::error::{Error, Result};
use alloc::format;
use core::fmt::Debug;
use core::str::FromStr;
use log::debug;

/// Top offset and rendered height of an element, in document coordinates.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ElementBox {
    /// Distance from the top of the document to the top of the element.
    pub offset_top: f64,
    /// Rendered height.
    pub height: f64,
}

/// Live measurements of the hosting environment.
pub trait Viewport {
    /// How the host refers to an element.
    type Element: Debug + ?Sized;

    /// Height of the visible window.
    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset.
    fn scroll_top(&self) -> f64;

    /// Total height of the document.
    fn document_height(&self) -> f64;

    /// Position of an element, `None` if it is detached or does not exist.
    fn element_box(&self, element: &Self::Element) -> Option<ElementBox>;
}

/// Height of a window-relative region, in pixels or as a share of the viewport.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum WindowHeight {
    /// Absolute pixels.
    Pixels(f64),
    /// Percent of the viewport height, `10.0` meaning 10%.
    Percent(f64),
}

impl WindowHeight {
    /// Pixel height against a viewport of `viewport_height`.
    #[must_use]
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            WindowHeight::Pixels(px) => px,
            WindowHeight::Percent(pct) => viewport_height * pct / 100.0,
        }
    }
}

impl From<f64> for WindowHeight {
    fn from(px: f64) -> Self {
        WindowHeight::Pixels(px)
    }
}

/// `"150"` is pixels, `"10%"` is a percentage.
impl FromStr for WindowHeight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (number, percent) = match s.strip_suffix('%') {
            Some(number) => (number, true),
            None => (s, false),
        };
        let number = number.trim();
        let value = number
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "'{}' is not a height: '{}' is not a finite number",
                    s, number
                ))
            })?;

        Ok(if percent {
            WindowHeight::Percent(value)
        } else {
            WindowHeight::Pixels(value)
        })
    }
}

/// Converts host measurements into `Bounds`.
pub struct ViewportAdapter<V> {
    host: V,
    window: Bounds,
    document: Bounds,
}

impl<V: Viewport> ViewportAdapter<V> {
    /// Constructor. Takes the window and document snapshots.
    pub fn new(host: V) -> Self {
        let mut adapter = ViewportAdapter {
            host,
            window: Bounds::new(0.0, 0.0),
            document: Bounds::new(0.0, 0.0),
        };
        adapter.refresh();
        adapter
    }

    /// Re-read viewport and document heights from the host.
    pub fn refresh(&mut self) {
        self.window = Bounds::new(0.0, self.host.viewport_height());
        self.document = Bounds::new(0.0, self.host.document_height());
        debug!(
            "viewport snapshot: window {:?}, document {:?}",
            self.window, self.document
        );
    }

    /// Window bounds `(0, viewport height)` as of the last snapshot.
    #[must_use]
    pub fn window(&self) -> Bounds {
        self.window
    }

    /// Document bounds `(0, document height)` as of the last snapshot.
    #[must_use]
    pub fn document(&self) -> Bounds {
        self.document
    }

    /// Absolute bounds of an element.
    ///
    /// # Errors
    ///
    /// `Error::Measurement` if the host cannot resolve `element`.
    pub fn element_bounds(&self, element: &V::Element) -> Result<Bounds> {
        match self.host.element_box(element) {
            Some(el) => Ok(Bounds::new(el.offset_top, el.offset_top + el.height)),
            None => {
                debug!("element {:?} could not be measured", element);
                Err(Error::measurement(format!("{:?}", element)))
            }
        }
    }

    /// Convert window-relative bounds to absolute document bounds using the
    /// live scroll offset.
    ///
    /// A region occupying 100px to 300px of the visible window is `(100, 300)`
    /// here, and comes back shifted by however far the document is scrolled.
    #[must_use]
    pub fn to_absolute(&self, bounds: Bounds) -> Bounds {
        bounds.offset(self.host.scroll_top())
    }

    /// Window-relative bounds of `height` aligned on the center of the window.
    #[must_use]
    pub fn window_center_bounds(&self, height: WindowHeight, align: Alignment) -> Bounds {
        let height = height.resolve(self.window.height());
        Bounds::from_point(self.window.center(), height, align)
    }

    /// The host.
    pub fn host(&self) -> &V {
        &self.host
    }

    /// Mutable access to the host. Snapshots are not refreshed.
    pub fn host_mut(&mut self) -> &mut V {
        &mut self.host
    }

    /// Give the host back.
    pub fn into_host(self) -> V {
        self.host
    }
}
