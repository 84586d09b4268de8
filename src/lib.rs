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

#![no_std]
#![deny(missing_docs)]
//! Detect when an element scrolls past a portion of the visible window.
//!
//! Everything works on `Bounds`, the vertical span `[top, bottom]` of an element
//! or region measured from the top of the document. The host environment is
//! reached through the `Viewport` trait (and `MarkerHost` for debug markers), so
//! the same code runs against a browser binding or the in-memory document.
//!
//! To see when an element crosses the center 10% of the visible window:
//! ```
//! use intersectable::memory::MemoryDocument;
//! use intersectable::{Alignment, Intersectable, Intersection};
//!
//! let mut doc = MemoryDocument::new(800.0, 4000.0);
//! doc.insert_element("my-div", 1200.0, 100.0);
//! let mut i = Intersectable::with_defaults(doc);
//!
//! // 5% on either side of dead center, relative to the window.
//! let center_of_screen = i.window_center_bounds("10%".parse().unwrap(), Alignment::Center);
//!
//! // On every scroll notification:
//! i.host_mut().scroll_to(900.0);
//! let absolute_center = i.to_absolute(center_of_screen);
//! let item = i.element_bounds("my-div").unwrap();
//! assert_eq!(item.compare(&absolute_center), Intersection::Overlapping);
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod memory;
pub mod presenter;
pub mod viewport;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

extern crate alloc;

pub use bounds::{Alignment, Bounds, Intersection};
pub use config::{Config, ConfigOverrides, DEFAULT_PREFIX};
pub use error::{Error, Result};
pub use presenter::{BoundsPresenter, ClassNames, MarkerHost};
pub use viewport::{ElementBox, Viewport, ViewportAdapter, WindowHeight};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A configuration bound to a host viewport.
pub struct Intersectable<H: Viewport> {
    config: Config,
    viewport: ViewportAdapter<H>,
}

impl<H: Viewport> Intersectable<H> {
    /// Constructor. `settings` may be a bare prefix string, a `ConfigOverrides`
    /// or a full `Config`.
    pub fn new(host: H, settings: impl Into<ConfigOverrides>) -> Self {
        Intersectable {
            config: Config::merge(settings.into()),
            viewport: ViewportAdapter::new(host),
        }
    }

    /// Constructor with the default configuration.
    pub fn with_defaults(host: H) -> Self {
        Self::new(host, ConfigOverrides::default())
    }

    /// The resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `name` with the configured prefix.
    #[must_use]
    pub fn pre(&self, name: &str) -> alloc::string::String {
        self.config.prefixed(name)
    }

    /// The viewport adapter.
    pub fn viewport(&self) -> &ViewportAdapter<H> {
        &self.viewport
    }

    /// Mutable viewport adapter, for `refresh`.
    pub fn viewport_mut(&mut self) -> &mut ViewportAdapter<H> {
        &mut self.viewport
    }

    /// The host.
    pub fn host(&self) -> &H {
        self.viewport.host()
    }

    /// Mutable host.
    pub fn host_mut(&mut self) -> &mut H {
        self.viewport.host_mut()
    }

    /// Window bounds snapshot.
    #[must_use]
    pub fn window(&self) -> Bounds {
        self.viewport.window()
    }

    /// Document bounds snapshot.
    #[must_use]
    pub fn document(&self) -> Bounds {
        self.viewport.document()
    }

    /// Where `item` lies relative to `region`.
    #[must_use]
    pub fn intersection(&self, item: &Bounds, region: &Bounds) -> Intersection {
        item.compare(region)
    }

    /// Tests whether two bounds overlap.
    #[must_use]
    pub fn overlaps(&self, a: &Bounds, b: &Bounds) -> bool {
        a.overlaps(b)
    }

    /// See `ViewportAdapter::element_bounds`.
    ///
    /// # Errors
    ///
    /// `Error::Measurement` if the host cannot resolve `element`.
    pub fn element_bounds(&self, element: &H::Element) -> Result<Bounds> {
        self.viewport.element_bounds(element)
    }

    /// See `ViewportAdapter::to_absolute`.
    #[must_use]
    pub fn to_absolute(&self, bounds: Bounds) -> Bounds {
        self.viewport.to_absolute(bounds)
    }

    /// See `ViewportAdapter::window_center_bounds`.
    #[must_use]
    pub fn window_center_bounds(&self, height: WindowHeight, align: Alignment) -> Bounds {
        self.viewport.window_center_bounds(height, align)
    }

    /// A presenter using this configuration's prefix.
    #[must_use]
    pub fn presenter<M: MarkerHost>(&self) -> BoundsPresenter<M> {
        BoundsPresenter::new(&self.config)
    }
}

impl<H: Viewport + MarkerHost> Intersectable<H> {
    /// Draw `bounds` into the host as marker `id` with a presenter owned by the
    /// caller.
    ///
    /// # Errors
    ///
    /// See `BoundsPresenter::present`.
    pub fn show_bounds(
        &mut self,
        presenter: &mut BoundsPresenter<H>,
        bounds: Bounds,
        id: &str,
        class_names: impl Into<ClassNames>,
    ) -> Result<H::Handle> {
        presenter.present(self.viewport.host_mut(), bounds, id, class_names)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::memory::MemoryDocument;

    fn family() -> Intersectable<MemoryDocument> {
        let mut doc = MemoryDocument::new(600.0, 2400.0);
        doc.insert_element("mom", 0.0, 100.0);
        doc.insert_element("dad", 150.0, 100.0);
        doc.insert_element("baby", 50.0, 150.0);
        Intersectable::with_defaults(doc)
    }

    #[test]
    fn test_overlaps() {
        let i = family();
        let mom = i.element_bounds("mom").unwrap();
        let dad = i.element_bounds("dad").unwrap();
        let baby = i.element_bounds("baby").unwrap();

        assert!(!i.overlaps(&mom, &dad));
        assert!(i.overlaps(&mom, &baby));
        assert!(i.overlaps(&dad, &baby));
    }

    #[test]
    fn test_intersection() {
        let i = family();
        let mom = i.element_bounds("mom").unwrap();
        let dad = i.element_bounds("dad").unwrap();
        let baby = i.element_bounds("baby").unwrap();

        assert_eq!(i.intersection(&mom, &dad).code(), -1);
        assert_eq!(i.intersection(&dad, &mom).code(), 1);
        assert_eq!(i.intersection(&dad, &baby).code(), 0);
        assert_eq!(i.intersection(&mom, &baby).code(), 0);
        assert_eq!(i.intersection(&baby, &baby).code(), 0);
    }

    #[test]
    fn test_window_snapshot() {
        let i = family();
        assert_eq!(i.window(), Bounds::new(0.0, 600.0));
        assert_eq!(i.document(), Bounds::new(0.0, 2400.0));
    }

    #[test]
    fn test_css_prefix() {
        let i = Intersectable::new(MemoryDocument::new(1.0, 1.0), "merlin-");
        assert_eq!(i.pre("top"), "merlin-top");

        let i = Intersectable::new(MemoryDocument::new(1.0, 1.0), Config::default());
        assert_eq!(i.pre("top"), "intersectable__top");
        assert_eq!(family().config().prefix, DEFAULT_PREFIX);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_scrolling_into_focus() {
        let mut i = family();
        i.host_mut().insert_element("target", 1000.0, 50.0);
        let focus = i.window_center_bounds(WindowHeight::Pixels(60.0), Alignment::Center);
        assert_eq!(focus, Bounds::new(270.0, 330.0));

        let target = i.element_bounds("target").unwrap();
        assert_eq!(
            target.compare(&i.to_absolute(focus)),
            Intersection::Below
        );

        i.host_mut().scroll_to(700.0);
        assert!(target.overlaps(&i.to_absolute(focus)));

        i.host_mut().scroll_to(1200.0);
        assert_eq!(
            target.compare(&i.to_absolute(focus)),
            Intersection::Above
        );
    }

    #[test]
    fn test_show_bounds() {
        let mut i = family();
        let mut presenter = i.presenter();
        let window = i.window();
        let first = i
            .show_bounds(&mut presenter, window, "dinner", ["do", "re"])
            .unwrap();
        let second = i
            .show_bounds(&mut presenter, Bounds::new(10.0, 20.0), "dinner", "do re")
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(i.host().marker_count(), 1);
        let node = i.host().marker(first).unwrap();
        assert_eq!((node.top, node.height), (10.0, 10.0));
        assert!(node.has_class("do") && node.has_class("re"));
    }
}
