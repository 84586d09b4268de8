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

//! Debug markers: a styled box in the host document for a `Bounds`.
//!
//! ```
//! use intersectable::memory::MemoryDocument;
//! use intersectable::presenter::BoundsPresenter;
//! use intersectable::{Bounds, Config};
//!
//! let mut doc = MemoryDocument::new(800.0, 2000.0);
//! let mut presenter = BoundsPresenter::new(&Config::default());
//! let marker = presenter
//!     .present(&mut doc, Bounds::new(360.0, 440.0), "focus", "do re")
//!     .unwrap();
//!
//! let node = doc.marker(marker).unwrap();
//! assert_eq!(node.id, "intersectable__focus");
//! assert_eq!((node.top, node.height), (360.0, 80.0));
//! ```
//!
//! Class names are a string or a list of strings; nothing else is accepted.
//!
//! ```compile_fail
//! # use intersectable::memory::MemoryDocument;
//! # use intersectable::presenter::BoundsPresenter;
//! # use intersectable::{Bounds, Config};
//! let mut doc = MemoryDocument::new(800.0, 2000.0);
//! let mut presenter = BoundsPresenter::new(&Config::default());
//! presenter.present(&mut doc, Bounds::new(0.0, 10.0), "focus", 5);
//! ```

use crate::bounds::Bounds;
use crate::config::Config;
use crate::error::{Error, Result};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::trace;

/// Class added to the document body once any marker exists.
pub const HOST_CLASS: &str = "intersectable";

/// Host document mutations needed to draw markers.
pub trait MarkerHost {
    /// Reference to a marker node.
    type Handle: Clone;

    /// Find an existing marker node by id.
    fn find_marker(&self, id: &str) -> Option<Self::Handle>;

    /// Create a marker node with `id` and `classes` and append it to the body.
    fn create_marker(&mut self, id: &str, classes: &[String]) -> Self::Handle;

    /// Set the top offset and height style of a marker.
    fn set_marker_geometry(&mut self, marker: &Self::Handle, top: f64, height: f64);

    /// Add a class to the document body.
    fn add_body_class(&mut self, class: &str);
}

/// Extra classes for a marker.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ClassNames {
    /// Space delimited, as in a `class` attribute.
    Spaced(String),
    /// One class per entry.
    List(Vec<String>),
}

impl Default for ClassNames {
    fn default() -> Self {
        ClassNames::List(Vec::new())
    }
}

impl ClassNames {
    /// Individual class tokens.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if a list entry is empty or contains whitespace.
    pub fn into_classes(self) -> Result<Vec<String>> {
        match self {
            ClassNames::Spaced(s) => Ok(s.split_whitespace().map(ToString::to_string).collect()),
            ClassNames::List(list) => {
                if let Some(bad) = list
                    .iter()
                    .find(|c| c.is_empty() || c.chars().any(char::is_whitespace))
                {
                    return Err(Error::invalid_argument(alloc::format!(
                        "'{}' is not a single class name",
                        bad
                    )));
                }
                Ok(list)
            }
        }
    }
}

impl From<&str> for ClassNames {
    fn from(s: &str) -> Self {
        ClassNames::Spaced(s.to_string())
    }
}

impl From<String> for ClassNames {
    fn from(s: String) -> Self {
        ClassNames::Spaced(s)
    }
}

impl From<Vec<String>> for ClassNames {
    fn from(list: Vec<String>) -> Self {
        ClassNames::List(list)
    }
}

impl From<&[&str]> for ClassNames {
    fn from(list: &[&str]) -> Self {
        ClassNames::List(list.iter().map(|c| (*c).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassNames {
    fn from(list: [&str; N]) -> Self {
        ClassNames::from(&list[..])
    }
}

/// Creates and repositions markers, at most one per id.
pub struct BoundsPresenter<M: MarkerHost> {
    config: Config,
    markers: BTreeMap<String, M::Handle>,
}

impl<M: MarkerHost> BoundsPresenter<M> {
    /// Constructor.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        BoundsPresenter {
            config: config.clone(),
            markers: BTreeMap::new(),
        }
    }

    /// Draw `bounds` as the marker `id`, creating it unless the host already
    /// has a node with the prefixed id, and moving it otherwise.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `id` is empty or `class_names` has a bad entry.
    pub fn present(
        &mut self,
        host: &mut M,
        bounds: Bounds,
        id: &str,
        class_names: impl Into<ClassNames>,
    ) -> Result<M::Handle> {
        if id.is_empty() {
            return Err(Error::invalid_argument("marker id cannot be empty"));
        }
        let classes = class_names.into().into_classes()?;
        let id = self.config.prefixed(id);

        // Always ask the host; the node may have been removed since the last call.
        let marker = match host.find_marker(&id) {
            Some(marker) => {
                trace!("repositioning marker {} to {:?}", id, bounds);
                marker
            }
            None => {
                trace!("creating marker {} at {:?}", id, bounds);
                let mut all = Vec::with_capacity(classes.len() + 1);
                all.push(self.config.prefixed("bounds"));
                all.extend(classes);
                host.create_marker(&id, &all)
            }
        };

        host.set_marker_geometry(&marker, bounds.start, bounds.height());
        host.add_body_class(HOST_CLASS);
        self.markers.insert(id, marker.clone());

        Ok(marker)
    }

    /// The last handle this presenter drew for `id` (unprefixed). The host may
    /// have removed the node since.
    #[must_use]
    pub fn marker(&self, id: &str) -> Option<&M::Handle> {
        self.markers.get(&self.config.prefixed(id))
    }

    /// Number of markers drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True if no marker has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::memory::MemoryDocument;
    use alloc::vec;

    fn setup() -> (MemoryDocument, BoundsPresenter<MemoryDocument>) {
        (
            MemoryDocument::new(800.0, 2000.0),
            BoundsPresenter::new(&Config::default()),
        )
    }

    #[test]
    fn test_classes_as_string() {
        let (mut doc, mut presenter) = setup();
        let window = Bounds::new(0.0, 800.0);
        let marker = presenter.present(&mut doc, window, "dinner", "do re").unwrap();

        let node = doc.marker(marker).unwrap();
        assert_eq!(node.id, "intersectable__dinner");
        assert!(node.has_class("intersectable__bounds"));
        assert!(node.has_class("do"));
        assert!(node.has_class("re"));
        assert_eq!((node.top, node.height), (0.0, 800.0));
        assert!(doc.body_has_class(HOST_CLASS));
    }

    #[test]
    fn test_classes_as_list() {
        let (mut doc, mut presenter) = setup();
        let window = Bounds::new(0.0, 800.0);
        presenter
            .present(&mut doc, window, "dinner", ["do", "re"])
            .unwrap();

        let marker = doc.find_marker("intersectable__dinner").unwrap();
        let node = doc.marker(marker).unwrap();
        assert_eq!(
            node.classes,
            vec!["intersectable__bounds", "do", "re"]
        );
    }

    #[test]
    fn test_present_twice_updates_in_place() {
        let (mut doc, mut presenter) = setup();
        let first = presenter
            .present(&mut doc, Bounds::new(0.0, 100.0), "focus", ClassNames::default())
            .unwrap();
        let second = presenter
            .present(&mut doc, Bounds::new(300.0, 350.0), "focus", "ignored")
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(doc.marker_count(), 1);
        assert_eq!(presenter.len(), 1);

        let node = doc.marker(second).unwrap();
        assert_eq!((node.top, node.height), (300.0, 50.0));
        assert!(!node.has_class("ignored"));
    }

    #[test]
    fn test_reuses_marker_from_another_presenter() {
        let (mut doc, mut presenter) = setup();
        presenter
            .present(&mut doc, Bounds::new(0.0, 100.0), "focus", "")
            .unwrap();

        let mut other: BoundsPresenter<MemoryDocument> = BoundsPresenter::new(&Config::default());
        other
            .present(&mut doc, Bounds::new(10.0, 20.0), "focus", "")
            .unwrap();
        assert_eq!(doc.marker_count(), 1);
    }

    #[test]
    fn test_recreates_marker_removed_from_host() {
        let (mut doc, mut presenter) = setup();
        let first = presenter
            .present(&mut doc, Bounds::new(0.0, 100.0), "focus", "do")
            .unwrap();
        assert!(doc.remove_marker("intersectable__focus").is_some());
        assert_eq!(doc.marker_count(), 0);

        let second = presenter
            .present(&mut doc, Bounds::new(200.0, 260.0), "focus", "re")
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(doc.marker_count(), 1);
        assert_eq!(doc.find_marker("intersectable__focus"), Some(second));
        assert_eq!(presenter.marker("focus"), Some(&second));

        let node = doc.marker(second).unwrap();
        assert_eq!((node.top, node.height), (200.0, 60.0));
        assert!(node.has_class("re"));
        assert!(!node.has_class("do"));
    }

    #[test]
    fn test_prefix_is_applied() {
        let mut doc = MemoryDocument::new(800.0, 2000.0);
        let mut presenter = BoundsPresenter::new(&Config::merge("merlin-".into()));
        let marker = presenter
            .present(&mut doc, Bounds::new(0.0, 1.0), "top", "")
            .unwrap();

        let node = doc.marker(marker).unwrap();
        assert_eq!(node.id, "merlin-top");
        assert!(node.has_class("merlin-bounds"));
        assert_eq!(presenter.marker("top"), Some(&marker));
    }

    #[test]
    fn test_empty_id() {
        let (mut doc, mut presenter) = setup();
        let result = presenter.present(&mut doc, Bounds::new(0.0, 1.0), "", "do");
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
        assert_eq!(doc.marker_count(), 0);
        assert!(presenter.is_empty());
    }

    #[test]
    fn test_bad_class_entries() {
        let (mut doc, mut presenter) = setup();
        for bad in [vec!["do re".to_string()], vec![String::new()]].iter() {
            let result = presenter.present(&mut doc, Bounds::new(0.0, 1.0), "a", bad.clone());
            assert!(matches!(result, Err(Error::InvalidArgument { .. })));
        }
        assert!(!doc.body_has_class(HOST_CLASS));
    }
}
