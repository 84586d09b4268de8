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

//! In-memory document implementing `Viewport` and `MarkerHost`.
//!
//! Elements are named by string id. Useful wherever a real host is not
//! available, e.g. tests.

use crate::presenter::MarkerHost;
use crate::viewport::{ElementBox, Viewport};
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Handle of a marker node in a `MemoryDocument`. Never reused.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord)]
pub struct MarkerId(usize);

/// A marker node appended to the body.
#[derive(Debug, PartialEq, Clone)]
pub struct MarkerNode {
    /// The node id.
    pub id: String,
    /// The node classes in insertion order.
    pub classes: Vec<String>,
    /// Top style.
    pub top: f64,
    /// Height style.
    pub height: f64,
}

impl MarkerNode {
    /// Class membership.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone)]
struct Element {
    offset_top: f64,
    height: f64,
    attached: bool,
}

/// A fake document with fixed measurements.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    viewport_height: f64,
    document_height: f64,
    scroll_top: f64,
    elements: BTreeMap<String, Element>,
    body_classes: BTreeSet<String>,
    markers: BTreeMap<MarkerId, MarkerNode>,
    next_marker: usize,
}

impl MemoryDocument {
    /// Document of `document_height` seen through a window of `viewport_height`,
    /// scrolled to the top.
    #[must_use]
    pub fn new(viewport_height: f64, document_height: f64) -> Self {
        MemoryDocument {
            viewport_height,
            document_height,
            scroll_top: 0.0,
            elements: BTreeMap::new(),
            body_classes: BTreeSet::new(),
            markers: BTreeMap::new(),
            next_marker: 0,
        }
    }

    /// Add or replace an attached element.
    pub fn insert_element(&mut self, id: &str, offset_top: f64, height: f64) {
        self.elements.insert(
            id.to_string(),
            Element {
                offset_top,
                height,
                attached: true,
            },
        );
    }

    /// Keep the element around but stop it from being measurable.
    pub fn detach_element(&mut self, id: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.attached = false;
        }
    }

    /// Set the vertical scroll offset.
    pub fn scroll_to(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top;
    }

    /// Change the viewport height.
    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
    }

    /// A marker node by handle.
    #[must_use]
    pub fn marker(&self, marker: MarkerId) -> Option<&MarkerNode> {
        self.markers.get(&marker)
    }

    /// Remove the marker node with `id` from the body.
    pub fn remove_marker(&mut self, id: &str) -> Option<MarkerNode> {
        let marker = self.find_marker(id)?;
        self.markers.remove(&marker)
    }

    /// Number of marker nodes in the body.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Body class membership.
    #[must_use]
    pub fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }
}

impl Viewport for MemoryDocument {
    type Element = str;

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn element_box(&self, element: &str) -> Option<ElementBox> {
        self.elements
            .get(element)
            .filter(|el| el.attached)
            .map(|el| ElementBox {
                offset_top: el.offset_top,
                height: el.height,
            })
    }
}

impl MarkerHost for MemoryDocument {
    type Handle = MarkerId;

    fn find_marker(&self, id: &str) -> Option<MarkerId> {
        self.markers
            .iter()
            .find(|(_, m)| m.id == id)
            .map(|(marker, _)| *marker)
    }

    fn create_marker(&mut self, id: &str, classes: &[String]) -> MarkerId {
        let marker = MarkerId(self.next_marker);
        self.next_marker += 1;
        self.markers.insert(
            marker,
            MarkerNode {
                id: id.to_string(),
                classes: classes.to_vec(),
                top: 0.0,
                height: 0.0,
            },
        );
        marker
    }

    fn set_marker_geometry(&mut self, marker: &MarkerId, top: f64, height: f64) {
        if let Some(node) = self.markers.get_mut(marker) {
            node.top = top;
            node.height = height;
        }
    }

    fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
    }
}
