// SPDX-License-Identifier: MPL-2.0
//! Locating the elements each component acts on.
//!
//! Elements declare their role with a capability marker attribute
//! (`data-ocr-role="drop-zone"`). Pages that predate the markers are still
//! served through id-fragment matching, enabled by default.

use crate::application::port::{Dom, ElementQuery};
use crate::config::TargetsConfig;
use crate::domain::ui::NodeHandle;

/// A role an element can play for this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Drag-and-drop upload target.
    DropZone,
    /// Control that starts recognition.
    RunOcr,
}

impl Capability {
    fn marker(self, config: &TargetsConfig) -> &str {
        match self {
            Capability::DropZone => &config.drop_zone_marker,
            Capability::RunOcr => &config.run_ocr_marker,
        }
    }

    fn legacy_fragment(self, config: &TargetsConfig) -> &str {
        match self {
            Capability::DropZone => &config.upload_id_fragment,
            Capability::RunOcr => &config.run_ocr_id_fragment,
        }
    }
}

/// Every element with the capability: marked elements first, then legacy id
/// matches, without duplicates.
pub fn find<D: Dom>(dom: &D, config: &TargetsConfig, capability: Capability) -> Vec<NodeHandle> {
    let mut found = dom.query(&ElementQuery::attribute(
        config.marker_attribute.as_str(),
        capability.marker(config),
    ));

    let fragment = capability.legacy_fragment(config);
    if config.match_legacy_ids && !fragment.is_empty() {
        for node in dom.query(&ElementQuery::IdContains(fragment.to_string())) {
            if !found.contains(&node) {
                found.push(node);
            }
        }
    }
    found
}

/// The first element with the capability, if any.
pub fn first<D: Dom>(dom: &D, config: &TargetsConfig, capability: Capability) -> Option<NodeHandle> {
    find(dom, config, capability).into_iter().next()
}

/// Modal dialogs that are currently open.
#[must_use]
pub fn open_modals(config: &TargetsConfig) -> ElementQuery {
    ElementQuery::AllClasses(vec![
        config.modal_class.clone(),
        config.modal_shown_class.clone(),
    ])
}

/// A modal's dismiss control.
#[must_use]
pub fn close_control(config: &TargetsConfig) -> ElementQuery {
    ElementQuery::AnyOf(vec![
        ElementQuery::class(config.close_class.as_str()),
        ElementQuery::attribute("data-bs-dismiss", "modal"),
        ElementQuery::attribute("data-dismiss", "modal"),
    ])
}

/// Recognition result cards.
#[must_use]
pub fn results(config: &TargetsConfig) -> ElementQuery {
    ElementQuery::class(config.result_class.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{MemoryDom, NodeBuilder};

    #[test]
    fn markers_come_before_legacy_ids() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let legacy = dom.append(body, NodeBuilder::new("div").id("upload-document"));
        let marked = dom.append(body, NodeBuilder::new("div").attr("data-ocr-role", "drop-zone"));

        let found = find(&dom, &TargetsConfig::default(), Capability::DropZone);
        assert_eq!(found, vec![marked, legacy]);
    }

    #[test]
    fn element_matching_both_ways_is_listed_once() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let both = dom.append(
            body,
            NodeBuilder::new("div")
                .id("upload-zone")
                .attr("data-ocr-role", "drop-zone"),
        );

        assert_eq!(find(&dom, &TargetsConfig::default(), Capability::DropZone), vec![both]);
    }

    #[test]
    fn legacy_matching_can_be_disabled() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        dom.append(body, NodeBuilder::new("button").id("run-ocr-btn"));
        let config = TargetsConfig {
            match_legacy_ids: false,
            ..TargetsConfig::default()
        };

        assert!(first(&dom, &config, Capability::RunOcr).is_none());
        assert!(first(&dom, &TargetsConfig::default(), Capability::RunOcr).is_some());
    }

    #[test]
    fn capabilities_do_not_overlap() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        dom.append(body, NodeBuilder::new("div").id("upload-document"));

        assert!(find(&dom, &TargetsConfig::default(), Capability::RunOcr).is_empty());
    }

    #[test]
    fn modal_queries_follow_config() {
        let config = TargetsConfig::default();
        assert_eq!(open_modals(&config).to_css(), ".modal.show");
        assert_eq!(
            close_control(&config).to_css(),
            ".btn-close, [data-bs-dismiss=\"modal\"], [data-dismiss=\"modal\"]"
        );
        assert_eq!(results(&config).to_css(), ".result");
    }
}
