use crate::domain::risk::level::RiskLevel;
use serde::Serialize;
use ts_rs::TS;

/// The region currently under the pointer, with its classification.
///
/// `index` is the feature's position on the map. Names are not unique (every
/// unnamed feature is "Unknown State"), so the index is what identifies the
/// hovered shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct HoveredRegion {
    pub index: usize,
    pub name: String,
    pub risk: RiskLevel,
}

/// Transient pointer selection owned by the map.
///
/// Holds at most one region at a time. Entering a region replaces whatever
/// was hovered before; leaving clears the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<HoveredRegion>,
}

impl HoverState {
    pub fn pointer_enter(&mut self, index: usize, name: impl Into<String>, risk: RiskLevel) {
        self.current = Some(HoveredRegion {
            index,
            name: name.into(),
            risk,
        });
    }

    pub fn pointer_leave(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&HoveredRegion> {
        self.current.as_ref()
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.current.as_ref().is_some_and(|h| h.index == index)
    }
}
