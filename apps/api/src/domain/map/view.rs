use super::hover::HoverState;
use crate::domain::region::entity::Region;
use crate::domain::risk::{classifier::RiskProvider, level::RiskLevel};

/// A region paired with the risk level assigned to it for this render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRegion {
    pub region: Region,
    pub risk: RiskLevel,
}

impl ClassifiedRegion {
    pub fn name(&self) -> &str {
        &self.region.name
    }

    pub fn fill(&self) -> &'static str {
        self.risk.color()
    }
}

/// Everything the map needs to draw one frame: classified regions and the
/// pointer selection.
#[derive(Debug, Clone, Default)]
pub struct MapView {
    pub regions: Vec<ClassifiedRegion>,
    pub hover: HoverState,
}

impl MapView {
    /// Classify every region with `provider`, preserving source order.
    pub fn classify(regions: Vec<Region>, provider: &dyn RiskProvider) -> Self {
        let regions = regions
            .into_iter()
            .map(|region| {
                let risk = provider.risk_for(&region.name);
                ClassifiedRegion { region, risk }
            })
            .collect();

        Self {
            regions,
            hover: HoverState::default(),
        }
    }

    /// Hover the first region named `name`.
    ///
    /// Returns `false`, leaving hover untouched, when no such region is drawn.
    pub fn pointer_enter(&mut self, name: &str) -> bool {
        match self.regions.iter().position(|r| r.name() == name) {
            Some(index) => self.pointer_enter_at(index),
            None => false,
        }
    }

    /// Hover the region at `index` in source order.
    pub fn pointer_enter_at(&mut self, index: usize) -> bool {
        match self.regions.get(index) {
            Some(region) => {
                self.hover.pointer_enter(index, region.name(), region.risk);
                true
            }
            None => false,
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hover.pointer_leave();
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
