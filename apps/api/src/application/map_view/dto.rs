use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MapViewRequest {
    /// Region to render as hovered, matched against display names exactly.
    /// The first feature with that name is hovered.
    pub hover: Option<String>,

    /// Feature index to render as hovered; takes precedence over `hover`.
    pub region: Option<usize>,
}
