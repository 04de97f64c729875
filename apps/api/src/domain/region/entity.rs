use serde_json::{Map, Value};

/// Property keys consulted, in order, for a feature's display name.
pub const NAME_PROPERTY_KEYS: [&str; 2] = ["ST_NM", "name"];

/// Display name used when no name property is present.
pub const UNKNOWN_REGION_NAME: &str = "Unknown State";

/// A (longitude, latitude) pair in degrees.
pub type GeoPoint = (f64, f64);

/// A closed ring of positions; the first ring of a polygon is its exterior.
pub type Ring = Vec<GeoPoint>;

/// A named geographic area rendered as one map shape.
///
/// Regions exist only for the duration of a render pass. They are never
/// persisted and carry no identity beyond their display name.
///
/// # Invariants
/// - `name` is never empty: absent names resolve to [`UNKNOWN_REGION_NAME`]
/// - `rings` may be empty when the source feature has no drawable geometry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region {
    /// Display name extracted from the feature's properties
    pub name: String,

    /// Outline rings in geographic coordinates
    pub rings: Vec<Ring>,
}

impl Region {
    pub fn new(name: impl Into<String>, rings: Vec<Ring>) -> Self {
        Self {
            name: name.into(),
            rings,
        }
    }

    /// Resolve a display name from feature properties.
    ///
    /// The first key of [`NAME_PROPERTY_KEYS`] holding a non-empty string wins,
    /// taken as written. Whitespace counts as a name; non-string values do not.
    pub fn name_from_properties(properties: Option<&Map<String, Value>>) -> String {
        properties
            .and_then(|props| {
                NAME_PROPERTY_KEYS
                    .iter()
                    .filter_map(|key| props.get(*key).and_then(Value::as_str))
                    .find(|name| !name.is_empty())
            })
            .unwrap_or(UNKNOWN_REGION_NAME)
            .to_string()
    }

    pub fn has_outline(&self) -> bool {
        self.rings.iter().any(|ring| ring.len() >= 3)
    }
}
