//! Choropleth map rendering.
//!
//! Every classified region with an outline becomes one `<path>` filled with
//! its risk color. The hovered region, if any, gets the highlight stroke and
//! the tooltip panel is filled in; the inline page script reproduces the same
//! effect client-side from the `data-region`/`data-risk` attributes.

use crate::domain::{
    map::{projection::Mercator, view::MapView},
    region::entity::Region,
    risk::{
        level::RiskLevel,
        palette::{
            DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, HOVER_GLOW, HOVER_STROKE, HOVER_STROKE_WIDTH,
            fill_color,
        },
    },
};
use askama::Template;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct MapShape {
    pub index: usize,
    pub name: String,
    pub risk: RiskLevel,
    pub fill: &'static str,
    pub d: String,
    pub hovered: bool,
}

#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub view_box: String,
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<MapShape>,
    pub legend: Vec<LegendEntry>,
    pub default_stroke: &'static str,
    pub default_stroke_width: f64,
    pub hover_stroke: &'static str,
    pub hover_stroke_width: f64,
    pub hover_glow: &'static str,
    pub tooltip_visible: bool,
    pub tooltip_region: String,
    pub tooltip_risk: String,
    pub tooltip_color: &'static str,
}

impl MapTemplate {
    pub fn new(view: &MapView, projection: &Mercator) -> Self {
        let shapes = view
            .regions
            .iter()
            .enumerate()
            .filter(|(_, classified)| classified.region.has_outline())
            .map(|(index, classified)| MapShape {
                index,
                name: classified.region.name.clone(),
                risk: classified.risk,
                fill: classified.fill(),
                d: path_data(&classified.region, projection),
                hovered: view.hover.is_hovered(index),
            })
            .collect();

        let legend = RiskLevel::LEGEND
            .iter()
            .map(|level| LegendEntry {
                label: level.legend_label(),
                color: level.color(),
            })
            .collect();

        let hovered = view.hover.current();

        Self {
            view_box: projection.view_box(),
            width: projection.width,
            height: projection.height,
            shapes,
            legend,
            default_stroke: DEFAULT_STROKE,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            hover_stroke: HOVER_STROKE,
            hover_stroke_width: HOVER_STROKE_WIDTH,
            hover_glow: HOVER_GLOW,
            tooltip_visible: hovered.is_some(),
            tooltip_region: hovered.map(|h| h.name.clone()).unwrap_or_default(),
            tooltip_risk: hovered.map(|h| h.risk.to_string()).unwrap_or_default(),
            tooltip_color: fill_color(hovered.map(|h| h.risk)),
        }
    }
}

/// Render the map as a standalone SVG element.
pub fn render_map(view: &MapView, projection: &Mercator) -> askama::Result<String> {
    MapTemplate::new(view, projection).render()
}

/// SVG path data for every ring of a region, one closed subpath per ring.
pub fn path_data(region: &Region, projection: &Mercator) -> String {
    let mut d = String::new();
    for ring in region.rings.iter().filter(|ring| ring.len() >= 3) {
        for (i, point) in ring.iter().enumerate() {
            let (x, y) = projection.project(*point);
            let command = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{:.2},{:.2}", command, x, y);
        }
        d.push('Z');
    }
    d
}
