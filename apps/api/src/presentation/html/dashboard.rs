//! Dashboard page shell: navbar, header, cards, map section, footer.

use crate::domain::dashboard::cards::{AlertCard, CardDeck};
use askama::Template;
use std::time::Duration;
use uuid::Uuid;

pub const BRAND: &str = "BlueAlert";
pub const LOADING_MESSAGE: &str = "Loading BlueAlert Data...";
pub const SEARCH_PLACEHOLDER: &str = "Search by City or State...";
pub const FOOTER: &str = "© 2025 BlueAlert by Team QuadCoders. All Rights Reserved.";

const NAV_ITEMS: [&str; 5] = ["Home", "Floods", "Hurricanes", "Overview", "About"];

/// An in-page navigation anchor. Anchors are inert placeholders.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

pub fn nav_links() -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|&label| NavLink {
            label,
            href: format!("#{}", label.to_lowercase()),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub brand: &'static str,
    pub nav: Vec<NavLink>,
    pub search_placeholder: &'static str,
    pub cards: &'a [AlertCard],
    pub map_svg: String,
    pub footer: &'static str,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub brand: &'static str,
    pub message: &'static str,
    pub view: Uuid,
    pub remaining_ms: u64,
    pub refresh_secs: u64,
}

/// Render the full page around an already rendered map.
pub fn render_dashboard(deck: &CardDeck, map_svg: String) -> askama::Result<String> {
    DashboardTemplate {
        brand: BRAND,
        nav: nav_links(),
        search_placeholder: SEARCH_PLACEHOLDER,
        cards: &deck.cards,
        map_svg,
        footer: FOOTER,
    }
    .render()
}

/// Render the loading screen for `view`. The page returns to the dashboard
/// as that view once `remaining` has passed; leaving the page cancels the
/// pending reload.
pub fn render_loading(view: Uuid, remaining: Duration) -> askama::Result<String> {
    let remaining_ms = remaining.as_millis() as u64;
    LoadingTemplate {
        brand: BRAND,
        message: LOADING_MESSAGE,
        view,
        remaining_ms,
        refresh_secs: remaining_ms.div_ceil(1000),
    }
    .render()
}
