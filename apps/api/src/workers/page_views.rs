//! Per-visit loading gates for the dashboard page.
//!
//! Every fresh visit to the dashboard mounts its own [`LoadingGate`] under a
//! new view id. The loading screen sends the browser back with that id once
//! the delay has run; if the gate is open by then the view is consumed and
//! the dashboard is rendered. Reusing a consumed id counts as a fresh visit.

use super::loading_gate::LoadingGate;
use crate::application::map_view::dto::MapViewRequest;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use uuid::Uuid;

/// Views not collected within this window are dropped.
pub const VIEW_TTL: Duration = Duration::from_secs(600);

/// Upper bound on views held at once; the oldest is dropped beyond it.
pub const MAX_VIEWS: usize = 10_000;

struct PageView {
    gate: LoadingGate,
    request: MapViewRequest,
}

/// Outcome of a dashboard visit.
#[derive(Debug)]
pub enum Visit {
    /// Show the loading screen and come back as `view` after `remaining`.
    Loading { view: Uuid, remaining: Duration },
    /// The view's gate has opened; render the map for this request.
    Ready(MapViewRequest),
}

pub struct PageViews {
    delay: Duration,
    views: Mutex<HashMap<Uuid, PageView>>,
}

impl PageViews {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            views: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a dashboard request.
    ///
    /// `view` is the id handed out by an earlier visit, if any. Hover
    /// parameters given on the first request are kept with the view and
    /// apply when it opens, unless the returning request carries its own.
    /// Must be called inside a tokio runtime.
    pub fn visit(&self, view: Option<Uuid>, request: MapViewRequest) -> Visit {
        let mut views = self.lock();

        if let Some(id) = view {
            if let Some(page) = views.remove(&id) {
                if page.gate.is_loading() {
                    let remaining = page.gate.remaining();
                    views.insert(id, page);
                    return Visit::Loading {
                        view: id,
                        remaining,
                    };
                }

                let has_hover = request.hover.is_some() || request.region.is_some();
                return Visit::Ready(if has_hover { request } else { page.request });
            }
            tracing::debug!(view = %id, "unknown or consumed view, mounting a new one");
        }

        prune(&mut views);

        let id = Uuid::now_v7();
        views.insert(
            id,
            PageView {
                gate: LoadingGate::mount(self.delay),
                request,
            },
        );
        tracing::debug!(view = %id, delay_ms = self.delay.as_millis() as u64, "page view mounted");

        Visit::Loading {
            view: id,
            remaining: self.delay,
        }
    }

    /// Number of views whose loading screen is still up.
    pub fn pending(&self) -> usize {
        self.lock()
            .values()
            .filter(|page| page.gate.is_loading())
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, PageView>> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn prune(views: &mut HashMap<Uuid, PageView>) {
    views.retain(|_, page| page.gate.is_loading() || page.gate.mounted_at().elapsed() < VIEW_TTL);

    if views.len() >= MAX_VIEWS {
        let oldest = views
            .iter()
            .min_by_key(|(_, page)| page.gate.mounted_at())
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            views.remove(&id);
        }
    }
}
