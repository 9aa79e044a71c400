//! JSON shapes handed to the front end. Each view carries the derived
//! presentation attributes so the client never needs its own lookup tables.

use feed::{
    Emergency, FetchState,
    display::{Coord, MAP_CENTER, MAP_ZOOM, MARKER_ZOOM, REGION_BOUNDS, UrgencyTier, toggle_label},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UrgencyView {
    pub tier: UrgencyTier,
    pub label: &'static str,
    pub badge: &'static str,
    pub icon: &'static str,
}

impl UrgencyView {
    pub fn new(level: i32) -> Self {
        let tier = UrgencyTier::from_level(level);

        Self {
            tier,
            label: tier.label(),
            badge: tier.badge(),
            icon: tier.icon(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmergencyCard {
    #[serde(flatten)]
    pub emergency: Emergency,
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub urgency: UrgencyView,
    pub selected: bool,
    pub toggle_label: &'static str,
}

impl EmergencyCard {
    pub fn new(emergency: &Emergency, selected: bool) -> Self {
        Self {
            emergency: emergency.clone(),
            color: emergency.kind.color(),
            icon: emergency.kind.icon(),
            label: emergency.kind.label(),
            urgency: UrgencyView::new(emergency.urgency_level),
            selected,
            toggle_label: toggle_label(selected),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarkerView {
    pub id: String,
    pub position: Coord,
    pub zoom: u8,
    pub color: &'static str,
    pub path: &'static str,
    pub title: String,
    pub address: Option<String>,
}

impl MarkerView {
    pub fn new(emergency: &Emergency) -> Self {
        Self {
            id: emergency.id.clone(),
            position: (emergency.latitude, emergency.longitude),
            zoom: MARKER_ZOOM,
            color: emergency.kind.color(),
            path: emergency.kind.marker_path(),
            title: emergency.title.clone(),
            address: emergency.address.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MapView {
    pub center: Coord,
    pub zoom: u8,
    pub region: [Coord; 4],
    pub marker: Option<MarkerView>,
}

impl MapView {
    pub fn new(selected: Option<&Emergency>) -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            region: REGION_BOUNDS,
            marker: selected.map(MarkerView::new),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusView {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl From<&FetchState> for StatusView {
    fn from(state: &FetchState) -> Self {
        match state {
            FetchState::Loading => StatusView {
                state: "loading",
                message: None,
                count: None,
            },
            FetchState::Failed(message) => StatusView {
                state: "error",
                message: Some(message.clone()),
                count: None,
            },
            FetchState::Ready(snapshot) => StatusView {
                state: "ready",
                message: None,
                count: Some(snapshot.len()),
            },
        }
    }
}
