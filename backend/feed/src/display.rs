//! # Presentation Lookups
//!
//! Fixed tables turning an [`EmergencyType`] or urgency level into what the
//! list and the map draw. Labels are Spanish, as shown to the people using
//! the map in the Comunidad Valenciana.
//!
//! Every table is an exhaustive `match`, so unknown types never reach here;
//! they are rejected when records are validated.

use serde::Serialize;

use crate::models::EmergencyType;

/// Latitude, longitude.
pub type Coord = (f64, f64);

pub const MAP_CENTER: Coord = (39.484, -0.753);
pub const MAP_ZOOM: u8 = 8;
pub const MARKER_ZOOM: u8 = 10;

/// NE, NW, SW, SE corners.
pub const REGION_BOUNDS: [Coord; 4] = [(40.7, -0.2), (40.7, -1.5), (37.8, -1.5), (37.8, 0.5)];

impl EmergencyType {
    pub fn color(self) -> &'static str {
        match self {
            EmergencyType::Flood => "#3b82f6",
            EmergencyType::Fire => "#ef4444",
            EmergencyType::Medical => "#10b981",
            EmergencyType::Supplies => "#f59e0b",
            EmergencyType::Shelter => "#8b5cf6",
            EmergencyType::Other => "#6b7280",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EmergencyType::Flood => "droplet",
            EmergencyType::Fire => "flame",
            EmergencyType::Medical => "map-pin",
            EmergencyType::Supplies => "package",
            EmergencyType::Shelter => "home",
            EmergencyType::Other => "help-circle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmergencyType::Flood => "Inundación",
            EmergencyType::Fire => "Incendio",
            EmergencyType::Medical => "Emergencia Médica",
            EmergencyType::Supplies => "Suministros",
            EmergencyType::Shelter => "Refugio",
            EmergencyType::Other => "Otros",
        }
    }

    /// SVG path drawn in white inside the round map marker.
    pub fn marker_path(self) -> &'static str {
        match self {
            EmergencyType::Flood => "M12 2.69l5.66 5.66a8 8 0 1 1-11.31 0z",
            EmergencyType::Fire => "M12 2c0 6-3 8-3 12a3 3 0 1 0 6 0c0-4-3-6-3-12",
            EmergencyType::Medical => "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 1 1 16 0",
            EmergencyType::Supplies => {
                "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"
            }
            EmergencyType::Shelter => "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            EmergencyType::Other => {
                "M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10zm0-14v4m0 4h.01"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    High,
    Medium,
    Low,
}

impl UrgencyTier {
    pub fn from_level(level: i32) -> Self {
        if level >= 8 {
            UrgencyTier::High
        } else if level >= 5 {
            UrgencyTier::Medium
        } else {
            UrgencyTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UrgencyTier::High => "Alta",
            UrgencyTier::Medium => "Media",
            UrgencyTier::Low => "Baja",
        }
    }

    /// Badge variant name understood by the front end.
    pub fn badge(self) -> &'static str {
        match self {
            UrgencyTier::High => "destructive",
            UrgencyTier::Medium => "warning",
            UrgencyTier::Low => "default",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            UrgencyTier::High => "shield-alert",
            UrgencyTier::Medium => "alert-triangle",
            UrgencyTier::Low => "bell",
        }
    }
}

pub fn toggle_label(selected: bool) -> &'static str {
    if selected {
        "Ocultar en mapa"
    } else {
        "Ver en mapa"
    }
}
