use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

pub const OPERATION_NAME: &str = "GetEmergencies";

pub const GET_EMERGENCIES: &str = r#"
    query GetEmergencies {
        emergencies {
            id
            title
            description
            type
            status
            urgency_level
            latitude
            longitude
            address
            affected_people
            contact_name
            contact_phone
            created_at
        }
    }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyType {
    Flood,
    Fire,
    Medical,
    Supplies,
    Shelter,
    Other,
}

impl EmergencyType {
    pub const ALL: [EmergencyType; 6] = [
        EmergencyType::Flood,
        EmergencyType::Fire,
        EmergencyType::Medical,
        EmergencyType::Supplies,
        EmergencyType::Shelter,
        EmergencyType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmergencyType::Flood => "flood",
            EmergencyType::Fire => "fire",
            EmergencyType::Medical => "medical",
            EmergencyType::Supplies => "supplies",
            EmergencyType::Shelter => "shelter",
            EmergencyType::Other => "other",
        }
    }
}

impl FromStr for EmergencyType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EmergencyType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyStatus {
    Active,
    InProgress,
    Resolved,
    Closed,
}

impl FromStr for EmergencyStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(EmergencyStatus::Active),
            "in_progress" => Ok(EmergencyStatus::InProgress),
            "resolved" => Ok(EmergencyStatus::Resolved),
            "closed" => Ok(EmergencyStatus::Closed),
            other => Err(other.to_string()),
        }
    }
}

/// A validated emergency report.
///
/// `contact_email`, `updated_at` and `is_active` belong to the backend table
/// but are not selected by [`GET_EMERGENCIES`], so they are usually absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emergency {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: EmergencyType,
    pub status: EmergencyStatus,
    pub urgency_level: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub affected_people: i64,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub is_active: Option<bool>,
}

/// Row exactly as Hasura sends it. Enumerations stay as strings until
/// [`Emergency::try_from`] checks them.
#[derive(Debug, Deserialize)]
pub struct EmergencyRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub urgency_level: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub affected_people: i64,
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TryFrom<EmergencyRecord> for Emergency {
    type Error = FeedError;

    fn try_from(record: EmergencyRecord) -> Result<Self, Self::Error> {
        let kind = record
            .kind
            .parse::<EmergencyType>()
            .map_err(|value| FeedError::InvalidRecord {
                id: record.id.clone(),
                field: "type",
                value,
            })?;

        let status = record
            .status
            .parse::<EmergencyStatus>()
            .map_err(|value| FeedError::InvalidRecord {
                id: record.id.clone(),
                field: "status",
                value,
            })?;

        Ok(Emergency {
            id: record.id,
            title: record.title,
            description: record.description,
            kind,
            status,
            urgency_level: record.urgency_level,
            latitude: record.latitude,
            longitude: record.longitude,
            address: record.address,
            affected_people: record.affected_people,
            contact_name: record.contact_name,
            contact_phone: record.contact_phone,
            contact_email: record.contact_email,
            created_at: record.created_at,
            updated_at: record.updated_at,
            is_active: record.is_active,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EmergenciesData {
    pub emergencies: Option<Vec<EmergencyRecord>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(kind: &str, status: &str) -> EmergencyRecord {
        serde_json::from_value(json!({
            "id": "e1",
            "title": "Calle inundada",
            "description": null,
            "type": kind,
            "status": status,
            "urgency_level": 7,
            "latitude": 39.47,
            "longitude": -0.37,
            "address": "Paiporta",
            "affected_people": 12,
            "contact_name": "Ana",
            "contact_phone": "600000000",
            "created_at": "2024-11-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_types() {
        for kind in EmergencyType::ALL {
            assert_eq!(kind.as_str().parse::<EmergencyType>(), Ok(kind));
        }
        assert_eq!(
            "earthquake".parse::<EmergencyType>(),
            Err("earthquake".to_string())
        );
    }

    #[test]
    fn test_record_conversion() {
        let emergency = Emergency::try_from(record("flood", "in_progress")).unwrap();

        assert_eq!(emergency.kind, EmergencyType::Flood);
        assert_eq!(emergency.status, EmergencyStatus::InProgress);
        assert_eq!(emergency.description, None);
        assert_eq!(emergency.contact_email, None);
        assert_eq!(emergency.is_active, None);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = Emergency::try_from(record("earthquake", "active")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid type \"earthquake\" on emergency e1"
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = Emergency::try_from(record("fire", "pending")).unwrap_err();

        assert!(matches!(err, FeedError::InvalidRecord { field: "status", .. }));
    }

    #[test]
    fn test_serializes_type_field() {
        let emergency = Emergency::try_from(record("medical", "active")).unwrap();
        let value = serde_json::to_value(&emergency).unwrap();

        assert_eq!(value["type"], "medical");
        assert_eq!(value["status"], "active");
    }
}
