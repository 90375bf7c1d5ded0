//! Routine entity and the typed field sets accepted by write operations.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::decimal;

/// A recurring routine tracked by the service.
///
/// `estimated_duration` (minutes) is kept as an arbitrary-precision decimal
/// so fractional values survive JSON round-trips exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub schedule: Option<String>,
    pub frequency: Option<String>,
    pub priority: Option<String>,
    pub tags: Vec<String>,
    #[serde(with = "decimal::option_as_number", default)]
    pub estimated_duration: Option<BigDecimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Routine {
    /// Builds a routine from validated input fields, assigning a fresh id
    /// and identical creation/update timestamps.
    pub fn create(fields: NewRoutine) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            description: fields.description,
            status: fields.status,
            schedule: fields.schedule,
            frequency: fields.frequency,
            priority: fields.priority,
            tags: fields.tags,
            estimated_duration: fields.estimated_duration,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds the routine from replacement fields, keeping the original id
    /// and `created_at` and refreshing `updated_at`.
    pub fn replace(&self, fields: UpdateRoutine) -> Self {
        Self {
            id: self.id.clone(),
            name: fields.name,
            description: fields.description,
            status: fields.status,
            schedule: fields.schedule,
            frequency: fields.frequency,
            priority: fields.priority,
            tags: fields.tags,
            estimated_duration: fields.estimated_duration,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

fn default_status() -> String {
    "pending".to_string()
}

/// Fields accepted when creating a routine.
///
/// Unknown keys are rejected at decode time. `name` is required; everything
/// else falls back to a default, with `description` presence enforced by the
/// service-level validation rules.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewRoutine {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "missing required field: description"))]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub schedule: Option<String>,
    pub frequency: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "decimal::option_as_number", default)]
    pub estimated_duration: Option<BigDecimal>,
}

/// Replacement fields for `PUT`.
///
/// Same shape and rules as [`NewRoutine`]: an update replaces the full field
/// set rather than patching individual fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateRoutine {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "missing required field: description"))]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub schedule: Option<String>,
    pub frequency: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "decimal::option_as_number", default)]
    pub estimated_duration: Option<BigDecimal>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn new_fields(name: &str) -> NewRoutine {
        NewRoutine {
            name: name.to_string(),
            description: "morning workout".to_string(),
            status: default_status(),
            schedule: Some("08:00".to_string()),
            frequency: Some("daily".to_string()),
            priority: Some("high".to_string()),
            tags: vec!["health".to_string()],
            estimated_duration: Some(BigDecimal::from_str("30.5").unwrap()),
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let routine = Routine::create(new_fields("Exercise"));

        assert!(!routine.id.is_empty());
        assert_eq!(routine.name, "Exercise");
        assert_eq!(routine.status, "pending");
        assert_eq!(routine.created_at, routine.updated_at);
    }

    #[test]
    fn test_replace_preserves_id_and_created_at() {
        let routine = Routine::create(new_fields("Exercise"));

        let replaced = routine.replace(UpdateRoutine {
            name: "Exercise v2".to_string(),
            description: "45 minutes".to_string(),
            status: "completed".to_string(),
            schedule: None,
            frequency: None,
            priority: None,
            tags: vec![],
            estimated_duration: None,
        });

        assert_eq!(replaced.id, routine.id);
        assert_eq!(replaced.created_at, routine.created_at);
        assert_eq!(replaced.name, "Exercise v2");
        assert!(replaced.updated_at >= routine.updated_at);
    }

    #[test]
    fn test_new_routine_defaults() {
        let fields: NewRoutine =
            serde_json::from_str(r#"{"name":"Read","description":"20 pages"}"#).unwrap();

        assert_eq!(fields.status, "pending");
        assert!(fields.tags.is_empty());
        assert!(fields.estimated_duration.is_none());
    }

    #[test]
    fn test_new_routine_rejects_unknown_keys() {
        let result = serde_json::from_str::<NewRoutine>(
            r#"{"name":"Read","description":"20 pages","owner":"bob"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_requires_description() {
        let fields: NewRoutine = serde_json::from_str(r#"{"name":"Read"}"#).unwrap();
        assert!(validator::Validate::validate(&fields).is_err());
    }

    #[test]
    fn test_duration_round_trip_is_exact() {
        let routine = Routine::create(NewRoutine {
            estimated_duration: Some(BigDecimal::from_str("22.7").unwrap()),
            ..new_fields("Exercise")
        });

        let encoded = serde_json::to_string(&routine).unwrap();
        let decoded: Routine = serde_json::from_str(&encoded).unwrap();

        assert_eq!(
            decoded.estimated_duration,
            Some(BigDecimal::from_str("22.7").unwrap())
        );
        assert_eq!(decoded, routine);
    }
}
