//! DTOs for recommendation endpoints.
//!
//! Request bodies accept exactly the eight recommendation attributes; any
//! other key is rejected at deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::{Recommendation, RecommendationAttributes, RecommendationPatch};

/// Request body for `POST /api/recommendations`.
///
/// Missing required keys deserialize as empty strings so that the record
/// rules report them as presence errors.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateRecommendationRequest {
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub quote: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub who: String,

    #[validate(length(max = 2048))]
    pub who_url: Option<String>,

    #[serde(default, rename = "where")]
    #[validate(length(max = 255))]
    pub where_: String,

    #[serde(default)]
    #[validate(length(max = 2048))]
    pub where_url: String,

    #[validate(length(max = 255))]
    pub position: Option<String>,

    #[validate(length(max = 255))]
    pub company: Option<String>,

    #[validate(length(max = 2048))]
    pub company_url: Option<String>,
}

impl From<CreateRecommendationRequest> for RecommendationAttributes {
    fn from(req: CreateRecommendationRequest) -> Self {
        RecommendationAttributes {
            quote: req.quote,
            who: req.who,
            who_url: req.who_url,
            r#where: req.where_,
            where_url: req.where_url,
            position: req.position,
            company: req.company,
            company_url: req.company_url,
        }
    }
}

/// Request body for `PATCH /api/recommendations/{id}`.
///
/// Only provided fields are changed.
///
/// # Required attribute semantics
///
/// For `quote`, `who`, `where` and `where_url`:
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → rejected, the body fails to deserialize
/// - **String** → set new value
///
/// # Optional attribute semantics
///
/// For `who_url`, `position`, `company` and `company_url`:
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value
/// - **String** → set new value
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateRecommendationRequest {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(max = 10000))]
    pub quote: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(max = 255))]
    pub who: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2048))]
    pub who_url: Option<Option<String>>,

    #[serde(default, rename = "where", deserialize_with = "non_null")]
    #[validate(length(max = 255))]
    pub where_: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(max = 2048))]
    pub where_url: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub position: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub company: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2048))]
    pub company_url: Option<Option<String>>,
}

/// A present key must carry a string; `null` is an error rather than "unchanged".
fn non_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl From<UpdateRecommendationRequest> for RecommendationPatch {
    fn from(req: UpdateRecommendationRequest) -> Self {
        RecommendationPatch {
            quote: req.quote,
            who: req.who,
            who_url: req.who_url,
            r#where: req.where_,
            where_url: req.where_url,
            position: req.position,
            company: req.company,
            company_url: req.company_url,
        }
    }
}

/// JSON representation of a stored recommendation.
#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub id: i64,
    pub quote: String,
    pub who: String,
    pub who_url: Option<String>,
    #[serde(rename = "where")]
    pub where_: String,
    pub where_url: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    /// Human-readable label, e.g. `recommendation from Jane Doe`.
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recommendation> for RecommendationItem {
    fn from(r: Recommendation) -> Self {
        let label = r.to_string();
        let a = r.attributes;

        RecommendationItem {
            id: r.id,
            quote: a.quote,
            who: a.who,
            who_url: a.who_url,
            where_: a.r#where,
            where_url: a.where_url,
            position: a.position,
            company: a.company,
            company_url: a.company_url,
            label,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Paginated list of recommendations.
#[derive(Debug, Serialize)]
pub struct RecommendationListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<RecommendationItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_maps_all_fields() {
        let json = r#"{
            "quote": "Great engineer",
            "who": "Jane Doe",
            "who_url": "https://janedoe.example.com",
            "where": "Acme Corp",
            "where_url": "https://acme.example.com",
            "position": "CTO",
            "company": "Acme",
            "company_url": "https://acme.example.com"
        }"#;

        let req: CreateRecommendationRequest = serde_json::from_str(json).unwrap();
        let attrs = RecommendationAttributes::from(req);

        assert_eq!(attrs.quote, "Great engineer");
        assert_eq!(attrs.r#where, "Acme Corp");
        assert_eq!(attrs.position.as_deref(), Some("CTO"));
        assert_eq!(attrs.company_url.as_deref(), Some("https://acme.example.com"));
    }

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let json = r#"{"quote": "q", "who": "w", "where": "x", "where_url": "https://x.com", "admin": true}"#;
        assert!(serde_json::from_str::<CreateRecommendationRequest>(json).is_err());

        let json = r#"{"id": 5, "quote": "q"}"#;
        assert!(serde_json::from_str::<CreateRecommendationRequest>(json).is_err());
    }

    #[test]
    fn test_create_request_missing_required_fields_become_blank() {
        let req: CreateRecommendationRequest = serde_json::from_str("{}").unwrap();

        assert!(req.quote.is_empty());
        assert!(req.where_.is_empty());
        assert!(req.who_url.is_none());
    }

    #[test]
    fn test_create_request_length_caps() {
        let req = CreateRecommendationRequest {
            quote: "q".repeat(10_001),
            who: "w".to_string(),
            who_url: None,
            where_: "x".to_string(),
            where_url: "https://x.com".to_string(),
            position: None,
            company: None,
            company_url: None,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quote"));
    }

    #[test]
    fn test_update_request_null_vs_absent() {
        let req: UpdateRecommendationRequest =
            serde_json::from_str(r#"{"position": null, "who": "John"}"#).unwrap();
        let patch = RecommendationPatch::from(req);

        assert_eq!(patch.position, Some(None));
        assert_eq!(patch.company, None);
        assert_eq!(patch.who.as_deref(), Some("John"));
    }

    #[test]
    fn test_update_request_rejects_null_required_fields() {
        for key in ["quote", "who", "where", "where_url"] {
            let json = format!(r#"{{"{key}": null}}"#);
            assert!(
                serde_json::from_str::<UpdateRecommendationRequest>(&json).is_err(),
                "null {key} should be rejected"
            );
        }

        let req: UpdateRecommendationRequest =
            serde_json::from_str(r#"{"where": "Initech"}"#).unwrap();
        assert_eq!(req.where_.as_deref(), Some("Initech"));
        assert!(req.quote.is_none());
    }

    #[test]
    fn test_update_request_length_caps_on_optional_fields() {
        let req = UpdateRecommendationRequest {
            who_url: Some(Some(format!("https://x.com/{}", "a".repeat(2048)))),
            position: Some(Some("p".repeat(256))),
            company: Some(None),
            ..Default::default()
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("who_url"));
        assert!(fields.contains_key("position"));
        assert!(!fields.contains_key("company"));
    }

    #[test]
    fn test_update_request_rejects_unknown_fields() {
        assert!(serde_json::from_str::<UpdateRecommendationRequest>(r#"{"created_at": "x"}"#).is_err());
    }

    #[test]
    fn test_item_uses_where_key_and_label() {
        let now = Utc::now();
        let recommendation = Recommendation::new(
            3,
            RecommendationAttributes::new("q", "Jane Doe", "Acme", "https://acme.example.com"),
            now,
            now,
        );

        let value = serde_json::to_value(RecommendationItem::from(recommendation)).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["where"], "Acme");
        assert!(value.get("where_").is_none());
        assert_eq!(value["label"], "recommendation from Jane Doe");
    }
}
