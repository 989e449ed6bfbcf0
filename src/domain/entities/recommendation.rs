//! Recommendation entity: a quote from someone vouching for the site owner.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::validation::{Field, UrlPattern, ValidationError, check_format, check_presence};

/// A stored recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: i64,
    pub attributes: RecommendationAttributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recommendation {
    /// Creates a new Recommendation instance.
    pub fn new(
        id: i64,
        attributes: RecommendationAttributes,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            attributes,
            created_at,
            updated_at,
        }
    }

    /// Runs all record rules against the current attribute values.
    pub fn validate(&self, pattern: &UrlPattern) -> Vec<ValidationError> {
        self.attributes.validate(pattern)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.attributes, f)
    }
}

/// The assignable attributes of a recommendation.
///
/// This is the only way to set recommendation state: exactly these eight
/// fields exist, so nothing else can be mass-assigned. Required fields are
/// plain strings and may still be blank until [`validate`](Self::validate)
/// says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationAttributes {
    pub quote: String,
    pub who: String,
    pub who_url: Option<String>,
    pub r#where: String,
    pub where_url: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
}

impl RecommendationAttributes {
    /// Creates attributes with the required fields set and all optional fields empty.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let attrs = RecommendationAttributes::new(
    ///     "Ships on time, every time.",
    ///     "Jane Doe",
    ///     "Acme Corp",
    ///     "https://acme.example.com",
    /// )
    /// .with_position("CTO");
    /// ```
    pub fn new(
        quote: impl Into<String>,
        who: impl Into<String>,
        r#where: impl Into<String>,
        where_url: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            who: who.into(),
            r#where: r#where.into(),
            where_url: where_url.into(),
            ..Default::default()
        }
    }

    pub fn with_who_url(mut self, who_url: impl Into<String>) -> Self {
        self.who_url = Some(who_url.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_company_url(mut self, company_url: impl Into<String>) -> Self {
        self.company_url = Some(company_url.into());
        self
    }

    /// Checks every record rule and returns all violations.
    ///
    /// An empty result means the record may be persisted. Rules are
    /// independent: a blank `where_url` reports only a presence error, a
    /// malformed one only a format error.
    pub fn validate(&self, pattern: &UrlPattern) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        check_presence(&mut errors, Field::Quote, &self.quote);
        check_presence(&mut errors, Field::Who, &self.who);
        check_format(&mut errors, Field::WhoUrl, self.who_url.as_deref(), pattern);
        check_presence(&mut errors, Field::Where, &self.r#where);
        check_presence(&mut errors, Field::WhereUrl, &self.where_url);
        check_format(&mut errors, Field::WhereUrl, Some(&self.where_url), pattern);
        check_format(
            &mut errors,
            Field::CompanyUrl,
            self.company_url.as_deref(),
            pattern,
        );

        errors
    }

    pub fn is_valid(&self, pattern: &UrlPattern) -> bool {
        self.validate(pattern).is_empty()
    }
}

/// Renders `recommendation from {who}`, with `who` inserted verbatim.
impl fmt::Display for RecommendationAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recommendation from {}", self.who)
    }
}

/// Partial update for an existing recommendation.
///
/// `None` fields are left unchanged. For optional attributes,
/// `Some(None)` clears the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationPatch {
    pub quote: Option<String>,
    pub who: Option<String>,
    pub who_url: Option<Option<String>>,
    pub r#where: Option<String>,
    pub where_url: Option<String>,
    pub position: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub company_url: Option<Option<String>>,
}

impl RecommendationPatch {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the patch into `attributes`.
    pub fn apply(self, attributes: &mut RecommendationAttributes) {
        if let Some(quote) = self.quote {
            attributes.quote = quote;
        }
        if let Some(who) = self.who {
            attributes.who = who;
        }
        if let Some(who_url) = self.who_url {
            attributes.who_url = who_url;
        }
        if let Some(r#where) = self.r#where {
            attributes.r#where = r#where;
        }
        if let Some(where_url) = self.where_url {
            attributes.where_url = where_url;
        }
        if let Some(position) = self.position {
            attributes.position = position;
        }
        if let Some(company) = self.company {
            attributes.company = company;
        }
        if let Some(company_url) = self.company_url {
            attributes.company_url = company_url;
        }
    }
}
