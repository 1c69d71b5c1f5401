use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::models::event::Category;

/// Coarse relative-time window applied to event dates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DateBucket {
    Today,
    Week,
    Month,
    #[default]
    All,
}

/// Active search predicates. `None` (or `DateBucket::All`) means the
/// predicate is switched off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub category: Option<Category>,
    pub genre: Option<String>,
    pub location: Option<String>,
    pub date: DateBucket,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_date(mut self, date: DateBucket) -> Self {
        self.date = date;
        self
    }

    pub fn is_inactive(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.genre.is_none()
            && self.location.is_none()
            && self.date == DateBucket::All
    }

    /// Whether any predicate can only be judged against an event, which
    /// matters for feed posts whose event reference may not resolve.
    pub fn needs_event(&self) -> bool {
        self.category.is_some()
            || self.genre.is_some()
            || self.location.is_some()
            || self.date != DateBucket::All
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown date range '{0}'")]
    UnknownDateBucket(String),
}

/// Raw filter values as they arrive in a query string. Empty strings and
/// `all` switch a filter off.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub query: Option<String>,
    pub category: Option<String>,
    pub genre: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
}

fn active(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "all")
}

impl TryFrom<FilterParams> for FilterCriteria {
    type Error = CriteriaError;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        let category = match active(params.category) {
            Some(raw) => Some(
                Category::from_str(&raw).map_err(|_| CriteriaError::UnknownCategory(raw))?,
            ),
            None => None,
        };

        let date = match params.date.filter(|v| !v.is_empty()) {
            Some(raw) => {
                DateBucket::from_str(&raw).map_err(|_| CriteriaError::UnknownDateBucket(raw))?
            }
            None => DateBucket::All,
        };

        Ok(Self {
            query: params.query.filter(|q| !q.is_empty()),
            category,
            genre: active(params.genre),
            location: active(params.location),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_empty_values_disable_filters() {
        let params = FilterParams {
            query: Some(String::new()),
            category: Some("all".into()),
            genre: Some("all".into()),
            location: Some(String::new()),
            date: Some("all".into()),
        };

        let criteria = FilterCriteria::try_from(params).unwrap();
        assert!(criteria.is_inactive());
    }

    #[test]
    fn test_params_convert_to_typed_criteria() {
        let params = FilterParams {
            query: Some("Jazz".into()),
            category: Some("music".into()),
            genre: Some("jazz".into()),
            location: Some("Stockholm".into()),
            date: Some("week".into()),
        };

        let criteria = FilterCriteria::try_from(params).unwrap();
        assert_eq!(
            criteria,
            FilterCriteria::default()
                .with_query("Jazz")
                .with_category(Category::Music)
                .with_genre("jazz")
                .with_location("Stockholm")
                .with_date(DateBucket::Week)
        );
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let params = FilterParams {
            category: Some("circus".into()),
            ..Default::default()
        };
        assert_eq!(
            FilterCriteria::try_from(params),
            Err(CriteriaError::UnknownCategory("circus".into()))
        );

        let params = FilterParams {
            date: Some("year".into()),
            ..Default::default()
        };
        assert_eq!(
            FilterCriteria::try_from(params),
            Err(CriteriaError::UnknownDateBucket("year".into()))
        );
    }

    #[test]
    fn test_query_alone_does_not_need_an_event() {
        let criteria = FilterCriteria::default().with_query("hamlet");
        assert!(!criteria.is_inactive());
        assert!(!criteria.needs_event());
        assert!(FilterCriteria::default()
            .with_date(DateBucket::Today)
            .needs_event());
    }
}
