//! The static portfolio record.
//!
//! `data/portfolio.json` is compiled into both the server binary and the
//! wasm bundle, parsed once on first access and never mutated afterwards.

pub mod models;

use std::collections::HashSet;
use std::sync::LazyLock;

pub use models::*;

const EMBEDDED_JSON: &str = include_str!("../../data/portfolio.json");

static EMBEDDED: LazyLock<Result<Portfolio, DataError>> =
    LazyLock::new(|| Portfolio::from_json(EMBEDDED_JSON));

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("invalid portfolio data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate id {id} in {section}")]
    DuplicateId { section: &'static str, id: u32 },
}

/// The record compiled into this build.
pub fn embedded() -> Result<&'static Portfolio, &'static DataError> {
    EMBEDDED.as_ref()
}

impl Portfolio {
    /// Parse a record and check that ids are unique within each list.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), DataError> {
        unique_ids("education", self.education.iter().map(|e| e.id))?;
        unique_ids("experience", self.experience.iter().map(|e| e.id))?;
        unique_ids("projects", self.projects.iter().map(|p| p.id))?;
        unique_ids("certifications", self.certifications.iter().map(|c| c.id))?;
        Ok(())
    }

    /// Filter labels for the projects grid: "All" followed by each distinct
    /// category in the order it first appears.
    pub fn project_categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(
                self.projects
                    .iter()
                    .flat_map(|p| p.category.iter())
                    .filter(|c| seen.insert(c.as_str()))
                    .cloned(),
            )
            .collect()
    }

    pub fn filter_projects<'a, 'f>(
        &'a self,
        filter: &'f ProjectFilter,
    ) -> impl Iterator<Item = &'a Project> + 'f
    where
        'a: 'f,
    {
        self.projects.iter().filter(move |p| filter.matches(p))
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn unique_ids(section: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId { section, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "personal": {
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "0",
            "location": "Nowhere",
            "summary": "s",
            "social": {}
        },
        "skills": {},
        "projects": [
            {"id": 1, "name": "a", "description": "", "category": ["Backend", "Tools"]},
            {"id": 2, "name": "b", "description": "", "category": ["Frontend"]},
            {"id": 3, "name": "c", "description": "", "category": ["Tools", "Backend"]}
        ]
    }"#;

    #[test]
    fn embedded_record_is_valid() {
        let portfolio = embedded().unwrap();
        assert!(!portfolio.personal.name.is_empty());
        assert!(!portfolio.projects.is_empty());
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        assert!(portfolio.certifications.is_empty());
        assert!(portfolio.education.is_empty());
        assert!(portfolio.personal.social.github.is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = MINIMAL.replace(r#""id": 3"#, r#""id": 1"#);
        let err = Portfolio::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            DataError::DuplicateId {
                section: "projects",
                id: 1
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Portfolio::from_json("{").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        assert_eq!(
            portfolio.project_categories(),
            ["All", "Backend", "Tools", "Frontend"]
        );
    }

    #[test]
    fn filtering_preserves_order() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        let filter = ProjectFilter::from("Backend");
        let ids: Vec<_> = portfolio.filter_projects(&filter).map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);

        let all: Vec<_> = portfolio
            .filter_projects(&ProjectFilter::All)
            .map(|p| p.id)
            .collect();
        assert_eq!(all, [1, 2, 3]);

        let none = ProjectFilter::from("Mobile");
        assert_eq!(portfolio.filter_projects(&none).count(), 0);
    }

    #[test]
    fn project_lookup_by_id() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        assert_eq!(portfolio.project(2).map(|p| p.name.as_str()), Some("b"));
        assert!(portfolio.project(9).is_none());
    }
}
