use serde::{Deserialize, Serialize};

/// The whole displayable record behind the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: Personal,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub social: Social,
}

/// Social profile links; a missing link hides its icon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub location: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub position: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub messaging: Vec<String>,
    #[serde(default)]
    pub cloud: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// A titled group of skills as shown on one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory<'a> {
    pub title: &'static str,
    pub skills: &'a [String],
}

impl Skills {
    /// The six skill groups in display order.
    pub fn categories(&self) -> [SkillCategory<'_>; 6] {
        [
            SkillCategory {
                title: "Backend Development",
                skills: &self.backend,
            },
            SkillCategory {
                title: "Frontend Development",
                skills: &self.frontend,
            },
            SkillCategory {
                title: "Databases",
                skills: &self.databases,
            },
            SkillCategory {
                title: "Messaging & Streaming",
                skills: &self.messaging,
            },
            SkillCategory {
                title: "Cloud & DevOps",
                skills: &self.cloud,
            },
            SkillCategory {
                title: "Tools & Others",
                skills: &self.tools,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Project {
    pub fn github_url(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    pub fn demo_url(&self) -> Option<&str> {
        non_empty(&self.demo)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Category selection for the projects grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

pub const ALL_CATEGORIES: &str = "All";

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category.iter().any(|pc| pc == c),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectFilter::All => ALL_CATEGORIES,
            ProjectFilter::Category(c) => c,
        }
    }
}

impl std::fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for ProjectFilter {
    fn from(s: &str) -> Self {
        if s.is_empty() || s == ALL_CATEGORIES {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(s.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(category: &[&str]) -> Project {
        Project {
            id: 1,
            name: "p".to_string(),
            description: String::new(),
            technologies: vec![],
            category: category.iter().map(ToString::to_string).collect(),
            github: String::new(),
            demo: "  ".to_string(),
            highlights: vec![],
        }
    }

    #[test]
    fn project_filter_from_str() {
        assert_eq!(ProjectFilter::from("All"), ProjectFilter::All);
        assert_eq!(ProjectFilter::from(""), ProjectFilter::All);
        assert_eq!(
            ProjectFilter::from("Backend"),
            ProjectFilter::Category("Backend".to_string())
        );
    }

    #[test]
    fn project_filter_display() {
        assert_eq!(ProjectFilter::All.to_string(), "All");
        assert_eq!(
            ProjectFilter::Category("Tools".to_string()).to_string(),
            "Tools"
        );
    }

    #[test]
    fn project_filter_matches_exact_category() {
        let p = project(&["Backend", "Microservices"]);
        assert!(ProjectFilter::All.matches(&p));
        assert!(ProjectFilter::from("Microservices").matches(&p));
        assert!(!ProjectFilter::from("backend").matches(&p));
        assert!(!ProjectFilter::from("Frontend").matches(&p));
    }

    #[test]
    fn empty_links_are_omitted() {
        let p = project(&[]);
        assert_eq!(p.github_url(), None);
        assert_eq!(p.demo_url(), None);
    }

    #[test]
    fn skill_categories_keep_display_order() {
        let skills = Skills {
            backend: vec!["Java".to_string()],
            tools: vec!["Git".to_string()],
            ..Skills::default()
        };
        let titles: Vec<_> = skills.categories().iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Backend Development",
                "Frontend Development",
                "Databases",
                "Messaging & Streaming",
                "Cloud & DevOps",
                "Tools & Others",
            ]
        );
        assert_eq!(skills.categories()[0].skills, ["Java".to_string()]);
        assert!(skills.categories()[2].skills.is_empty());
    }

    #[test]
    fn certification_optional_fields_use_camel_case() {
        let cert: Certification = serde_json::from_str(
            r#"{"id":7,"name":"n","issuer":"i","date":"2024","credentialId":"ABC"}"#,
        )
        .unwrap();
        assert_eq!(cert.credential_id.as_deref(), Some("ABC"));
        assert!(cert.url.is_none());
    }
}
