//! The static profile record the chat responder draws from.
//!
//! The record is built once at process start and never mutated; every
//! read is a pure projection. The responder takes it by `Arc` so it can
//! be tested in isolation against a custom record.

use serde::{Deserialize, Serialize};

/// Identity and contact facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    /// Years-of-experience label, e.g. "2+ years".
    pub experience: String,
    pub linkedin: String,
    pub github: String,
}

/// Current employment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPosition {
    pub company: String,
    pub position: String,
    /// Start label, e.g. "Jan 2024".
    pub start_date: String,
    pub achievements: Vec<String>,
}

/// A single portfolio project. Declaration order in the project list is
/// meaningful: the first entry is the current project, and lookups are
/// by name substring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

/// Skill tags grouped into four ordered categories. Order matters for
/// truncated display (the testing list is cut to its first entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub testing: Vec<String>,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub aiml: Vec<String>,
}

/// The complete biographical dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub identity: Identity,
    pub current: CurrentPosition,
    pub projects: Vec<Project>,
    pub skills: SkillCatalog,
    pub certifications: Vec<String>,
    pub education: String,
    pub achievements: Vec<String>,
}

impl ProfileRecord {
    /// The biography bundled with the site.
    pub fn bundled() -> Self {
        Self {
            identity: Identity {
                name: "Hani Mohamed Sayed Ahmed".to_string(),
                role: "Software Test Engineer".to_string(),
                location: "Cairo, Egypt".to_string(),
                email: "hani.mohamedqa@gmail.com".to_string(),
                experience: "2+ years".to_string(),
                linkedin: "https://www.linkedin.com/in/hani-mohamed-qa/".to_string(),
                github: "https://github.com/HaniASU".to_string(),
            },
            current: CurrentPosition {
                company: "Step by Step".to_string(),
                position: "Software Test Engineer".to_string(),
                start_date: "Jan 2024".to_string(),
                achievements: vec![
                    "Designed test cases and plans in Azure DevOps and Jira".to_string(),
                    "Performed API testing using Postman, identified 15+ critical integration issues".to_string(),
                    "Reduced error rates by ~10%".to_string(),
                    "Led frontend-backend integration testing".to_string(),
                    "Improved defect resolution time by ~20%".to_string(),
                    "Introduced Selenium & TestNG automation, improving regression efficiency by ~15%".to_string(),
                ],
            },
            projects: vec![
                Project {
                    name: "Tracking Management System".to_string(),
                    domain: "Logistics & Order Management".to_string(),
                    status: Some("Currently Working".to_string()),
                    description: None,
                    tech: Some(vec![
                        "Manual Testing".to_string(),
                        "UI Testing".to_string(),
                        "API Testing".to_string(),
                        "Azure DevOps".to_string(),
                        "Functional Testing".to_string(),
                    ]),
                    achievements: None,
                },
                Project {
                    name: "E-Justice".to_string(),
                    domain: "Legal Services".to_string(),
                    status: None,
                    description: Some("Cross-platform legal management application".to_string()),
                    tech: Some(vec![
                        "Manual Testing".to_string(),
                        "UI Testing".to_string(),
                        "Postman".to_string(),
                        "Azure DevOps".to_string(),
                        "Mobile Testing".to_string(),
                    ]),
                    achievements: None,
                },
                Project {
                    name: "Key2Bus".to_string(),
                    domain: "Transportation".to_string(),
                    status: None,
                    description: Some("Native mobile app with GPS tracking".to_string()),
                    tech: None,
                    achievements: Some(vec![
                        "Reduced tracking errors by 20%".to_string(),
                        "Identified 10+ critical defects before release".to_string(),
                    ]),
                },
                Project {
                    name: "Consultant Platform".to_string(),
                    domain: "Professional Services".to_string(),
                    status: None,
                    description: None,
                    tech: Some(vec![
                        "Selenium WebDriver".to_string(),
                        "Gatling".to_string(),
                        "Performance Testing".to_string(),
                        "Load Testing".to_string(),
                    ]),
                    achievements: None,
                },
                Project {
                    name: "Maktaby & Helpdesk".to_string(),
                    domain: "Government".to_string(),
                    status: None,
                    description: Some("Paperless workflow system for Oman government".to_string()),
                    tech: None,
                    achievements: Some(vec![
                        "99% uptime during production".to_string(),
                        "Reduced issue resolution time by 15-20%".to_string(),
                    ]),
                },
            ],
            skills: SkillCatalog {
                testing: vec![
                    "Manual Testing".to_string(),
                    "API Testing".to_string(),
                    "Automation".to_string(),
                    "Selenium WebDriver".to_string(),
                    "TestNG".to_string(),
                    "Postman".to_string(),
                    "Gatling".to_string(),
                    "ISTQB".to_string(),
                    "SHAFT Engine".to_string(),
                    "RestAssured".to_string(),
                    "Cucumber".to_string(),
                ],
                languages: vec![
                    "Java".to_string(),
                    "JavaScript".to_string(),
                    "Scala".to_string(),
                    "SQL".to_string(),
                ],
                tools: vec![
                    "Azure DevOps".to_string(),
                    "Jira".to_string(),
                    "Git/GitHub".to_string(),
                    "IntelliJ".to_string(),
                    "Android Studio".to_string(),
                ],
                aiml: vec![
                    "TensorFlow".to_string(),
                    "Machine Learning".to_string(),
                    "Deep Learning".to_string(),
                    "NLP".to_string(),
                ],
            },
            certifications: vec![
                "ISTQB Certified Tester - Foundation Level".to_string(),
                "Test Automation: Leveling Up (60 Hours Training Course)".to_string(),
                "Diploma in Digital Payments & FinTech (In progress)".to_string(),
                "Complete Automation Testing and Best Practices".to_string(),
                "Gatling Performance Testing Scala".to_string(),
            ],
            education: "Faculty of Computer and Information Sciences, Ain Shams University (2019-2023)"
                .to_string(),
            achievements: vec![
                "Selected in top 12 teams out of 200+ in DELL-AI Empower Egypt Hackathon".to_string(),
            ],
        }
    }

    /// Load a profile record from a JSON file.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> crate::error::FolioResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(Into::into)
    }

    /// The project currently being worked on (first in declaration order).
    pub fn current_project(&self) -> Option<&Project> {
        self.projects.first()
    }

    /// Find a project by name substring.
    pub fn find_project(&self, name_fragment: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name.contains(name_fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_project_order() {
        let profile = ProfileRecord::bundled();
        assert_eq!(profile.projects.len(), 5);
        assert_eq!(
            profile.current_project().map(|p| p.name.as_str()),
            Some("Tracking Management System")
        );
    }

    #[test]
    fn test_find_project_by_substring() {
        let profile = ProfileRecord::bundled();
        let gov = profile.find_project("Maktaby").expect("Maktaby project exists");
        assert_eq!(gov.domain, "Government");
    }

    #[test]
    fn test_skill_catalog_order() {
        let profile = ProfileRecord::bundled();
        // Truncated display depends on the first 8 testing entries.
        assert_eq!(profile.skills.testing[0], "Manual Testing");
        assert_eq!(profile.skills.testing[7], "ISTQB");
    }

    #[test]
    fn test_roundtrips_through_json() {
        let profile = ProfileRecord::bundled();
        let json = serde_json::to_string(&profile).unwrap();
        let back: ProfileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.identity.name, profile.identity.name);
        assert_eq!(back.projects.len(), profile.projects.len());
    }
}
