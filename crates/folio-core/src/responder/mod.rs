//! Pattern-matching chat responder.
//!
//! The responder maps free-text questions to one fixed answer drawn from
//! the profile record. Matching is an explicit ordered rule table
//! evaluated first-match-wins: a message that textually matches several
//! categories always resolves to the earliest rule. Reordering the table
//! changes answers for ambiguous inputs, so the order is part of the
//! contract.
//!
//! Two categories (skills, projects) nest a second level of patterns:
//! the outer keyword gates entry, inner keywords pick a specialized
//! answer before falling back to the generic one for that category.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::ProfileRecord;

// Outer category patterns, in priority order.
static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey|greetings|good morning|good afternoon|good evening)").unwrap()
});
static IDENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"who (is|are) (you|hani)|tell me about (you|hani)|introduce").unwrap()
});
static EXPERIENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"experience|years|work|career|background|history").unwrap());
static SKILLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"skill|technolog|tool|know|proficien|expert").unwrap());
static PROJECTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"project|work on|portfolio|built|developed|tested").unwrap());
static CERTIFICATIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"certif|istqb|course|training|qualif").unwrap());
static EDUCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"education|university|degree|college|study|studied").unwrap());
static CONTACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"contact|email|reach|hire|connect|linkedin|github").unwrap());
static ACHIEVEMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"achievement|award|hackathon|accomplishment|recognition").unwrap());
static LOGISTICS: Lazy<Regex> = Lazy::new(|| Regex::new(r"logistic|tracking|order").unwrap());
static MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"mobile|android|ios|app").unwrap());
static GRATITUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"thank|thanks|appreciate").unwrap());
static CV: Lazy<Regex> = Lazy::new(|| Regex::new(r"cv|resume|download|pdf").unwrap());

// Inner patterns for the nested skills/projects categories.
static SKILLS_AUTOMATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"automation|automat|selenium").unwrap());
static SKILLS_API: Lazy<Regex> = Lazy::new(|| Regex::new(r"api|postman").unwrap());
static SKILLS_PERFORMANCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"performance|load|gatling").unwrap());
static PROJECTS_CURRENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"current|now|present|recent").unwrap());
static PROJECTS_GOVERNMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"government|oman").unwrap());

/// Automation skill tags are the testing entries mentioning one of these.
const AUTOMATION_MARKERS: [&str; 5] = ["Selenium", "TestNG", "SHAFT", "RestAssured", "Cucumber"];

/// One entry in the rule table: a predicate over the lowercased message
/// and a renderer closing over the profile record.
struct Rule {
    matches: fn(&str) -> bool,
    render: fn(&ProfileRecord, &str) -> String,
}

// Rule order is first-match-wins and binding.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| vec![
    Rule {
        matches: |m| GREETING.is_match(m),
        render: render_greeting,
    },
    Rule {
        matches: |m| IDENTITY.is_match(m),
        render: render_identity,
    },
    Rule {
        matches: |m| EXPERIENCE.is_match(m),
        render: render_experience,
    },
    Rule {
        matches: |m| SKILLS.is_match(m),
        render: render_skills,
    },
    Rule {
        matches: |m| PROJECTS.is_match(m),
        render: render_projects,
    },
    Rule {
        matches: |m| CERTIFICATIONS.is_match(m),
        render: render_certifications,
    },
    Rule {
        matches: |m| EDUCATION.is_match(m),
        render: render_education,
    },
    Rule {
        matches: |m| CONTACT.is_match(m),
        render: render_contact,
    },
    Rule {
        matches: |m| ACHIEVEMENTS.is_match(m),
        render: render_achievements,
    },
    Rule {
        matches: |m| LOGISTICS.is_match(m),
        render: render_logistics,
    },
    Rule {
        matches: |m| MOBILE.is_match(m),
        render: render_mobile,
    },
    Rule {
        matches: |m| GRATITUDE.is_match(m),
        render: render_gratitude,
    },
    Rule {
        matches: |m| CV.is_match(m),
        render: render_cv,
    },
]);

/// Deterministic text-to-response mapper over the profile record.
///
/// `respond` is a pure function of (message, profile): it never fails
/// and always returns a non-empty string, falling back to a help menu
/// when no category matches.
pub struct Responder {
    profile: Arc<ProfileRecord>,
}

impl Responder {
    /// Create a responder over the given profile record.
    pub fn new(profile: Arc<ProfileRecord>) -> Self {
        Self { profile }
    }

    /// Answer a free-text message.
    pub fn respond(&self, message: &str) -> String {
        let lower = message.to_lowercase();

        for rule in RULES.iter() {
            if (rule.matches)(&lower) {
                return (rule.render)(&self.profile, &lower);
            }
        }

        default_help()
    }

    /// The profile this responder reads from.
    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }
}

fn render_greeting(profile: &ProfileRecord, _lower: &str) -> String {
    format!(
        "Hello! 👋 I'm Hani's AI assistant. I can help you learn about his {} of experience as a {}. What would you like to know?",
        profile.identity.experience, profile.identity.role
    )
}

fn render_identity(profile: &ProfileRecord, _lower: &str) -> String {
    format!(
        "I'm representing {}, a {} with {} of experience. He's currently working at {} in {}, specializing in manual testing, API testing, and test automation. Would you like to know more about his projects or skills?",
        profile.identity.name,
        profile.identity.role,
        profile.identity.experience,
        profile.current.company,
        profile.identity.location
    )
}

fn render_experience(profile: &ProfileRecord, _lower: &str) -> String {
    format!(
        "Hani has {} of experience as a {}. Currently at {} since {}, he has:\n• Identified 15+ critical integration issues through API testing\n• Reduced error rates by ~10% and defect resolution time by ~20%\n• Improved regression efficiency by ~15% through test automation\n• Led end-to-end QA across multiple high-impact projects",
        profile.identity.experience,
        profile.identity.role,
        profile.current.company,
        profile.current.start_date
    )
}

fn render_skills(profile: &ProfileRecord, lower: &str) -> String {
    if SKILLS_AUTOMATION.is_match(lower) {
        let automation: Vec<&str> = profile
            .skills
            .testing
            .iter()
            .filter(|s| AUTOMATION_MARKERS.iter().any(|m| s.contains(m)))
            .map(String::as_str)
            .collect();
        return format!(
            "Hani's test automation skills include: {}. He's completed a 60-hour Test Automation course and has hands-on experience implementing automation frameworks.",
            automation.join(", ")
        );
    }
    if SKILLS_API.is_match(lower) {
        return "Hani is highly skilled in API testing using Postman and RestAssured. He's identified 15+ critical integration issues and has extensive experience testing RESTful APIs across multiple projects including E-Justice, Key2Bus, and government platforms.".to_string();
    }
    if SKILLS_PERFORMANCE.is_match(lower) {
        return "For performance testing, Hani uses Gatling (Scala) and has improved response times by 15% on the Consultant Platform project. He's certified in Gatling Performance Testing and experienced in load testing scenarios.".to_string();
    }

    let testing: Vec<&str> = profile
        .skills
        .testing
        .iter()
        .take(8)
        .map(String::as_str)
        .collect();
    format!(
        "Hani's core technical skills:\n\n**Testing:** {}\n**Languages:** {}\n**Tools:** {}\n**AI/ML:** {}",
        testing.join(", "),
        profile.skills.languages.join(", "),
        profile.skills.tools.join(", "),
        profile.skills.aiml.join(", ")
    )
}

fn render_projects(profile: &ProfileRecord, lower: &str) -> String {
    if PROJECTS_CURRENT.is_match(lower) {
        if let Some(current) = profile.current_project() {
            let tech_line = match &current.tech {
                Some(tech) => format!(
                    "This involves {}, focusing on order tracking and admin management for streamlined operations.",
                    tech.join(", ")
                ),
                None => "He focuses on comprehensive QA testing for order tracking and admin management."
                    .to_string(),
            };
            return format!(
                "Hani is currently working on the **{}** - a {} system. {}",
                current.name, current.domain, tech_line
            );
        }
    }
    if PROJECTS_GOVERNMENT.is_match(lower) {
        if let Some(gov) = profile.find_project("Maktaby") {
            return format!(
                "Hani worked on **{}** for the Oman government - a paperless workflow system. He achieved 99% uptime during production releases and reduced issue resolution time by 15-20% through comprehensive cross-platform testing.",
                gov.name
            );
        }
    }

    let listing: Vec<String> = profile
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. **{}** ({}) - {}",
                i + 1,
                p.name,
                p.domain,
                p.description.as_deref().unwrap_or("Comprehensive QA testing")
            )
        })
        .collect();
    format!(
        "Hani has worked on {} major projects:\n\n{}\n\nWhich project would you like to know more about?",
        profile.projects.len(),
        listing.join("\n")
    )
}

fn render_certifications(profile: &ProfileRecord, _lower: &str) -> String {
    let top: Vec<&str> = profile
        .certifications
        .iter()
        .take(3)
        .map(String::as_str)
        .collect();
    format!(
        "Hani holds several professional certifications:\n• {}\n\nHe's also completed specialized training in Selenium WebDriver, SHAFT Engine, RestAssured, and performance testing with Gatling.",
        top.join("\n• ")
    )
}

fn render_education(profile: &ProfileRecord, _lower: &str) -> String {
    format!(
        "Hani graduated from the {}. He's also pursuing a Diploma in Digital Payments & FinTech from LSBR to expand his expertise in emerging technologies.",
        profile.education
    )
}

fn render_contact(profile: &ProfileRecord, _lower: &str) -> String {
    format!(
        "You can connect with Hani:\n📧 Email: {}\n💼 LinkedIn: {}\n🔗 GitHub: {}\n📍 Location: {}",
        profile.identity.email,
        profile.identity.linkedin,
        profile.identity.github,
        profile.identity.location
    )
}

fn render_achievements(_profile: &ProfileRecord, _lower: &str) -> String {
    "Hani was selected among the **top 12 teams out of 200+** in the DELL-AI Empower Egypt Hackathon, where he collaborated with a 5-member team on an innovative AI-based solution. He's also an active member of the ManuTech_CIT Industry 4.0 Initiative.".to_string()
}

fn render_logistics(_profile: &ProfileRecord, _lower: &str) -> String {
    "Hani has deep interest and experience in logistics and order management systems. He's currently working on a Tracking Management System that streamlines operations through order tracking and admin management. He's passionate about building efficient systems for complex business environments.".to_string()
}

fn render_mobile(_profile: &ProfileRecord, _lower: &str) -> String {
    "Hani has extensive mobile testing experience across Android and iOS platforms. Notable projects include Key2Bus (GPS tracking app) where he reduced tracking errors by 20%, and Maktaby & Helpdesk Apps for Oman government with 99% uptime.".to_string()
}

fn render_gratitude(_profile: &ProfileRecord, _lower: &str) -> String {
    "You're welcome! Feel free to ask if you have any other questions about Hani's experience, skills, or projects. I'm here to help! 😊".to_string()
}

fn render_cv(_profile: &ProfileRecord, _lower: &str) -> String {
    "You can download Hani's CV by clicking the \"Download CV\" button at the top of this page. You'll get to solve a fun riddle first! 🎯".to_string()
}

/// The help menu returned when no category matches.
fn default_help() -> String {
    "I can help you learn about Hani's professional background! Here's what you can ask me about:\n\n✅ Work experience and current role\n✅ Technical skills (testing, automation, API, performance)\n✅ Projects and achievements\n✅ Certifications (ISTQB, Test Automation)\n✅ Education background\n✅ Contact information\n\nWhat would you like to know?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> Responder {
        Responder::new(Arc::new(ProfileRecord::bundled()))
    }

    #[test]
    fn test_greeting_names_role_and_experience() {
        let r = responder();
        let reply = r.respond("Hello there");
        assert!(reply.contains("Software Test Engineer"));
        assert!(reply.contains("2+ years"));
    }

    #[test]
    fn test_greeting_is_case_insensitive() {
        let r = responder();
        assert_eq!(r.respond("HELLO"), r.respond("hello"));
    }

    #[test]
    fn test_greeting_must_be_anchored() {
        let r = responder();
        // "hi" in the middle of a word must not trigger the greeting rule.
        let reply = r.respond("which certifications does he hold?");
        assert!(reply.contains("ISTQB Certified Tester"));
    }

    #[test]
    fn test_experience_question_includes_employer_and_bullets() {
        let r = responder();
        let reply = r.respond("What's his experience?");
        assert!(reply.contains("Step by Step"));
        assert!(reply.matches('•').count() >= 2);
        assert!(!reply.contains('✅'), "must not fall into the help branch");
    }

    #[test]
    fn test_experience_beats_projects_on_ambiguous_input() {
        let r = responder();
        // Matches both the experience and projects categories; experience
        // is listed earlier and must win.
        let reply = r.respond("tell me about work experience on projects");
        assert!(reply.contains("Currently at Step by Step"));
        assert!(!reply.contains("major projects"));
    }

    #[test]
    fn test_automation_skills_are_filtered_subset() {
        let r = responder();
        let reply = r.respond("automation skills");
        for tag in ["Selenium WebDriver", "TestNG", "SHAFT Engine", "RestAssured", "Cucumber"] {
            assert!(reply.contains(tag), "missing {tag}");
        }
        assert!(!reply.contains("ISTQB"));
        assert!(!reply.contains("Manual Testing"));
    }

    #[test]
    fn test_api_skills_narrative() {
        let r = responder();
        let reply = r.respond("how good is he at api testing tools?");
        assert!(reply.contains("Postman"));
        assert!(reply.contains("RestAssured"));
    }

    #[test]
    fn test_performance_skills_narrative() {
        let r = responder();
        let reply = r.respond("any load testing expertise?");
        assert!(reply.contains("Gatling"));
    }

    #[test]
    fn test_generic_skills_truncates_testing_to_eight() {
        let r = responder();
        let reply = r.respond("what skills does he have?");
        // First 8 testing entries shown, the 9th (SHAFT Engine) cut off.
        assert!(reply.contains("ISTQB"));
        assert!(!reply.contains("SHAFT Engine"));
        assert!(reply.contains("**Languages:** Java, JavaScript, Scala, SQL"));
    }

    #[test]
    fn test_current_project_lookup() {
        let r = responder();
        let reply = r.respond("tell me about his recent project");
        assert!(reply.contains("Tracking Management System"));
        assert!(reply.contains("Azure DevOps"));
    }

    #[test]
    fn test_government_project_lookup() {
        let r = responder();
        let reply = r.respond("which projects were for the oman government?");
        assert!(reply.contains("Maktaby & Helpdesk"));
    }

    #[test]
    fn test_project_enumeration_is_numbered() {
        let r = responder();
        let reply = r.respond("list his portfolio");
        assert!(reply.contains("5 major projects"));
        assert!(reply.contains("1. **Tracking Management System**"));
        assert!(reply.contains("5. **Maktaby & Helpdesk**"));
        // Projects without a description get the default line.
        assert!(reply.contains("Comprehensive QA testing"));
    }

    #[test]
    fn test_certifications_shows_first_three() {
        let r = responder();
        let reply = r.respond("istqb certified?");
        assert!(reply.contains("ISTQB Certified Tester - Foundation Level"));
        assert!(reply.contains("Diploma in Digital Payments & FinTech (In progress)"));
        assert!(!reply.contains("Gatling Performance Testing Scala"));
    }

    #[test]
    fn test_contact_block() {
        let r = responder();
        let reply = r.respond("how do I reach him?");
        assert!(reply.contains("hani.mohamedqa@gmail.com"));
        assert!(reply.contains("linkedin.com/in/hani-mohamed-qa"));
        assert!(reply.contains("github.com/HaniASU"));
        assert!(reply.contains("Cairo, Egypt"));
    }

    #[test]
    fn test_unrecognized_input_gets_default_help() {
        let r = responder();
        let reply = r.respond("xyzzy plugh");
        assert!(reply.starts_with("I can help you learn about Hani's professional background!"));
        assert_eq!(reply.matches('✅').count(), 6);
    }

    #[test]
    fn test_empty_input_gets_default_help() {
        let r = responder();
        let reply = r.respond("");
        assert!(!reply.is_empty());
        assert_eq!(reply.matches('✅').count(), 6);
    }

    #[test]
    fn test_respond_is_idempotent() {
        let r = responder();
        for msg in ["hello", "projects?", "xyzzy plugh", "thanks!"] {
            assert_eq!(r.respond(msg), r.respond(msg));
        }
    }

    #[test]
    fn test_cv_download_pointer() {
        let r = responder();
        let reply = r.respond("where can I get the pdf resume?");
        assert!(reply.contains("Download CV"));
    }

    #[test]
    fn test_responder_over_custom_profile() {
        let mut profile = ProfileRecord::bundled();
        profile.identity.experience = "10+ years".to_string();
        let r = Responder::new(Arc::new(profile));
        assert!(r.respond("hi").contains("10+ years"));
    }
}
