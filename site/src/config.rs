use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::nav::DEFAULT_PROBE_OFFSET;

// site configuration
//
// everything the page displays lives here, along with the few knobs for navigation and theme
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub profile: ProfileConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    pub about: AboutConfig,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
    pub resume: ResumeConfig,
    pub contact: ContactConfig,
    pub footer: FooterConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProfileConfig {
    pub name: String,
    // navbar brand
    pub initials: String,
    pub headline: String,
    pub tagline: String,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub probe_offset: f64,
    pub dark_mode: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            probe_offset: DEFAULT_PROBE_OFFSET,
            dark_mode: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AboutConfig {
    pub heading: String,
    pub mission_title: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub status: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResumeConfig {
    pub download: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactConfig {
    pub intro: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Linkedin,
    Github,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FooterConfig {
    pub dedication: String,
}

// as with the server config, the tables sit under a [config] root so that the site document
// can carry other tables alongside it
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!({ projects = data.config.projects.len() }, "successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[config.profile]
name = "Jane Doe"
initials = "JD"
headline = "Student"
tagline = "Hello"

[config.about]
heading = "About Me"
mission_title = "Mission"
paragraphs = ["One."]

[config.resume]

[config.contact]
intro = "Say hi."
email = "jane@example.com"

[config.footer]
dedication = "Thanks for visiting."
"#;

    #[test]
    fn shipped_site_parses() {
        let config = read_config(include_str!("../../webapp/site.toml")).unwrap();

        assert_eq!(config.profile.initials, "HR");
        assert_eq!(config.navigation.probe_offset, 100.0);
        assert!(config.navigation.dark_mode);
        assert_eq!(config.projects.len(), 3);
        assert_eq!(config.resume.experience.len(), 2);
        assert_eq!(config.resume.skills.len(), 3);
        assert_eq!(config.contact.socials.len(), 2);
    }

    #[test]
    fn optional_tables_default() {
        let config = read_config(MINIMAL).unwrap();

        assert_eq!(config.navigation, NavigationConfig::default());
        assert!(config.projects.is_empty());
        assert!(config.about.badges.is_empty());
        assert_eq!(config.resume.download, None);
        assert_eq!(config.profile.avatar, None);
    }

    #[test]
    fn partial_navigation_table() {
        let doc = format!("{MINIMAL}\n[config.navigation]\ndark_mode = false\n");
        let config = read_config(&doc).unwrap();

        assert!(!config.navigation.dark_mode);
        assert_eq!(config.navigation.probe_offset, DEFAULT_PROBE_OFFSET);
    }

    #[test]
    fn missing_root_table_is_an_error() {
        let err = read_config("[profile]\nname = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("site config"));
    }

    #[test]
    fn unknown_social_kind_is_an_error() {
        let doc = format!(
            "{MINIMAL}\n[[config.contact.socials]]\nkind = \"myspace\"\nurl = \"#\"\n"
        );
        assert!(read_config(&doc).is_err());
    }
}
