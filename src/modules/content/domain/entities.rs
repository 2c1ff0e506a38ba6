use serde::{Deserialize, Serialize};

/// Singleton document describing the site owner. Stored under the
/// `personalInfo/main` key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub bio: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillItem {
    pub name: String,
    /// Presentation percentage (0-100). The editor restricts input to
    /// 10-100; the store does not validate beyond that.
    pub proficiency: u8,
    pub description: String,
}

/// Keyed by `category` within the skills collection. Deleting a category
/// removes all of its items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<SkillItem>,
}

/// Keyed by `company`. Only one role per company is representable; a second
/// role at the same company overwrites the first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Extracurricular {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub role: String,
    pub outcome: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Scale factor applied to animation durations by downstream styling.
    pub fn speed_factor(self) -> f64 {
        match self {
            AnimationSpeed::Slow => 1.5,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimationIntensity {
    Low,
    Medium,
    High,
}

impl AnimationIntensity {
    pub fn intensity_factor(self) -> f64 {
        match self {
            AnimationIntensity::Low => 0.5,
            AnimationIntensity::Medium => 1.0,
            AnimationIntensity::High => 1.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Animations {
    pub enabled: bool,
    pub speed: AnimationSpeed,
    pub intensity: AnimationIntensity,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Comfortable,
    Spacious,
}

impl Spacing {
    pub fn spacing_factor(self) -> f64 {
        match self {
            Spacing::Compact => 0.8,
            Spacing::Comfortable => 1.0,
            Spacing::Spacious => 1.2,
        }
    }
}

/// The fixed set of visitor-facing page sections. `Layout::sections` doubles
/// as order and visibility: a section absent from the list is hidden, not
/// deleted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub sections: Vec<SectionId>,
    pub max_width: String,
    pub spacing: Spacing,
}

/// Singleton document controlling visual rendering of the public site.
/// Stored under the `websiteSettings/main` key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteSettings {
    pub color_theme: ColorTheme,
    pub fonts: Fonts,
    pub animations: Animations,
    pub layout: Layout,
}

/// The complete aggregate: fetched in full once per session, written in full
/// on reset, mutated section by section in between.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub extracurricular: Vec<Extracurricular>,
    pub projects: Vec<Project>,
    pub website_settings: WebsiteSettings,
}
