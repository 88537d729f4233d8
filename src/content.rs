use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::state::{NavLink, Percent, NAV_LINKS};

const SITE_FILE: &str = "site.json";

pub static SITE: LazyLock<SiteContent> =
    LazyLock::new(|| load().expect("embedded site content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("content file is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Glyphs from the lucide icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Calculator,
    CalendarDays,
    Code,
    Database,
    Download,
    ExternalLink,
    Facebook,
    Github,
    Globe,
    Instagram,
    Layers,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Palette,
    Phone,
    Smartphone,
    X,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Calculator => "icon-calculator",
            Self::CalendarDays => "icon-calendar-days",
            Self::Code => "icon-code",
            Self::Database => "icon-database",
            Self::Download => "icon-download",
            Self::ExternalLink => "icon-external-link",
            Self::Facebook => "icon-facebook",
            Self::Github => "icon-github",
            Self::Globe => "icon-globe",
            Self::Instagram => "icon-instagram",
            Self::Layers => "icon-layers",
            Self::Linkedin => "icon-linkedin",
            Self::Mail => "icon-mail",
            Self::MapPin => "icon-map-pin",
            Self::Menu => "icon-menu",
            Self::Palette => "icon-palette",
            Self::Phone => "icon-phone",
            Self::Smartphone => "icon-smartphone",
            Self::X => "icon-x",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    pub socials: Vec<SocialLink>,
    pub about: About,
    pub skills: Skills,
    pub services: Services,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
}

/// Two-tone wordmark used by the nav bar and footer.
#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub accent: String,
    pub plain: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionHeading {
    pub lead: String,
    pub accent: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub role: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub image: String,
    pub image_alt: String,
    pub paragraphs: Vec<String>,
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub heading: SectionHeading,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub percent: Percent,
    pub label: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Services {
    pub heading: SectionHeading,
    pub items: Vec<Service>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Projects {
    pub heading: SectionHeading,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: Icon,
    /// Tailwind gradient stops, e.g. `from-blue-500 to-cyan-500`.
    pub gradient: String,
    pub background: String,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub heading: SectionHeading,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_prompt: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub copyright: String,
    /// Anchor ids from the navigation links, in display order.
    pub anchors: Vec<String>,
}

impl Footer {
    /// Resolve the footer's anchors against the navigation links, skipping unknown ids.
    pub fn links(&self) -> Vec<NavLink> {
        self.anchors
            .iter()
            .filter_map(|a| NAV_LINKS.iter().find(|l| l.anchor == a).copied())
            .collect()
    }
}

pub fn parse(text: &str) -> Result<SiteContent, ContentError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load() -> Result<SiteContent, ContentError> {
    let file =
        ContentAssets::get(SITE_FILE).ok_or_else(|| ContentError::Missing(SITE_FILE.into()))?;
    let text = String::from_utf8(file.data.into_owned())?;
    parse(&text)
}

pub fn site() -> &'static SiteContent {
    &SITE
}
