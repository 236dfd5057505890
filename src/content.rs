use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;

/// Name of the document the home page renders.
pub const DEFAULT_PORTFOLIO: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO_CACHE: LazyLock<DashMap<String, Arc<Portfolio>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "data"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Portfolio document `{0}` not found")]
    NotFound(String),
    #[error("Couldn't parse portfolio document `{name}`: {message}")]
    Parse { name: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub personal: Personal,
    pub principles: Vec<String>,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub projects: Vec<SideProject>,
    pub fun_facts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub upwork: String,
    /// Availability, e.g. "Open to freelance work".
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub subtext: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub company: String,
    pub summary: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A piece of client work inside an [`Experience`]. Everything except the
/// name and tags is optional and simply not rendered when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub description: String,
    pub items: Vec<String>,
}

/// Skill categories in document order.
///
/// Stored as a JSON object keyed by category name. Key order is display
/// order, so this deserializes into a `Vec` instead of a map type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Skills(pub Vec<SkillCategory>);

impl Skills {
    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Serialize, Deserialize)]
struct SkillCategoryBody {
    description: String,
    items: Vec<String>,
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(
                &category.name,
                &SkillCategoryBody {
                    description: category.description.clone(),
                    items: category.items.clone(),
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category name to category")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Skills, A::Error> {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, body)) = access.next_entry::<String, SkillCategoryBody>()? {
                    categories.push(SkillCategory {
                        name,
                        description: body.description,
                        items: body.items,
                    });
                }
                Ok(Skills(categories))
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideProject {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub tech: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub link: Option<String>,
}

pub fn parse_portfolio(name: &str, json: &str) -> Result<Portfolio, ContentError> {
    serde_json::from_str(json).map_err(|e| ContentError::Parse {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Loads an embedded portfolio document, parsing it at most once per process.
pub fn load_portfolio(name: &str) -> Result<Arc<Portfolio>, ContentError> {
    let cache = &*GLOBAL_PORTFOLIO_CACHE;
    if let Some(p) = cache.get(name) {
        return Ok(p.clone());
    }
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let json = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    let portfolio = Arc::new(parse_portfolio(name, json)?);
    cache.insert(name.to_string(), portfolio.clone());
    Ok(portfolio)
}
