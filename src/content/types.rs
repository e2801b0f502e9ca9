// Content documents served by the informational endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: i64,
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booster {
    pub id: i64,
    pub name: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
}

/// Document kinds as stored in the `kind` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Disease,
    Booster,
    BlogPost,
    Hero,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Disease => "disease",
            ContentKind::Booster => "booster",
            ContentKind::BlogPost => "blog_post",
            ContentKind::Hero => "hero",
        }
    }
}
