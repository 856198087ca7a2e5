//! Static marketing content served to the site front end.

use serde::{Deserialize, Serialize};

const BUILTIN_CONTENT: &str = include_str!("../data/content.json");

/// Portfolio filter values the gallery understands
pub const PORTFOLIO_CATEGORIES: [&str; 5] =
    ["weddings", "corporate", "concerts", "sports", "activations"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phones: Vec<String>,
    pub website: String,
    pub location: String,
}

impl BrandInfo {
    /// `email | phone / phone | website`, the quote footer line
    pub fn contact_line(&self) -> String {
        format!(
            "{} | {} | {}",
            self.email,
            self.phones.join(" / "),
            self.website
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub image_url: String,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image_url: String,
    pub bio: String,
    pub expertise: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub title: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub image_url: String,
    pub excerpt: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub brand: BrandInfo,
    pub services: Vec<Service>,
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    pub team: Vec<TeamMember>,
    pub careers: Vec<JobOpening>,
    pub blog: Vec<BlogPost>,
}

impl SiteContent {
    pub fn builtin() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUILTIN_CONTENT)
    }

    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    /// `None` or `"all"` returns everything
    pub fn portfolio_in(&self, category: Option<&str>) -> Vec<&PortfolioItem> {
        match category {
            None => self.portfolio.iter().collect(),
            Some(c) if c.eq_ignore_ascii_case("all") => self.portfolio.iter().collect(),
            Some(c) => self
                .portfolio
                .iter()
                .filter(|p| p.category.eq_ignore_ascii_case(c))
                .collect(),
        }
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.blog.iter().find(|p| p.slug == slug)
    }

    pub fn posts_tagged(&self, tag: Option<&str>) -> Vec<&BlogPost> {
        match tag {
            Some(tag) => self.blog.iter().filter(|p| p.has_tag(tag)).collect(),
            None => self.blog.iter().collect(),
        }
    }
}
