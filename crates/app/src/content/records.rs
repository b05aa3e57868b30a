//! Content Records

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Kind of marketing page served from the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Tour,
    Course,
    Destination,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content kind: {0}")]
pub struct UnknownContentKind(pub String);

impl ContentKind {
    /// GraphQL root field that selects one entry of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tour => "tour",
            Self::Course => "course",
            Self::Destination => "destination",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tour" => Ok(Self::Tour),
            "course" => Ok(Self::Course),
            "destination" => Ok(Self::Destination),
            other => Err(UnknownContentKind(other.to_string())),
        }
    }
}

/// A CMS entry rendered as a page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    pub slug: String,
    pub title: String,

    #[serde(default)]
    pub summary: Option<String>,

    /// Rich text body as HTML.
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default, deserialize_with = "asset_url")]
    pub hero_image: Option<String>,

    #[serde(default)]
    pub seo: Option<ContentSeo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentSeo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

fn asset_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Asset {
        url: String,
    }

    Ok(Option::<Asset>::deserialize(deserializer)?.map(|asset| asset.url))
}
