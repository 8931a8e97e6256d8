use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Geographic coordinate attached to a heritage site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geotag {
    pub latitude: f64,
    pub longitude: f64,
}

/// A heritage site as held in the in-memory corpus snapshot.
///
/// Records are validated once at the corpus-loading boundary (non-empty,
/// unique `site_id`); the scoring core assumes well-formed input. The text
/// fields other than `site_id` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub site_id: String,
    #[serde(default)]
    pub name: String,
    /// Site category ("temple", "fort", ...). Source data calls this `type`.
    #[serde(default, alias = "type")]
    pub category: String,
    /// Free-text location description. Source data calls this `location`.
    #[serde(default, alias = "location")]
    pub location_text: String,
    #[serde(default)]
    pub era: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub geotag: Option<Geotag>,
}

impl Site {
    /// Synthesizes the bag-of-terms document used for text-relevance scoring:
    /// name, category, location, era and all tags, space-joined.
    ///
    /// The same synthesis is used both when indexing a site and when building
    /// a site-to-site query, so a site always matches itself perfectly.
    pub fn feature_string(&self) -> String {
        let mut parts = vec![
            self.name.as_str(),
            self.category.as_str(),
            self.location_text.as_str(),
            self.era.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// Read-only projection of a user consumed by the recommendation engine.
///
/// Auth and user storage are external collaborators; the profile travels with
/// the request instead of being resolved from a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Free-text queries the user has issued.
    #[serde(default)]
    pub search_history: Vec<String>,
    /// Sites the user has already visited; always excluded from results.
    #[serde(default)]
    pub visited_site_ids: HashSet<String>,
}
