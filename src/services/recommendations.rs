//! The recommendation engine façade.
//!
//! Owns an immutable corpus snapshot and its text index, built together so
//! their positional alignment holds for the lifetime of the instance. All
//! query methods take `&self` and touch no shared mutable state, so
//! concurrent requests need no locking; a refresh constructs a whole new
//! engine and swaps it in behind an `Arc`.

use std::collections::HashSet;

use crate::models::{Site, UserProfile};
use crate::services::geo::{distance_km, proximity};
use crate::services::ranking::{fuse, rank};
use crate::services::text_index::{IndexError, TextIndex};

pub struct RecommendationEngine {
    sites: Vec<Site>,
    index: TextIndex,
}

impl RecommendationEngine {
    /// Builds an engine over a validated corpus snapshot.
    ///
    /// Fails on an empty corpus; an engine that cannot score anything must
    /// not be constructed. Id validation belongs to the corpus loader.
    pub fn new(sites: Vec<Site>) -> Result<Self, IndexError> {
        let index = TextIndex::build(&sites)?;
        debug_assert_eq!(index.len(), sites.len());
        Ok(Self { sites, index })
    }

    /// Number of sites in the current snapshot.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Sites similar to the given one, most relevant first.
    ///
    /// Unknown ids resolve to an empty list rather than an error: a stale
    /// link and "nothing relevant found" look identical to callers, by
    /// contract. The target site itself is always excluded.
    pub fn recommend_for_site(
        &self,
        site_id: &str,
        n: usize,
        location: Option<(f64, f64)>,
    ) -> Vec<Site> {
        let Some(target) = self.sites.iter().position(|s| s.site_id == site_id) else {
            tracing::debug!(site_id, "recommendation target not in corpus");
            return Vec::new();
        };

        let query = self.sites[target].feature_string();
        let exclude: HashSet<String> = [self.sites[target].site_id.clone()].into();
        self.recommend(&query, &exclude, n, location)
    }

    /// Sites personalized to a user's search history and visited sites.
    ///
    /// The profile query concatenates the user's searches with the tags of
    /// every visited site. A cold user (no history, no visits) gets an empty
    /// list; scoring an empty query would only produce noise. All visited
    /// sites are excluded from the result.
    pub fn recommend_for_user(
        &self,
        profile: &UserProfile,
        n: usize,
        location: Option<(f64, f64)>,
    ) -> Vec<Site> {
        let query = self.profile_query(profile);
        if query.trim().is_empty() {
            tracing::debug!("empty user profile, no signal to rank on");
            return Vec::new();
        }

        self.recommend(&query, &profile.visited_site_ids, n, location)
    }

    fn profile_query(&self, profile: &UserProfile) -> String {
        let visited_tags = self
            .sites
            .iter()
            .filter(|s| profile.visited_site_ids.contains(&s.site_id))
            .flat_map(|s| s.tags.iter().map(String::as_str));

        profile
            .search_history
            .iter()
            .map(String::as_str)
            .chain(visited_tags)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Scores the whole corpus against a query and applies fusion + ranking.
    fn recommend(
        &self,
        query: &str,
        exclude: &HashSet<String>,
        n: usize,
        location: Option<(f64, f64)>,
    ) -> Vec<Site> {
        let relevance = self.index.scores(query);

        let scored: Vec<(usize, f64)> = relevance
            .into_iter()
            .enumerate()
            .map(|(ordinal, text)| {
                // A site without a geotag simply earns no proximity, even
                // when the requester supplied a coordinate.
                let prox = match (location, &self.sites[ordinal].geotag) {
                    (Some((lat, lon)), Some(geo)) => {
                        proximity(distance_km(lat, lon, geo.latitude, geo.longitude))
                    }
                    _ => 0.0,
                };
                (ordinal, fuse(text, prox, location.is_some()))
            })
            .collect();

        let results = rank(&self.sites, scored, exclude, n);
        tracing::debug!(
            corpus = self.sites.len(),
            excluded = exclude.len(),
            returned = results.len(),
            has_location = location.is_some(),
            "ranked recommendations"
        );
        results
    }
}
