//! Streaming offer deduplication by brand identity.
//!
//! Services often list several tiers of the same brand ("Netflix",
//! "Netflix Standard with Ads", "Netflix Kids"). Offers are collapsed to one
//! per brand, preferring the shortest display name as the base tier.

use std::collections::HashSet;

use crate::types::ProviderOffer;

/// Known brands, checked in order. A display name containing the token maps
/// to the canonical identity.
pub const BRAND_TABLE: &[(&str, &str)] = &[
    ("netflix", "netflix"),
    ("peacock", "peacock"),
    ("hulu", "hulu"),
    ("disney", "disney"),
    ("amazon", "amazon"),
    ("hbo", "hbo"),
    ("paramount", "paramount"),
    ("apple", "apple"),
    ("showtime", "showtime"),
    ("starz", "starz"),
    ("cinemax", "cinemax"),
];

/// Normalised brand identity of a provider display name.
///
/// The lowercased name is checked against [`BRAND_TABLE`] in order; the
/// first token it contains decides the identity. Unknown brands are
/// identified by their full lowercased name.
pub fn brand_identity(provider_name: &str) -> String {
    let name = provider_name.to_lowercase();
    BRAND_TABLE
        .iter()
        .find(|(token, _)| name.contains(token))
        .map_or(name.clone(), |(_, identity)| (*identity).to_string())
}

/// Keep one offer per brand identity.
///
/// Offers are stably sorted by display-name length (shortest first) and the
/// first offer seen for each identity wins. The output is in that sorted
/// order.
pub fn dedup_by_brand(mut offers: Vec<ProviderOffer>) -> Vec<ProviderOffer> {
    offers.sort_by_key(|offer| offer.provider_name.chars().count());

    let mut seen: HashSet<String> = HashSet::new();
    offers
        .into_iter()
        .filter(|offer| seen.insert(brand_identity(&offer.provider_name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OfferKind;

    fn offer(id: u64, name: &str) -> ProviderOffer {
        ProviderOffer {
            provider_id: id,
            provider_name: name.to_string(),
            logo_path: Some(format!("/logo{id}.png")),
            display_priority: None,
            kind: OfferKind::Subscription,
            link: None,
        }
    }

    fn names(offers: &[ProviderOffer]) -> Vec<&str> {
        offers.iter().map(|o| o.provider_name.as_str()).collect()
    }

    #[test]
    fn known_brands_normalise() {
        assert_eq!(brand_identity("Netflix Standard with Ads"), "netflix");
        assert_eq!(brand_identity("Disney Plus"), "disney");
        assert_eq!(brand_identity("Amazon Prime Video"), "amazon");
        assert_eq!(brand_identity("HBO Max Amazon Channel"), "amazon");
        assert_eq!(brand_identity("Apple TV Plus"), "apple");
    }

    #[test]
    fn table_order_decides_ties() {
        // Contains both "hulu" and "disney"; "hulu" is earlier in the table.
        assert_eq!(brand_identity("Disney Hulu Bundle"), "hulu");
    }

    #[test]
    fn unknown_brand_is_full_lowercased_name() {
        assert_eq!(brand_identity("Mubi"), "mubi");
        assert_eq!(brand_identity("Criterion Channel"), "criterion channel");
    }

    #[test]
    fn shortest_name_wins() {
        let offers = vec![
            offer(1796, "Netflix Standard with Ads"),
            offer(8, "Netflix"),
        ];
        let deduped = dedup_by_brand(offers);
        assert_eq!(names(&deduped), vec!["Netflix"]);
        assert_eq!(deduped[0].provider_id, 8);
    }

    #[test]
    fn output_is_sorted_by_name_length() {
        let offers = vec![
            offer(1, "Paramount Plus"),
            offer(2, "Hulu"),
            offer(3, "Max"),
            offer(4, "Peacock Premium"),
        ];
        let deduped = dedup_by_brand(offers);
        assert_eq!(
            names(&deduped),
            vec!["Max", "Hulu", "Paramount Plus", "Peacock Premium"]
        );
    }

    #[test]
    fn equal_length_keeps_input_order() {
        let offers = vec![offer(1, "Starz A"), offer(2, "Starz B")];
        let deduped = dedup_by_brand(offers);
        assert_eq!(names(&deduped), vec!["Starz A"]);
    }

    #[test]
    fn unknown_brands_dedupe_case_insensitively() {
        let offers = vec![offer(1, "MUBI"), offer(2, "Mubi"), offer(3, "fuboTV")];
        let deduped = dedup_by_brand(offers);
        assert_eq!(names(&deduped), vec!["MUBI", "fuboTV"]);
    }

    #[test]
    fn no_two_survivors_share_identity() {
        let offers = vec![
            offer(1, "Peacock"),
            offer(2, "Peacock Premium Plus"),
            offer(3, "Peacock Premium"),
            offer(4, "Hulu"),
            offer(5, "Hulu Live TV"),
            offer(6, "Disney Plus"),
        ];
        let deduped = dedup_by_brand(offers);
        let identities: HashSet<String> = deduped
            .iter()
            .map(|o| brand_identity(&o.provider_name))
            .collect();
        assert_eq!(identities.len(), deduped.len());
        assert_eq!(deduped.len(), 3);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(dedup_by_brand(vec![]).is_empty());
    }
}
