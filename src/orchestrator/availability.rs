//! Streaming availability resolution.
//!
//! Turns a region-keyed availability record into a short list of
//! subscription offers: rentals and purchases are dropped, tiers of the same
//! brand are collapsed, the region's watch link is stamped on every offer,
//! and the list is truncated.
//!
//! Resolution never fails. A lookup error, a missing region, or an item
//! only available to rent or buy all produce an empty list.

use crate::config::ScoutConfig;
use crate::error::ScoutError;
use crate::provider::MetadataProvider;
use crate::types::{Availability, Category, OfferKind, ProviderOffer, RegionAvailability};

use super::dedup::dedup_by_brand;

/// Resolve the subscription offers for one item.
///
/// Failures are logged at warn level and reported as an empty list; the
/// caller cannot tell "no providers" from "lookup failed".
pub async fn resolve_providers<P: MetadataProvider>(
    provider: &P,
    item_id: u64,
    category: Category,
    config: &ScoutConfig,
) -> Vec<ProviderOffer> {
    match try_resolve(provider, item_id, category, config).await {
        Ok(offers) => offers,
        Err(err) => {
            tracing::warn!(item_id, %category, error = %err, "provider lookup failed");
            Vec::new()
        }
    }
}

/// Resolve several items concurrently.
///
/// Each lookup is independent: one failing item yields an empty list in
/// its slot and does not affect the others. Output order matches `items`.
pub async fn resolve_many<P: MetadataProvider>(
    provider: &P,
    items: &[(u64, Category)],
    config: &ScoutConfig,
) -> Vec<Vec<ProviderOffer>> {
    let lookups = items
        .iter()
        .map(|&(item_id, category)| resolve_providers(provider, item_id, category, config));
    futures::future::join_all(lookups).await
}

async fn try_resolve<P: MetadataProvider>(
    provider: &P,
    item_id: u64,
    category: Category,
    config: &ScoutConfig,
) -> Result<Vec<ProviderOffer>, ScoutError> {
    let availability = provider
        .availability(item_id, category)
        .await
        .map_err(|e| ScoutError::ProviderLookup(format!("{category} {item_id}: {e}")))?;

    let offers = offers_for_region(&availability, &config.region, config.max_providers);
    tracing::debug!(item_id, %category, count = offers.len(), "resolved providers");
    Ok(offers)
}

/// Apply the subscription-only policy to one availability record.
///
/// # Pipeline
///
/// 1. Pick the `region` entry; absent region means no offers
/// 2. Keep only `flatrate` (included with subscription) offers
/// 3. Deduplicate by brand, shortest display name first
/// 4. Stamp the region's watch link on every survivor
/// 5. Truncate to `max_providers`
pub fn offers_for_region(
    availability: &Availability,
    region: &str,
    max_providers: usize,
) -> Vec<ProviderOffer> {
    let Some(entry) = availability.region(region) else {
        return Vec::new();
    };

    let mut offers = dedup_by_brand(subscription_offers(entry));

    if let Some(link) = entry.link.as_deref() {
        for offer in &mut offers {
            offer.link = Some(link.to_string());
        }
    }

    offers.truncate(max_providers);
    offers
}

/// The region's subscription offers. Rent and buy tiers are never included.
fn subscription_offers(entry: &RegionAvailability) -> Vec<ProviderOffer> {
    entry
        .flatrate
        .iter()
        .flatten()
        .cloned()
        .map(|record| record.into_offer(OfferKind::Subscription))
        .collect()
}
