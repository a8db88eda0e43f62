use tracing::{debug, warn};

use crate::catalog::{Domain, RubricCatalog};
use crate::model::category::classify;
use crate::model::rating::{RangeError, RatingStore};
use crate::model::scores::{DomainScore, OverallScore, Scorecard};
use crate::model::thresholds::AVERAGE_DECIMALS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageStats {
    pub average: Option<f64>,
    pub rated_count: usize,
    pub total_count: usize,
}

pub fn domain_average(domain: &Domain, ratings: &RatingStore) -> Result<AverageStats, RangeError> {
    let mut rated = Vec::with_capacity(domain.items.len());
    collect_rated(domain.item_ids(), ratings, &mut rated)?;
    Ok(AverageStats {
        average: mean_rounded(&rated),
        rated_count: rated.len(),
        total_count: domain.items.len(),
    })
}

/// Flat mean over every catalog item; domains carry no weight of their own.
pub fn overall_average(
    catalog: &RubricCatalog,
    ratings: &RatingStore,
) -> Result<AverageStats, RangeError> {
    let mut rated = Vec::with_capacity(catalog.total_items());
    for domain in catalog.domains() {
        collect_rated(domain.item_ids(), ratings, &mut rated)?;
    }
    Ok(AverageStats {
        average: mean_rounded(&rated),
        rated_count: rated.len(),
        total_count: catalog.total_items(),
    })
}

pub fn aggregate(catalog: &RubricCatalog, ratings: &RatingStore) -> Result<Scorecard, RangeError> {
    ratings.validate()?;
    for item_id in ratings.item_ids() {
        if !catalog.contains_item(item_id) {
            warn!(item_id, "rating for unknown item ignored");
        }
    }

    let mut domains = Vec::with_capacity(catalog.domains().len());
    for domain in catalog.domains() {
        let stats = domain_average(domain, ratings)?;
        domains.push(DomainScore {
            domain_id: domain.id.clone(),
            average: stats.average,
            rated_count: stats.rated_count,
            total_count: stats.total_count,
            category: classify(stats.average),
        });
    }

    let stats = overall_average(catalog, ratings)?;
    let overall = OverallScore {
        average: stats.average,
        rated_count: stats.rated_count,
        total_items: stats.total_count,
        category: classify(stats.average),
    };
    debug!(
        average = ?overall.average,
        rated = overall.rated_count,
        total = overall.total_items,
        category = overall.category.short_label(),
        "aggregated {} stored ratings",
        ratings.len()
    );

    Ok(Scorecard { domains, overall })
}

/// Arithmetic mean rounded half away from zero. Computed in integer units of
/// the last kept decimal so the result does not depend on float summation.
pub fn mean_rounded(scores: &[u8]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let scale = 10u64.pow(AVERAGE_DECIMALS);
    let n = scores.len() as u64;
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    let units = (2 * scale * sum + n) / (2 * n);
    Some(units as f64 / scale as f64)
}

fn collect_rated<'a>(
    item_ids: impl Iterator<Item = &'a str>,
    ratings: &RatingStore,
    out: &mut Vec<u8>,
) -> Result<(), RangeError> {
    for item_id in item_ids {
        let level = ratings.level(item_id)?;
        if level.is_rated() {
            out.push(level.score());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
