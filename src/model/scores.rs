use serde::Serialize;

use crate::model::category::PerformanceCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainScore {
    pub domain_id: String,
    pub average: Option<f64>,
    pub rated_count: usize,
    pub total_count: usize,
    pub category: PerformanceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallScore {
    pub average: Option<f64>,
    pub rated_count: usize,
    pub total_items: usize,
    pub category: PerformanceCategory,
}

/// Aggregator output shared by every exporter. Domain scores follow catalog
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub domains: Vec<DomainScore>,
    pub overall: OverallScore,
}

#[cfg(test)]
impl Scorecard {
    pub fn domain(&self, domain_id: &str) -> Option<&DomainScore> {
        self.domains.iter().find(|d| d.domain_id == domain_id)
    }
}
