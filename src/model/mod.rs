pub mod assessment;
pub mod category;
pub mod rating;
pub mod scores;
pub mod thresholds;
