pub mod alerts;
pub mod dashboard;
pub mod discounts;
pub mod monitoring;
pub mod obsolescence;
