pub mod analyze;
pub mod dashboard;
pub mod export;
pub mod health;
