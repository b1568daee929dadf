pub mod baseline;
pub mod score;
pub mod trend;
