//! Sample data for illustration only. Nothing here feeds the risk score.

pub mod trend;
