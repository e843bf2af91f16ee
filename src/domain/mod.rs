pub mod novelty;
pub mod trend;
pub mod weather;
