pub mod matching;
pub mod order;
pub mod performance;
pub mod route;
pub mod vehicle;
