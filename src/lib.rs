pub mod cards;
pub mod cli;
pub mod display;
pub mod enumerate;
pub mod error;
pub mod evaluator;
pub mod partition;
pub mod ranking;
