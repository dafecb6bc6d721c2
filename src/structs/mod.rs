pub mod ai;
pub mod analyze_inputs;
pub mod cli;
