pub mod balance_demo;

pub use balance_demo::{run_balance_demo, BalanceDemoOutcome};
