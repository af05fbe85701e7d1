//! Configuration and path management for BudgetFlow

pub mod paths;
pub mod settings;

pub use paths::BudgetFlowPaths;
pub use settings::Settings;
