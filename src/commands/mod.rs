//! Command implementations

pub mod simple;
pub mod solutions;
pub mod survey;

pub use simple::{run_simple, run_simple_with};
pub use solutions::{SolutionsResult, find_solutions, solve_root};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
