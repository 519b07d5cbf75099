pub mod analyzer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod counter;
pub mod error;
pub mod evaluator;
pub mod held;
pub mod hold;
pub mod payout;
#[cfg(feature = "cli")]
pub mod query;
pub mod ranking;
pub mod report;

pub use analyzer::*;
#[cfg(feature = "cli")]
pub use cli::*;
pub use counter::*;
pub use error::*;
pub use evaluator::*;
pub use held::*;
pub use hold::*;
pub use payout::*;
#[cfg(feature = "cli")]
pub use query::*;
pub use ranking::*;
pub use report::*;
