pub mod sync;
pub use sync::{DataSource, FetchedPortfolio, PortfolioSync, SaveOutcome};
