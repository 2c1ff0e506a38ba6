pub mod data_context;
pub mod portfolio_store;

pub use data_context::DataContext;
pub use portfolio_store::PortfolioStore;
