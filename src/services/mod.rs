pub mod filter_service;
pub mod summary_service;

pub use filter_service::{FilterOptions, FilterService, TransactionFilter};
pub use summary_service::{
    CategoryBreakdown, CategorySlice, MonthlyTrend, SummaryService, Totals,
};
