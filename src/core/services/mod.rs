pub mod summary_service;
pub mod transaction_service;

pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
