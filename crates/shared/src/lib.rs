// Public modules
pub mod config;
pub mod filter;
pub mod hackernews;
pub mod logfile;
pub mod models;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use config::FilterConfig;
pub use filter::StoryFilter;
pub use hackernews::{FetchError, HnClient, StoryClient};
pub use logfile::MatchLog;
pub use models::{RunSummary, Story};
pub use report::ReportGenerator;
