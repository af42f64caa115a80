pub mod client;
pub mod rate_limit;
pub mod source;

pub use client::GitHubClient;
pub use rate_limit::RateLimitInfo;
pub use source::GitHubSource;
