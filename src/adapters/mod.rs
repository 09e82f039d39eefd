// Adapters layer: concrete implementations of the domain ports.

pub mod astra;
pub mod http;
pub mod jsonl;

pub use astra::AstraStore;
pub use http::HttpPageFetcher;
pub use jsonl::JsonlStore;
