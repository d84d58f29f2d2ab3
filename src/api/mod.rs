//! WordPress content API access: raw item shapes and the fetch client.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::RawItem;
