mod client;
mod index;

pub use client::SearchClient;
pub use index::CatalogIndex;
