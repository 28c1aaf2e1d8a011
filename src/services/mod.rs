pub mod error;
pub mod extractor;
pub mod fetcher;

pub use error::*;
pub use fetcher::*;
