pub mod ordered_map;
pub mod profile;
pub mod scrape_result;
pub mod section_stat;

pub use ordered_map::*;
pub use profile::*;
pub use scrape_result::*;
pub use section_stat::*;
