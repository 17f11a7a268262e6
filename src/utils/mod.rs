pub mod constants;
pub mod text;
pub mod url_utils;

pub use constants::*;
pub use text::{UniqueNames, clean, dedup_key, dedup_names, first_integer};
pub use url_utils::{absolutize, origin_of, with_page_param};
