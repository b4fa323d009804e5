mod app_item;
mod parse_feed;

pub use app_item::*;
pub use parse_feed::*;
