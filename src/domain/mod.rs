mod item_id;
mod new_listing;
mod seller_id;

pub use item_id::ItemId;
pub use new_listing::{NewListing, Statistics};
pub use seller_id::SellerId;
