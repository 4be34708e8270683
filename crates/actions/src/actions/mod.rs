//! Every dialogue action the server exposes.

pub mod catalog_lists;
pub mod filter;
pub mod menus;
pub mod orders;
pub mod popular;
pub mod promotions;
pub mod search;

pub use catalog_lists::ShowCatalogList;
pub use filter::FilterProducts;
pub use menus::{ShowPriceMenu, ShowRatingMenu};
pub use orders::{ShowOrderStatus, ShowOrderStatuses};
pub use popular::ShowPopularWatches;
pub use promotions::ShowPromotions;
pub use search::SearchProducts;
