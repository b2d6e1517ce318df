//! Latest-price resolution for the active network.

mod resolver;

pub use resolver::{PriceFeedResolver, PriceMap};
