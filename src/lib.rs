pub mod chart;
pub mod config;
pub mod error;
pub mod overview;
pub mod prices;
pub mod registry;
pub mod subgraph;
pub mod utils;
pub mod view;

pub use config::Settings;
pub use error::MetricsError;
pub use overview::OverviewLoader;
pub use registry::{ChainId, NetworkRegistry};
pub use subgraph::SubgraphClient;
pub use view::HoverController;
