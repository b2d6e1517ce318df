use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use futures::future::join_all;
use log::{error, warn};
use serde_json::json;

use crate::overview::{
    build_protocol_overview, build_token_overview, ChainProtocolSeries, ProtocolOverview,
    TokenOverview, TokenSeries,
};
use crate::prices::{PriceFeedResolver, PriceMap};
use crate::registry::{ChainId, NetworkInfo, NetworkRegistry};
use crate::subgraph::{
    queries, LatestPrices, ProtocolDayData, ProtocolSnapshots, SubgraphClient, TokenSnapshots,
};

/// Fetches raw series from every enabled network and assembles the
/// overview structures the rendering layer consumes.
///
/// A network whose fetch fails contributes an empty series: the dashboard
/// renders partial data and the failure goes to the log. Retries, if any,
/// belong to the transport, not here.
pub struct OverviewLoader {
    registry: Arc<NetworkRegistry>,
    client: Arc<SubgraphClient>,
    prices: PriceFeedResolver,
    max_series_rows: u32,
}

impl OverviewLoader {
    pub fn new(
        registry: Arc<NetworkRegistry>,
        client: Arc<SubgraphClient>,
        max_series_rows: u32,
    ) -> Self {
        let prices = PriceFeedResolver::new(registry.clone());
        Self {
            registry,
            client,
            prices,
            max_series_rows,
        }
    }

    /// Load the protocol overview: charts merged across every enabled
    /// network, snapshots and prices from the active one.
    pub async fn protocol_overview(&self, active: &ChainId) -> Result<ProtocolOverview> {
        // Fail fast on a misconfigured active network before any fetch
        self.registry.get(active)?;

        let now = Utc::now().timestamp();

        let fetches = self
            .registry
            .iter()
            .map(|network| self.fetch_protocol_series(network));
        let series: Vec<ChainProtocolSeries> = join_all(fetches).await;

        let prices = self.latest_prices(active).await?;

        Ok(build_protocol_overview(&series, active, prices, now)?)
    }

    /// Load the token page data for one token on the active network.
    pub async fn token_overview(&self, active: &ChainId, token: &str) -> Result<TokenOverview> {
        let network = self.registry.get(active)?;
        let now = Utc::now().timestamp();

        let variables = json!({
            "token": token.to_lowercase(),
            "startTimestamp": network.start_timestamp,
            "first": self.max_series_rows,
        });

        let series = match self
            .client
            .query::<TokenSnapshots>(&network.endpoint, queries::TOKEN_SNAPSHOTS, variables)
            .await
        {
            Ok(result) => TokenSeries::from_rows(network.id.clone(), &result.snapshots),
            Err(e) => {
                error!(
                    "Failed to fetch token series for {} on {}: {:#}",
                    token, network.name, e
                );
                TokenSeries::empty(network.id.clone())
            },
        };

        Ok(build_token_overview(&series, now)?)
    }

    async fn fetch_protocol_series(&self, network: &NetworkInfo) -> ChainProtocolSeries {
        match self.query_protocol_rows(network).await {
            Ok(rows) => ChainProtocolSeries::from_rows(network.id.clone(), &rows),
            Err(e) => {
                error!(
                    "Failed to fetch protocol series for {}: {:#}",
                    network.name, e
                );
                ChainProtocolSeries::empty(network.id.clone())
            },
        }
    }

    async fn query_protocol_rows(&self, network: &NetworkInfo) -> Result<Vec<ProtocolDayData>> {
        let variables = json!({
            "startTimestamp": network.start_timestamp,
            "first": self.max_series_rows,
        });

        let result: ProtocolSnapshots = self
            .client
            .query(&network.endpoint, queries::PROTOCOL_SNAPSHOTS, variables)
            .await?;

        Ok(result.snapshots)
    }

    /// Latest prices for the active network's tracked assets.
    ///
    /// Transport failures degrade to an empty map (summary cards show
    /// blanks); an unconfigured network is a caller bug and propagates.
    async fn latest_prices(&self, active: &ChainId) -> Result<PriceMap> {
        let network = self.registry.get(active)?;
        let addresses = self.prices.query_addresses(active)?;

        let variables = json!({ "assets": addresses });
        match self
            .client
            .query::<LatestPrices>(&network.endpoint, queries::LATEST_PRICES, variables)
            .await
        {
            Ok(result) => Ok(self.prices.resolve(active, &result.prices)?),
            Err(e) => {
                warn!("Latest prices unavailable for {}: {:#}", network.name, e);
                Ok(PriceMap::default())
            },
        }
    }
}
