//! Statistics gateway. The summary needs three backend responses; all
//! three must succeed before assembly, and any failure surfaces as the
//! single statistics error with no partial result.

use contracts::dashboards::sales_summary::{DailyTotal, SalesRankings, SalesSummary};
use contracts::domain::customer::CustomerFilters;
use gloo_net::http::Request;

use crate::domain::customer::api as customer_api;
use crate::shared::api_utils::{api_url, authorize};

const MSG: &str = "Erro ao carregar estatísticas";

fn fail<E: std::fmt::Display>(err: E) -> String {
    log::warn!("{MSG}: {err}");
    MSG.to_string()
}

async fn fetch_daily_totals() -> Result<Vec<DailyTotal>, String> {
    let response = authorize(Request::get(&api_url("/sales/stats/daily")))
        .send()
        .await
        .map_err(fail)?;

    if !response.ok() {
        return Err(fail(format!("HTTP {}", response.status())));
    }

    response.json::<Vec<DailyTotal>>().await.map_err(fail)
}

async fn fetch_rankings() -> Result<SalesRankings, String> {
    let response = authorize(Request::get(&api_url("/sales/stats/customers")))
        .send()
        .await
        .map_err(fail)?;

    if !response.ok() {
        return Err(fail(format!("HTTP {}", response.status())));
    }

    response.json::<SalesRankings>().await.map_err(fail)
}

pub async fn load_summary() -> Result<SalesSummary, String> {
    let daily_totals = fetch_daily_totals().await?;
    let rankings = fetch_rankings().await?;
    let directory = customer_api::list_customers(&CustomerFilters::default())
        .await
        .map_err(fail)?;

    Ok(SalesSummary::assemble(daily_totals, rankings, &directory))
}
