//! Sales statistics for the dashboard: per-customer reductions and the
//! assembly of the three "champion" cards from backend stat responses
//! plus the full customer directory.

use serde::{Deserialize, Serialize};

use crate::domain::customer::{Customer, Sale};

/// Sum of sale amounts; `0.0` for an empty list.
pub fn total_sales(sales: &[Sale]) -> f64 {
    sales.iter().map(|sale| sale.amount).sum()
}

/// Mean sale amount. An empty sales list yields `0.0` rather than NaN —
/// a matched top-average customer can arrive with independently sourced
/// empty sales, and the card renders the fallback instead of guessing.
pub fn average_sale(sales: &[Sale]) -> f64 {
    if sales.is_empty() {
        return 0.0;
    }
    total_sales(sales) / sales.len() as f64
}

/// One point of the daily-totals series, passed through in backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: String,
    pub total: f64,
}

/// Backend-reported name identifying the customer leading a ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Champion {
    #[serde(default)]
    pub name: String,
}

/// `GET /sales/stats/customers` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesRankings {
    #[serde(rename = "topVolumeCustomer", default)]
    pub top_volume_customer: Option<Champion>,

    #[serde(rename = "topAverageCustomer", default)]
    pub top_average_customer: Option<Champion>,

    #[serde(rename = "topFrequencyCustomer", default)]
    pub top_frequency_customer: Option<Champion>,
}

/// Fully assembled dashboard data.
#[derive(Debug, Clone)]
pub struct SalesSummary {
    pub daily_totals: Vec<DailyTotal>,
    pub top_volume: Customer,
    pub top_average: Customer,
    pub top_frequency: Customer,
}

impl SalesSummary {
    /// Resolve each champion slot against the normalized directory by
    /// case-sensitive exact name match; an unmatched slot synthesizes a
    /// placeholder record instead of failing. The daily series keeps
    /// backend order.
    pub fn assemble(
        daily_totals: Vec<DailyTotal>,
        rankings: SalesRankings,
        directory: &[Customer],
    ) -> Self {
        Self {
            daily_totals,
            top_volume: resolve_champion("1", rankings.top_volume_customer, directory),
            top_average: resolve_champion("2", rankings.top_average_customer, directory),
            top_frequency: resolve_champion("3", rankings.top_frequency_customer, directory),
        }
    }

    /// Grand total over the daily series, for the headline card.
    pub fn grand_total(&self) -> f64 {
        self.daily_totals.iter().map(|day| day.total).sum()
    }
}

fn resolve_champion(slot_id: &str, champion: Option<Champion>, directory: &[Customer]) -> Customer {
    if let Some(champion) = &champion {
        if let Some(found) = directory.iter().find(|c| c.full_name == champion.name) {
            return found.clone();
        }
    }
    placeholder(slot_id, champion)
}

fn placeholder(slot_id: &str, champion: Option<Champion>) -> Customer {
    let name = champion
        .map(|c| c.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "N/A".to_string());

    Customer {
        id: slot_id.to_string(),
        full_name: name,
        email: String::new(),
        birth_date: String::new(),
        sales: Vec::new(),
        missing_letter: 'X',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::missing_letter;

    fn sale(amount: f64) -> Sale {
        Sale {
            date: "2024-01-01".to_string(),
            amount,
        }
    }

    fn customer(name: &str, sales: Vec<Sale>) -> Customer {
        Customer {
            id: "c1".to_string(),
            full_name: name.to_string(),
            email: String::new(),
            birth_date: String::new(),
            missing_letter: missing_letter(name),
            sales,
        }
    }

    fn ranking(name: &str) -> Option<Champion> {
        Some(Champion {
            name: name.to_string(),
        })
    }

    #[test]
    fn total_sales_sums_amounts() {
        assert_eq!(total_sales(&[]), 0.0);
        assert_eq!(total_sales(&[sale(10.0), sale(5.5)]), 15.5);
    }

    #[test]
    fn average_sale_guards_empty_list() {
        assert_eq!(average_sale(&[]), 0.0);
        assert_eq!(average_sale(&[sale(10.0), sale(20.0)]), 15.0);
    }

    #[test]
    fn assemble_matches_champions_by_exact_name() {
        let directory = vec![customer("Ana Silva", vec![sale(100.0)])];
        let rankings = SalesRankings {
            top_volume_customer: ranking("Ana Silva"),
            ..Default::default()
        };

        let summary = SalesSummary::assemble(Vec::new(), rankings, &directory);

        assert_eq!(summary.top_volume.full_name, "Ana Silva");
        assert_eq!(total_sales(&summary.top_volume.sales), 100.0);
    }

    #[test]
    fn name_matching_is_case_sensitive() {
        let directory = vec![customer("Ana Silva", vec![sale(100.0)])];
        let rankings = SalesRankings {
            top_volume_customer: ranking("ana silva"),
            ..Default::default()
        };

        let summary = SalesSummary::assemble(Vec::new(), rankings, &directory);

        // no exact match, so the slot falls back to the placeholder
        assert_eq!(summary.top_volume.full_name, "ana silva");
        assert_eq!(summary.top_volume.missing_letter, 'X');
    }

    #[test]
    fn unmatched_champion_synthesizes_placeholder() {
        let rankings = SalesRankings {
            top_average_customer: ranking("Unknown Person"),
            ..Default::default()
        };

        let summary = SalesSummary::assemble(Vec::new(), rankings, &[]);

        assert_eq!(summary.top_average.id, "2");
        assert_eq!(summary.top_average.full_name, "Unknown Person");
        assert_eq!(summary.top_average.missing_letter, 'X');
        assert!(summary.top_average.sales.is_empty());
        assert!(summary.top_average.email.is_empty());
    }

    #[test]
    fn missing_champion_slot_becomes_not_available() {
        let summary = SalesSummary::assemble(Vec::new(), SalesRankings::default(), &[]);

        assert_eq!(summary.top_volume.full_name, "N/A");
        assert_eq!(summary.top_frequency.id, "3");
    }

    #[test]
    fn daily_series_order_is_preserved() {
        let daily = vec![
            DailyTotal {
                date: "2024-01-02".to_string(),
                total: 20.0,
            },
            DailyTotal {
                date: "2024-01-01".to_string(),
                total: 10.0,
            },
        ];

        let summary = SalesSummary::assemble(daily.clone(), SalesRankings::default(), &[]);

        assert_eq!(summary.daily_totals, daily);
        assert_eq!(summary.grand_total(), 30.0);
    }
}
