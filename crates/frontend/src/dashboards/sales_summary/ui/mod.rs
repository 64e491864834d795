use contracts::dashboards::sales_summary::{average_sale, total_sales, SalesSummary};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dashboards::sales_summary::api;
use crate::shared::components::stat_card::{CardAccent, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_brl;

#[component]
pub fn SalesDashboard() -> impl IntoView {
    let (summary, set_summary) = signal::<Option<SalesSummary>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::load_summary().await {
            Ok(data) => set_summary.set(Some(data)),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    move || {
        if loading.get() {
            return view! { <div class="loading">"Carregando..."</div> }.into_any();
        }

        match summary.get() {
            Some(summary) => render_summary(summary).into_any(),
            None => view! {
                <div class="error-message">
                    {move || error.get().unwrap_or_else(|| "Erro ao carregar estatísticas".to_string())}
                </div>
            }
            .into_any(),
        }
    }
}

fn render_summary(summary: SalesSummary) -> impl IntoView {
    let volume = &summary.top_volume;
    let average = &summary.top_average;
    let frequency = &summary.top_frequency;

    let cards = view! {
        <div class="stat-cards">
            <StatCard
                label="Total de Vendas".to_string()
                icon_name="money".to_string()
                value=format_brl(summary.grand_total())
                subtitle="Soma de todas as vendas".to_string()
                accent=CardAccent::Success
            />
            <StatCard
                label="Maior Volume".to_string()
                icon_name="trending".to_string()
                value=volume.full_name.clone()
                detail=format!("Total: {}", format_brl(total_sales(&volume.sales)))
                subtitle=format!("{} compras", volume.sales.len())
                accent=CardAccent::Primary
            />
            <StatCard
                label="Maior Média".to_string()
                icon_name="customers".to_string()
                value=average.full_name.clone()
                detail=format!("Média: {}", format_brl(average_sale(&average.sales)))
                subtitle=format!("{} compras", average.sales.len())
                accent=CardAccent::Warning
            />
            <StatCard
                label="Maior Frequência".to_string()
                icon_name="calendar".to_string()
                value=frequency.full_name.clone()
                detail=format!("{} compras realizadas", frequency.sales.len())
                subtitle="Cliente mais fiel".to_string()
                accent=CardAccent::Info
            />
        </div>
    };

    let daily_rows = summary
        .daily_totals
        .iter()
        .map(|day| {
            view! {
                <tr class="table__row">
                    <td class="table__cell">{format_date(&day.date)}</td>
                    <td class="table__cell table__cell--money">{format_brl(day.total)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
            </div>

            {cards}

            <div class="card">
                <h2 class="card__title">"Total de Vendas por Dia"</h2>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Data"</th>
                                <th class="table__header-cell">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>{daily_rows}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
