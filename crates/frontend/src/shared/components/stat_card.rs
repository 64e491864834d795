use crate::shared::icons::icon;
use leptos::prelude::*;

/// Accent color of a dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAccent {
    Success,
    Primary,
    Warning,
    Info,
}

impl CardAccent {
    fn class(self) -> &'static str {
        match self {
            CardAccent::Success => "stat-card stat-card--success",
            CardAccent::Primary => "stat-card stat-card--primary",
            CardAccent::Warning => "stat-card stat-card--warning",
            CardAccent::Info => "stat-card stat-card--info",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary display value (customer name, formatted total, ...)
    value: String,
    /// Secondary line below the value
    #[prop(optional)]
    detail: Option<String>,
    /// Small footer text
    #[prop(optional)]
    subtitle: Option<String>,
    accent: CardAccent,
) -> impl IntoView {
    view! {
        <div class=accent.class()>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {detail.map(|text| view! { <div class="stat-card__detail">{text}</div> })}
                {subtitle.map(|text| view! { <div class="stat-card__subtitle">{text}</div> })}
            </div>
        </div>
    }
}
