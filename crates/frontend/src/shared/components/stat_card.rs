use contracts::shared::metrics::MetricCard;
use contracts::shared::tone::Tone;
use leptos::prelude::*;

use crate::shared::components::table::tone_class;
use crate::shared::icons::icon;

/// Headline figure: icon, label, already formatted value.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] tone: Option<Tone>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = format!(
        "stat-card {}",
        tone_class(tone.unwrap_or(Tone::Neutral))
    );

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

/// `count / total` card with the rounded share and a progress bar.
#[component]
pub fn MetricStatCard(card: MetricCard, #[prop(optional)] tone: Option<Tone>) -> impl IntoView {
    let tone = tone.unwrap_or(Tone::Brand);
    let bar_style = format!("width: {}%;", card.value.percentage.min(100));

    view! {
        <div class=format!("stat-card stat-card--metric {}", tone_class(tone)) data-metric=card.key>
            <div class="stat-card__content">
                <div class="stat-card__label">{card.label}</div>
                <div class="stat-card__value">
                    {card.value.ratio_label()}
                    <span class="stat-card__percent">{card.value.percent_label()}</span>
                </div>
                <div class="stat-card__bar">
                    <div class="stat-card__bar-fill" style=bar_style></div>
                </div>
            </div>
        </div>
    }
}
