use contracts::dashboards::d100_acq_summary::{
    collateral_cards, status_cards, title_cards, valuation_cards, CollateralMetrics,
    PoolHeadline, PoolSummary, TitleMetrics, ValuationMetrics,
};
use contracts::shared::metrics::MetricCard;
use contracts::shared::tone::Tone;
use leptos::prelude::*;
use thaw::*;

use super::super::api;
use crate::shared::components::table::{format_compact_currency, format_count, format_optional_percent};
use crate::shared::components::{ErrorBanner, MetricStatCard, PageHeader, StatCard};
use crate::shared::scoped_fetch::ScopedResource;
use crate::shared::selection::use_selection;

#[component]
fn CardSection(
    #[prop(into)] title: String,
    cards: Signal<Vec<MetricCard>>,
    tone: Tone,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="dashboard-section__title">{title}</h2>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </Flex>
            <div class="stat-grid">
                <For
                    each=move || cards.get()
                    key=|card| (card.key, card.value)
                    children=move |card| view! { <MetricStatCard card=card tone=tone /> }
                />
            </div>
        </section>
    }
}

/// Pool overview: headline figures plus collateral, title and valuation coverage.
///
/// All four summaries reload in parallel whenever the selection changes.
#[component]
pub fn AcqSummaryDashboard() -> impl IntoView {
    let selection = use_selection();
    let pool = ScopedResource::<PoolSummary>::new();
    let collateral = ScopedResource::<CollateralMetrics>::new();
    let title = ScopedResource::<TitleMetrics>::new();
    let valuations = ScopedResource::<ValuationMetrics>::new();

    let reload = move || {
        pool.load(selection, "pool summary", api::fetch_pool_summary);
        collateral.load(selection, "collateral summary", api::fetch_collateral);
        title.load(selection, "title summary", api::fetch_title);
        valuations.load(selection, "valuation summary", api::fetch_valuations);
    };

    Effect::new(move |_| {
        // Tracks the selection; the loads themselves read it untracked.
        let _ = selection.current();
        reload();
    });

    let headline = Memo::new(move |_| pool.data.with(|p| PoolHeadline::derive(p.as_ref())));
    let status = Signal::derive(move || pool.data.with(|p| status_cards(p.as_ref())));
    let collateral_set = Signal::derive(move || {
        pool.data
            .with(|p| collateral.data.with(|m| collateral_cards(p.as_ref(), m.as_ref())))
    });
    let title_set = Signal::derive(move || {
        pool.data
            .with(|p| title.data.with(|m| title_cards(p.as_ref(), m.as_ref())))
    });
    let valuation_set = Signal::derive(move || {
        pool.data
            .with(|p| valuations.data.with(|m| valuation_cards(p.as_ref(), m.as_ref())))
    });

    let error = Signal::derive(move || {
        [pool.error, collateral.error, title.error, valuations.error]
            .iter()
            .find_map(|e| e.get())
    });

    view! {
        <div class="page page--dashboard">
            <PageHeader title="Acquisition Summary">
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || selection.current().is_none())
                    on_click=move |_| reload()
                >
                    "Refresh"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show
                when=move || selection.current().is_some()
                fallback=|| view! { <div class="empty-state">"Select a seller and trade to see the pool."</div> }
            >
                <div class="stat-grid stat-grid--headline">
                    <StatCard
                        label="Assets"
                        icon_name="home"
                        value=Signal::derive(move || format_count(headline.get().assets))
                    />
                    <StatCard
                        label="Current Balance"
                        icon_name="dollar-sign"
                        value=Signal::derive(move || format_compact_currency(headline.get().current_balance))
                    />
                    <StatCard
                        label="Total Debt"
                        icon_name="dollar-sign"
                        value=Signal::derive(move || format_compact_currency(headline.get().total_debt))
                    />
                    <StatCard
                        label="Seller As-Is Value"
                        icon_name="bar-chart"
                        value=Signal::derive(move || format_compact_currency(headline.get().seller_asis_value))
                        subtitle=Signal::derive(move || {
                            Some(format!(
                                "Balance / value: {}",
                                format_optional_percent(headline.get().balance_to_value_pct, 1)
                            ))
                        })
                    />
                </div>

                <CardSection title="Loan Status" cards=status tone=Tone::Info loading=pool.loading />
                <CardSection
                    title="Collateral"
                    cards=collateral_set
                    tone=Tone::Brand
                    loading=collateral.loading
                />
                <CardSection title="Title" cards=title_set tone=Tone::Warning loading=title.loading />
                <CardSection
                    title="Valuations"
                    cards=valuation_set
                    tone=Tone::Success
                    loading=valuations.loading
                />
            </Show>
        </div>
    }
}
