use contracts::shared::selection::{SellerOption, TradeOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{api, use_selection};
use crate::shared::components::ui::{parse_id, Select};

fn seller_options(sellers: &[SellerOption]) -> Vec<(String, String)> {
    sellers
        .iter()
        .map(|s| (s.id.to_string(), s.name.clone()))
        .collect()
}

fn trade_options(trades: &[TradeOption]) -> Vec<(String, String)> {
    trades
        .iter()
        .map(|t| {
            let label = match t.status.as_deref() {
                Some(status) if !status.is_empty() => format!("{} ({})", t.trade_name, status),
                _ => t.trade_name.clone(),
            };
            (t.id.to_string(), label)
        })
        .collect()
}

/// Seller and trade dropdowns. Picking a seller reloads its trades.
#[component]
pub fn SelectionBar() -> impl IntoView {
    let selection = use_selection();
    let sellers = RwSignal::new(Vec::<SellerOption>::new());
    let trades = RwSignal::new(Vec::<TradeOption>::new());
    let trades_loading = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_sellers().await {
            Ok(list) => sellers.set(list),
            Err(e) => log::error!("Failed to load sellers: {}", e),
        }
    });

    Effect::new(move |_| {
        let Some(seller_id) = selection.seller_id() else {
            trades.set(Vec::new());
            return;
        };
        trades_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_trades(seller_id).await;
            // A newer seller may have been picked while this was in flight.
            if selection.seller_id_untracked() != Some(seller_id) {
                return;
            }
            match result {
                Ok(list) => trades.set(list),
                Err(e) => {
                    log::error!("Failed to load trades for seller {}: {}", seller_id, e);
                    trades.set(Vec::new());
                }
            }
            trades_loading.set(false);
        });
    });

    view! {
        <div class="selection-bar">
            <Select
                label="Seller"
                placeholder="Select seller..."
                value=Signal::derive(move || {
                    selection.seller_id().map(|id| id.to_string()).unwrap_or_default()
                })
                options=Signal::derive(move || sellers.with(|s| seller_options(s)))
                on_change=Callback::new(move |v: String| selection.set_seller(parse_id(&v)))
            />
            <Select
                label="Trade"
                placeholder="Select trade..."
                value=Signal::derive(move || {
                    selection.trade_id().map(|id| id.to_string()).unwrap_or_default()
                })
                options=Signal::derive(move || trades.with(|t| trade_options(t)))
                disabled=Signal::derive(move || {
                    selection.seller_id().is_none() || trades_loading.get()
                })
                on_change=Callback::new(move |v: String| selection.set_trade(parse_id(&v)))
            />
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || selection.seller_id().is_none())
                on_click=move |_| selection.reset()
            >
                "Reset"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_label_includes_status() {
        let trades = vec![
            TradeOption {
                id: 12,
                trade_name: "Spring Pool".into(),
                status: Some("Bidding".into()),
            },
            TradeOption {
                id: 13,
                trade_name: "Fall Pool".into(),
                status: None,
            },
        ];
        assert_eq!(
            trade_options(&trades),
            vec![
                ("12".to_string(), "Spring Pool (Bidding)".to_string()),
                ("13".to_string(), "Fall Pool".to_string()),
            ]
        );
    }
}
