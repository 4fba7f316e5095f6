use contracts::shared::tone::Tone;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

pub fn badge_color(tone: Tone) -> BadgeColor {
    match tone {
        Tone::Brand => BadgeColor::Brand,
        Tone::Success => BadgeColor::Success,
        Tone::Warning => BadgeColor::Warning,
        Tone::Danger => BadgeColor::Danger,
        Tone::Info => BadgeColor::Informative,
        Tone::Neutral => BadgeColor::Subtle,
    }
}

/// Tinted thaw badge coloured by a [`Tone`].
#[component]
pub fn ToneBadge(tone: Tone, children: Children) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
            {children()}
        </Badge>
    }
}
