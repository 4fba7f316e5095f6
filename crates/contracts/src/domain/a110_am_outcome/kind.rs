use crate::shared::tone::Tone;
use serde::{Deserialize, Serialize};

/// Resolution path of an asset under management.
///
/// The serialized form is the slug used in `/am/outcomes/{slug}-tasks/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeKind {
    #[serde(rename = "fc")]
    Foreclosure,
    #[serde(rename = "reo")]
    Reo,
    #[serde(rename = "dil")]
    Dil,
    #[serde(rename = "short-sale")]
    ShortSale,
    #[serde(rename = "modification")]
    Modification,
    #[serde(rename = "note-sale")]
    NoteSale,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 6] = [
        OutcomeKind::Foreclosure,
        OutcomeKind::Reo,
        OutcomeKind::Dil,
        OutcomeKind::ShortSale,
        OutcomeKind::Modification,
        OutcomeKind::NoteSale,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            OutcomeKind::Foreclosure => "fc",
            OutcomeKind::Reo => "reo",
            OutcomeKind::Dil => "dil",
            OutcomeKind::ShortSale => "short-sale",
            OutcomeKind::Modification => "modification",
            OutcomeKind::NoteSale => "note-sale",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            OutcomeKind::Foreclosure => "Foreclosure",
            OutcomeKind::Reo => "REO",
            OutcomeKind::Dil => "Deed-in-Lieu",
            OutcomeKind::ShortSale => "Short Sale",
            OutcomeKind::Modification => "Modification",
            OutcomeKind::NoteSale => "Note Sale",
        }
    }

    /// Header tone of the outcome card.
    pub fn tone(self) -> Tone {
        match self {
            OutcomeKind::Foreclosure => Tone::Danger,
            OutcomeKind::Reo => Tone::Brand,
            OutcomeKind::Dil => Tone::Warning,
            OutcomeKind::ShortSale => Tone::Info,
            OutcomeKind::Modification => Tone::Success,
            OutcomeKind::NoteSale => Tone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip_matches_serde() {
        for kind in OutcomeKind::ALL {
            assert_eq!(OutcomeKind::from_slug(kind.slug()), Some(kind));
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(kind.slug().to_string())
            );
        }
        assert_eq!(OutcomeKind::from_slug("FC"), None);
    }
}
