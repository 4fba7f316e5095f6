//! Conditional CSS classes for numeric cells.

use contracts::shared::tone::Tone;

pub const POSITIVE_CLASS: &str = "cell-positive";
pub const NEGATIVE_CLASS: &str = "cell-negative";

/// Zero counts as positive; a missing value gets no class.
pub fn sign_class(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v < 0.0 => NEGATIVE_CLASS,
        Some(_) => POSITIVE_CLASS,
        None => "",
    }
}

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Brand => "tone-brand",
        Tone::Success => "tone-success",
        Tone::Warning => "tone-warning",
        Tone::Danger => "tone-danger",
        Tone::Info => "tone-info",
        Tone::Neutral => "tone-neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_pl_sign_drives_class() {
        assert!(sign_class(Some(-500.0)).contains("negative"));
        assert!(sign_class(Some(500.0)).contains("positive"));
        assert!(sign_class(Some(0.0)).contains("positive"));
        assert_eq!(sign_class(None), "");
    }

    #[test]
    fn tone_class_matches_by_sign() {
        assert_eq!(tone_class(Tone::by_sign(Some(-1.0))), "tone-danger");
        assert_eq!(tone_class(Tone::by_sign(Some(1.0))), "tone-success");
    }
}
