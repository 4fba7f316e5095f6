use serde::{Deserialize, Serialize};

/// Visual tone of a badge, card or cell. The frontend maps it to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Brand,
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl Tone {
    /// Positive for values `>= 0`, negative otherwise, neutral when missing.
    pub fn by_sign(value: Option<f64>) -> Self {
        match value {
            Some(v) if v < 0.0 => Tone::Danger,
            Some(_) => Tone::Success,
            None => Tone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_sign() {
        assert_eq!(Tone::by_sign(Some(-0.01)), Tone::Danger);
        assert_eq!(Tone::by_sign(Some(0.0)), Tone::Success);
        assert_eq!(Tone::by_sign(Some(500.0)), Tone::Success);
        assert_eq!(Tone::by_sign(None), Tone::Neutral);
    }
}
