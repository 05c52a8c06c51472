use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Province {
    WestVlaanderen,
    #[default]
    OostVlaanderen,
}

impl Province {
    /// Every label other than `West-Vlaanderen` lands in Oost-Vlaanderen.
    #[must_use]
    pub fn of(label: &str) -> Self {
        if label.trim() == "West-Vlaanderen" {
            Self::WestVlaanderen
        } else {
            Self::OostVlaanderen
        }
    }

    /// The key of this province's list in the location index.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::WestVlaanderen => "west-vlaanderen",
            Self::OostVlaanderen => "oost-vlaanderen",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Province::WestVlaanderen => write!(f, "West-Vlaanderen"),
            Province::OostVlaanderen => write!(f, "Oost-Vlaanderen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Province;

    #[test]
    fn labels() {
        assert_eq!(Province::of("West-Vlaanderen"), Province::WestVlaanderen);
        assert_eq!(Province::of(" West-Vlaanderen "), Province::WestVlaanderen);
        assert_eq!(Province::of("Oost-Vlaanderen"), Province::OostVlaanderen);
        assert_eq!(Province::of("Antwerpen"), Province::OostVlaanderen);
        assert_eq!(Province::of("west-vlaanderen"), Province::OostVlaanderen);
    }

    #[test]
    fn display_and_key() {
        assert_eq!(Province::WestVlaanderen.to_string(), "West-Vlaanderen");
        assert_eq!(Province::OostVlaanderen.key(), "oost-vlaanderen");
    }
}
