use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Positive,
    Negative,
}

impl Classification {
    /// Zero counts as positive.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity >= 0.0 {
            Classification::Positive
        } else {
            Classification::Negative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Positive => "positive",
            Classification::Negative => "negative",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
