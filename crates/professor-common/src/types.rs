use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How deep the professor's explanations go.
///
/// Parsing is lenient: anything that is not exactly `concise`, `detailed`
/// or `academic` becomes [`DepthLevel::Detailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DepthLevel {
    Concise,
    #[default]
    Detailed,
    Academic,
}

impl DepthLevel {
    pub const ALL: [DepthLevel; 3] = [Self::Concise, Self::Detailed, Self::Academic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Detailed => "detailed",
            Self::Academic => "academic",
        }
    }
}

impl From<&str> for DepthLevel {
    fn from(value: &str) -> Self {
        match value {
            "concise" => Self::Concise,
            "academic" => Self::Academic,
            _ => Self::Detailed,
        }
    }
}

impl From<String> for DepthLevel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for DepthLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DepthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
