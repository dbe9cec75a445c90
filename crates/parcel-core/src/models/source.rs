use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of one external record portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceId {
    /// Delhi Online Registration Information System.
    #[serde(rename = "doris", alias = "DORIS")]
    Doris,
    /// Department of Land Records.
    #[serde(rename = "dlr", alias = "DLR")]
    Dlr,
    /// Central Registry of Securitisation Asset Reconstruction and Security Interest.
    #[serde(rename = "cersai", alias = "CERSAI")]
    Cersai,
    /// Ministry of Corporate Affairs portal.
    #[serde(rename = "mca21", alias = "MCA21", alias = "mca")]
    Mca21,
}

impl SourceId {
    /// All known sources, in default query priority order.
    pub const ALL: [SourceId; 4] = [
        SourceId::Doris,
        SourceId::Dlr,
        SourceId::Cersai,
        SourceId::Mca21,
    ];

    /// Stable lowercase identifier used in config and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doris => "doris",
            Self::Dlr => "dlr",
            Self::Cersai => "cersai",
            Self::Mca21 => "mca21",
        }
    }

    /// Short display name of the portal.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Doris => "DORIS",
            Self::Dlr => "DLR",
            Self::Cersai => "CERSAI",
            Self::Mca21 => "MCA21",
        }
    }

    /// Full portal name.
    pub fn description(self) -> &'static str {
        match self {
            Self::Doris => "Delhi Online Registration Information System",
            Self::Dlr => "Department of Land Records",
            Self::Cersai => {
                "Central Registry of Securitisation Asset Reconstruction and Security Interest"
            }
            Self::Mca21 => "Ministry of Corporate Affairs Portal",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "doris" => Ok(Self::Doris),
            "dlr" => Ok(Self::Dlr),
            "cersai" => Ok(Self::Cersai),
            "mca21" | "mca" => Ok(Self::Mca21),
            other => Err(format!("unknown source: {other}")),
        }
    }
}
