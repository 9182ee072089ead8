//! Trade: the kind of field work. Used both as a worker's specialty and a job's type.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trade {
    Plumbing,
    Electrical,
    Drilling,
    Hvac,
}

impl Trade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trade::Plumbing => "plumbing",
            Trade::Electrical => "electrical",
            Trade::Drilling => "drilling",
            Trade::Hvac => "hvac",
        }
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
