//! Instrument catalog — the futures contracts SEQLAB ships layouts for.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::schema::{ColumnLayout, CL_LAYOUT, ES_LAYOUT};

/// A supported instrument, carrying its CSV column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instrument {
    Cl,
    Es,
}

impl Instrument {
    pub const ALL: [Instrument; 2] = [Instrument::Cl, Instrument::Es];

    pub fn as_str(self) -> &'static str {
        match self {
            Instrument::Cl => "CL",
            Instrument::Es => "ES",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Instrument::Cl => "Crude Oil",
            Instrument::Es => "E-mini S&P 500",
        }
    }

    pub fn layout(self) -> &'static ColumnLayout {
        match self {
            Instrument::Cl => &CL_LAYOUT,
            Instrument::Es => &ES_LAYOUT,
        }
    }

    /// Parse an instrument code, case-insensitive.
    pub fn parse(s: &str) -> Option<Instrument> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CL" => Some(Instrument::Cl),
            "ES" => Some(Instrument::Es),
            _ => None,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
