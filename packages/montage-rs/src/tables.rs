//! Reference tables used to tell macro contacts apart from everything else
//! in a recording's channel list.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MontageError, Result};

/// Auxiliary channel names that BCI2000 montages sometimes carry
pub const DEFAULT_MISC_NAMES: &[&str] = &["GND", "PD", "Sync", "EMPTY", "REF", "EKG", "chan", "_"];

/// Scalp EEG names of the standard 10-20 montage
pub const DEFAULT_EEG_NAMES: &[&str] = &[
    "FP1", "Fp1", "AF3", "F3", "F7", "F9", "FC5", "FC1", "FP2", "Fp2", "AF4", "F4", "F8", "F10",
    "FC6", "FC2", "T7", "C3", "CP5", "CP1", "P3", "P7", "PO3", "PO7", "T8", "C4", "CP6", "CP2",
    "P4", "P8", "PO4", "PO8", "O1", "O2", "A1", "A2", "FZ", "CZ", "PZ", "FPZ", "OZ", "Cz", "Fz",
    "Pz", "Oz",
];

/// Reduced scalp EEG set used with the WashU naming convention
pub const DEFAULT_WASHU_EEG_NAMES: &[&str] = &[
    "Fp1", "Fp2", "CZ", "Cz", "FPZ", "FZ", "Fz", "PZ", "Pz", "OZ", "Oz", "T7", "T8",
];

pub const DEFAULT_DC_PREFIX: &str = "DC";

pub const DEFAULT_MICRO_MARKER: &str = "m";

/// Channel reference tables
///
/// Every field falls back to its default when missing from a JSON document,
/// so a site-specific file only needs the tables it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    /// Matched as substrings
    pub misc_names: Vec<String>,
    /// Matched exactly
    pub eeg_names: Vec<String>,
    /// Matched exactly, replaces `eeg_names` under the WashU convention
    pub washu_eeg_names: Vec<String>,
    /// Digital/DC input channels start with this
    pub dc_prefix: String,
    /// Microelectrode channels contain this
    pub micro_marker: String,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            misc_names: owned(DEFAULT_MISC_NAMES),
            eeg_names: owned(DEFAULT_EEG_NAMES),
            washu_eeg_names: owned(DEFAULT_WASHU_EEG_NAMES),
            dc_prefix: DEFAULT_DC_PREFIX.to_string(),
            micro_marker: DEFAULT_MICRO_MARKER.to_string(),
        }
    }
}

impl ReferenceTables {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading reference tables from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject tables whose markers would match every label
    pub fn validate(&self) -> Result<()> {
        if self.dc_prefix.is_empty() {
            return Err(MontageError::InvalidConfig(
                "dc_prefix must not be empty".to_string(),
            ));
        }
        if self.micro_marker.is_empty() {
            return Err(MontageError::InvalidConfig(
                "micro_marker must not be empty".to_string(),
            ));
        }
        if self.misc_names.iter().any(|s| s.is_empty()) {
            return Err(MontageError::InvalidConfig(
                "misc_names must not contain an empty name".to_string(),
            ));
        }
        Ok(())
    }
}
