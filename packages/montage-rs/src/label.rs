//! Channel label parsing.
//!
//! A macro contact label is a lead name followed by a contact number, e.g.
//! `LTP3` is contact 3 on lead `LTP`. Both helpers work on the whole label
//! rather than on a trailing suffix: the lead prefix is the label with every
//! digit removed, and the contact index is every digit in the label read as
//! one integer. For conventional labels the two readings agree.

use crate::error::{MontageError, Result};

/// Lead prefix of a label: the label with all ASCII digits removed.
///
/// `"LTP10"` -> `"LTP"`, `"L2TP1"` -> `"LTP"`. Only `0`-`9` count as digits;
/// other Unicode decimal digits (full-width `１`, Arabic-Indic) stay part of
/// the prefix.
pub fn lead_prefix(label: &str) -> String {
    label.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Contact index of a label: all ASCII digits of the label, concatenated and
/// parsed as an integer.
///
/// Only ASCII `0`-`9` are read, so a label numbered with other Unicode
/// decimal digits (`"LA１"`) has no contact index. Fails with
/// [`MontageError::NumericParse`] when the label has no ASCII digits or the
/// digits overflow a `u64`.
pub fn contact_index(label: &str) -> Result<u64> {
    let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .parse::<u64>()
        .map_err(|_| MontageError::numeric_parse(label))
}

/// True when `label` belongs to the lead named `prefix`.
///
/// This is substring containment, not a leading match: prefix `"F"` also
/// collects `"AF1"`. Leads whose names contain each other therefore bleed
/// into one another.
pub fn matches_lead(label: &str, prefix: &str) -> bool {
    label.contains(prefix)
}
