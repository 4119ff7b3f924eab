use serde::Serialize;

use crate::tables::ReferenceTables;

/// Channel naming scheme of a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// Most labels carry a hemisphere letter (`LTP1`, `RA2`)
    Standard,
    /// Fewer than half of the labels contain `L` or `R`
    #[serde(rename = "washu")]
    WashU,
}

impl NamingConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::WashU => "washu",
        }
    }
}

/// Why a channel was left out of the macro set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    Eeg,
    Micro,
    Misc,
    Dc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedChannel {
    pub index: usize,
    pub label: String,
    pub reason: ExclusionReason,
}

/// Result of splitting a channel list into macro and non-macro channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub convention: NamingConvention,
    /// Indices of macro channels, ascending
    pub keep: Vec<usize>,
    pub excluded: Vec<ExcludedChannel>,
}

impl Classification {
    /// Kept labels in input order
    pub fn kept_labels<S: AsRef<str>>(&self, labels: &[S]) -> Vec<String> {
        self.keep
            .iter()
            .filter_map(|&i| labels.get(i))
            .map(|s| {
                let s: &str = s.as_ref();
                s.to_string()
            })
            .collect()
    }
}

/// Decide the naming convention by majority vote over the labels.
pub fn detect_naming_convention<S: AsRef<str>>(labels: &[S]) -> NamingConvention {
    if labels.is_empty() {
        return NamingConvention::Standard;
    }

    let lateralized = labels
        .iter()
        .filter(|l| {
            let l: &str = l.as_ref();
            l.contains('L') || l.contains('R')
        })
        .count();

    // lateralized / len < 0.5
    if lateralized * 2 < labels.len() {
        NamingConvention::WashU
    } else {
        NamingConvention::Standard
    }
}

fn exclusion_reason(
    label: &str,
    eeg_names: &[String],
    tables: &ReferenceTables,
) -> Option<ExclusionReason> {
    if eeg_names.iter().any(|name| name == label) {
        Some(ExclusionReason::Eeg)
    } else if label.contains(tables.micro_marker.as_str()) {
        Some(ExclusionReason::Micro)
    } else if tables.misc_names.iter().any(|name| label.contains(name.as_str())) {
        Some(ExclusionReason::Misc)
    } else if label.starts_with(tables.dc_prefix.as_str()) {
        Some(ExclusionReason::Dc)
    } else {
        None
    }
}

/// Split a recording's channel list into macro contacts and the rest.
///
/// Scalp EEG names must match exactly; the misc names and the micro marker
/// match anywhere inside a label; DC channels match on their prefix. The EEG
/// table is chosen once for the whole list from its naming convention.
pub fn classify<S: AsRef<str>>(labels: &[S], tables: &ReferenceTables) -> Classification {
    let convention = detect_naming_convention(labels);
    let eeg_names = match convention {
        NamingConvention::Standard => &tables.eeg_names,
        NamingConvention::WashU => &tables.washu_eeg_names,
    };

    let mut keep = Vec::with_capacity(labels.len());
    let mut excluded = Vec::new();

    for (index, label) in labels.iter().enumerate() {
        let label: &str = label.as_ref();
        match exclusion_reason(label, eeg_names, tables) {
            Some(reason) => {
                log::trace!("Excluding channel {} ({}): {:?}", index, label, reason);
                excluded.push(ExcludedChannel {
                    index,
                    label: label.to_string(),
                    reason,
                });
            }
            None => keep.push(index),
        }
    }

    log::info!(
        "Classified {} channels ({} convention): {} macro, {} excluded",
        labels.len(),
        convention.as_str(),
        keep.len(),
        excluded.len()
    );

    Classification {
        convention,
        keep,
        excluded,
    }
}

/// Indices of the macro channels to keep.
pub fn select_macro_indices<S: AsRef<str>>(labels: &[S], tables: &ReferenceTables) -> Vec<usize> {
    classify(labels, tables).keep
}

/// Macro channel labels, in input order, ready for montage construction.
pub fn select_macro_labels<S: AsRef<str>>(labels: &[S], tables: &ReferenceTables) -> Vec<String> {
    classify(labels, tables).kept_labels(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_convention() {
        let labels = ["LTP1", "LTP2", "RA1", "Fz"];
        assert_eq!(detect_naming_convention(&labels), NamingConvention::Standard);
    }

    #[test]
    fn test_washu_convention() {
        let labels = ["A1", "B1", "C1", "LTP1"];
        assert_eq!(detect_naming_convention(&labels), NamingConvention::WashU);
    }

    #[test]
    fn test_exactly_half_is_standard() {
        let labels = ["LA1", "B1"];
        assert_eq!(detect_naming_convention(&labels), NamingConvention::Standard);
    }

    #[test]
    fn test_lowercase_letters_do_not_count() {
        let labels = ["la1", "rb1", "LC1"];
        assert_eq!(detect_naming_convention(&labels), NamingConvention::WashU);
    }

    #[test]
    fn test_empty_labels() {
        let labels: [&str; 0] = [];
        assert_eq!(detect_naming_convention(&labels), NamingConvention::Standard);
        assert!(select_macro_indices(&labels, &ReferenceTables::default()).is_empty());
    }

    #[test]
    fn test_select_macro_indices_standard() {
        let labels = [
            "LTP1", "LTP2", "Fz", "C3", "LmA1", "EKG1", "DC01", "RA1", "REF", "chan3",
        ];
        let tables = ReferenceTables::default();
        assert_eq!(select_macro_indices(&labels, &tables), vec![0, 1, 7]);
    }

    #[test]
    fn test_exclusion_reasons() {
        let labels = ["LTP1", "C3", "LmA1", "LGND", "DC1"];
        let result = classify(&labels, &ReferenceTables::default());
        let reasons: Vec<_> = result.excluded.iter().map(|e| (e.index, e.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (1, ExclusionReason::Eeg),
                (2, ExclusionReason::Micro),
                (3, ExclusionReason::Misc),
                (4, ExclusionReason::Dc),
            ]
        );
    }

    #[test]
    fn test_washu_uses_reduced_eeg_set() {
        // C3 is scalp EEG under the standard table but not in the WashU set.
        let labels = ["A1", "A2", "C3", "Fz", "LA1"];
        let result = classify(&labels, &ReferenceTables::default());
        assert_eq!(result.convention, NamingConvention::WashU);
        assert_eq!(result.kept_labels(&labels), vec!["A1", "A2", "C3", "LA1"]);
    }

    #[test]
    fn test_eeg_match_is_exact() {
        let labels = ["LFz1", "Fz", "LA1"];
        let kept = select_macro_labels(&labels, &ReferenceTables::default());
        assert_eq!(kept, vec!["LFz1", "LA1"]);
    }

    #[test]
    fn test_custom_tables() {
        let tables = ReferenceTables {
            misc_names: vec!["TRIG".to_string()],
            micro_marker: "u".to_string(),
            ..ReferenceTables::default()
        };
        let labels = ["LTRIG1", "LuA1", "LmA1", "EKG"];
        assert_eq!(select_macro_indices(&labels, &tables), vec![2, 3]);
    }
}
