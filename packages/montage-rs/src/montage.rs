use std::collections::BTreeSet;
use std::io::Write;

use rayon::prelude::*;

use crate::error::Result;
use crate::label::{contact_index, lead_prefix, matches_lead};
use crate::types::BipolarMontage;

/// Bipolar montage builder
///
/// Pairs every contact with the next contact on the same lead when their
/// contact numbers differ by exactly one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MontageBuilder {
    verbose: bool,
}

impl MontageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print each derivation as `"<anode> - <cathode>"` on stdout after a
    /// successful build
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the bipolar montage for one recording.
    ///
    /// Leads are visited in ascending order of their prefix. Within a lead,
    /// contacts keep the order in which they appear in `labels`; only
    /// neighbours in that order are candidates, so a gap in the numbering
    /// (`RA2`, `RA4`) or an out-of-order listing breaks the chain.
    ///
    /// # Errors
    /// [`MontageError::NumericParse`](crate::MontageError::NumericParse) when
    /// any label carries no contact number. Nothing is printed in that case.
    pub fn build<S: AsRef<str>>(&self, labels: &[S]) -> Result<BipolarMontage> {
        let montage = pair_adjacent_contacts(labels)?;

        if self.verbose {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            montage.write_display(&mut handle)?;
        }

        Ok(montage)
    }

    /// Build montages for several independent recordings in parallel.
    ///
    /// Results keep the order of `label_sets`. Verbose output, if enabled, is
    /// printed afterwards in that same order.
    pub fn build_many<S>(&self, label_sets: &[Vec<S>]) -> Vec<Result<BipolarMontage>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<Result<BipolarMontage>> = label_sets
            .par_iter()
            .map(|labels| pair_adjacent_contacts(labels))
            .collect();

        if self.verbose {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = write_successful(&results, &mut handle) {
                log::warn!("Failed to print montages: {}", e);
            }
        }

        results
    }
}

/// Display lines of every montage that built, in order; failed sets print
/// nothing.
fn write_successful<W: Write>(
    results: &[Result<BipolarMontage>],
    writer: &mut W,
) -> std::io::Result<()> {
    for montage in results.iter().flatten() {
        montage.write_display(writer)?;
    }
    Ok(())
}

/// Build a bipolar montage, optionally printing it.
///
/// Shorthand for `MontageBuilder::new().verbose(display).build(labels)`.
pub fn create_bipolar_montage<S: AsRef<str>>(labels: &[S], display: bool) -> Result<BipolarMontage> {
    MontageBuilder::new().verbose(display).build(labels)
}

fn pair_adjacent_contacts<S: AsRef<str>>(labels: &[S]) -> Result<BipolarMontage> {
    let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();

    // A label that sits alone on its lead is never compared, so check every
    // contact number before pairing.
    for label in &labels {
        contact_index(label)?;
    }

    let prefixes: BTreeSet<String> = labels.iter().map(|l| lead_prefix(l)).collect();

    log::info!(
        "Building bipolar montage: {} channels on {} leads",
        labels.len(),
        prefixes.len()
    );

    let mut montage = BipolarMontage::new();

    for prefix in &prefixes {
        let lead: Vec<&str> = labels
            .iter()
            .copied()
            .filter(|l| matches_lead(l, prefix))
            .collect();

        for label in &lead {
            if lead_prefix(label) != *prefix {
                log::warn!(
                    "Channel {} grouped with lead {} by substring match",
                    label,
                    prefix
                );
            }
        }

        let indices = lead
            .iter()
            .map(|l| contact_index(l))
            .collect::<Result<Vec<u64>>>()?;

        let before = montage.len();
        for x in 0..lead.len().saturating_sub(1) {
            if indices[x + 1].checked_sub(indices[x]) == Some(1) {
                montage.push(lead[x], lead[x + 1]);
            }
        }

        log::debug!(
            "Lead {}: {} contacts, {} derivations",
            prefix,
            lead.len(),
            montage.len() - before
        );
    }

    log::info!("Bipolar montage has {} derivations", montage.len());

    Ok(montage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MontageError;

    fn build(labels: &[&str]) -> Result<BipolarMontage> {
        MontageBuilder::new().build(labels)
    }

    #[test]
    fn test_two_leads_in_prefix_order() {
        let montage = build(&["LTP1", "LTP2", "LTP3", "LOF1", "LOF2"]).unwrap();
        assert_eq!(montage.anodes(), ["LOF1", "LTP1", "LTP2"]);
        assert_eq!(montage.cathodes(), ["LOF2", "LTP2", "LTP3"]);
    }

    #[test]
    fn test_gap_in_numbering_is_skipped() {
        let montage = build(&["RA1", "RA2", "RA4", "RA5"]).unwrap();
        assert_eq!(montage.anodes(), ["RA1", "RA4"]);
        assert_eq!(montage.cathodes(), ["RA2", "RA5"]);
    }

    #[test]
    fn test_single_contact_lead() {
        let montage = build(&["X1"]).unwrap();
        assert!(montage.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let montage = build(&[]).unwrap();
        assert!(montage.is_empty());
    }

    #[test]
    fn test_label_without_digits_fails() {
        let err = build(&["ABC"]).unwrap_err();
        assert!(matches!(err, MontageError::NumericParse { ref label } if label == "ABC"));
    }

    #[test]
    fn test_unparsable_label_among_valid_ones_fails() {
        assert!(build(&["LA1", "LA2", "REF"]).is_err());
    }

    #[test]
    fn test_contacts_nine_and_ten_pair() {
        let montage = build(&["LH8", "LH9", "LH10", "LH11"]).unwrap();
        assert_eq!(montage.anodes(), ["LH8", "LH9", "LH10"]);
        assert_eq!(montage.cathodes(), ["LH9", "LH10", "LH11"]);
    }

    #[test]
    fn test_only_neighbouring_positions_are_compared() {
        // LA2 -> LA1 is -1 and LA1 -> LA3 is +2: nothing pairs.
        let montage = build(&["LA2", "LA1", "LA3"]).unwrap();
        assert!(montage.is_empty());
    }

    #[test]
    fn test_input_order_is_not_resorted() {
        // Sorted, LA1-LA2 would pair too; by position only LA2-LA3 does.
        let montage = build(&["LA2", "LA3", "LA1"]).unwrap();
        assert_eq!(montage.anodes(), ["LA2"]);
        assert_eq!(montage.cathodes(), ["LA3"]);
    }

    #[test]
    fn test_descending_listing_yields_nothing() {
        let montage = build(&["LA3", "LA2", "LA1"]).unwrap();
        assert!(montage.is_empty());
    }

    #[test]
    fn test_substring_grouping_bleeds_across_leads() {
        // "F" is contained in "AF1"/"AF2", so the F lead collects all four.
        let montage = build(&["AF1", "AF2", "F1", "F2"]).unwrap();
        let pairs: Vec<(&str, &str)> = montage.pairs().map(|p| (p.anode, p.cathode)).collect();
        assert_eq!(
            pairs,
            vec![("AF1", "AF2"), ("AF1", "AF2"), ("F1", "F2")]
        );
    }

    #[test]
    fn test_build_many_keeps_order() {
        let sets = vec![
            vec!["RA1", "RA2"],
            vec!["ABC"],
            vec!["LB1", "LB2", "LB3"],
        ];
        let results = MontageBuilder::new().build_many(&sets);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 1);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_verbose_batch_output_skips_failures_in_order() {
        let sets = vec![vec!["LB1", "LB2"], vec!["ABC"], vec!["RA3", "RA4"]];
        let results = MontageBuilder::new().build_many(&sets);

        let mut buf = Vec::new();
        write_successful(&results, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "LB1 - LB2\nRA3 - RA4\n");
    }

    #[test]
    fn test_create_bipolar_montage_matches_builder() {
        let labels = ["LTP1", "LTP2", "LTP3"];
        let a = create_bipolar_montage(&labels, false).unwrap();
        let b = MontageBuilder::new().build(&labels).unwrap();
        assert_eq!(a, b);
    }
}
