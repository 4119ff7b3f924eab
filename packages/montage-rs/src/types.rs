use serde::Serialize;
use std::fmt;
use std::io::Write;

/// One bipolar derivation between two adjacent contacts on a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BipolarPair<'a> {
    pub anode: &'a str,
    pub cathode: &'a str,
}

impl BipolarPair<'_> {
    /// Channel name of the re-referenced signal, e.g. `LTP1-LTP2`
    pub fn derivation_name(&self) -> String {
        format!("{}-{}", self.anode, self.cathode)
    }
}

impl fmt::Display for BipolarPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.anode, self.cathode)
    }
}

/// Bipolar montage as two parallel label sequences.
///
/// `anodes[i]` and `cathodes[i]` always form one derivation; the sequences
/// can only grow together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BipolarMontage {
    anodes: Vec<String>,
    cathodes: Vec<String>,
}

impl BipolarMontage {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, anode: &str, cathode: &str) {
        self.anodes.push(anode.to_string());
        self.cathodes.push(cathode.to_string());
    }

    pub fn anodes(&self) -> &[String] {
        &self.anodes
    }

    pub fn cathodes(&self) -> &[String] {
        &self.cathodes
    }

    pub fn len(&self) -> usize {
        self.anodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anodes.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = BipolarPair<'_>> {
        self.anodes
            .iter()
            .zip(&self.cathodes)
            .map(|(anode, cathode)| BipolarPair {
                anode: anode.as_str(),
                cathode: cathode.as_str(),
            })
    }

    pub fn derivation_names(&self) -> Vec<String> {
        self.pairs().map(|p| p.derivation_name()).collect()
    }

    /// Write one `"<anode> - <cathode>"` line per derivation
    pub fn write_display<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for pair in self.pairs() {
            writeln!(writer, "{}", pair)?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.anodes, self.cathodes)
    }
}
