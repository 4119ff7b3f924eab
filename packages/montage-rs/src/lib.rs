pub mod classify;
pub mod error;
pub mod label;
pub mod montage;
pub mod tables;
pub mod types;

pub use classify::{
    classify, detect_naming_convention, select_macro_indices, select_macro_labels,
    Classification, ExcludedChannel, ExclusionReason, NamingConvention,
};
pub use error::{MontageError, Result};
pub use label::{contact_index, lead_prefix};
pub use montage::{create_bipolar_montage, MontageBuilder};
pub use tables::ReferenceTables;
pub use types::*;
