use crate::cli::BipolarArgs;
use crate::exit_codes;
use crate::labels;
use crate::output;
use montage_rs::{BipolarMontage, MontageBuilder};
use serde::Serialize;

#[derive(Serialize)]
pub struct MontageReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub anodes: Vec<String>,
    pub cathodes: Vec<String>,
    pub derivations: Vec<String>,
}

impl MontageReport {
    pub fn new(montage: BipolarMontage, file: Option<String>) -> Self {
        let derivations = montage.derivation_names();
        let (anodes, cathodes) = montage.into_parts();
        Self {
            file,
            anodes,
            cathodes,
            derivations,
        }
    }
}

pub fn execute(args: BipolarArgs) -> i32 {
    let labels = match labels::resolve_labels(&args.input) {
        Ok(l) => l,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    let tables = match labels::load_tables(&args.tables) {
        Ok(t) => t,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    let channel_count = labels.len();
    let macros = labels::macro_labels(labels, args.classify, &tables);

    // Plain text straight to the terminal is the builder's own display output.
    let print_pairs = !args.json && args.output.is_none();
    let builder = MontageBuilder::new().verbose(print_pairs);

    let montage = match builder.build(&macros) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    if !args.quiet {
        eprintln!(
            "{} derivations from {} channels ({} macro)",
            montage.len(),
            channel_count,
            macros.len()
        );
    }

    if print_pairs {
        return exit_codes::SUCCESS;
    }

    let written = if args.json {
        output::emit_json(
            &MontageReport::new(montage, None),
            args.compact,
            args.output.as_deref(),
        )
    } else {
        let mut text = Vec::new();
        match montage.write_display(&mut text) {
            Ok(()) => output::write_report(&String::from_utf8_lossy(&text), args.output.as_deref()),
            Err(e) => Err(format!("Failed to format montage: {}", e)),
        }
    };

    if let Err(e) = written {
        eprintln!("Error: {}", e);
        return exit_codes::EXECUTION_ERROR;
    }

    if !args.quiet {
        if let Some(ref path) = args.output {
            eprintln!("Montage written to {}", path);
        }
    }

    exit_codes::SUCCESS
}
