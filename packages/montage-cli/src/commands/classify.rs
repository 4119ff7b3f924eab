use crate::cli::ClassifyArgs;
use crate::exit_codes;
use crate::labels;
use crate::output;
use montage_rs::{classify, ExcludedChannel, NamingConvention};
use serde::Serialize;

#[derive(Serialize)]
struct ClassifyOutput {
    convention: NamingConvention,
    keep: Vec<usize>,
    macro_labels: Vec<String>,
    excluded: Vec<ExcludedChannel>,
}

pub fn execute(args: ClassifyArgs) -> i32 {
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

    let classification = classify(&labels, &tables);
    let result = ClassifyOutput {
        convention: classification.convention,
        macro_labels: classification.kept_labels(&labels),
        keep: classification.keep,
        excluded: classification.excluded,
    };

    if args.json {
        if let Err(e) = output::emit_json(&result, false, None) {
            eprintln!("Error: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
    } else {
        println!("Naming convention: {}", result.convention.as_str());
        println!(
            "Macro channels ({}): {}",
            result.macro_labels.len(),
            result.macro_labels.join(" ")
        );
        println!("Excluded channels ({}):", result.excluded.len());
        for ch in &result.excluded {
            println!("  {:<4} {:<12} {:?}", ch.index, ch.label, ch.reason);
        }
    }

    exit_codes::SUCCESS
}
