use crate::cli::TablesArgs;
use crate::exit_codes;
use crate::labels;
use crate::output;

pub fn execute(args: TablesArgs) -> i32 {
    let tables = match labels::load_tables(&args.tables) {
        Ok(t) => t,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if args.json {
        if let Err(e) = output::emit_json(&tables, false, None) {
            eprintln!("Error: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
    } else {
        let source = args.tables.as_deref().unwrap_or("built-in");
        println!("Reference tables ({}):\n", source);
        println!("  {:<18} {}", "Misc (substring)", tables.misc_names.join(" "));
        println!("  {:<18} {}", "EEG (exact)", tables.eeg_names.join(" "));
        println!("  {:<18} {}", "WashU EEG (exact)", tables.washu_eeg_names.join(" "));
        println!("  {:<18} {}", "DC prefix", tables.dc_prefix);
        println!("  {:<18} {}", "Micro marker", tables.micro_marker);
        println!();
        println!("WashU tables apply when fewer than half of the labels contain 'L' or 'R'.");
    }

    exit_codes::SUCCESS
}
