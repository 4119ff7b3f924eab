use crate::cli::BatchArgs;
use crate::commands::bipolar::MontageReport;
use crate::exit_codes;
use crate::labels;
use crate::output;
use montage_rs::MontageBuilder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub fn execute(args: BatchArgs) -> i32 {
    // Resolve file list
    let files = match resolve_files(&args) {
        Ok(f) => f,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if files.is_empty() {
        eprintln!("Error: No matching files found");
        return exit_codes::INPUT_ERROR;
    }

    // Dry-run mode: print file list and exit
    if args.dry_run {
        for f in &files {
            println!("{}", f);
        }
        if !args.quiet {
            eprintln!("Found {} file(s)", files.len());
        }
        return exit_codes::SUCCESS;
    }

    let tables = match labels::load_tables(&args.tables) {
        Ok(t) => t,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    let out_paths = match args.output_dir {
        Some(ref dir) => match report_paths(&files, dir) {
            Ok(paths) => Some(paths),
            Err(msg) => {
                eprintln!("Error: {}", msg);
                return exit_codes::INPUT_ERROR;
            }
        },
        None => None,
    };

    // Create output directory if specified
    if let Some(ref dir) = args.output_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: Failed to create output directory '{}': {}", dir, e);
            return exit_codes::EXECUTION_ERROR;
        }
    }

    let total = files.len();
    let start_time = Instant::now();

    let loaded: Vec<Result<Vec<String>, String>> = files
        .iter()
        .map(|f| {
            labels::read_label_file(f).map(|l| labels::macro_labels(l, args.classify, &tables))
        })
        .collect();

    let label_sets: Vec<Vec<String>> = loaded
        .iter()
        .map(|r| r.clone().unwrap_or_default())
        .collect();

    let montages = MontageBuilder::new().build_many(&label_sets);

    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for (i, (file_path, (load, built))) in files
        .iter()
        .zip(loaded.into_iter().zip(montages))
        .enumerate()
    {
        if !args.quiet {
            eprintln!("[{}/{}] {}...", i + 1, total, file_path);
        }

        let montage = match load.and_then(|_| built.map_err(|e| e.to_string())) {
            Ok(m) => m,
            Err(msg) => {
                eprintln!("  Error: {}", msg);
                failed += 1;
                if !args.continue_on_error {
                    break;
                }
                continue;
            }
        };

        let report = MontageReport::new(montage, Some(file_path.clone()));
        let written = match out_paths {
            Some(ref paths) => output::emit_json(&report, args.compact, paths[i].to_str()),
            // JSONL to stdout
            None => output::emit_json(&report, true, None),
        };

        if let Err(e) = written {
            eprintln!("  Error writing output: {}", e);
            failed += 1;
            if !args.continue_on_error {
                break;
            }
            continue;
        }

        succeeded += 1;
    }

    let elapsed = start_time.elapsed();

    if !args.quiet {
        eprintln!(
            "Batch complete: {}/{} succeeded, {}/{} failed, {:.1}s",
            succeeded,
            total,
            failed,
            total,
            elapsed.as_secs_f64()
        );
    }

    if failed == 0 {
        exit_codes::SUCCESS
    } else if succeeded > 0 {
        exit_codes::PARTIAL_FAILURE
    } else {
        exit_codes::INPUT_ERROR
    }
}

fn file_stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("labels")
}

/// One `<stem>_montage.json` per input file, refusing inputs that would
/// write the same report (`s.txt` and `s.json`, or `a/x.txt` and `b/x.txt`).
fn report_paths(files: &[String], dir: &str) -> Result<Vec<PathBuf>, String> {
    let mut seen: HashMap<PathBuf, &str> = HashMap::new();
    let mut paths = Vec::with_capacity(files.len());

    for file in files {
        let path = Path::new(dir).join(format!("{}_montage.json", file_stem(file)));
        if let Some(previous) = seen.insert(path.clone(), file) {
            return Err(format!(
                "'{}' and '{}' would both write {}; rename one or run them separately",
                previous,
                file,
                path.display()
            ));
        }
        paths.push(path);
    }

    Ok(paths)
}

fn resolve_files(args: &BatchArgs) -> Result<Vec<String>, String> {
    if let Some(ref pattern) = args.glob {
        resolve_glob(pattern)
    } else if let Some(ref files) = args.files {
        Ok(files.clone())
    } else {
        Err("One of --glob or --files must be specified".to_string())
    }
}

fn resolve_glob(pattern: &str) -> Result<Vec<String>, String> {
    let paths = glob::glob(pattern)
        .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

    let mut files: Vec<String> = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    if let Some(s) = path.to_str() {
                        files.push(s.to_string());
                    }
                }
            }
            Err(e) => {
                log::warn!("glob error: {}", e);
            }
        }
    }
    files.sort();
    Ok(files)
}
