use crate::cli::LabelInput;
use montage_rs::{select_macro_labels, ReferenceTables};
use std::io::Read;
use std::path::Path;

/// Collect labels from the command line or from a label file.
pub fn resolve_labels(input: &LabelInput) -> Result<Vec<String>, String> {
    let labels = match input.file {
        Some(ref path) => read_label_file(path)?,
        None => input.labels.clone(),
    };

    if labels.is_empty() {
        return Err("No channel labels given (pass labels or --file)".to_string());
    }

    Ok(labels)
}

/// Read a label file, or stdin when `path` is "-".
///
/// `.json` files hold an array of strings. Anything else is plain text with
/// labels separated by newlines, commas or whitespace; `#` starts a comment.
pub fn read_label_file(path: &str) -> Result<Vec<String>, String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("Failed to read labels from stdin: {}", e))?;
        return Ok(parse_label_text(&content));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read label file '{}': {}", path, e))?;

    let is_json = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_label_json(&content).map_err(|e| format!("Invalid label file '{}': {}", path, e))
    } else {
        Ok(parse_label_text(&content))
    }
}

pub fn parse_label_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_label_json(content: &str) -> Result<Vec<String>, String> {
    serde_json::from_str::<Vec<String>>(content)
        .map_err(|e| format!("expected a JSON array of strings: {}", e))
}

/// Load reference tables from a JSON file, or the built-in defaults.
pub fn load_tables(path: &Option<String>) -> Result<ReferenceTables, String> {
    match path {
        Some(path) => ReferenceTables::from_json_file(path)
            .map_err(|e| format!("Failed to load reference tables '{}': {}", path, e)),
        None => Ok(ReferenceTables::default()),
    }
}

/// Optionally reduce a channel list to its macro contacts.
pub fn macro_labels(
    labels: Vec<String>,
    classify: bool,
    tables: &ReferenceTables,
) -> Vec<String> {
    if classify {
        let kept = select_macro_labels(&labels, tables);
        log::info!("Kept {} of {} channels as macro contacts", kept.len(), labels.len());
        kept
    } else {
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_label_text() {
        let content = "# lead LTP\nLTP1\nLTP2, LTP3\n\n  RA1 RA2  # right\n";
        assert_eq!(
            parse_label_text(content),
            vec!["LTP1", "LTP2", "LTP3", "RA1", "RA2"]
        );
    }

    #[test]
    fn test_parse_label_json() {
        assert_eq!(parse_label_json(r#"["LA1", "LA2"]"#).unwrap(), vec!["LA1", "LA2"]);
        assert!(parse_label_json(r#"{"labels": []}"#).is_err());
    }

    #[test]
    fn test_resolve_labels_from_args() {
        let input = LabelInput {
            labels: vec!["LA1".to_string(), "LA2".to_string()],
            file: None,
        };
        assert_eq!(resolve_labels(&input).unwrap(), vec!["LA1", "LA2"]);
    }

    #[test]
    fn test_resolve_labels_empty() {
        let result = resolve_labels(&LabelInput::default());
        assert!(result.unwrap_err().contains("No channel labels"));
    }

    #[test]
    fn test_read_label_file_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("labels.json");
        fs::write(&path, r#"["RA1", "RA2"]"#).unwrap();

        let labels = read_label_file(path.to_str().unwrap()).unwrap();
        assert_eq!(labels, vec!["RA1", "RA2"]);
    }

    #[test]
    fn test_read_label_file_missing() {
        let result = read_label_file("/nonexistent_dir_12345/labels.txt");
        assert!(result.unwrap_err().contains("Failed to read"));
    }

    #[test]
    fn test_load_tables_default() {
        assert_eq!(load_tables(&None).unwrap(), ReferenceTables::default());
    }

    #[test]
    fn test_macro_labels_with_classify() {
        let labels = vec!["LA1".to_string(), "Fz".to_string(), "LA2".to_string()];
        let tables = ReferenceTables::default();
        assert_eq!(macro_labels(labels.clone(), false, &tables).len(), 3);
        assert_eq!(macro_labels(labels, true, &tables), vec!["LA1", "LA2"]);
    }
}
