use std::io::Write;
use std::path::Path;

/// Write a montage or classification report to `destination`, or to stdout
/// when no destination is given.
///
/// Reports always end in exactly one newline, so JSONL batch output and the
/// `"<anode> - <cathode>"` display lines look the same on stdout and on disk.
pub fn write_report(contents: &str, destination: Option<&str>) -> Result<(), String> {
    match destination {
        Some(path) => std::fs::File::create(Path::new(path))
            .and_then(|mut file| write_terminated(contents, &mut file))
            .map_err(|e| format!("Failed to write report '{}': {}", path, e)),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_terminated(contents, &mut handle)
                .map_err(|e| format!("Failed to write report to stdout: {}", e))
        }
    }
}

fn write_terminated<W: Write>(contents: &str, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Serialize a report to JSON (pretty or compact).
pub fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String, String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Serialize and write in one step, mapping failures to a message.
pub fn emit_json<T: serde::Serialize>(
    value: &T,
    compact: bool,
    destination: Option<&str>,
) -> Result<(), String> {
    let json = to_json(value, compact)?;
    write_report(&json, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&vec!["LA1", "LA2"], true).unwrap();
        assert_eq!(json, r#"["LA1","LA2"]"#);
    }

    #[test]
    fn test_write_report_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("montage.txt");
        write_report("LA1 - LA2\n", path.to_str()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "LA1 - LA2\n");
    }

    #[test]
    fn test_json_report_gets_trailing_newline() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("montage.json");
        emit_json(&vec!["LA1-LA2"], true, path.to_str()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\"LA1-LA2\"]\n");
    }

    #[test]
    fn test_display_lines_not_double_terminated() {
        let mut buf = Vec::new();
        write_terminated("LA1 - LA2\nLA2 - LA3\n", &mut buf).unwrap();
        assert_eq!(buf, b"LA1 - LA2\nLA2 - LA3\n");
    }

    #[test]
    fn test_unwritable_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("montage.json");
        let err = write_report("{}", path.to_str()).unwrap_err();
        assert!(err.contains("Failed to write report"));
    }
}
