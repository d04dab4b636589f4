use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a paired sample file: one `x y` pair per line, separated by
/// spaces, tabs or commas. Blank lines and lines starting with `#` are
/// skipped. A first line that does not parse as numbers is treated as a
/// header.
pub fn read_pairs_file<P: AsRef<Path>>(filename: P) -> Result<Vec<(f64, f64)>, String> {
    let lines = read_data_lines(filename.as_ref())?;
    let mut pairs = Vec::with_capacity(lines.len());

    for (idx, (line_num, line)) in lines.iter().enumerate() {
        match parse_pair_line(line) {
            Ok(pair) => pairs.push(pair),
            Err(_) if idx == 0 && is_header(line) => continue,
            Err(e) => return Err(format!("{} on line {}", e, line_num)),
        }
    }

    if pairs.is_empty() {
        return Err("No valid data found in file".to_string());
    }

    Ok(pairs)
}

/// Read a single-column value file. Lines carrying more than one field
/// use the last field, so pair files also read as their y column.
pub fn read_values_file<P: AsRef<Path>>(filename: P) -> Result<Vec<f64>, String> {
    let lines = read_data_lines(filename.as_ref())?;
    let mut values = Vec::with_capacity(lines.len());

    for (idx, (line_num, line)) in lines.iter().enumerate() {
        let field = split_fields(line).last().copied().unwrap_or_default();
        match parse_number(field) {
            Ok(v) => values.push(v),
            Err(_) if idx == 0 && is_header(line) => continue,
            Err(e) => return Err(format!("{} on line {}", e, line_num)),
        }
    }

    if values.is_empty() {
        return Err("No valid data found in file".to_string());
    }

    Ok(values)
}

/// Parse one `x y` line.
pub fn parse_pair_line(line: &str) -> Result<(f64, f64), String> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err("Expected two values".to_string());
    }
    let x = parse_number(fields[0])?;
    let y = parse_number(fields[1])?;
    Ok((x, y))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split([' ', '\t', ','])
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_number(field: &str) -> Result<f64, String> {
    let value = field
        .parse::<f64>()
        .map_err(|_| format!("Invalid number '{}'", field))?;
    if !value.is_finite() {
        return Err(format!("Non-finite value '{}'", field));
    }
    Ok(value)
}

fn is_header(line: &str) -> bool {
    split_fields(line)
        .iter()
        .all(|f| f.parse::<f64>().is_err())
}

// Returns (1-based line number, trimmed line) for every non-blank,
// non-comment line.
fn read_data_lines(path: &Path) -> Result<Vec<(usize, String)>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Cannot open sample file {}: {}", path.display(), e))?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result
            .map_err(|e| format!("Error reading line {}: {}", line_num + 1, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((line_num + 1, trimmed.to_string()));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_pairs_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1.0 2.5").unwrap();
        writeln!(file, "2.0\t3.5").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "3.0,4.5").unwrap();

        let pairs = read_pairs_file(file.path()).unwrap();
        assert_eq!(pairs, vec![(1.0, 2.5), (2.0, 3.5), (3.0, 4.5)]);
    }

    #[test]
    fn test_header_and_comments_skipped() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "x,y").unwrap();
        writeln!(file, "# generated").unwrap();
        writeln!(file, "0.5,1.5").unwrap();

        let pairs = read_pairs_file(file.path()).unwrap();
        assert_eq!(pairs, vec![(0.5, 1.5)]);
    }

    #[test]
    fn test_invalid_line_reports_line_number() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1.0 2.0").unwrap();
        writeln!(file, "3.0 abc").unwrap();

        let err = read_pairs_file(file.path()).unwrap_err();
        assert!(err.contains("line 2"), "{}", err);
    }

    #[test]
    fn test_missing_second_value() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1.0 2.0").unwrap();
        writeln!(file, "3.0").unwrap();

        assert!(read_pairs_file(file.path()).is_err());
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let err = read_pairs_file(file.path()).unwrap_err();
        assert!(err.contains("No valid data"));
    }

    #[test]
    fn test_missing_file() {
        assert!(read_pairs_file("/nonexistent/sample.txt").is_err());
    }

    #[test]
    fn test_read_values_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "value").unwrap();
        writeln!(file, "4.0").unwrap();
        writeln!(file, "1 5.0").unwrap();

        let values = read_values_file(file.path()).unwrap();
        assert_eq!(values, vec![4.0, 5.0]);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_pair_line("1.0 NaN").is_err());
        assert!(parse_pair_line("inf 2.0").is_err());
    }
}
