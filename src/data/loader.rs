//! Delimited numeric text reader.

use super::NumericTable;
use crate::error::{PlotError, Result};
use crate::util::base_name;
use ndarray::Array2;
use std::path::Path;

/// How lines with differing field counts are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnRule {
    /// Every line must have as many fields as the first data line.
    #[default]
    Uniform,
    /// The first data line fixes the column count; longer lines are truncated.
    FirstRow,
}

/// Read a numeric table from a file.
pub fn read_table(path: &Path, rule: ColumnRule) -> Result<NumericTable> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
    let name = base_name(&path.to_string_lossy()).to_string();

    let table = parse_table(name, path, &text, rule)?;
    tracing::debug!(
        "Loaded {} as {}x{} (rank {})",
        path.display(),
        table.rows(),
        table.columns(),
        table.ndim()
    );
    Ok(table)
}

/// Parse whitespace or tab delimited numeric text.
///
/// `#` starts a comment. Blank and comment-only lines are skipped.
pub fn parse_table(
    name: impl Into<String>,
    path: &Path,
    text: &str,
    rule: ColumnRule,
) -> Result<NumericTable> {
    let mut values: Vec<f64> = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let expected = *columns.get_or_insert(fields.len());
        let take = match rule {
            ColumnRule::Uniform if fields.len() != expected => {
                return Err(PlotError::column_mismatch(path, line_no, expected, fields.len()));
            },
            ColumnRule::FirstRow if fields.len() < expected => {
                return Err(PlotError::column_mismatch(path, line_no, expected, fields.len()));
            },
            _ => expected,
        };

        for token in &fields[..take] {
            let value = token
                .parse::<f64>()
                .map_err(|_| PlotError::parse(path, line_no, *token))?;
            values.push(value);
        }
        rows += 1;
    }

    let Some(columns) = columns else {
        return Err(PlotError::empty(path));
    };

    let values = Array2::from_shape_vec((rows, columns), values)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    Ok(NumericTable::new(name, path, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(text: &str, rule: ColumnRule) -> Result<NumericTable> {
        parse_table("t.txt", Path::new("t.txt"), text, rule)
    }

    #[test]
    fn single_column() {
        let t = parse("1\n2\n3\n", ColumnRule::Uniform).unwrap();
        assert_eq!((t.rows(), t.columns()), (3, 1));
        assert_eq!(t.ndim(), 1);
    }

    #[test]
    fn mixed_delimiters() {
        let t = parse("0  1.5\n1\t2.5\n2 \t 3.5\n", ColumnRule::Uniform).unwrap();
        assert_eq!((t.rows(), t.columns()), (3, 2));
        assert_eq!(t.column(1).unwrap().to_vec(), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let t = parse("# header\n\n1 2 # trailing\n   \n3 4\n", ColumnRule::Uniform).unwrap();
        assert_eq!((t.rows(), t.columns()), (2, 2));
    }

    #[test]
    fn special_values_parse() {
        let t = parse("nan\ninf\n-1e3\n", ColumnRule::Uniform).unwrap();
        let flat = t.flat();
        assert!(flat[0].is_nan());
        assert_eq!(flat[1], f64::INFINITY);
        assert_eq!(flat[2], -1000.0);
    }

    #[test]
    fn bad_token_reports_line() {
        let err = parse("1\n2\nabc\n", ColumnRule::Uniform).unwrap_err();
        match err {
            PlotError::Parse { line, token, .. } => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_rows_rejected_when_uniform() {
        let err = parse("1 2\n3\n", ColumnRule::Uniform).unwrap_err();
        assert!(matches!(
            err,
            PlotError::ColumnMismatch { line: 2, expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn first_row_truncates_longer_lines() {
        let t = parse("1 2\n3 4 5\n", ColumnRule::FirstRow).unwrap();
        assert_eq!((t.rows(), t.columns()), (2, 2));
        assert_eq!(t.flat().to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn first_row_rejects_shorter_lines() {
        let err = parse("1 2 3\n4 5\n", ColumnRule::FirstRow).unwrap_err();
        assert!(matches!(err, PlotError::ColumnMismatch { expected: 3, found: 2, .. }));
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(matches!(
            parse("# nothing\n\n", ColumnRule::Uniform),
            Err(PlotError::Empty { .. })
        ));
    }

    #[test]
    fn read_table_uses_base_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\n2").unwrap();

        let t = read_table(file.path(), ColumnRule::Uniform).unwrap();
        let expected = file.path().file_name().unwrap().to_string_lossy();
        assert_eq!(t.name, expected);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn read_table_missing_file() {
        let err = read_table(Path::new("/no/such/file.txt"), ColumnRule::Uniform).unwrap_err();
        assert!(matches!(err, PlotError::FileOpen { .. }));
    }
}
