//! Column formatting for rate reports and the on-disk text form they are
//! written in.

use std::fs;
use std::io;
use std::path::Path;

/// How a float cell is rendered in a text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStyle {
    /// Positional digits, used for temperatures.
    Fixed,
    /// Mantissa and exponent, used for rate constants spanning many decades.
    Scientific,
}

/// Right-aligns `value` in a cell of `width` characters with `precision`
/// fractional digits. Non-finite values print as `NaN`, `inf` or `-inf`.
pub fn format_float(value: f64, style: FloatStyle, width: usize, precision: usize) -> String {
    match style {
        FloatStyle::Fixed => format!("{value:>width$.precision$}"),
        FloatStyle::Scientific => format!("{value:>width$.precision$E}"),
    }
}

/// Rewrites `\r\n` and lone `\r` as `\n` and guarantees a trailing newline
/// on non-empty text.
pub fn canonical_text(content: &str) -> String {
    let mut canonical = String::with_capacity(content.len() + 1);
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            chars.next_if_eq(&'\n');
            canonical.push('\n');
        } else {
            canonical.push(ch);
        }
    }
    if !canonical.is_empty() && !canonical.ends_with('\n') {
        canonical.push('\n');
    }
    canonical
}

/// Writes a report in canonical form, creating missing parent directories.
pub fn write_text_artifact(path: &Path, content: &str) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
        _ => {}
    }
    fs::write(path, canonical_text(content))
}

#[cfg(test)]
mod tests {
    use super::{FloatStyle, canonical_text, format_float, write_text_artifact};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn temperatures_render_in_fixed_columns() {
        assert_eq!(format_float(800.0, FloatStyle::Fixed, 10, 2), "    800.00");
        assert_eq!(format_float(1234.567, FloatStyle::Fixed, 0, 1), "1234.6");
    }

    #[test]
    fn rate_constants_render_in_scientific_columns() {
        assert_eq!(
            format_float(1.5e-10, FloatStyle::Scientific, 12, 3),
            "   1.500E-10"
        );
        assert_eq!(format_float(f64::INFINITY, FloatStyle::Scientific, 6, 3), "   inf");
        assert_eq!(format_float(f64::NAN, FloatStyle::Fixed, 4, 2), " NaN");
    }

    #[test]
    fn canonical_text_folds_carriage_returns() {
        assert_eq!(canonical_text("alpha\r\nbeta\rgamma"), "alpha\nbeta\ngamma\n");
        assert_eq!(canonical_text("\r\r\n"), "\n\n");
        assert_eq!(canonical_text(""), "");
    }

    #[test]
    fn report_files_are_rewritten_byte_for_byte() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("reports/w-800K.txt");
        let report = "# T = 800.00 K\r\nalpha 6.2E12\rbeta 4.4E9";

        write_text_artifact(&path, report).expect("first write should succeed");
        let first = fs::read(&path).expect("report should be readable");
        write_text_artifact(&path, report).expect("second write should succeed");
        let second = fs::read(&path).expect("report should be readable");

        assert_eq!(first, second);
        assert_eq!(second, b"# T = 800.00 K\nalpha 6.2E12\nbeta 4.4E9\n");
    }
}
