use std::fs;
use std::path::Path;

use tracing::debug;

use crate::models::TimingSample;
use crate::utils::ChartError;

/// Load a benchmark summary file into an ordered sample list.
///
/// Each line holds `<bits> <seconds>`; fields past the second are ignored.
/// Line order is preserved so the plotted polyline follows the file.
/// Any line that does not yield both fields aborts the load with the
/// offending 1-based line number.
pub fn load_dataset(path: &Path) -> Result<Vec<TimingSample>, ChartError> {
    let contents = fs::read_to_string(path).map_err(|e| ChartError::InputAccess {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut samples = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line_number = idx + 1;
        let mut fields = line.split_whitespace();

        let bits_field = fields.next().ok_or_else(|| ChartError::MalformedRecord {
            line: line_number,
            reason: "expected `<bits> <seconds>`, found an empty line".to_string(),
        })?;
        let seconds_field = fields.next().ok_or_else(|| ChartError::MalformedRecord {
            line: line_number,
            reason: "missing the seconds field".to_string(),
        })?;

        let bits: u32 = bits_field.parse().map_err(|_| ChartError::MalformedRecord {
            line: line_number,
            reason: format!("'{}' is not an integer bit-size", bits_field),
        })?;
        let seconds: f64 = seconds_field
            .parse()
            .map_err(|_| ChartError::MalformedRecord {
                line: line_number,
                reason: format!("'{}' is not a number of seconds", seconds_field),
            })?;

        samples.push(TimingSample { bits, seconds });
    }

    debug!("Parsed {} records from {}", samples.len(), path.display());

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_well_formed_file() {
        let file = write_input("8 0.0001\n16 0.0003\n32 0.0009\n");

        let samples = load_dataset(file.path()).expect("Load failed");

        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples[0],
            TimingSample {
                bits: 8,
                seconds: 0.0001
            }
        );
        assert_eq!(
            samples[1],
            TimingSample {
                bits: 16,
                seconds: 0.0003
            }
        );
        assert_eq!(
            samples[2],
            TimingSample {
                bits: 32,
                seconds: 0.0009
            }
        );
    }

    #[test]
    fn test_line_order_is_preserved() {
        let file = write_input("512 1.25\n8 0.0001\n64 0.002\n");

        let samples = load_dataset(file.path()).expect("Load failed");

        let bits: Vec<u32> = samples.iter().map(|s| s.bits).collect();
        assert_eq!(bits, vec![512, 8, 64]);
    }

    #[test]
    fn test_fields_past_the_second_are_ignored() {
        let file = write_input("128 0.0451 3 trailing tokens\n");

        let samples = load_dataset(file.path()).expect("Load failed");

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].bits, 128);
        assert_eq!(samples[0].seconds, 0.0451);
    }

    #[test]
    fn test_empty_file_yields_no_samples() {
        let file = write_input("");

        let samples = load_dataset(file.path()).expect("Load failed");

        assert!(samples.is_empty());
    }

    #[test]
    fn test_non_numeric_seconds_is_fatal() {
        let file = write_input("64 abc\n");

        match load_dataset(file.path()).unwrap_err() {
            ChartError::MalformedRecord { line, .. } => assert_eq!(line, 1),
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_non_integer_bits_is_fatal() {
        let file = write_input("sixty-four 0.5\n");

        assert!(matches!(
            load_dataset(file.path()).unwrap_err(),
            ChartError::MalformedRecord { line: 1, .. }
        ));
    }

    #[test]
    fn test_negative_bits_is_fatal() {
        let file = write_input("-8 0.5\n");

        assert!(matches!(
            load_dataset(file.path()).unwrap_err(),
            ChartError::MalformedRecord { line: 1, .. }
        ));
    }

    #[test]
    fn test_short_line_reports_its_line_number() {
        let file = write_input("8 0.0001\n16\n32 0.0009\n");

        match load_dataset(file.path()).unwrap_err() {
            ChartError::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let file = write_input("8 0.0001\n\n16 0.0003\n");

        assert!(matches!(
            load_dataset(file.path()).unwrap_err(),
            ChartError::MalformedRecord { line: 2, .. }
        ));
    }

    #[test]
    fn test_missing_file_is_an_input_access_error() {
        let err = load_dataset(Path::new("no/such/primos.txt")).unwrap_err();

        assert!(matches!(err, ChartError::InputAccess { .. }));
    }
}
