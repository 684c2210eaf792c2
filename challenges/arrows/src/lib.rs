use std::io::BufRead;

pub mod board;
pub mod error;
pub mod grid;
pub mod select;
pub mod travel;

pub use error::{ArrowError, Result};
pub use grid::{Coordinate, Direction, Displacement, Grid};
pub use select::{ScoredPath, find_best_path, scored_paths};
pub use travel::{Path, Traveler, travel};

/// Line reader over any buffered input
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Next line without its trailing whitespace, or `None` at end of input.
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end().to_string()))
    }

    /// Consume the rest of the input as a board.
    pub fn read_board(&mut self) -> Result<Grid> {
        let mut text = String::new();
        while let Some(line) = self.next_line()? {
            text.push_str(&line);
            text.push('\n');
        }
        board::parse(&text)
    }
}

/// Output writer that buffers to memory until the caller flushes it
pub struct Writer(String);

impl Writer {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        self.0.push_str(&value.to_string());
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        self.print(value);
        self.0.push('\n');
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a board and print the start of its best walk.
pub fn solve(scan: &mut Scanner, out: &mut Writer) -> Result<()> {
    solve_with(&Traveler::new(), scan, out)
}

pub fn solve_with(traveler: &Traveler, scan: &mut Scanner, out: &mut Writer) -> Result<()> {
    let grid = scan.read_board()?;
    let best = traveler.find_best_path(&grid)?;
    out.println(best.start());
    Ok(())
}

/// Runners for the board cases stored as `<root>/<suite>/N.in` and `N.out`
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};

    /// Discover all case numbers in a suite
    pub fn discover_cases(root: &Path, suite: &str) -> Vec<usize> {
        let case_dir = root.join(suite);

        let mut case_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&case_dir) {
            for entry in entries.flatten() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if let Some(num_str) = file_name.strip_suffix(".in") {
                        if let Ok(num) = num_str.parse::<usize>() {
                            case_numbers.push(num);
                        }
                    }
                }
            }
        }

        case_numbers.sort_unstable();
        case_numbers
    }

    /// Run a single case and return (expected, actual, duration) output
    pub fn run_case<F>(
        root: &Path,
        suite: &str,
        case_num: usize,
        solve_fn: F,
    ) -> std::result::Result<(String, String, Duration), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let case_dir: PathBuf = root.join(suite);
        let in_file = case_dir.join(format!("{}.in", case_num));
        let out_file = case_dir.join(format!("{}.out", case_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer).map_err(|e| e.to_string())?;
        let duration = start.elapsed();

        Ok((
            expected.trim().to_string(),
            writer.into_string().trim().to_string(),
            duration,
        ))
    }

    /// Assert every case in a suite
    pub fn verify_all_cases<F>(root: &Path, suite: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let cases = discover_cases(root, suite);
        assert!(!cases.is_empty(), "No cases found for {}", suite);

        for case_num in cases {
            match run_case(root, suite, case_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    assert_eq!(
                        actual,
                        expected,
                        "Case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        case_num,
                        duration.as_secs_f64(),
                        expected,
                        actual
                    );
                }
                Err(e) => panic!("Case {} error: {}", case_num, e),
            }
        }
    }

    /// Run all cases and print results (for CLI usage). Returns the failure count.
    pub fn run_all_cases<F>(root: &Path, suite: &str, solve_fn: F) -> usize
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let cases = discover_cases(root, suite);
        if cases.is_empty() {
            println!("No cases found for {} under {}", suite, root.display());
            return 0;
        }

        println!("Running {} cases for {}...", cases.len(), suite);

        let mut passed = 0;
        let mut failed = 0;
        let mut total_duration = Duration::ZERO;

        for case_num in &cases {
            match run_case(root, suite, *case_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Case {}: PASSED ({:.2}s)", case_num, secs);
                        passed += 1;
                    } else {
                        println!("✗ Case {}: FAILED ({:.2}s)", case_num, secs);
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Case {}: ERROR - {}", case_num, e);
                    failed += 1;
                }
            }
        }

        println!("\nResults: {} passed, {} failed", passed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn data_root() -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn test_board_cases() {
        testing::verify_all_cases(&data_root(), "boards", solve);
    }

    #[test]
    fn test_discover_cases_sorted() {
        let cases = testing::discover_cases(&data_root(), "boards");
        assert_eq!(cases, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_solve_sample() {
        let mut scan = Scanner::new(Cursor::new(board::SAMPLE));
        let mut out = Writer::new();
        solve(&mut scan, &mut out).unwrap();
        assert_eq!(out.into_string(), "(3, 3)\n");
    }

    #[test]
    fn test_solve_rejects_bad_symbol() {
        let mut scan = Scanner::new(Cursor::new("u d\nx u\n"));
        let mut out = Writer::new();
        let err = solve(&mut scan, &mut out).unwrap_err();
        assert!(matches!(err, ArrowError::InvalidSymbol { row: 1, column: 0, .. }));
    }

    #[test]
    fn test_scanner_lines() {
        let mut scan = Scanner::new(Cursor::new("ud  \r\nlr"));
        assert_eq!(scan.next_line().unwrap().as_deref(), Some("ud"));
        assert_eq!(scan.next_line().unwrap().as_deref(), Some("lr"));
        assert_eq!(scan.next_line().unwrap(), None);
    }
}
