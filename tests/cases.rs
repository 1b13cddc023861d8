use std::fs::{self};

use complexpr::{Bindings, Complex, evaluate};
use walkdir::WalkDir;

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, line) in content.lines().enumerate() {
            let Some((source, expected)) = parse_case(line) else {
                continue;
            };
            count += 1;

            let result = evaluate(source, &Bindings::new());
            let location = format!("{}:{}", path.display(), line_number + 1);

            match (result, expected.strip_prefix("error:")) {
                (Ok(value), None) => {
                    let expected = expected.parse::<Complex>()
                                           .unwrap_or_else(|e| panic!("{location}: {e}"));
                    assert_eq!(value, expected, "{location}: {source}");
                },
                (Err(e), Some(message)) => {
                    assert_eq!(e.to_string(), message.trim(), "{location}: {source}");
                },
                (Ok(value), Some(message)) => {
                    panic!("{location}: {source} gave {value}, expected error {message:?}")
                },
                (Err(e), None) => panic!("{location}: {source} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits a `source => expected` line. Blank lines and `#` comments yield
/// `None`.
fn parse_case(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    trimmed.split_once(" => ")
           .map(|(source, expected)| (source, expected.trim()))
}
