use std::fs;
use std::io::{self, BufRead, BufReader};

// Helper to create a test script file
fn create_test_script(content: &str, filename: &str) -> String {
    let path = format!("test_{}.inp", filename);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

// Helper to cleanup test files
fn cleanup_test_script(path: &str) {
    let _ = fs::remove_file(path);
}

#[cfg(test)]
mod file_scan_tests {
    use super::*;
    use gretl_deps::GretlScanner;

    #[test]
    fn test_scan_from_file() {
        let content = r#"set workdir ./build
open ../data/input.csv
outfile results.txt
  ols x 0 y
end outfile
gnuplot x y --output=scatter.pdf
"#;

        let path = create_test_script(content, "file_scan");

        let file = fs::File::open(&path).expect("Could not open test file");
        let mut scanner = GretlScanner::new();
        scanner
            .scan(BufReader::new(file).lines())
            .expect("Scan should succeed");

        assert!(scanner.datafiles().contains("data/input.csv"));
        assert!(scanner.outfiles().contains("build/results.txt"));
        assert!(scanner.figfiles().contains("build/scatter.pdf"));
        assert_eq!(scanner.workdir(), "./build");

        cleanup_test_script(&path);
    }

    #[test]
    fn test_read_error_propagates() {
        let lines: Vec<io::Result<String>> = vec![
            Ok("open before.csv".to_string()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "source failed")),
            Ok("open after.csv".to_string()),
        ];

        let mut scanner = GretlScanner::new();
        let err = scanner.scan(lines).expect_err("Read failure must surface");

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(
            scanner.datafiles().contains("before.csv"),
            "Paths recorded before the failure are kept"
        );
        assert!(
            !scanner.datafiles().contains("after.csv"),
            "Nothing past the failure is scanned"
        );
    }

    #[test]
    fn test_rescan_accumulates() {
        let mut scanner = GretlScanner::new();
        scanner.scan_str("set workdir ./a\nopen one.csv");
        scanner.scan_str("open two.csv");

        assert!(scanner.datafiles().contains("a/one.csv"));
        assert!(
            scanner.datafiles().contains("a/two.csv"),
            "A second scan on the same instance accumulates, workdir included"
        );
    }

    #[test]
    fn test_into_dependencies() {
        let mut scanner = GretlScanner::new();
        scanner.scan_str("open x.csv");

        let deps = scanner.into_dependencies();
        assert!(deps.datafiles.contains("x.csv"));
        assert!(deps.outfiles.is_empty());
        assert!(deps.figfiles.is_empty());
    }
}

#[cfg(test)]
mod serialization_tests {
    use gretl_deps::GretlScanner;

    #[test]
    fn test_dependencies_as_json() {
        let mut scanner = GretlScanner::new();
        scanner.scan_str("open a.csv\noutfile b.txt\ngnuplot x y --output=c.pdf");

        let value =
            serde_json::to_value(scanner.dependencies()).expect("Serialization should succeed");

        assert_eq!(value["datafiles"], serde_json::json!(["a.csv"]));
        assert_eq!(value["outfiles"], serde_json::json!(["b.txt"]));
        assert_eq!(value["figfiles"], serde_json::json!(["c.pdf"]));
    }
}
