use std::process::{Command, Output};

fn vecsum(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vecsum"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = vecsum(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Random-access read microbenchmark"));
    assert!(stdout.contains("--seed"));
    assert!(stdout.contains("Examples:"));
}

#[test]
fn test_cli_version() {
    let output = vecsum(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vecsum"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_missing_arguments_prints_usage() {
    for args in [&[][..], &["10"][..], &["10", "10"][..]] {
        let output = vecsum(args);

        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage: vecsum vector_size indices_sz loops"));
        assert!(!stdout.contains("sum8"));
    }
}

#[test]
fn test_non_numeric_argument_rejected() {
    let output = vecsum(&["ten", "10", "1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("vector_size must be a positive integer"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("sum8"));
}

#[test]
fn test_zero_argument_rejected() {
    let output = vecsum(&["10", "0", "1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("index_size must be greater than 0"));
}

#[test]
fn test_single_loop_small_vector_dumps() {
    let output = vecsum(&["--quiet", "--seed", "3", "5", "3", "1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "vec_8 = [0 1 2 3 4 ]");
    assert_eq!(lines[1], "vec_32 = [0 1 2 3 4 ]");
    assert!(lines[2].starts_with("indices = ["));
    assert!(lines[3].starts_with("sum8 = "));
    assert!(lines[4].starts_with("sum32 = "));

    // Indices below 256 read the same value from both vectors.
    let sum8 = lines[3].trim_start_matches("sum8 = ");
    let sum32 = lines[4].trim_start_matches("sum32 = ");
    assert_eq!(sum8, sum32);
}

#[test]
fn test_multiple_loops_suppress_dump() {
    let output = vecsum(&["--quiet", "5", "3", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("vec_8"));
    assert!(stdout.contains("sum8 = "));
    assert!(stdout.contains("sum32 = "));
}

#[test]
fn test_seeded_runs_match() {
    let first = vecsum(&["--quiet", "--seed", "42", "100000", "1000", "5"]);
    let second = vecsum(&["--quiet", "--seed", "42", "100000", "1000", "5"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_config_file() {
    let path = std::env::temp_dir().join(format!("vecsum-it-{}.toml", std::process::id()));
    std::fs::write(&path, "vector_size = 8\nindex_size = 4\nloops = 1\nseed = 5\n").unwrap();

    let output = vecsum(&["--quiet", "--config", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vec_8 = [0 1 2 3 4 5 6 7 ]"));
    assert!(stdout.contains("sum32 = "));
}

#[test]
fn test_missing_config_file() {
    let output = vecsum(&["--config", "/nonexistent/vecsum.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_parsing() {
    use vecsum::core::config::BenchConfig;

    let config = BenchConfig::new(1_000_000, 1000, 1_000_000).unwrap();
    assert!(!config.wants_debug_dump());
    assert!(BenchConfig::new(5, 3, 1).unwrap().wants_debug_dump());
    assert!(BenchConfig::parse_count::<usize>("vector_size", "12x").is_err());
}
