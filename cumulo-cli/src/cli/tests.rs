//! Unit tests for the CLI pipeline and serialisation helpers.

use super::commands::derive_cloud_name;
use super::{Cli, CliError, run_cli, write_labels};

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use cumulo_core::{ClusterId, ClusterLabel, ClusterLabels, CumuloError};
use cumulo_providers_pipe::PipeSourceError;
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn create_input_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

fn cli_for(dir: &TempDir, input: PathBuf, radius: f64, min_points: usize) -> Cli {
    Cli {
        input,
        output: dir.path().join("labels.txt"),
        radius,
        min_points,
    }
}

/// Run the pipeline and expect an error, panicking with the given message on success.
fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{}", panic_msg),
        Err(err) => err,
    }
}

#[rstest]
#[case::stem_with_extension("/tmp/points.txt", "points")]
#[case::stem_without_extension("/tmp/points", "points")]
#[case::missing_stem("", "point_cloud")]
fn derive_cloud_name_selects_expected_name(#[case] raw_path: &str, #[case] expected: &str) {
    assert_eq!(derive_cloud_name(Path::new(raw_path)), expected);
}

#[rstest]
#[case::singleton("1.0|2.0|3.0\n", 100.0, 1, "0")]
#[case::distant_pair("0|0|0\n10|0|0\n", 1.0, 2, "-1 -1")]
#[case::trio_and_outlier("0|0|0\n0.1|0|0\n0|0.1|0\n50|50|50\n", 1.0, 2, "0 0 0 -1")]
fn run_cli_writes_expected_labels(
    #[case] contents: &str,
    #[case] radius: f64,
    #[case] min_points: usize,
    #[case] expected: &str,
) -> TestResult {
    let dir = temp_dir();
    let input = create_input_file(&dir, "points.txt", contents)?;
    let cli = cli_for(&dir, input, radius, min_points);
    let output = cli.output.clone();

    let summary = run_cli(cli)?;

    assert_eq!(summary.cloud, "points");
    assert_eq!(fs::read_to_string(output)?, expected);
    Ok(())
}

#[rstest]
fn run_cli_skips_short_lines_but_keeps_order() -> TestResult {
    let dir = temp_dir();
    let input = create_input_file(&dir, "points.txt", "0|0|0\n1|2\n50|50|50\n")?;
    let cli = cli_for(&dir, input, 1.0, 1);
    let output = cli.output.clone();

    let summary = run_cli(cli)?;

    // The short line contributes no point, so only two labels come out.
    assert_eq!(summary.points, 2);
    assert_eq!(fs::read_to_string(output)?, "0 1");
    Ok(())
}

#[rstest]
fn run_cli_overwrites_existing_output() -> TestResult {
    let dir = temp_dir();
    let input = create_input_file(&dir, "points.txt", "1|2|3\n")?;
    let cli = cli_for(&dir, input, 10.0, 1);
    let output = cli.output.clone();
    fs::write(&output, "stale labels from a previous run")?;

    run_cli(cli)?;

    assert_eq!(fs::read_to_string(output)?, "0");
    Ok(())
}

#[rstest]
fn run_cli_rejects_malformed_token_without_touching_output() -> TestResult {
    let dir = temp_dir();
    let input = create_input_file(&dir, "points.txt", "1.0|abc|3.0\n")?;
    let cli = cli_for(&dir, input, 1.0, 1);
    let output = cli.output.clone();

    let err = run_cli_expecting_error(cli, "malformed token must fail");

    assert!(matches!(
        err,
        CliError::Pipe(PipeSourceError::InvalidCoordinate { line: 1, .. })
    ));
    assert!(!output.exists(), "a failed run must not create the output file");
    Ok(())
}

#[rstest]
fn run_cli_rejects_missing_input() {
    let dir = temp_dir();
    let cli = cli_for(&dir, dir.path().join("absent.txt"), 1.0, 1);

    let err = run_cli_expecting_error(cli, "missing input must fail");

    assert!(matches!(err, CliError::Open { .. }));
}

#[rstest]
#[case::zero_radius(0.0, 1)]
#[case::negative_radius(-1.0, 1)]
fn run_cli_rejects_invalid_radius(#[case] radius: f64, #[case] min_points: usize) -> TestResult {
    let dir = temp_dir();
    let input = create_input_file(&dir, "points.txt", "1|2|3\n")?;
    let cli = cli_for(&dir, input, radius, min_points);

    let err = run_cli_expecting_error(cli, "invalid radius must fail");

    assert!(matches!(
        err,
        CliError::Cluster(CumuloError::InvalidRadius { .. })
    ));
    Ok(())
}

#[rstest]
fn run_cli_rejects_zero_min_points() -> TestResult {
    let dir = temp_dir();
    let input = create_input_file(&dir, "points.txt", "1|2|3\n")?;
    let cli = cli_for(&dir, input, 1.0, 0);

    let err = run_cli_expecting_error(cli, "zero min_points must fail");

    assert!(matches!(
        err,
        CliError::Cluster(CumuloError::InvalidMinPoints { got: 0 })
    ));
    Ok(())
}

#[rstest]
fn run_cli_validates_parameters_before_reading_input() {
    let dir = temp_dir();
    // Both the parameters and the input are bad; the parameter error wins.
    let cli = cli_for(&dir, dir.path().join("absent.txt"), 0.0, 1);

    let err = run_cli_expecting_error(cli, "invalid parameters must fail");

    assert!(matches!(err, CliError::Cluster(_)));
}

#[rstest]
fn write_labels_uses_single_spaces_and_no_trailing_newline() -> TestResult {
    let labels = ClusterLabels::from_labels(vec![
        ClusterLabel::Cluster(ClusterId::new(0)),
        ClusterLabel::Noise,
        ClusterLabel::Cluster(ClusterId::new(1)),
    ]);
    let mut buffer = Vec::new();
    write_labels(&labels, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, "0 -1 1");
    Ok(())
}

#[rstest]
fn write_labels_emits_nothing_for_empty_labels() -> TestResult {
    let mut buffer = Vec::new();
    write_labels(&ClusterLabels::empty(), &mut buffer)?;
    assert!(buffer.is_empty());
    Ok(())
}

#[rstest]
fn clap_parses_positional_arguments() {
    let cli = Cli::try_parse_from(["cumulo", "in.txt", "out.txt", "0.5", "4"])
        .expect("arguments must parse");
    assert_eq!(cli.input, PathBuf::from("in.txt"));
    assert_eq!(cli.output, PathBuf::from("out.txt"));
    assert_eq!(cli.radius, 0.5);
    assert_eq!(cli.min_points, 4);
}

#[rstest]
#[case::missing_args(&["cumulo", "in.txt", "out.txt"])]
#[case::bad_radius(&["cumulo", "in.txt", "out.txt", "abc", "4"])]
#[case::bad_min_points(&["cumulo", "in.txt", "out.txt", "0.5", "many"])]
fn clap_rejects_malformed_invocations(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}
