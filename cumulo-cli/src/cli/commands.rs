//! Command implementation and argument parsing for the cumulo CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use cumulo_core::{ClusterLabels, CumuloError, DetectorBuilder, PointCloud};
use cumulo_providers_pipe::{PipeSourceError, read_cloud};

/// Command-line options parsed by [`clap`].
///
/// The four positional arguments mirror the classic invocation:
/// `cumulo INPUT OUTPUT RADIUS MIN_POINTS`. All of them are validated
/// before any file is touched.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "cumulo",
    about = "Detect density clusters in a pipe-delimited 3D point cloud file."
)]
pub struct Cli {
    /// Path to the input file holding one `x|y|z` point per line.
    pub input: PathBuf,

    /// Path to write the per-point cluster labels to (overwritten if present).
    pub output: PathBuf,

    /// Neighbourhood radius: the maximum distance between density-connected points.
    pub radius: f64,

    /// Minimum points per neighbourhood (including the point itself) for a core point.
    #[arg(value_parser = clap::value_parser!(usize))]
    pub min_points: usize,
}

/// Errors surfaced while executing the CLI pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The output file could not be created or written.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Point extraction failed.
    #[error(transparent)]
    Pipe(#[from] PipeSourceError),
    /// Parameter validation or the density scan failed.
    #[error(transparent)]
    Cluster(#[from] CumuloError),
}

/// Summarises the outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived for the scanned point cloud.
    pub cloud: String,
    /// Number of points extracted from the input.
    pub points: usize,
    /// Labels written to the output file.
    pub labels: ClusterLabels,
}

/// Executes the extract-cluster-write pipeline described by `cli`.
///
/// The output file is only created once clustering has succeeded, so a
/// failed run never clobbers an existing result file.
///
/// # Errors
/// Returns [`CliError`] when parameter validation, file access, point
/// extraction, or the density scan fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use cumulo_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("points.txt");
/// std::fs::write(&input, "1.0|2.0|3.0\n")?;
/// let output = dir.path().join("labels.txt");
/// let cli = Cli {
///     input,
///     output: output.clone(),
///     radius: 10.0,
///     min_points: 1,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.points, 1);
/// assert_eq!(std::fs::read_to_string(&output)?, "0");
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let detector = DetectorBuilder::new()
        .with_radius(cli.radius)
        .with_min_points(cli.min_points)
        .build()?;

    let cloud = load_cloud(&cli.input)?;
    let labels = detector.run(&cloud)?;
    write_output(&cli.output, &labels)?;

    Ok(ExecutionSummary {
        cloud: cloud.name().to_owned(),
        points: cloud.len(),
        labels,
    })
}

fn load_cloud(path: &Path) -> Result<PointCloud, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let name = derive_cloud_name(path);
    Ok(read_cloud(name, BufReader::new(file))?)
}

fn write_output(path: &Path, labels: &ClusterLabels) -> Result<(), CliError> {
    let wrap = |source: io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    write_labels(labels, &mut writer).map_err(wrap)?;
    writer.flush().map_err(wrap)
}

pub(super) fn derive_cloud_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "point_cloud".to_owned())
}

/// Serialises `labels` as space-separated decimal integers in point order,
/// with no trailing newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use cumulo_cli::cli::write_labels;
/// # use cumulo_core::{ClusterId, ClusterLabel, ClusterLabels};
/// #
/// let labels = ClusterLabels::from_labels(vec![
///     ClusterLabel::Cluster(ClusterId::new(0)),
///     ClusterLabel::Noise,
/// ]);
/// let mut buffer = Vec::new();
/// write_labels(&labels, &mut buffer).expect("buffer write cannot fail");
/// assert_eq!(buffer, b"0 -1");
/// ```
pub fn write_labels(labels: &ClusterLabels, mut writer: impl Write) -> io::Result<()> {
    for (index, label) in labels.labels().iter().enumerate() {
        if index > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{label}")?;
    }
    Ok(())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "point cloud: {}", summary.cloud)?;
    writeln!(writer, "points: {}", summary.points)?;
    writeln!(writer, "clusters: {}", summary.labels.cluster_count())?;
    writeln!(writer, "noise: {}", summary.labels.noise_count())?;
    Ok(())
}
