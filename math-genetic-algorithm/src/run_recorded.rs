//! Recording wrapper for the genetic algorithm

use crate::recorder::OptimizationRecorder;
use crate::{GAConfig, GAIntermediate, GAReport, genetic_algorithm};
use directories::ProjectDirs;
use ndarray::Array1;
use std::path::{Path, PathBuf};

/// Get the records directory using the directories crate
fn get_records_dir() -> Result<PathBuf, String> {
    let proj_dirs = ProjectDirs::from("org", "spinorama", "math-genetic-algorithm")
        .ok_or("Failed to determine project directories")?;

    let records_dir = proj_dirs.cache_dir().join("records");

    std::fs::create_dir_all(&records_dir)
        .map_err(|e| format!("Failed to create records directory: {}", e))?;

    Ok(records_dir)
}

/// Run the genetic algorithm and record every generation to a CSV file in
/// the platform cache directory.
///
/// Returns the report and the path of the CSV file.
pub fn run_recorded_genetic_algorithm<F>(
    function_name: &str,
    func: F,
    bounds: &[(f64, f64)],
    config: GAConfig,
) -> Result<(GAReport, PathBuf), Box<dyn std::error::Error>>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let records_dir =
        get_records_dir().map_err(|e| format!("Failed to get records directory: {}", e))?;
    run_recorded_genetic_algorithm_to(&records_dir, function_name, func, bounds, config)
}

/// Same as [`run_recorded_genetic_algorithm`] with an explicit output directory.
///
/// A callback already present in `config` keeps being called after the
/// recorder.
pub fn run_recorded_genetic_algorithm_to<F>(
    output_dir: &Path,
    function_name: &str,
    func: F,
    bounds: &[(f64, f64)],
    mut config: GAConfig,
) -> Result<(GAReport, PathBuf), Box<dyn std::error::Error>>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let recorder = OptimizationRecorder::with_output_dir(function_name.to_string(), output_dir);

    let mut record = recorder.create_callback();
    let mut user_callback = config.callback.take();
    config.callback = Some(Box::new(move |intermediate: &GAIntermediate| {
        record(intermediate);
        if let Some(cb) = user_callback.as_mut() {
            cb(intermediate);
        }
    }));

    let result = genetic_algorithm(&func, bounds, config)?;
    let csv_path = recorder.save_to_csv()?;

    log::info!(
        "recorded {} generations of {} to {}",
        recorder.num_generations(),
        function_name,
        csv_path.display()
    );

    Ok((result, csv_path))
}
