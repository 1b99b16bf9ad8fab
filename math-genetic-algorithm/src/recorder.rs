use crate::{CallbackFn, GAIntermediate};
use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Records optimization progress, one entry per generation
#[derive(Debug)]
pub struct OptimizationRecorder {
    /// Function name (used for CSV filename)
    function_name: String,
    /// Output directory for CSV files
    output_dir: PathBuf,
    /// Shared generation records storage
    records: Arc<Mutex<Vec<GenerationRecord>>>,
}

/// Summary of a single generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    /// Generation number, 0 for the initial population
    pub generation: usize,
    /// Best individual of the generation
    pub x: Vec<f64>,
    /// Fitness of `x`
    pub fun: f64,
    /// Best fitness seen since the start of the run
    pub best_so_far: f64,
    /// Mean fitness of the population
    pub mean: f64,
    /// Standard deviation of the population fitness
    pub std: f64,
    /// Whether this generation improved the best known result
    pub is_improvement: bool,
}

impl From<&GAIntermediate> for GenerationRecord {
    fn from(intermediate: &GAIntermediate) -> Self {
        Self {
            generation: intermediate.iter,
            x: intermediate.x.to_vec(),
            fun: intermediate.fun,
            best_so_far: intermediate.best_fun,
            mean: intermediate.mean,
            std: intermediate.std,
            is_improvement: intermediate.improved,
        }
    }
}

fn lock(records: &Mutex<Vec<GenerationRecord>>) -> MutexGuard<'_, Vec<GenerationRecord>> {
    records.lock().unwrap_or_else(PoisonError::into_inner)
}

impl OptimizationRecorder {
    /// Create a new recorder writing under `./data_generated/records`
    pub fn new(function_name: String) -> Self {
        Self::with_output_dir(function_name, "./data_generated/records")
    }

    /// Create a new optimization recorder with custom output directory
    pub fn with_output_dir(function_name: String, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            function_name,
            output_dir: output_dir.into(),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record one generation
    pub fn record(&self, intermediate: &GAIntermediate) {
        lock(&self.records).push(GenerationRecord::from(intermediate));
    }

    /// Create a callback that records every generation into this recorder
    pub fn create_callback(&self) -> CallbackFn {
        let records = self.records.clone();
        Box::new(move |intermediate: &GAIntermediate| {
            lock(&records).push(GenerationRecord::from(intermediate));
        })
    }

    /// Path of the CSV file written by [`save_to_csv`](Self::save_to_csv)
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.csv", self.function_name))
    }

    /// Output directory of this recorder
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save all recorded generations to `<output_dir>/<function_name>.csv`
    ///
    /// Columns: `generation,x0..x{n-1},fun,best_so_far,mean,std,is_improvement`.
    pub fn save_to_csv(&self) -> io::Result<PathBuf> {
        create_dir_all(&self.output_dir)?;
        let path = self.csv_path();
        let mut file = BufWriter::new(File::create(&path)?);

        let records = lock(&self.records);
        let num_dimensions = records.first().map_or(0, |r| r.x.len());

        write!(file, "generation,")?;
        for i in 0..num_dimensions {
            write!(file, "x{},", i)?;
        }
        writeln!(file, "fun,best_so_far,mean,std,is_improvement")?;

        for record in records.iter() {
            write!(file, "{},", record.generation)?;
            for &xi in &record.x {
                write!(file, "{:.16},", xi)?;
            }
            writeln!(
                file,
                "{:.16},{:.16},{:.16},{:.16},{}",
                record.fun, record.best_so_far, record.mean, record.std, record.is_improvement
            )?;
        }

        file.flush()?;
        Ok(path)
    }

    /// Get a copy of all recorded generations
    pub fn records(&self) -> Vec<GenerationRecord> {
        lock(&self.records).clone()
    }

    /// Per-generation best fitness, in recording order
    pub fn history(&self) -> Vec<f64> {
        lock(&self.records).iter().map(|r| r.fun).collect()
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        lock(&self.records).len()
    }

    /// Best generation recorded so far as `(x, fun)`
    pub fn best_solution(&self) -> Option<(Vec<f64>, f64)> {
        lock(&self.records)
            .iter()
            .filter(|r| !r.fun.is_nan())
            .min_by(|a, b| a.fun.total_cmp(&b.fun))
            .map(|r| (r.x.clone(), r.fun))
    }

    /// Clear all recorded generations
    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}
