use crate::{GAError, GAIntermediate, GAReport, GeneticAlgorithm, Result};
use log::Level;
use ndarray::{Array1, Array2};

// ------------------------------ Internal helpers ------------------------------

impl<'a, F> GeneticAlgorithm<'a, F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    pub(crate) fn log_level(&self) -> Level {
        if self.config.disp {
            Level::Info
        } else {
            Level::Debug
        }
    }

    /// Logs one generation and hands it to the callback.
    pub(crate) fn report_generation(
        &mut self,
        iter: usize,
        x: &Array1<f64>,
        fun: f64,
        best_fun: f64,
        energies: &Array1<f64>,
        improved: bool,
    ) {
        let mean = energies.mean().unwrap_or(f64::NAN);
        let std = energies.std(0.0);

        log::log!(
            self.log_level(),
            "GA iter {:4}  gen_best={:.6e}  best_f={:.6e}  mean={:.3e}  std={:.3e}",
            iter,
            fun,
            best_fun,
            mean,
            std
        );

        if let Some(ref mut cb) = self.config.callback {
            let intermediate = GAIntermediate {
                x: x.clone(),
                fun,
                best_fun,
                mean,
                std,
                improved,
                iter,
            };
            cb(&intermediate);
        }
    }

    /// Every dimension is pinned by its bounds: one evaluation, no generations.
    pub(crate) fn solve_fixed(&mut self) -> Result<GAReport> {
        let x = self.lower.clone();
        let f = (self.func)(&x);
        if f.is_nan() {
            return Err(GAError::Evaluation {
                generation: 0,
                index: 0,
                x: x.to_vec(),
            });
        }

        let npop = self.config.popsize;
        let population = Array2::from_shape_fn((npop, x.len()), |(_, j)| x[j]);
        let energies = Array1::from_elem(npop, f);

        log::log!(self.log_level(), "GA: all variables fixed by bounds, f={:.6e}", f);
        self.report_generation(0, &x, f, f, &energies, true);

        Ok(self.finish_report(
            population,
            energies,
            x,
            f,
            "All variables fixed by bounds".into(),
            0,
            1,
            vec![f],
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn finish_report(
        &self,
        pop: Array2<f64>,
        energies: Array1<f64>,
        x: Array1<f64>,
        fun: f64,
        message: String,
        nit: usize,
        nfev: usize,
        history: Vec<f64>,
    ) -> GAReport {
        GAReport {
            x,
            fun,
            message,
            nit,
            nfev,
            population: pop,
            population_energies: energies,
            history,
        }
    }
}
