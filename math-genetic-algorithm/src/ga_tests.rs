use crate::{GAConfigBuilder, GAError, GAIntermediate, GeneticAlgorithm, Init, Repopulation};
use crate::{GAConfig, genetic_algorithm};
use ndarray::{Array1, Axis, array};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum::<f64>()
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_sphere_small_population_converges() {
        // 20 individuals for 50 generations only reach 1e-2 on part of the
        // seeds, so the property is checked over a batch of runs.
        let mut best = Vec::new();
        for seed in 0..20 {
            let config = GAConfigBuilder::new()
                .seed(seed)
                .popsize(20)
                .maxiter(50)
                .mutation_rate(0.05)
                .survival_fraction(0.5)
                .build()
                .expect("valid config");
            let report = genetic_algorithm(&sphere, &[(-5.0, 5.0); 2], config).unwrap();
            best.push(report.fun);
        }

        let min = best.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!(min < 1e-2, "no run got within 1e-2 of 0: {best:?}");
        for (seed, f) in best.iter().enumerate() {
            assert!(*f < 2.0, "seed {seed} stalled at f={f}");
        }
    }

    #[test]
    fn test_all_dimensions_fixed() {
        let calls = Cell::new(0usize);
        let f = |x: &Array1<f64>| {
            calls.set(calls.get() + 1);
            x[0] * 10.0 + x[1]
        };
        let config = GAConfigBuilder::new().popsize(8).maxiter(30).build().unwrap();

        let report = genetic_algorithm(&f, &[(1.5, 1.5), (-2.0, -2.0)], config).unwrap();

        assert_eq!(report.x, array![1.5, -2.0]);
        assert_eq!(report.fun, 13.0);
        assert_eq!(report.nit, 0);
        assert_eq!(report.nfev, 1);
        assert_eq!(calls.get(), 1);
        assert_eq!(report.history, vec![13.0]);
        assert_eq!(report.population.dim(), (8, 2));
        assert!(report.population.rows().into_iter().all(|r| r == report.x));
    }

    #[test]
    fn test_partially_fixed_dimension_never_moves() {
        let config = GAConfigBuilder::new()
            .seed(5)
            .popsize(30)
            .maxiter(40)
            .mutation_rate(0.3)
            .repopulation(Repopulation::InjectRandom)
            .init(Init::LatinHypercube)
            .build()
            .unwrap();

        let report =
            genetic_algorithm(&sphere, &[(-1.0, 1.0), (0.25, 0.25), (-3.0, 3.0)], config).unwrap();

        assert!(report.population.column(1).iter().all(|&v| v == 0.25));
        assert_eq!(report.x[1], 0.25);
    }

    #[test]
    fn test_full_mutation_is_uniform_sampling() {
        let config = GAConfigBuilder::new()
            .seed(2024)
            .popsize(400)
            .maxiter(3)
            .mutation_rate(1.0)
            .build()
            .unwrap();

        let report = genetic_algorithm(&sphere, &[(-5.0, 5.0); 2], config).unwrap();

        // U(-5, 5): mean 0, variance 100 / 12
        let mean = report.population.mean_axis(Axis(0)).unwrap();
        let var = report.population.var_axis(Axis(0), 0.0);
        for j in 0..2 {
            assert!(mean[j].abs() < 0.6, "column {j} mean {}", mean[j]);
            assert!(var[j] > 6.5 && var[j] < 10.2, "column {j} variance {}", var[j]);
        }
    }

    #[test]
    fn test_population_of_one() {
        let config = GAConfigBuilder::new()
            .seed(1)
            .popsize(1)
            .survival_fraction(1.0)
            .maxiter(10)
            .build()
            .unwrap();

        let report = genetic_algorithm(&sphere, &[(-5.0, 5.0); 3], config).unwrap();

        assert_eq!(report.nit, 10);
        assert_eq!(report.nfev, 11);
        assert_eq!(report.history.len(), 11);
        assert_eq!(report.population.dim(), (1, 3));

        let err = GAConfigBuilder::new().popsize(1).build().err().unwrap();
        assert!(matches!(err, GAError::NoSurvivors { pop_size: 1, .. }));
    }
}

#[cfg(test)]
mod loop_tests {
    use super::*;

    fn run(config: GAConfig) -> crate::GAReport {
        let rastrigin = |x: &Array1<f64>| {
            10.0 * x.len() as f64
                + x.iter()
                    .map(|&v| v * v - 10.0 * (2.0 * std::f64::consts::PI * v).cos())
                    .sum::<f64>()
        };
        let mut ga = GeneticAlgorithm::new(&rastrigin, array![-5.12, -5.12, -5.12], array![
            5.12, 5.12, 5.12
        ])
        .unwrap();
        *ga.config_mut() = config;
        ga.solve().unwrap()
    }

    #[test]
    fn test_report_accounting() {
        let report = run(GAConfigBuilder::new()
            .seed(3)
            .popsize(25)
            .maxiter(40)
            .build()
            .unwrap());

        assert_eq!(report.nit, 40);
        assert_eq!(report.nfev, 25 * 41);
        assert_eq!(report.history.len(), 41);
        assert_eq!(report.population.dim(), (25, 3));
        assert_eq!(report.population_energies.len(), 25);
        assert!(report.message.contains("Maximum iterations"));

        let best_history = report.history.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(report.fun, best_history, "report carries the best-ever fitness");
    }

    #[test]
    fn test_zero_iterations() {
        let report = run(GAConfigBuilder::new()
            .seed(3)
            .popsize(12)
            .maxiter(0)
            .build()
            .unwrap());

        assert_eq!(report.nit, 0);
        assert_eq!(report.nfev, 12);
        assert_eq!(report.history, vec![report.fun]);
    }

    #[test]
    fn test_same_seed_same_run() {
        let make = || {
            GAConfigBuilder::new()
                .seed(77)
                .popsize(30)
                .maxiter(25)
                .repopulation(Repopulation::InjectRandom)
                .init(Init::LatinHypercube)
                .build()
                .unwrap()
        };
        let a = run(make());
        let b = run(make());
        assert_eq!(a.history, b.history);
        assert_eq!(a.x, b.x);
        assert_eq!(a.population, b.population);
    }

    #[test]
    fn test_elitism_never_regresses() {
        for seed in 0..5 {
            let report = run(GAConfigBuilder::new()
                .seed(seed)
                .popsize(30)
                .maxiter(60)
                .mutation_rate(0.2)
                .elitism(true)
                .build()
                .unwrap());
            for w in report.history.windows(2) {
                assert!(w[1] <= w[0], "seed {seed}: history regressed {} -> {}", w[0], w[1]);
            }
            assert_eq!(report.fun, *report.history.last().unwrap());
        }
    }

    #[test]
    fn test_callback_sees_every_generation() {
        let seen: Rc<RefCell<Vec<(usize, f64, f64)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let report = run(GAConfigBuilder::new()
            .seed(9)
            .popsize(20)
            .maxiter(15)
            .callback(Box::new(move |it: &GAIntermediate| {
                sink.borrow_mut().push((it.iter, it.fun, it.best_fun));
            }))
            .build()
            .unwrap());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 16);
        for (k, &(iter, fun, best_fun)) in seen.iter().enumerate() {
            assert_eq!(iter, k);
            assert_eq!(fun, report.history[k]);
            assert!(best_fun <= fun);
        }
        assert_eq!(seen[15].2, report.fun);
    }

    #[test]
    fn test_individuals_stay_in_bounds() {
        let report = run(GAConfigBuilder::new()
            .seed(11)
            .popsize(40)
            .maxiter(30)
            .mutation_rate(0.5)
            .repopulation(Repopulation::InjectRandom)
            .build()
            .unwrap());
        assert!(report.population.iter().all(|&v| (-5.12..=5.12).contains(&v)));
    }

    #[test]
    fn test_infinite_fitness_is_accepted() {
        let f = |x: &Array1<f64>| if x[0] > 0.0 { f64::INFINITY } else { x[0] * x[0] };
        let config = GAConfigBuilder::new().seed(4).popsize(20).maxiter(10).build().unwrap();
        let report = genetic_algorithm(&f, &[(-1.0, 1.0)], config).unwrap();
        assert!(report.fun.is_finite());
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_nan_aborts_with_context() {
        let calls = Cell::new(0usize);
        let f = |x: &Array1<f64>| {
            calls.set(calls.get() + 1);
            if calls.get() > 25 { f64::NAN } else { sphere(x) }
        };
        let config = GAConfigBuilder::new().seed(0).popsize(10).maxiter(50).build().unwrap();

        let err = genetic_algorithm(&f, &[(-1.0, 1.0); 2], config).unwrap_err();

        assert!(err.is_evaluation_error());
        match err {
            GAError::Evaluation {
                generation,
                index,
                x,
            } => {
                assert_eq!(generation, 2);
                assert_eq!(index, 5);
                assert_eq!(x.len(), 2);
            }
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(calls.get(), 26, "evaluation stops at the failing individual");
    }

    #[test]
    fn test_nan_in_initial_population() {
        let f = |_: &Array1<f64>| f64::NAN;
        let config = GAConfigBuilder::new().popsize(4).build().unwrap();
        let err = genetic_algorithm(&f, &[(0.0, 1.0)], config).unwrap_err();
        assert!(matches!(
            err,
            GAError::Evaluation {
                generation: 0,
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_at_fixed_point() {
        let f = |_: &Array1<f64>| f64::NAN;
        let config = GAConfigBuilder::new().popsize(4).build().unwrap();
        let err = genetic_algorithm(&f, &[(2.0, 2.0)], config).unwrap_err();
        assert!(err.is_evaluation_error());
    }

    #[test]
    fn test_bad_bounds() {
        let config = || GAConfigBuilder::new().build().unwrap();
        assert!(matches!(
            genetic_algorithm(&sphere, &[], config()),
            Err(GAError::EmptyBounds)
        ));
        let err = genetic_algorithm(&sphere, &[(0.0, 1.0), (3.0, -3.0)], config()).unwrap_err();
        assert!(matches!(err, GAError::InvalidBounds { index: 1, .. }));
        assert!(err.is_bounds_error());
        assert!(err.is_config_error());
    }

    #[test]
    fn test_infinite_bounds_fail_before_evaluation() {
        let config = || GAConfigBuilder::new().popsize(4).maxiter(2).build().unwrap();
        let err = genetic_algorithm(&sphere, &[(f64::NEG_INFINITY, f64::INFINITY)], config())
            .unwrap_err();
        assert!(matches!(err, GAError::InvalidBounds { index: 0, .. }));

        let err = genetic_algorithm(&sphere, &[(-1.0, 1.0), (0.0, f64::INFINITY)], config())
            .unwrap_err();
        assert!(matches!(err, GAError::InvalidBounds { index: 1, .. }));
    }

    #[test]
    fn test_widest_finite_bounds_stay_spread() {
        let config = GAConfigBuilder::new()
            .popsize(8)
            .maxiter(3)
            .mutation_rate(0.5)
            .repopulation(Repopulation::InjectRandom)
            .seed(17)
            .build()
            .unwrap();
        let first = |x: &Array1<f64>| x[0].abs();
        let report = genetic_algorithm(&first, &[(-f64::MAX, f64::MAX)], config).unwrap();

        assert!(report.population.iter().all(|v| v.is_finite()));
        assert!(report.population.iter().any(|&v| v.abs() < f64::MAX));
        assert!(report.fun < f64::MAX);
    }
}
