use math_genetic_algorithm::{
    GAConfig, GAIntermediate, Init, Repopulation, genetic_algorithm,
};
use ndarray::Array1;

fn main() {
    env_logger::init();

    // Ackley function (2D)
    let ackley = |x: &Array1<f64>| {
        let x0 = x[0];
        let x1 = x[1];
        let s = 0.5 * (x0 * x0 + x1 * x1);
        let c = 0.5
            * ((2.0 * std::f64::consts::PI * x0).cos() + (2.0 * std::f64::consts::PI * x1).cos());
        -20.0 * (-0.2 * s.sqrt()).exp() - c.exp() + 20.0 + std::f64::consts::E
    };

    let bounds = [(-5.0, 5.0), (-5.0, 5.0)];

    let mut cfg = GAConfig::default();
    cfg.maxiter = 300;
    cfg.popsize = 60;
    cfg.survival_fraction = 0.4;
    cfg.mutation_rate = 0.1;
    cfg.init = Init::LatinHypercube;
    cfg.repopulation = Repopulation::InjectRandom;
    cfg.elitism = true;
    cfg.seed = Some(42);

    // Print every 25th generation
    cfg.callback = Some(Box::new(|inter: &GAIntermediate| {
        if inter.iter % 25 == 0 {
            eprintln!(
                "gen {:4}  gen_best={:.6e}  best={:.6e}  std={:.3e}",
                inter.iter, inter.fun, inter.best_fun, inter.std
            );
        }
    }));

    match genetic_algorithm(&ackley, &bounds, cfg) {
        Ok(report) => {
            println!(
                "best f = {:.6e} at x = {:?} ({} generations, {} evaluations)",
                report.fun,
                report.x.to_vec(),
                report.nit,
                report.nfev
            );
        }
        Err(e) => {
            eprintln!("optimization failed: {}", e);
            std::process::exit(1);
        }
    }
}
