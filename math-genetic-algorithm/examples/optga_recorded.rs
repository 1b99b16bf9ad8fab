use math_genetic_algorithm::function_registry::{FunctionRegistry, generate_benchmark_configs};
use math_genetic_algorithm::run_recorded_genetic_algorithm;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let registry = FunctionRegistry::new();
    for bench in generate_benchmark_configs() {
        let func = registry
            .get(&bench.function_name)
            .ok_or_else(|| format!("unknown function {}", bench.function_name))?;

        let (report, csv_path) =
            run_recorded_genetic_algorithm(&bench.name, func, &bench.bounds, bench.config()?)?;

        let gap = report.fun - bench.expected_fun;
        println!(
            "{:<20} f={:>12.6e}  gap={:>10.3e}  {}  -> {}",
            bench.name,
            report.fun,
            gap,
            if gap < bench.fun_tolerance { "ok" } else { "MISS" },
            csv_path.display()
        );
    }
    Ok(())
}
