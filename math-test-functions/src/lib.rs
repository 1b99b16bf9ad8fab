#![doc = include_str!("../README.md")]

use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Metadata for a test function: bounds, known minima and a short description
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let entries = [
        FunctionMetadata {
            name: "ackley".to_string(),
            bounds: vec![(-32.768, 32.768); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Multimodal Ackley function with many local minima".to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
        FunctionMetadata {
            name: "easom".to_string(),
            bounds: vec![(-100.0, 100.0); 2],
            global_minima: vec![(vec![std::f64::consts::PI, std::f64::consts::PI], -1.0)],
            description: "Easom function, flat with a single narrow well".to_string(),
            multimodal: true,
            dimensions: vec![2],
        },
        FunctionMetadata {
            name: "eggholder".to_string(),
            bounds: vec![(-512.0, 512.0); 2],
            global_minima: vec![(vec![512.0, 404.2319], -959.6407)],
            description: "Eggholder function, minimum on the boundary".to_string(),
            multimodal: true,
            dimensions: vec![2],
        },
        FunctionMetadata {
            name: "rastrigin".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Rastrigin function, regular grid of local minima".to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            bounds: vec![(-2.048, 2.048); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            description: "Rosenbrock valley".to_string(),
            multimodal: false,
            dimensions: vec![2, 10],
        },
        FunctionMetadata {
            name: "schwefel".to_string(),
            bounds: vec![(-500.0, 500.0); 2],
            global_minima: vec![(vec![420.9687, 420.9687], 0.0)],
            description: "Schwefel function, deceptive multimodal".to_string(),
            multimodal: true,
            dimensions: vec![2, 10],
        },
        FunctionMetadata {
            name: "six_hump_camel".to_string(),
            bounds: vec![(-3.0, 3.0), (-2.0, 2.0)],
            global_minima: vec![
                (vec![0.0898, -0.7126], -1.0316),
                (vec![-0.0898, 0.7126], -1.0316),
            ],
            description: "Six-hump camel function".to_string(),
            multimodal: true,
            dimensions: vec![2],
        },
        FunctionMetadata {
            name: "sphere".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Sphere function, sum of squares".to_string(),
            multimodal: false,
            dimensions: vec![2, 10, 30],
        },
        FunctionMetadata {
            name: "styblinski_tang".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            global_minima: vec![(vec![-2.903534, -2.903534], -78.33233)],
            description: "Styblinski-Tang function".to_string(),
            multimodal: true,
            dimensions: vec![2, 10],
        },
    ];

    entries
        .into_iter()
        .map(|meta| (meta.name.clone(), meta))
        .collect()
}

/// Bounds of a function from its metadata, `None` if the name is unknown
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    get_function_metadata()
        .remove(function_name)
        .map(|meta| meta.bounds)
}

/// Bounds of a function for `n` dimensions.
///
/// Functions defined for any dimension repeat their first interval; unknown
/// names fall back to `default_bounds`.
pub fn get_function_bounds_vec(
    function_name: &str,
    n: usize,
    default_bounds: (f64, f64),
) -> Vec<(f64, f64)> {
    match get_function_bounds(function_name) {
        Some(bounds) if bounds.len() == n => bounds,
        Some(bounds) if !bounds.is_empty() => vec![bounds[0]; n],
        _ => vec![default_bounds; n],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn call_function(name: &str, x: &Array1<f64>) -> Option<f64> {
        match name {
            "ackley" => Some(ackley(x)),
            "easom" => Some(easom(x)),
            "eggholder" => Some(eggholder(x)),
            "rastrigin" => Some(rastrigin(x)),
            "rosenbrock" => Some(rosenbrock(x)),
            "schwefel" => Some(schwefel(x)),
            "six_hump_camel" => Some(six_hump_camel(x)),
            "sphere" => Some(sphere(x)),
            "styblinski_tang" => Some(styblinski_tang(x)),
            _ => None,
        }
    }

    #[test]
    fn test_all_function_minima() {
        let metadata = get_function_metadata();
        let loose_tolerance = 1e-3;

        for (func_name, meta) in metadata.iter() {
            for (minimum_location, expected_value) in &meta.global_minima {
                let x = Array1::from_vec(minimum_location.clone());
                let actual_value = call_function(func_name, &x)
                    .unwrap_or_else(|| panic!("{} has metadata but no dispatcher", func_name));

                let error = (actual_value - expected_value).abs();
                let test_tolerance = if expected_value.abs() > 1.0 {
                    loose_tolerance * expected_value.abs()
                } else {
                    loose_tolerance
                };

                assert!(
                    error <= test_tolerance,
                    "Function {} failed: at {:?}, expected {:.10}, got {:.10}, error {:.2e}",
                    func_name,
                    minimum_location,
                    expected_value,
                    actual_value,
                    error
                );
            }
        }
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata();
        assert_eq!(metadata.len(), 9);

        for (name, meta) in metadata.iter() {
            assert_eq!(name, &meta.name);
            assert!(!meta.bounds.is_empty(), "Function {} has no bounds", name);
            assert!(!meta.description.is_empty());
            assert!(!meta.dimensions.is_empty());

            for (lower, upper) in &meta.bounds {
                assert!(lower < upper, "Function {} has invalid bounds", name);
            }

            for (location, _) in &meta.global_minima {
                assert_eq!(location.len(), meta.bounds.len());
                for (coord, (lower, upper)) in location.iter().zip(&meta.bounds) {
                    assert!(coord >= lower && coord <= upper);
                }
            }
        }
    }

    #[test]
    fn test_simple_unimodal_functions() {
        let origin = Array1::zeros(4);
        assert_eq!(sphere(&origin), 0.0);
        assert!(rastrigin(&origin).abs() < 1e-12);
        assert!(ackley(&origin).abs() < 1e-12);
        assert_eq!(rosenbrock(&Array1::ones(4)), 0.0);
    }

    #[test]
    fn test_bounds_helpers() {
        assert_eq!(
            get_function_bounds("six_hump_camel"),
            Some(vec![(-3.0, 3.0), (-2.0, 2.0)])
        );
        assert_eq!(get_function_bounds("no_such_function"), None);

        assert_eq!(get_function_bounds_vec("sphere", 5, (0.0, 1.0)), vec![(-5.12, 5.12); 5]);
        assert_eq!(get_function_bounds_vec("unknown", 3, (0.0, 1.0)), vec![(0.0, 1.0); 3]);
    }
}
