use ndarray::Array1;

/// Index and value of the smallest entry; ties resolve to the first index.
///
/// `v` must not be empty.
pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
    v.iter()
        .enumerate()
        .fold((0usize, v[0]), |(best_i, best_v), (i, &val)| {
            if val < best_v { (i, val) } else { (best_i, best_v) }
        })
}
