//! Individual benchmark functions, one per file.

mod ackley;
mod easom;
mod eggholder;
mod rastrigin;
mod rosenbrock;
mod schwefel;
mod six_hump_camel;
mod sphere;
mod styblinski_tang;

pub use ackley::ackley;
pub use easom::easom;
pub use eggholder::eggholder;
pub use rastrigin::rastrigin;
pub use rosenbrock::rosenbrock;
pub use schwefel::schwefel;
pub use six_hump_camel::six_hump_camel;
pub use sphere::sphere;
pub use styblinski_tang::styblinski_tang;
