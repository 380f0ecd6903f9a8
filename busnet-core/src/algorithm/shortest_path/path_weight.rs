use std::ops::Add;

/// a weight that can be summed along a path and compared against other paths.
///
/// [`Default`] must produce the zero weight: it is used as the cost of the
/// empty path, and edges comparing below it are rejected.
pub trait PathWeight: Clone + Default + PartialOrd + Add<Output = Self> + Send + Sync {}

impl<T> PathWeight for T where T: Clone + Default + PartialOrd + Add<Output = T> + Send + Sync {}
