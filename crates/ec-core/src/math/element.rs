use std::fmt::{Debug, Display};

use num_traits::Float;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar types the engine operates on: `f32` and `f64`.
///
/// The trait is sealed; every operation is written once against it and
/// instantiated for both widths.
pub trait Element: Float + Debug + Display + Default + Send + Sync + 'static + sealed::Sealed {
    /// Short name used in log output.
    const NAME: &'static str;
}

impl Element for f32 {
    const NAME: &'static str = "f32";
}

impl Element for f64 {
    const NAME: &'static str = "f64";
}
