//! Edge weight abstraction.

use std::ops::Add;

/// A non-negative, additive edge weight.
///
/// Shortest-path search only needs addition, a zero and a partial order.
/// Floating-point weights are supported; NaN is rejected when edges are
/// added, so comparisons during search are always defined.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> {
    /// The additive identity.
    fn zero() -> Self;

    /// Returns true if the value is a usable edge weight (`>= 0`, not NaN).
    fn is_valid(self) -> bool {
        self >= Self::zero()
    }
}

macro_rules! impl_weight {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Weight for $ty {
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_weight!(
    f32 => 0.0,
    f64 => 0.0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    i32 => 0,
    i64 => 0,
);
