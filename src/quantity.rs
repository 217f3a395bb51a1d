use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

/// A flow quantity, typically a signed machine integer.
///
/// Signedness is not optional: the flow matrix records `-f` on the reverse
/// of every edge carrying `f`, which is how later augmentations cancel
/// earlier routing decisions. Floating point is deliberately excluded so
/// that residual-capacity comparisons stay exact.
pub trait Quantity:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + Debug
    + Display
{
}

impl Quantity for i32 {}

impl Quantity for i64 {}
