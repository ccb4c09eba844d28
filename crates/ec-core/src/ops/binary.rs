use crate::math::Element;

/// A position-wise binary operator `out[i] = apply(a[i], b[i])`.
///
/// Implementors are zero-sized markers so the traversal in
/// [`crate::ops::engine`] monomorphizes to a plain loop per operator and
/// element width.
pub trait BinaryOp<T: Element>: 'static {
    const NAME: &'static str;

    fn apply(lhs: T, rhs: T) -> T;
}

/// IEEE-754 addition.
#[derive(Clone, Copy, Debug, Default)]
pub struct Add;

/// IEEE-754 subtraction, `lhs - rhs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sub;

/// Element-wise (Hadamard) product.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mul;

/// Element-wise minimum. A NaN operand yields the other operand; `-0.0` is
/// below `+0.0`, so the result does not depend on operand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

/// Element-wise maximum. A NaN operand yields the other operand; `+0.0` is
/// above `-0.0`, so the result does not depend on operand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl<T: Element> BinaryOp<T> for Add {
    const NAME: &'static str = "add";

    #[inline(always)]
    fn apply(lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

impl<T: Element> BinaryOp<T> for Sub {
    const NAME: &'static str = "sub";

    #[inline(always)]
    fn apply(lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}

impl<T: Element> BinaryOp<T> for Mul {
    const NAME: &'static str = "mul";

    #[inline(always)]
    fn apply(lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}

impl<T: Element> BinaryOp<T> for Min {
    const NAME: &'static str = "min";

    #[inline(always)]
    fn apply(lhs: T, rhs: T) -> T {
        if lhs == rhs {
            // only differs for signed zeros
            if lhs.is_sign_negative() {
                lhs
            } else {
                rhs
            }
        } else {
            lhs.min(rhs)
        }
    }
}

impl<T: Element> BinaryOp<T> for Max {
    const NAME: &'static str = "max";

    #[inline(always)]
    fn apply(lhs: T, rhs: T) -> T {
        if lhs == rhs {
            if lhs.is_sign_positive() {
                lhs
            } else {
                rhs
            }
        } else {
            lhs.max(rhs)
        }
    }
}
