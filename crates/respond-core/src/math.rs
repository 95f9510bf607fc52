use std::ops::{Add, Mul};

/// Sum of two values. No coercion or validation: the operands' `Add`
/// implementation decides the result type, and incompatible operands
/// are rejected at the call site by the trait bound.
pub fn add<A, B>(a: A, b: B) -> A::Output
where
    A: Add<B>,
{
    a + b
}

/// Product of two values, same contract as [`add`] via `Mul`.
pub fn multiply<A, B>(a: A, b: B) -> A::Output
where
    A: Mul<B>,
{
    a * b
}
