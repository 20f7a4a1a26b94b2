//! Shared scalar traits for the mpblas ecosystem.
//!
//! This crate provides the [`Real`] trait that the `mpblas` primitives and the
//! `mplapack` factorization kernel are generic over. The arbitrary-precision
//! arithmetic engine itself lives outside this workspace: any type that can add,
//! multiply, divide, compare and take square roots can implement [`Real`].
//!
//! External crates can depend on `mpblas-traits` to implement [`Real`] for
//! their multiprecision types without orphan rule violations.
//!
//! With the `twofloat` feature (on by default) the crate also ships [`Df64`], a
//! double-double real with roughly 106 significand bits.

pub mod real;

#[cfg(feature = "twofloat")]
pub mod df64;

pub use real::Real;

#[cfg(feature = "twofloat")]
pub use df64::Df64;
