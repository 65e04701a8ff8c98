// ============================================================================
// fixbits Library
// Binary fixed-point arithmetic with compile-time width and precision
// ============================================================================

//! # fixbits
//!
//! Deterministic binary fixed-point numbers for code that cannot afford
//! floating-point rounding variability: embedded targets, real-time loops,
//! financial ledgers, lockstep simulation.
//!
//! ## Features
//!
//! - **One integer per value** — a `repr(transparent)` wrapper over `i8`,
//!   `i16`, `i32`, or `i64`; the denoted number is the bit pattern divided
//!   by `2^P`
//! - **Compile-time width and precision** — unsupported widths cannot
//!   implement the sealed storage trait, and an invalid precision fails
//!   the build at the first construction site
//! - **Widened multiply/divide** — products and quotients run through the
//!   next wider width so only the final result can wrap (`i64` reuses
//!   itself and is overflow-prone; this is deliberate and documented)
//! - **Wrapping overflow semantics** — arithmetic mirrors the plain integer
//!   types: overflow wraps, division by zero panics
//! - **Decimal boundaries** — digit-sequence construction, `FromStr`
//!   parsing, and `rust_decimal` conversions for API edges
//!
//! ## Example
//!
//! ```rust
//! use fixbits::prelude::*;
//!
//! // 32-bit storage, 15 fractional bits
//! let price = Fixed32::<15>::from_parts(15, 5); // 15.5
//! let qty = Fixed32::<15>::from_integer(3);
//!
//! let total = price * qty;
//! assert_eq!(total, Fixed32::<15>::from_parts(46, 5));
//! assert!(total > 46);
//!
//! let parsed: Fixed32<15> = "46.5".parse().unwrap();
//! assert_eq!(parsed, total);
//! ```

mod encode;
mod errors;
mod fixed;
mod width;

pub use errors::{FixedError, FixedResult};
pub use fixed::{Fixed, Fixed16, Fixed32, Fixed64, Fixed8};
pub use width::FixedInt;

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{FixedError, FixedResult};
    pub use crate::fixed::{Fixed, Fixed16, Fixed32, Fixed64, Fixed8};
    pub use crate::width::FixedInt;
}
