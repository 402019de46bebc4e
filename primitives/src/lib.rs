#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod assets;
pub mod decimal;
pub mod ecosystem;

pub use assets::*;
pub use decimal::{DecimalError, format_decimal, parse_decimal};
pub use ecosystem::*;
