#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod analyzer;
pub use analyzer::*;
mod delay;
pub use delay::*;
mod error;
pub use error::*;
mod fft;
pub use fft::*;
mod filter;
pub use filter::*;
mod fir;
pub use fir::*;
mod frame;
pub use frame::*;
mod iir;
pub use iir::*;
mod math;
pub use math::*;
mod num;
pub use num::*;
mod ring;
pub use ring::*;
mod roots;
pub use roots::*;
mod shift;
pub use shift::*;
mod window;
pub use window::*;

#[cfg(test)]
pub mod testing;
