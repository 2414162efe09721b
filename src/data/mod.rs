//! Card number checks: Luhn checksum and issuing network lookup.

pub mod luhn;
pub mod networks;
pub mod validator;

pub use validator::*;
