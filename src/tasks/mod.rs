//! Background Tasks Module

mod sweep;

pub use sweep::spawn_expiry_sweep;
