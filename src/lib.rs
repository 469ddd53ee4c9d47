#![doc = include_str!("../README.md")]

pub use crate::config::*;
pub use crate::decoder::{decode, Decoder, WireEvent, WireHost};
pub use crate::error::{Error, HostError};
pub use crate::types::*;

pub mod config;
pub mod decoder;
pub mod error;
pub mod types;
