// src/core/mod.rs

pub mod html;
pub mod net;
pub mod random;
pub mod sanitize;

pub use net::{HttpTransport, Transport};
pub use random::{Entropy, FastEntropy};
