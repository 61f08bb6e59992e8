//! capabilities.rs
//! Feature gate consulted by callers before handing work to the engines.
//! The engines themselves never check it.

use serde::Serialize;

use crate::definition::ByteOrder;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Byte buffers with random access and in-place writes.
    BinaryIo,
    /// 64-bit integers without precision loss.
    WideIntegers,
    /// More than one hardware thread for out-of-line workers.
    Parallelism,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub binary_io: bool,
    pub wide_integers: bool,
    pub host_order: ByteOrder,
    /// Hardware threads available to a worker pool.
    pub parallelism: usize,
}

impl Capabilities {
    pub fn detect() -> Self {
        Self {
            binary_io: true,
            wide_integers: true,
            host_order: ByteOrder::host(),
            parallelism: num_cpus::get(),
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::BinaryIo => self.binary_io,
            Capability::WideIntegers => self.wide_integers,
            Capability::Parallelism => self.parallelism > 1,
        }
    }
}
