//! Shared types: the compute-device context threaded through the sampler,
//! and the fixed lobe-color table.

#[cfg(feature = "cuda")]
use std::sync::Arc;

#[cfg(feature = "cuda")]
use cudarc::driver::CudaDevice;

/// Positive-lobe color. Soft pink, for a glass-sculpture look.
pub const COLOR_POS: [u8; 3] = [255, 160, 160];
/// Non-positive-lobe color. Soft blue.
pub const COLOR_NEG: [u8; 3] = [160, 210, 255];

/// Which device evaluates ψ over candidate batches. Chosen once at startup,
/// and passed explicitly into the sampler rather than read from globals.
#[derive(Clone)]
pub enum ComputationDevice {
    Cpu,
    #[cfg(feature = "cuda")]
    Gpu(Arc<CudaDevice>),
}

impl ComputationDevice {
    pub fn descrip(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            #[cfg(feature = "cuda")]
            Self::Gpu(_) => "GPU (CUDA)",
        }
    }
}
