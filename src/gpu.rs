//! GPU evaluation of ψ over candidate batches, via CUDA (not for graphics).
//!
//! The kernel mirrors the CPU path in `orbital`: one thread per candidate,
//! Laguerre recurrence plus the angular formula for the orbital's (l, m).

use std::sync::Arc;

use cudarc::{
    driver::{CudaDevice, LaunchAsync, LaunchConfig},
    nvrtc::compile_ptx,
};
use ndarray::Array1;

use crate::orbital::Orbital;

const KERNEL_SRC: &str = include_str!("cuda/psi.cu");

/// Bring up device 0 and load the ψ kernel into it. Startup-only; failures
/// here mean no usable CUDA device, so we bail out immediately.
pub fn init() -> Arc<CudaDevice> {
    let dev = CudaDevice::new(0).unwrap();

    let ptx = compile_ptx(KERNEL_SRC).unwrap();
    dev.load_ptx(ptx, "cuda", &["psi_kernel"]).unwrap();

    dev
}

/// Evaluate ψ for a candidate batch on the GPU.
pub fn psi(
    dev: &Arc<CudaDevice>,
    orbital: &Orbital,
    r: &Array1<f64>,
    θ: &Array1<f64>,
    φ: &Array1<f64>,
) -> Array1<f64> {
    let n_samples = r.len();

    let r_gpu = dev.htod_copy(r.to_vec()).unwrap();
    let θ_gpu = dev.htod_copy(θ.to_vec()).unwrap();
    let φ_gpu = dev.htod_copy(φ.to_vec()).unwrap();

    let mut ψ_gpu = dev.alloc_zeros::<f64>(n_samples).unwrap();

    let kernel = dev.get_func("cuda", "psi_kernel").unwrap();
    let cfg = LaunchConfig::for_num_elems(n_samples as u32);

    unsafe {
        kernel
            .launch(
                cfg,
                (
                    &mut ψ_gpu,
                    &r_gpu,
                    &θ_gpu,
                    &φ_gpu,
                    orbital.n as u32,
                    orbital.l as u32,
                    orbital.m_idx as u32,
                    n_samples as u32,
                ),
            )
            .unwrap();
    }

    Array1::from_vec(dev.dtoh_sync_copy(&ψ_gpu).unwrap())
}
