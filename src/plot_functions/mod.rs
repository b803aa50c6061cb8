// src/plot_functions/mod.rs

pub mod plot_lissajous;
pub mod plot_phyllotaxis;
pub mod plot_rose_curve;
pub mod plot_spirograph;
pub mod plot_ulam_spiral;

// src/plot_functions/mod.rs
