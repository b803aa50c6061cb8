// src/curves/mod.rs

pub mod lissajous;
pub mod phyllotaxis;
pub mod rose;
pub mod spirograph;
pub mod ulam;

// src/curves/mod.rs
