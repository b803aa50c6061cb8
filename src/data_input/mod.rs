// src/data_input/mod.rs

pub mod birthdate;

// src/data_input/mod.rs
