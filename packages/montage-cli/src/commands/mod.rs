pub mod batch;
pub mod bipolar;
pub mod classify;
pub mod tables;
