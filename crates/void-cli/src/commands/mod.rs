pub mod dock;
pub mod sample;
