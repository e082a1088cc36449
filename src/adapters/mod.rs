// Adapters layer: concrete implementations for external systems (LP backend, files, reports).

pub mod lp;
pub mod matrix_reader;
pub mod report;
pub mod storage;
