// Utility Module
// File helpers used by the signing wrappers

pub mod file_ops;
