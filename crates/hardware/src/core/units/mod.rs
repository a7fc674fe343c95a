//! Execution units and functional components.
//!
//! The only unit modeled is the cache hierarchy; there is no pipeline or ISA
//! driving it, so the other execution units a full core would carry (ALU,
//! FPU, branch predictor, load/store unit) have no place here.

/// Cache hierarchy implementation (L1, L2, L3) with replacement policies.
pub mod cache;
