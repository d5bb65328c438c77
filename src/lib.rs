//! Pointer Drills
//!
//! Two small programs about walking memory by hand in Rust.
//!
//! ## Programs
//!
//! 1. **Array traversal** - a step cursor over one fixed array and a
//!    begin/end span over another, one value per line
//! 2. **Pointer indirection** - mutation through a `&mut` parameter,
//!    three stacked references, and array base-plus-offset reads
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin array_traversal
//! cargo run --bin pointer_indirection
//! ```

pub mod error;
pub mod indirection;
pub mod traversal;

pub use error::{DrillError, Result};
