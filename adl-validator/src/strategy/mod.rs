//! Validation source strategies.
//!
//! The engine itself validates one in-memory document. Strategies decide
//! where documents come from; only the filesystem strategy (`fs` module)
//! exists today, exposed through `validate_fs()`.

pub mod fs;
