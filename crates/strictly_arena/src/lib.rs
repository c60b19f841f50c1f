//! Strictly Arena - headless matches between strictly_nrow opponents
//!
//! # Example
//!
//! ```
//! use strictly_arena::{Arena, ArenaConfig};
//! use strictly_nrow::ai::Difficulty;
//!
//! # fn main() -> Result<(), strictly_arena::ArenaError> {
//! let config = ArenaConfig::default()
//!     .with_rounds(2)
//!     .with_x(Difficulty::Hard)
//!     .with_o(Difficulty::Hard);
//! let report = Arena::new(config)?.run()?;
//! assert_eq!(*report.draws(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod config;
mod error;

pub use arena::{Arena, ArenaReport};
pub use config::ArenaConfig;
pub use error::ArenaError;
