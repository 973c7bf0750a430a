//! Domain types shared by every layer of censor.
//!
//! All fallible library operations return [`Result<T, CensorError>`]:
//!
//! ```rust
//! use censor::domain::{CensorError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = censor::config::load_config("censor.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::{CensorError, FileErrorDetail, FileStage};
pub use result::Result;
