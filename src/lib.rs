//! Priority-layered configuration loading.
//!
//! This crate reads configuration files in one of several textual formats
//! (JSON or an INI-style sectioned dialect), decodes them into a uniform
//! [`Mapping`], and merges any number of decoded configurations into one by
//! numeric priority, so that higher-priority sources override lower-priority
//! ones for overlapping top-level keys.
//!
//! The two entry points are [`read_file`] for loading and [`merge`] for
//! layering. [`ConfigValue`] pairs a decoded mapping with its priority.
//!
//! ```rust,no_run
//! use strata_config::{ConfigValue, merge};
//!
//! # fn run() -> strata_config::StrataResult<()> {
//! let defaults = ConfigValue::from_file(0, "defaults.json", None)?;
//! let overrides = ConfigValue::from_file(10, "site.conf", Some("configobj"))?;
//! let unified = merge(vec![defaults, overrides])?;
//! println!("{} top-level keys", unified.data().len());
//! # Ok(())
//! # }
//! ```

mod decode;
mod error;
mod merge;
mod reader;
mod value;

pub use decode::{Format, Mapping};
pub use error::{StrataError, StrataResult};
pub use merge::{merge, merge_with_priority};
pub use reader::read_file;
pub use value::ConfigValue;
