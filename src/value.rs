//! The pairing of a decoded configuration with its merge priority.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decode::Mapping;
use crate::error::StrataResult;
use crate::reader::read_file;

/// An immutable configuration: a decoded [`Mapping`] and an integer priority.
///
/// The priority is purely a sort key for [`merge`](crate::merge); equal
/// priorities carry no ordering among themselves beyond their position in the
/// merge input. A value is constructed once, from a literal mapping or from a
/// file, and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigValue {
    priority: i64,
    data: Mapping,
}

impl ConfigValue {
    /// Wrap a literal mapping.
    ///
    /// The mapping is taken by move, so no caller can mutate it after
    /// construction; no copy is made and no transformation is applied.
    #[must_use]
    pub const fn from_map(priority: i64, data: Mapping) -> Self {
        Self { priority, data }
    }

    /// Load a configuration file via [`read_file`](crate::read_file).
    ///
    /// # Errors
    ///
    /// Propagates any [`StrataError`](crate::StrataError) from the reader
    /// unchanged: `FileAccess` when the path cannot be opened, `Decode` when
    /// its content cannot be interpreted, and `InvalidArgument` when `format`
    /// is unrecognised.
    pub fn from_file(
        priority: i64,
        path: impl AsRef<Path>,
        format: Option<&str>,
    ) -> StrataResult<Self> {
        let data = read_file(path, format)?;
        Ok(Self { priority, data })
    }

    /// Merge priority of this configuration.
    #[must_use]
    pub const fn priority(&self) -> i64 {
        self.priority
    }

    /// Decoded configuration data.
    #[must_use]
    pub const fn data(&self) -> &Mapping {
        &self.data
    }

    /// Consume the value, yielding its data.
    #[must_use]
    pub fn into_data(self) -> Mapping {
        self.data
    }
}
