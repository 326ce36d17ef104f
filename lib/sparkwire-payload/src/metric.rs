//! Metric types.

use chrono::{DateTime, Utc};

use crate::data_type::{DataType, InvalidTypeError};
use crate::metadata::MetaData;
use crate::value::Value;

/// A single named telemetry value.
///
/// A metric pairs a name (and optionally a compact numeric alias for it) with a declared data
/// type, a value of that type, an optional sample timestamp, and optional [`MetaData`]. The
/// declared type is checked against the value's shape when the metric is constructed, so a metric
/// holding a mismatched value cannot exist.
///
/// Metrics are immutable once built: construct with [`new`](Self::new), then attach the optional
/// parts with the consuming `with_*` methods.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    name: String,
    alias: Option<u64>,
    data_type: DataType,
    timestamp: Option<DateTime<Utc>>,
    value: Value,
    metadata: Option<MetaData>,
}

impl Metric {
    /// Creates a metric with the given name, declared data type, and value.
    ///
    /// ## Errors
    ///
    /// If the value's native shape does not match the declared type (including a width mismatch
    /// between integer or float types), `InvalidTypeError` is returned.
    pub fn new(name: impl Into<String>, data_type: DataType, value: impl Into<Value>) -> Result<Self, InvalidTypeError> {
        let value = value.into();
        data_type.check_type(&value)?;

        Ok(Self {
            name: name.into(),
            alias: None,
            data_type,
            timestamp: None,
            value,
            metadata: None,
        })
    }

    /// Set the numeric alias for the metric name.
    pub fn with_alias(mut self, alias: u64) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Set the sample timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the metadata.
    pub fn with_metadata(mut self, metadata: MetaData) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Gets the metric name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the numeric alias, if one was assigned.
    pub fn alias(&self) -> Option<u64> {
        self.alias
    }

    /// Gets the declared data type.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Gets the sample timestamp, if one was assigned.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Gets a reference to the value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Gets a reference to the metadata, if any was attached.
    pub fn metadata(&self) -> Option<&MetaData> {
        self.metadata.as_ref()
    }
}
