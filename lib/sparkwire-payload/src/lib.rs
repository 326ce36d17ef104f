//! Typed payload model and wire encoder for Sparkwire telemetry.
//!
//! A payload is an envelope of named, typed metrics: scalar measurements, timestamps, raw bytes,
//! file blobs, and tabular datasets, each paired with a tag from a closed data type catalog and
//! validated against it at construction. [`encode`] lowers an assembled [`Payload`] into the
//! binary wire representation defined by `sparkwire-protos`.
#![deny(warnings)]
#![deny(missing_docs)]

pub mod data_type;
pub use self::data_type::{DataType, InvalidTypeError};

pub mod value;
pub use self::value::{CellValue, File, Value};

pub mod metadata;
pub use self::metadata::MetaData;

pub mod dataset;
pub use self::dataset::{DataSet, Row};

pub mod metric;
pub use self::metric::Metric;

pub mod payload;
pub use self::payload::Payload;

pub mod encoder;
pub use self::encoder::{encode, EncodeError};
