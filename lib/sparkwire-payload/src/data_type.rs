//! The data type catalog.

use std::fmt;

use snafu::Snafu;

use crate::value::Value;

/// Error returned when a value's native shape does not match its declared data type.
///
/// This is raised eagerly, at construction of the typed value, never at encode time. It is not
/// retryable: the caller must fix the input.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
#[snafu(display("got {} value for declared type {}", value_type, data_type))]
pub struct InvalidTypeError {
    data_type: DataType,
    value_type: DataType,
}

/// The closed set of data types a metric or dataset cell can declare.
///
/// Each type admits exactly one native shape, checked by [`check_type`](Self::check_type). The
/// numeric names carry the width in bytes: `Int4` is a 32-bit signed integer, `Float8` a 64-bit
/// float. The catalog is fixed; it is not extensible by callers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DataType {
    /// A value that has not yet been typed.
    ///
    /// Unknown never passes a type check and never encodes; it exists only so an untyped value
    /// can be represented before its type is resolved.
    Unknown,

    /// 8-bit signed integer.
    Int1,

    /// 16-bit signed integer.
    Int2,

    /// 32-bit signed integer.
    Int4,

    /// 64-bit signed integer.
    ///
    /// Also accepts an instant, which shares the 64-bit integer slot as epoch milliseconds.
    Int8,

    /// 32-bit floating point number.
    Float4,

    /// 64-bit floating point number.
    Float8,

    /// Boolean.
    Boolean,

    /// UTF-8 string.
    String,

    /// An instant, carried on the wire as epoch milliseconds in the 64-bit integer slot.
    DateTime,

    /// A tabular dataset: declared column types plus rows of typed cells.
    DataSet,

    /// UTF-8 text. An alias of [`String`](Self::String), encoded identically.
    Text,

    /// Raw bytes.
    Bytes,

    /// A file blob: raw bytes plus a file name that always travels in the metric's metadata.
    File,

    /// The explicit null marker for dataset cells.
    ///
    /// Not a valid metric type; a metric always carries a value.
    Null,
}

impl DataType {
    /// Checks that `value` is an acceptable shape for this data type.
    ///
    /// Width matters: a 64-bit integer supplied for a 32-bit (or narrower) integer type fails,
    /// even though both are integers. `Int8` and `DateTime` accept each other's shape, since both
    /// occupy the 64-bit integer slot on the wire. `String` and `Text` share the string shape.
    ///
    /// ## Errors
    ///
    /// Returns `InvalidTypeError` if the shape does not match, if this type is `Unknown`, or if
    /// this type is `Null` (which only dataset cells may carry).
    pub fn check_type(&self, value: &Value) -> Result<(), InvalidTypeError> {
        let accepted = match self {
            Self::Unknown => false,
            Self::Int1 => matches!(value, Value::Int1(_)),
            Self::Int2 => matches!(value, Value::Int2(_)),
            Self::Int4 => matches!(value, Value::Int4(_)),
            Self::Int8 => matches!(value, Value::Int8(_) | Value::DateTime(_)),
            Self::Float4 => matches!(value, Value::Float4(_)),
            Self::Float8 => matches!(value, Value::Float8(_)),
            Self::Boolean => matches!(value, Value::Boolean(_)),
            Self::String | Self::Text => matches!(value, Value::String(_) | Value::Text(_)),
            Self::DateTime => matches!(value, Value::DateTime(_) | Value::Int8(_)),
            Self::DataSet => matches!(value, Value::DataSet(_)),
            Self::Bytes => matches!(value, Value::Bytes(_)),
            Self::File => matches!(value, Value::File(_)),
            Self::Null => false,
        };

        if accepted {
            Ok(())
        } else {
            InvalidType {
                data_type: *self,
                value_type: value.data_type(),
            }
            .fail()
        }
    }

    /// Returns `true` if this type can be declared as a dataset column type.
    ///
    /// Columns admit the scalar and temporal types only; composites (datasets, files, raw bytes)
    /// and the Unknown/Null sentinels cannot head a column.
    pub fn is_cell_type(&self) -> bool {
        matches!(
            self,
            Self::Int1
                | Self::Int2
                | Self::Int4
                | Self::Int8
                | Self::Float4
                | Self::Float8
                | Self::Boolean
                | Self::String
                | Self::Text
                | Self::DateTime
        )
    }

    /// Returns the name of this data type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Int1 => "Int1",
            Self::Int2 => "Int2",
            Self::Int4 => "Int4",
            Self::Int8 => "Int8",
            Self::Float4 => "Float4",
            Self::Float8 => "Float8",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::DateTime => "DateTime",
            Self::DataSet => "DataSet",
            Self::Text => "Text",
            Self::Bytes => "Bytes",
            Self::File => "File",
            Self::Null => "Null",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
