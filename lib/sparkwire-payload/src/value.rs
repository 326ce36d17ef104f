//! Metric and dataset cell values.

use chrono::{DateTime, Utc};

use crate::data_type::DataType;
use crate::dataset::DataSet;

/// A file blob: raw bytes plus the file name they came from.
///
/// The file name is not optional: a file metric must always surface its name in the encoded
/// metadata block, so a nameless file has no wire representation.
#[derive(Clone, Debug, PartialEq)]
pub struct File {
    file_name: String,
    bytes: Vec<u8>,
}

impl File {
    /// Creates a file value from a file name and its contents.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Gets the file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Gets the file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// The value of a metric.
///
/// One variant per data kind in the catalog, each carrying its concretely-typed payload, so a
/// value can never hold a shape its kind does not permit. Pairing a value with a *declared*
/// [`DataType`] still goes through [`DataType::check_type`], since a few types share a shape
/// (`Int8`/`DateTime`, `String`/`Text`).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 8-bit signed integer.
    Int1(i8),

    /// 16-bit signed integer.
    Int2(i16),

    /// 32-bit signed integer.
    Int4(i32),

    /// 64-bit signed integer.
    Int8(i64),

    /// 32-bit floating point number.
    Float4(f32),

    /// 64-bit floating point number.
    Float8(f64),

    /// Boolean.
    Boolean(bool),

    /// UTF-8 string.
    String(String),

    /// UTF-8 text, encoded identically to `String`.
    Text(String),

    /// An instant, encoded as epoch milliseconds.
    DateTime(DateTime<Utc>),

    /// Raw bytes.
    Bytes(Vec<u8>),

    /// A file blob.
    File(File),

    /// A tabular dataset.
    DataSet(DataSet),
}

impl Value {
    /// Returns the natural data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Int1(_) => DataType::Int1,
            Self::Int2(_) => DataType::Int2,
            Self::Int4(_) => DataType::Int4,
            Self::Int8(_) => DataType::Int8,
            Self::Float4(_) => DataType::Float4,
            Self::Float8(_) => DataType::Float8,
            Self::Boolean(_) => DataType::Boolean,
            Self::String(_) => DataType::String,
            Self::Text(_) => DataType::Text,
            Self::DateTime(_) => DataType::DateTime,
            Self::Bytes(_) => DataType::Bytes,
            Self::File(_) => DataType::File,
            Self::DataSet(_) => DataType::DataSet,
        }
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Self::Int1(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Self::Int2(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int4(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int8(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float4(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float8(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<File> for Value {
    fn from(value: File) -> Self {
        Self::File(value)
    }
}

impl From<DataSet> for Value {
    fn from(value: DataSet) -> Self {
        Self::DataSet(value)
    }
}

/// The value of a single dataset cell.
///
/// Cells support a strict subset of the catalog: the scalar and temporal kinds, plus the explicit
/// [`Null`](Self::Null) marker for a missing value. There is deliberately no dataset (or file, or
/// bytes) variant, so a composite can never nest inside a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// 8-bit signed integer.
    Int1(i8),

    /// 16-bit signed integer.
    Int2(i16),

    /// 32-bit signed integer.
    Int4(i32),

    /// 64-bit signed integer.
    Int8(i64),

    /// 32-bit floating point number.
    Float4(f32),

    /// 64-bit floating point number.
    Float8(f64),

    /// Boolean.
    Boolean(bool),

    /// UTF-8 string.
    String(String),

    /// UTF-8 text, encoded identically to `String`.
    Text(String),

    /// An instant, encoded as epoch milliseconds.
    DateTime(DateTime<Utc>),

    /// A missing value. Encoded as the bare Null tag with no value slot.
    Null,
}

impl CellValue {
    /// Returns the natural data type of this cell value.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Int1(_) => DataType::Int1,
            Self::Int2(_) => DataType::Int2,
            Self::Int4(_) => DataType::Int4,
            Self::Int8(_) => DataType::Int8,
            Self::Float4(_) => DataType::Float4,
            Self::Float8(_) => DataType::Float8,
            Self::Boolean(_) => DataType::Boolean,
            Self::String(_) => DataType::String,
            Self::Text(_) => DataType::Text,
            Self::DateTime(_) => DataType::DateTime,
            Self::Null => DataType::Null,
        }
    }
}

impl From<i8> for CellValue {
    fn from(value: i8) -> Self {
        Self::Int1(value)
    }
}

impl From<i16> for CellValue {
    fn from(value: i16) -> Self {
        Self::Int2(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Int4(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int8(value)
    }
}

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        Self::Float4(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float8(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}
