//! Sparkwire wire-format definitions.
//!
//! This crate contains the Protocol Buffers message types for the Sparkwire telemetry payload
//! format, used to ship metrics, datasets, and file blobs over the wire. The schema is externally
//! fixed; the definitions here are maintained by hand with `prost` derives to match
//! `proto/sparkwire_payload.proto`, so no protoc toolchain is needed at build time.
#![deny(warnings)]
#![allow(clippy::enum_variant_names)]

/// The top-level payload envelope.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Payload {
    #[prost(uint64, optional, tag = "1")]
    pub timestamp: Option<u64>,
    #[prost(message, repeated, tag = "2")]
    pub metrics: Vec<Metric>,
    #[prost(uint64, optional, tag = "3")]
    pub seq: Option<u64>,
    #[prost(string, optional, tag = "4")]
    pub uuid: Option<String>,
    #[prost(bytes = "vec", optional, tag = "5")]
    pub body: Option<Vec<u8>>,
}

/// A single metric block within a payload.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Metric {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(uint64, optional, tag = "2")]
    pub alias: Option<u64>,
    #[prost(uint64, optional, tag = "3")]
    pub timestamp: Option<u64>,
    #[prost(enumeration = "DataType", optional, tag = "4")]
    pub datatype: Option<i32>,
    #[prost(message, optional, tag = "5")]
    pub metadata: Option<MetaData>,
    #[prost(oneof = "metric::Value", tags = "10, 11, 12, 13, 14, 15, 16, 17")]
    pub value: Option<metric::Value>,
}

/// Nested types for [`Metric`].
pub mod metric {
    /// The value slot of a metric, selected by the metric's data type.
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Value {
        /// 32-bit integer slot, shared by the narrow integer types.
        #[prost(uint32, tag = "10")]
        IntValue(u32),
        /// 64-bit integer slot, shared by Int8 and DateTime.
        #[prost(uint64, tag = "11")]
        LongValue(u64),
        /// 32-bit floating point slot.
        #[prost(float, tag = "12")]
        FloatValue(f32),
        /// 64-bit floating point slot.
        #[prost(double, tag = "13")]
        DoubleValue(f64),
        /// Boolean slot.
        #[prost(bool, tag = "14")]
        BooleanValue(bool),
        /// UTF-8 string slot, shared by String and Text.
        #[prost(string, tag = "15")]
        StringValue(String),
        /// Raw byte slot, shared by Bytes and File.
        #[prost(bytes = "vec", tag = "16")]
        BytesValue(Vec<u8>),
        /// Nested dataset slot.
        #[prost(message, tag = "17")]
        DatasetValue(super::DataSet),
    }
}

/// Descriptive metadata attached to a metric.
#[derive(Clone, PartialEq, prost::Message)]
pub struct MetaData {
    #[prost(string, optional, tag = "1")]
    pub units: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub content_type: Option<String>,
    #[prost(uint64, optional, tag = "3")]
    pub size: Option<u64>,
    #[prost(string, optional, tag = "4")]
    pub algorithm: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub format: Option<String>,
    #[prost(uint64, optional, tag = "6")]
    pub seq: Option<u64>,
    #[prost(string, optional, tag = "7")]
    pub file_name: Option<String>,
    #[prost(string, optional, tag = "8")]
    pub file_type: Option<String>,
    #[prost(string, optional, tag = "9")]
    pub md5: Option<String>,
    #[prost(string, optional, tag = "10")]
    pub description: Option<String>,
}

/// A tabular dataset value: a column count, one type-tagged descriptor per column, and rows of
/// typed cells.
#[derive(Clone, PartialEq, prost::Message)]
pub struct DataSet {
    #[prost(uint64, optional, tag = "1")]
    pub num_of_columns: Option<u64>,
    #[prost(message, repeated, tag = "2")]
    pub columns: Vec<DataSetValue>,
    #[prost(message, repeated, tag = "3")]
    pub rows: Vec<Row>,
}

/// One row of a dataset, one element per column.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Row {
    #[prost(message, repeated, tag = "1")]
    pub elements: Vec<DataSetValue>,
}

/// A single dataset cell (or column descriptor): a data type tag plus an optional value slot.
///
/// Column descriptors carry only the tag. Null cells carry the Null tag and no value slot.
#[derive(Clone, PartialEq, prost::Message)]
pub struct DataSetValue {
    #[prost(enumeration = "DataType", optional, tag = "1")]
    pub datatype: Option<i32>,
    #[prost(oneof = "data_set_value::Value", tags = "2, 3, 4, 5, 6, 7")]
    pub value: Option<data_set_value::Value>,
}

/// Nested types for [`DataSetValue`].
pub mod data_set_value {
    /// The value slot of a dataset cell, selected by the cell's data type.
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Value {
        /// 32-bit integer slot, shared by the narrow integer types.
        #[prost(uint32, tag = "2")]
        IntValue(u32),
        /// 64-bit integer slot, shared by Int8 and DateTime.
        #[prost(uint64, tag = "3")]
        LongValue(u64),
        /// 32-bit floating point slot.
        #[prost(float, tag = "4")]
        FloatValue(f32),
        /// 64-bit floating point slot.
        #[prost(double, tag = "5")]
        DoubleValue(f64),
        /// Boolean slot.
        #[prost(bool, tag = "6")]
        BooleanValue(bool),
        /// UTF-8 string slot.
        #[prost(string, tag = "7")]
        StringValue(String),
    }
}

/// The closed set of wire data types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DataType {
    /// A value that has not yet been typed. Never valid on the wire.
    Unknown = 0,
    /// 8-bit signed integer.
    Int1 = 1,
    /// 16-bit signed integer.
    Int2 = 2,
    /// 32-bit signed integer.
    Int4 = 3,
    /// 64-bit signed integer.
    Int8 = 4,
    /// 32-bit floating point.
    Float4 = 5,
    /// 64-bit floating point.
    Float8 = 6,
    /// Boolean.
    Boolean = 7,
    /// UTF-8 string.
    String = 8,
    /// Instant, carried as epoch milliseconds in the 64-bit integer slot.
    DateTime = 9,
    /// Nested dataset.
    Dataset = 10,
    /// UTF-8 text, encoded identically to String.
    Text = 11,
    /// Raw bytes.
    Bytes = 12,
    /// File blob, carried in the byte slot with the file name in metadata.
    File = 13,
    /// Explicit null marker for dataset cells.
    Null = 14,
}
