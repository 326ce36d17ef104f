//! Payload encoding.

use prost::Message as _;
use snafu::{ResultExt as _, Snafu};
use sparkwire_protos as proto;
use tracing::{debug, trace};

use crate::data_type::DataType;
use crate::dataset::DataSet;
use crate::metadata::MetaData;
use crate::metric::Metric;
use crate::payload::Payload;
use crate::value::{CellValue, Value};

/// Error returned when a payload fails to encode.
///
/// Encoding is atomic: when any metric fails, the whole encode fails and no bytes are produced.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum EncodeError {
    /// A metric or cell declared a type with no encoding rule.
    #[snafu(display("unknown data type {}", data_type))]
    UnknownType {
        /// The declared type.
        data_type: DataType,
    },

    /// A dataset column declared a type outside the cell-encodable subset.
    #[snafu(display("{} is not a valid dataset column type", data_type))]
    UnsupportedColumnType {
        /// The declared column type.
        data_type: DataType,
    },

    /// A dataset declared no columns.
    #[snafu(display("dataset has no columns"))]
    EmptyColumns,

    /// A dataset row's cell count does not match the declared column count.
    #[snafu(display("row has {} cells but the dataset declares {} columns", cells, columns))]
    RowWidthMismatch {
        /// Cells in the offending row.
        cells: usize,
        /// Declared column count.
        columns: usize,
    },

    /// A dataset cell's type disagrees with its column's declared type.
    #[snafu(display("{} cell under {} column at position {}", cell, column, position))]
    CellTypeMismatch {
        /// The cell's type.
        cell: DataType,
        /// The column's declared type.
        column: DataType,
        /// Zero-based column position.
        position: usize,
    },

    /// A declared type and its value disagreed at encode time.
    ///
    /// The checked constructors make this unreachable for payloads assembled through the public
    /// API; it backstops the dispatch rather than panicking.
    #[snafu(display("declared type {} does not match {} value", data_type, value_type))]
    MismatchedValue {
        /// The declared type.
        data_type: DataType,
        /// The value's natural type.
        value_type: DataType,
    },

    /// Encoding one of the payload's metrics failed.
    #[snafu(display("failed to encode metric '{}': {}", name, source))]
    MetricFailed {
        /// Name of the failing metric.
        name: String,
        /// What went wrong inside it.
        #[snafu(source(from(EncodeError, Box::new)))]
        source: Box<EncodeError>,
    },
}

/// Encodes a payload into its binary wire representation.
///
/// The output is deterministic: field presence and ordering derive only from the payload's data,
/// so encoding the same payload twice yields byte-identical output.
///
/// ## Errors
///
/// If any metric's value fails dispatch (an unknown data type, a malformed dataset, or a
/// type/value mismatch), the whole encode fails with the offending metric's name and no bytes are
/// returned.
pub fn encode(payload: &Payload) -> Result<Vec<u8>, EncodeError> {
    debug!(seq = payload.seq(), metrics = payload.metrics().len(), "Encoding payload.");

    let message = encode_payload(payload)?;
    Ok(message.encode_to_vec())
}

fn encode_payload(payload: &Payload) -> Result<proto::Payload, EncodeError> {
    // Encode the metrics, in input order. A failure on any one of them fails the whole payload;
    // there is no partial-payload output.
    let mut metrics = Vec::with_capacity(payload.metrics().len());
    for metric in payload.metrics() {
        trace!(metric = metric.name(), data_type = metric.data_type().as_str(), "Encoding metric.");

        let encoded = encode_metric(metric).context(MetricFailed { name: metric.name() })?;
        metrics.push(encoded);
    }

    Ok(proto::Payload {
        timestamp: payload.timestamp().map(|timestamp| timestamp.timestamp_millis() as u64),
        metrics,
        // The sequence number is always present, even when zero.
        seq: Some(payload.seq()),
        uuid: payload.uuid().map(|uuid| uuid.to_string()),
        body: payload.body().map(|body| body.to_vec()),
    })
}

fn encode_metric(metric: &Metric) -> Result<proto::Metric, EncodeError> {
    let value = encode_value(metric.data_type(), metric.value())?;

    // A file value must always surface its file name in the metadata block, whether or not the
    // caller attached metadata of their own. Caller-supplied fields are preserved; only the file
    // name is forced from the file itself.
    let file_name = match metric.value() {
        Value::File(file) => Some(file.file_name()),
        _ => None,
    };
    let metadata = if metric.metadata().is_some() || file_name.is_some() {
        Some(encode_metadata(metric.metadata(), file_name))
    } else {
        None
    };

    Ok(proto::Metric {
        name: Some(metric.name().to_string()),
        alias: metric.alias(),
        timestamp: metric.timestamp().map(|timestamp| timestamp.timestamp_millis() as u64),
        datatype: Some(wire_type(metric.data_type()) as i32),
        metadata,
        value: Some(value),
    })
}

fn encode_value(data_type: DataType, value: &Value) -> Result<proto::metric::Value, EncodeError> {
    use proto::metric::Value as WireValue;

    let wire_value = match (data_type, value) {
        // The narrow integer types share the 32-bit slot, sign-extended.
        (DataType::Int1, Value::Int1(v)) => WireValue::IntValue(*v as u32),
        (DataType::Int2, Value::Int2(v)) => WireValue::IntValue(*v as u32),
        (DataType::Int4, Value::Int4(v)) => WireValue::IntValue(*v as u32),
        // Int8 and DateTime share the 64-bit slot; instants land as epoch milliseconds.
        (DataType::Int8, Value::Int8(v)) | (DataType::DateTime, Value::Int8(v)) => WireValue::LongValue(*v as u64),
        (DataType::Int8, Value::DateTime(v)) | (DataType::DateTime, Value::DateTime(v)) => {
            WireValue::LongValue(v.timestamp_millis() as u64)
        }
        (DataType::Float4, Value::Float4(v)) => WireValue::FloatValue(*v),
        (DataType::Float8, Value::Float8(v)) => WireValue::DoubleValue(*v),
        (DataType::Boolean, Value::Boolean(v)) => WireValue::BooleanValue(*v),
        (DataType::String | DataType::Text, Value::String(v) | Value::Text(v)) => WireValue::StringValue(v.clone()),
        (DataType::Bytes, Value::Bytes(v)) => WireValue::BytesValue(v.clone()),
        (DataType::File, Value::File(file)) => WireValue::BytesValue(file.bytes().to_vec()),
        (DataType::DataSet, Value::DataSet(data_set)) => WireValue::DatasetValue(encode_data_set(data_set)?),
        (DataType::Unknown | DataType::Null, _) => return UnknownType { data_type }.fail(),
        (data_type, value) => {
            return MismatchedValue {
                data_type,
                value_type: value.data_type(),
            }
            .fail()
        }
    };

    Ok(wire_value)
}

fn encode_data_set(data_set: &DataSet) -> Result<proto::DataSet, EncodeError> {
    let columns = data_set.columns();
    if columns.is_empty() {
        return EmptyColumns.fail();
    }

    // One type-tagged descriptor per column, carrying no value slot.
    let mut wire_columns = Vec::with_capacity(columns.len());
    for column in columns {
        if !column.is_cell_type() {
            return UnsupportedColumnType { data_type: *column }.fail();
        }

        wire_columns.push(proto::DataSetValue {
            datatype: Some(wire_cell_type(*column) as i32),
            value: None,
        });
    }

    let mut wire_rows = Vec::with_capacity(data_set.rows().len());
    for row in data_set.rows() {
        let cells = row.cells();
        if cells.len() != columns.len() {
            return RowWidthMismatch {
                cells: cells.len(),
                columns: columns.len(),
            }
            .fail();
        }

        let mut elements = Vec::with_capacity(cells.len());
        for (position, (cell, column)) in cells.iter().zip(columns).enumerate() {
            elements.push(encode_cell(cell, *column, position)?);
        }

        trace!(cells = cells.len(), "Encoded dataset row.");
        wire_rows.push(proto::Row { elements });
    }

    Ok(proto::DataSet {
        num_of_columns: Some(columns.len() as u64),
        columns: wire_columns,
        rows: wire_rows,
    })
}

fn encode_cell(cell: &CellValue, column: DataType, position: usize) -> Result<proto::DataSetValue, EncodeError> {
    use proto::data_set_value::Value as WireValue;

    // A Null cell marks a missing value and is accepted under any column type.
    if !matches!(cell, CellValue::Null) && cell.data_type() != column {
        return CellTypeMismatch {
            cell: cell.data_type(),
            column,
            position,
        }
        .fail();
    }

    let value = match cell {
        CellValue::Int1(v) => Some(WireValue::IntValue(*v as u32)),
        CellValue::Int2(v) => Some(WireValue::IntValue(*v as u32)),
        CellValue::Int4(v) => Some(WireValue::IntValue(*v as u32)),
        CellValue::Int8(v) => Some(WireValue::LongValue(*v as u64)),
        CellValue::Float4(v) => Some(WireValue::FloatValue(*v)),
        CellValue::Float8(v) => Some(WireValue::DoubleValue(*v)),
        CellValue::Boolean(v) => Some(WireValue::BooleanValue(*v)),
        CellValue::String(v) | CellValue::Text(v) => Some(WireValue::StringValue(v.clone())),
        CellValue::DateTime(v) => Some(WireValue::LongValue(v.timestamp_millis() as u64)),
        CellValue::Null => None,
    };

    Ok(proto::DataSetValue {
        datatype: Some(wire_cell_type(cell.data_type()) as i32),
        value,
    })
}

fn wire_type(data_type: DataType) -> proto::DataType {
    match data_type {
        DataType::Unknown => proto::DataType::Unknown,
        DataType::Int1 => proto::DataType::Int1,
        DataType::Int2 => proto::DataType::Int2,
        DataType::Int4 => proto::DataType::Int4,
        DataType::Int8 => proto::DataType::Int8,
        DataType::Float4 => proto::DataType::Float4,
        DataType::Float8 => proto::DataType::Float8,
        DataType::Boolean => proto::DataType::Boolean,
        DataType::String => proto::DataType::String,
        DataType::DateTime => proto::DataType::DateTime,
        DataType::DataSet => proto::DataType::Dataset,
        DataType::Text => proto::DataType::Text,
        DataType::Bytes => proto::DataType::Bytes,
        DataType::File => proto::DataType::File,
        DataType::Null => proto::DataType::Null,
    }
}

// Inside a dataset, Text normalizes to String: cell slots make no distinction between the two.
fn wire_cell_type(data_type: DataType) -> proto::DataType {
    match data_type {
        DataType::Text => proto::DataType::String,
        other => wire_type(other),
    }
}

fn encode_metadata(metadata: Option<&MetaData>, file_name: Option<&str>) -> proto::MetaData {
    let mut message = match metadata {
        Some(metadata) => proto::MetaData {
            units: metadata.units.clone(),
            content_type: metadata.content_type.clone(),
            size: Some(metadata.size),
            algorithm: metadata.algorithm.clone(),
            format: metadata.format.clone(),
            seq: Some(metadata.seq),
            file_name: metadata.file_name.clone(),
            file_type: metadata.file_type.clone(),
            md5: metadata.md5.clone(),
            description: metadata.description.clone(),
        },
        // Size and seq are always present on the wire, zero-defaulted.
        None => proto::MetaData {
            size: Some(0),
            seq: Some(0),
            ..Default::default()
        },
    };

    // The file name from a file value wins over any caller-supplied name.
    if let Some(file_name) = file_name {
        message.file_name = Some(file_name.to_string());
    }

    message
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use prost::Message as _;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use sparkwire_protos as proto;

    use super::{encode, EncodeError};
    use crate::data_type::DataType;
    use crate::dataset::{DataSet, Row};
    use crate::metadata::MetaData;
    use crate::metric::Metric;
    use crate::payload::Payload;
    use crate::value::{CellValue, File, Value};

    fn decode(bytes: &[u8]) -> proto::Payload {
        proto::Payload::decode(bytes).expect("produced bytes should decode")
    }

    #[test]
    fn example_scalar_metric_round_trips() {
        let timestamp = DateTime::from_timestamp_millis(1_000).unwrap();
        let payload = Payload::new(1).with_metric(
            Metric::new("temp", DataType::Float8, 23.5f64)
                .unwrap()
                .with_alias(1)
                .with_timestamp(timestamp),
        );

        let first = encode(&payload).unwrap();
        let second = encode(&payload).unwrap();
        assert_eq!(first, second, "same payload must encode byte-identically");

        let decoded = decode(&first);
        assert_eq!(decoded.seq, Some(1));
        assert_eq!(decoded.timestamp, None);
        assert_eq!(decoded.metrics.len(), 1);

        let metric = &decoded.metrics[0];
        assert_eq!(metric.name.as_deref(), Some("temp"));
        assert_eq!(metric.alias, Some(1));
        assert_eq!(metric.datatype, Some(proto::DataType::Float8 as i32));
        assert_eq!(metric.timestamp, Some(1_000));
        assert_eq!(metric.value, Some(proto::metric::Value::DoubleValue(23.5)));
    }

    #[test]
    fn envelope_fields_are_present_iff_set() {
        let bare = encode(&Payload::new(0)).unwrap();
        let decoded = decode(&bare);
        assert_eq!(decoded.seq, Some(0), "seq is emitted even when zero");
        assert_eq!(decoded.timestamp, None);
        assert_eq!(decoded.uuid, None);
        assert_eq!(decoded.body, None);

        let timestamp = DateTime::from_timestamp_millis(42_000).unwrap();
        let full = encode(
            &Payload::new(7)
                .with_timestamp(timestamp)
                .with_uuid("c0ffee")
                .with_body(vec![0xde, 0xad]),
        )
        .unwrap();
        let decoded = decode(&full);
        assert_eq!(decoded.timestamp, Some(42_000));
        assert_eq!(decoded.seq, Some(7));
        assert_eq!(decoded.uuid.as_deref(), Some("c0ffee"));
        assert_eq!(decoded.body.as_deref(), Some(&[0xde, 0xad][..]));
    }

    #[test]
    fn narrow_integers_sign_extend_into_the_int_slot() {
        let payload = Payload::new(0).with_metric(Metric::new("delta", DataType::Int1, -1i8).unwrap());

        let decoded = decode(&encode(&payload).unwrap());
        let value = decoded.metrics[0].value.clone();
        assert_eq!(value, Some(proto::metric::Value::IntValue(u32::MAX)));

        // The decoder's inverse cast recovers the original.
        match value {
            Some(proto::metric::Value::IntValue(v)) => assert_eq!(v as i8, -1),
            other => panic!("unexpected value slot: {:?}", other),
        }
    }

    #[test]
    fn wide_slot_is_shared_by_int8_and_datetime() {
        let instant = DateTime::from_timestamp_millis(1_234_567).unwrap();
        let payload = Payload::new(0)
            .with_metric(Metric::new("raw", DataType::Int8, -2i64).unwrap())
            .with_metric(Metric::new("when", DataType::DateTime, instant).unwrap());

        let decoded = decode(&encode(&payload).unwrap());
        assert_eq!(
            decoded.metrics[0].value,
            Some(proto::metric::Value::LongValue(-2i64 as u64))
        );
        assert_eq!(decoded.metrics[0].datatype, Some(proto::DataType::Int8 as i32));
        assert_eq!(
            decoded.metrics[1].value,
            Some(proto::metric::Value::LongValue(1_234_567))
        );
        assert_eq!(decoded.metrics[1].datatype, Some(proto::DataType::DateTime as i32));
    }

    #[test]
    fn text_shares_the_string_slot_but_keeps_its_tag() {
        let payload = Payload::new(0).with_metric(
            Metric::new("note", DataType::Text, Value::Text("hello".to_string())).unwrap(),
        );

        let decoded = decode(&encode(&payload).unwrap());
        assert_eq!(decoded.metrics[0].datatype, Some(proto::DataType::Text as i32));
        assert_eq!(
            decoded.metrics[0].value,
            Some(proto::metric::Value::StringValue("hello".to_string()))
        );
    }

    #[test]
    fn example_dataset_round_trips() {
        let data_set = DataSet::new(
            vec![DataType::Int4, DataType::String],
            vec![
                Row::new(vec![CellValue::Int4(5), CellValue::from("a")]),
                Row::new(vec![CellValue::Int4(6), CellValue::from("b")]),
            ],
        );
        let payload =
            Payload::new(0).with_metric(Metric::new("table", DataType::DataSet, data_set).unwrap());

        let bytes = encode(&payload).unwrap();
        assert_eq!(bytes, encode(&payload).unwrap());

        let decoded = decode(&bytes);
        let value = decoded.metrics[0].value.clone();
        let wire_set = match value {
            Some(proto::metric::Value::DatasetValue(set)) => set,
            other => panic!("unexpected value slot: {:?}", other),
        };

        assert_eq!(wire_set.num_of_columns, Some(2));
        assert_eq!(wire_set.columns.len(), 2);
        assert_eq!(wire_set.columns[0].datatype, Some(proto::DataType::Int4 as i32));
        assert_eq!(wire_set.columns[1].datatype, Some(proto::DataType::String as i32));
        assert!(wire_set.columns.iter().all(|c| c.value.is_none()));

        assert_eq!(wire_set.rows.len(), 2);
        let expect = [
            (5u32, "a"),
            (6u32, "b"),
        ];
        for (row, (int_cell, string_cell)) in wire_set.rows.iter().zip(expect) {
            assert_eq!(row.elements.len(), 2);
            assert_eq!(
                row.elements[0].value,
                Some(proto::data_set_value::Value::IntValue(int_cell))
            );
            assert_eq!(
                row.elements[1].value,
                Some(proto::data_set_value::Value::StringValue(string_cell.to_string()))
            );
        }
    }

    #[test]
    fn null_cells_carry_only_the_null_tag() {
        let data_set = DataSet::new(
            vec![DataType::Int4],
            vec![Row::new(vec![CellValue::Null]), Row::new(vec![CellValue::Int4(9)])],
        );
        let payload =
            Payload::new(0).with_metric(Metric::new("sparse", DataType::DataSet, data_set).unwrap());

        let decoded = decode(&encode(&payload).unwrap());
        let wire_set = match decoded.metrics[0].value.clone() {
            Some(proto::metric::Value::DatasetValue(set)) => set,
            other => panic!("unexpected value slot: {:?}", other),
        };

        assert_eq!(wire_set.rows[0].elements[0].datatype, Some(proto::DataType::Null as i32));
        assert_eq!(wire_set.rows[0].elements[0].value, None);
        assert_eq!(
            wire_set.rows[1].elements[0].value,
            Some(proto::data_set_value::Value::IntValue(9))
        );
    }

    #[test]
    fn dataset_text_cells_normalize_to_string_on_the_wire() {
        let data_set = DataSet::new(
            vec![DataType::Text],
            vec![Row::new(vec![CellValue::Text("x".to_string())])],
        );
        let payload =
            Payload::new(0).with_metric(Metric::new("notes", DataType::DataSet, data_set).unwrap());

        let decoded = decode(&encode(&payload).unwrap());
        let wire_set = match decoded.metrics[0].value.clone() {
            Some(proto::metric::Value::DatasetValue(set)) => set,
            other => panic!("unexpected value slot: {:?}", other),
        };

        assert_eq!(wire_set.columns[0].datatype, Some(proto::DataType::String as i32));
        assert_eq!(wire_set.rows[0].elements[0].datatype, Some(proto::DataType::String as i32));
    }

    #[test]
    fn malformed_datasets_fail_instead_of_truncating() {
        // A row with fewer cells than columns.
        let short_row = DataSet::new(
            vec![DataType::Int4, DataType::String],
            vec![Row::new(vec![CellValue::Int4(5)])],
        );
        let payload =
            Payload::new(0).with_metric(Metric::new("bad", DataType::DataSet, short_row).unwrap());
        match encode(&payload) {
            Err(EncodeError::MetricFailed { name, source }) => {
                assert_eq!(name, "bad");
                assert!(matches!(*source, EncodeError::RowWidthMismatch { cells: 1, columns: 2 }));
            }
            other => panic!("expected a metric failure, got {:?}", other),
        }

        // No columns at all.
        let no_columns = DataSet::new(vec![], vec![]);
        let payload =
            Payload::new(0).with_metric(Metric::new("empty", DataType::DataSet, no_columns).unwrap());
        match encode(&payload) {
            Err(EncodeError::MetricFailed { name, source }) => {
                assert_eq!(name, "empty");
                assert!(matches!(*source, EncodeError::EmptyColumns));
            }
            other => panic!("expected a metric failure, got {:?}", other),
        }

        // A cell whose type disagrees with its column.
        let mismatched = DataSet::new(
            vec![DataType::Int4, DataType::String],
            vec![Row::new(vec![CellValue::Int4(5), CellValue::Boolean(true)])],
        );
        let payload =
            Payload::new(0).with_metric(Metric::new("skewed", DataType::DataSet, mismatched).unwrap());
        match encode(&payload) {
            Err(EncodeError::MetricFailed { source, .. }) => {
                assert!(matches!(
                    *source,
                    EncodeError::CellTypeMismatch {
                        cell: DataType::Boolean,
                        column: DataType::String,
                        position: 1,
                    }
                ));
            }
            other => panic!("expected a metric failure, got {:?}", other),
        }

        // A column declared with a non-cell type.
        let composite_column = DataSet::new(vec![DataType::Bytes], vec![]);
        let payload = Payload::new(0)
            .with_metric(Metric::new("nested", DataType::DataSet, composite_column).unwrap());
        match encode(&payload) {
            Err(EncodeError::MetricFailed { source, .. }) => {
                assert!(matches!(
                    *source,
                    EncodeError::UnsupportedColumnType { data_type: DataType::Bytes }
                ));
            }
            other => panic!("expected a metric failure, got {:?}", other),
        }
    }

    #[test]
    fn failures_name_the_offending_metric() {
        let good = Metric::new("fine", DataType::Int4, 1i32).unwrap();
        let bad = Metric::new("broken", DataType::DataSet, DataSet::new(vec![], vec![])).unwrap();
        let payload = Payload::new(3).with_metric(good).with_metric(bad);

        let error = encode(&payload).unwrap_err();
        assert!(error.to_string().contains("broken"), "error should carry the metric name: {}", error);
    }

    #[test]
    fn file_metrics_always_carry_the_file_name() {
        // Without caller metadata: a block is synthesized around the file name.
        let file = File::new("data.bin", vec![1, 2, 3]);
        let payload =
            Payload::new(0).with_metric(Metric::new("blob", DataType::File, file).unwrap());

        let decoded = decode(&encode(&payload).unwrap());
        let metric = &decoded.metrics[0];
        assert_eq!(metric.value, Some(proto::metric::Value::BytesValue(vec![1, 2, 3])));
        let metadata = metric.metadata.as_ref().expect("file metric must carry metadata");
        assert_eq!(metadata.file_name.as_deref(), Some("data.bin"));
        assert_eq!(metadata.size, Some(0));
        assert_eq!(metadata.seq, Some(0));

        // With caller metadata: the caller's fields survive, but the file's own name wins.
        let file = File::new("data.bin", vec![1, 2, 3]);
        let payload = Payload::new(0).with_metric(
            Metric::new("blob", DataType::File, file)
                .unwrap()
                .with_metadata(MetaData::new().with_units("B").with_file_name("stale.bin").with_size(3)),
        );

        let decoded = decode(&encode(&payload).unwrap());
        let metadata = decoded.metrics[0].metadata.as_ref().unwrap();
        assert_eq!(metadata.file_name.as_deref(), Some("data.bin"));
        assert_eq!(metadata.units.as_deref(), Some("B"));
        assert_eq!(metadata.size, Some(3));
    }

    #[test]
    fn metadata_optional_fields_are_omitted_when_absent() {
        let payload = Payload::new(0).with_metric(
            Metric::new("pressure", DataType::Float4, 1.5f32)
                .unwrap()
                .with_metadata(MetaData::new().with_units("kPa")),
        );

        let decoded = decode(&encode(&payload).unwrap());
        let metadata = decoded.metrics[0].metadata.as_ref().unwrap();
        assert_eq!(metadata.units.as_deref(), Some("kPa"));
        assert_eq!(metadata.size, Some(0), "size is always emitted");
        assert_eq!(metadata.seq, Some(0), "seq is always emitted");
        assert_eq!(metadata.content_type, None);
        assert_eq!(metadata.algorithm, None);
        assert_eq!(metadata.format, None);
        assert_eq!(metadata.file_name, None);
        assert_eq!(metadata.file_type, None);
        assert_eq!(metadata.md5, None);
        assert_eq!(metadata.description, None);
    }

    #[test]
    fn metrics_without_metadata_emit_no_block() {
        let payload = Payload::new(0).with_metric(Metric::new("bare", DataType::Int4, 1i32).unwrap());

        let decoded = decode(&encode(&payload).unwrap());
        assert_eq!(decoded.metrics[0].metadata, None);
    }

    fn arb_scalar_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i8>().prop_map(Value::Int1),
            any::<i16>().prop_map(Value::Int2),
            any::<i32>().prop_map(Value::Int4),
            any::<i64>().prop_map(Value::Int8),
            any::<f32>().prop_map(Value::Float4),
            any::<f64>().prop_map(Value::Float8),
            any::<bool>().prop_map(Value::Boolean),
            "[a-z]{0,12}".prop_map(Value::String),
        ]
    }

    fn arb_metric() -> impl Strategy<Value = Metric> {
        ("[a-z]{1,12}", arb_scalar_value(), any::<Option<u64>>()).prop_map(|(name, value, alias)| {
            let metric = Metric::new(name, value.data_type(), value).unwrap();
            match alias {
                Some(alias) => metric.with_alias(alias),
                None => metric,
            }
        })
    }

    fn arb_payload() -> impl Strategy<Value = Payload> {
        (any::<u64>(), vec(arb_metric(), 0..8))
            .prop_map(|(seq, metrics)| Payload::new(seq).with_metrics(metrics))
    }

    proptest! {
        #[test]
        fn encoding_is_deterministic(payload in arb_payload()) {
            let first = encode(&payload).unwrap();
            let second = encode(&payload).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn metric_order_and_count_survive(payload in arb_payload()) {
            let decoded = decode(&encode(&payload).unwrap());
            prop_assert_eq!(decoded.metrics.len(), payload.metrics().len());
            for (wire, model) in decoded.metrics.iter().zip(payload.metrics()) {
                prop_assert_eq!(wire.name.as_deref(), Some(model.name()));
                prop_assert_eq!(wire.alias, model.alias());
            }
        }
    }
}
