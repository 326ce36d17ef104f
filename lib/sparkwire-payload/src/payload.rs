//! The top-level payload envelope.

use chrono::{DateTime, Utc};

use crate::metric::Metric;

/// The top-level envelope shipped over the wire.
///
/// A payload carries a monotonic sequence number (always emitted, wrapping at a protocol-defined
/// bound that is the transport's business, not ours), an optional timestamp and correlation id,
/// the ordered metrics, and an optional opaque body blob.
///
/// Payloads are plain immutable values: the encoder only reads them, and independent payloads can
/// be encoded concurrently without coordination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    timestamp: Option<DateTime<Utc>>,
    seq: u64,
    uuid: Option<String>,
    metrics: Vec<Metric>,
    body: Option<Vec<u8>>,
}

impl Payload {
    /// Creates an empty payload with the given sequence number.
    pub fn new(seq: u64) -> Self {
        Self {
            seq,
            ..Self::default()
        }
    }

    /// Set the payload timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the correlation id.
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Append a metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Set the full list of metrics, replacing any already appended.
    pub fn with_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the opaque body blob.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Gets the payload timestamp, if one was assigned.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Gets the sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Gets the correlation id, if one was assigned.
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Gets the metrics, in insertion order.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Gets the opaque body blob, if one was assigned.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}
