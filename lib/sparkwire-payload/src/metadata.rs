//! Metric metadata.

/// Descriptive metadata attached to a metric.
///
/// Metadata covers everything about a value that is not the value itself: units, content type,
/// compression algorithm, multi-part bookkeeping, file details, a content digest, and free-text
/// description. Every field is optional except `size` and `seq`, which default to zero and are
/// always present on the wire. A metric owns its metadata exclusively; two metrics never share a
/// `MetaData` instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetaData {
    /// Units of the value, e.g. `"degrees C"`.
    pub units: Option<String>,

    /// Content (MIME) type of the value.
    pub content_type: Option<String>,

    /// Size of the value in bytes. Defaults to zero.
    pub size: u64,

    /// Compression or encoding algorithm applied to the value.
    pub algorithm: Option<String>,

    /// Format string describing the value layout.
    pub format: Option<String>,

    /// Sequence number of this part in a multi-part transfer. Defaults to zero.
    pub seq: u64,

    /// File name, for file-backed values.
    pub file_name: Option<String>,

    /// File type, for file-backed values.
    pub file_type: Option<String>,

    /// MD5 digest of the content.
    pub md5: Option<String>,

    /// Free-text description.
    pub description: Option<String>,
}

impl MetaData {
    /// Creates an empty `MetaData`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the size, in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the compression/encoding algorithm name.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Set the format string.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the multi-part sequence number.
    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    /// Set the file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the file type.
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// Set the MD5 digest.
    pub fn with_md5(mut self, md5: impl Into<String>) -> Self {
        self.md5 = Some(md5.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::MetaData;

    #[test]
    fn defaults_are_empty_with_zeroed_counters() {
        let metadata = MetaData::new();

        assert_eq!(metadata.size, 0);
        assert_eq!(metadata.seq, 0);
        assert_eq!(metadata.units, None);
        assert_eq!(metadata.file_name, None);
    }

    #[test]
    fn builder_sets_only_what_was_asked() {
        let metadata = MetaData::new().with_units("kPa").with_size(128).with_md5("abc123");

        assert_eq!(metadata.units.as_deref(), Some("kPa"));
        assert_eq!(metadata.size, 128);
        assert_eq!(metadata.md5.as_deref(), Some("abc123"));
        assert_eq!(metadata.content_type, None);
        assert_eq!(metadata.description, None);
    }
}
