//! Batching of encoded records into import payloads.
//!
//! Batches are positional: batch `n` (0-based) holds records
//! `[n * size, (n + 1) * size)` of the eligible rows, in roster order.
//! Every row is validated before any batch is returned, so a bad row late
//! in the roster can never leave a half-written set of payloads behind.

use crate::encoder::encode;
use crate::error::RosterError;
use crate::record::{ENCODED_RECORD_LEN, EncodedRecord, RawRow};

/// Maximum number of members per import payload.
pub const BATCH_SIZE: usize = 250;

/// Marker that starts every payload.
pub const PAYLOAD_PREFIX: &str = "0x";

/// An ordered group of encoded records rendered as one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    records: Vec<EncodedRecord>,
}

impl Batch {
    pub fn new(records: Vec<EncodedRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[EncodedRecord] {
        &self.records
    }

    /// Concatenated record bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.records.len() * ENCODED_RECORD_LEN);
        for r in &self.records {
            bytes.extend_from_slice(r.as_bytes());
        }
        bytes
    }

    /// `0x` followed by the lower-case hex of [`Batch::to_bytes`].
    pub fn payload(&self) -> String {
        format!("{PAYLOAD_PREFIX}{}", hex::encode(self.to_bytes()))
    }

    /// Character length of [`Batch::payload`] without rendering it.
    pub fn payload_len(&self) -> usize {
        PAYLOAD_PREFIX.len() + self.records.len() * ENCODED_RECORD_LEN * 2
    }
}

/// Number of batches needed for `total` records.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size)
}

/// Validate and encode every row, then split into batches of `batch_size`.
///
/// `batch_size` must be in `1..=BATCH_SIZE`. The first invalid row aborts
/// the whole build with its line number.
pub fn build_batches(rows: &[RawRow], batch_size: usize) -> Result<Vec<Batch>, RosterError> {
    if batch_size == 0 || batch_size > BATCH_SIZE {
        return Err(RosterError::InvalidBatchSize(batch_size));
    }

    let encoded = rows
        .iter()
        .map(|row| {
            encode(row).map_err(|source| RosterError::Encode {
                line: row.line,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(encoded
        .chunks(batch_size)
        .map(|chunk| Batch::new(chunk.to_vec()))
        .collect())
}

/// Decode a payload back into its records.
///
/// Returns `None` if the prefix is missing, the hex is malformed, or the
/// byte length is not a whole number of records.
pub fn decode_payload(payload: &str) -> Option<Vec<EncodedRecord>> {
    let digits = payload.strip_prefix(PAYLOAD_PREFIX)?;
    let bytes = hex::decode(digits).ok()?;
    if bytes.len() % ENCODED_RECORD_LEN != 0 {
        return None;
    }

    bytes
        .chunks_exact(ENCODED_RECORD_LEN)
        .map(|chunk| chunk.try_into().ok().map(EncodedRecord::from_bytes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;

    /// Row `i` gets a distinct address and months-on-leave so order is visible.
    fn rows(n: usize) -> Vec<RawRow> {
        (0..n)
            .map(|i| {
                RawRow::new(
                    i + 1,
                    format!("0x{:040x}", i),
                    "2020-06-15",
                    "100",
                    (i % 65536).to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_partial_batch() {
        let batches = build_batches(&rows(3), BATCH_SIZE).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
        assert_eq!(batches[0].payload().len(), 2 + 54 * 3);
    }

    #[test]
    fn test_exact_multiple_of_batch_size() {
        let batches = build_batches(&rows(500), BATCH_SIZE).unwrap();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 250));
    }

    #[test]
    fn test_batch_boundaries_and_order() {
        let batches = build_batches(&rows(601), BATCH_SIZE).unwrap();
        assert_eq!(batches.len(), batch_count(601, BATCH_SIZE));
        let sizes: Vec<usize> = batches.iter().map(Batch::len).collect();
        assert_eq!(sizes, vec![250, 250, 101]);

        let leave: Vec<u16> = batches
            .iter()
            .flat_map(|b| b.records().iter().map(|r| r.decode().months_on_leave))
            .collect();
        let expected: Vec<u16> = (0..601u16).collect();
        assert_eq!(leave, expected);

        assert_eq!(batches[1].records()[0].decode().months_on_leave, 250);
    }

    #[test]
    fn test_payload_length_matches_render() {
        for batch in build_batches(&rows(260), BATCH_SIZE).unwrap() {
            let payload = batch.payload();
            assert!(payload.starts_with("0x"));
            assert_eq!(payload.len(), batch.payload_len());
            assert_eq!(payload.len(), 2 + 54 * batch.len());
        }
    }

    #[test]
    fn test_custom_batch_size() {
        let batches = build_batches(&rows(10), 4).unwrap();
        let sizes: Vec<usize> = batches.iter().map(Batch::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn test_batch_size_bounds() {
        assert!(matches!(
            build_batches(&rows(1), 0).unwrap_err(),
            RosterError::InvalidBatchSize(0)
        ));
        assert!(matches!(
            build_batches(&rows(1), 251).unwrap_err(),
            RosterError::InvalidBatchSize(251)
        ));
    }

    #[test]
    fn test_invalid_row_aborts_everything() {
        let mut input = rows(300);
        input[275].weight = "101".to_string();

        let err = build_batches(&input, BATCH_SIZE).unwrap_err();
        match err {
            RosterError::Encode { line, source } => {
                assert_eq!(line, 276);
                assert_eq!(source, EncodeError::InvalidWeight("101".to_string()));
            }
            other => panic!("Expected Encode error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_yields_no_batches() {
        assert!(build_batches(&[], BATCH_SIZE).unwrap().is_empty());
        assert_eq!(batch_count(0, BATCH_SIZE), 0);
    }

    #[test]
    fn test_batch_count() {
        assert_eq!(batch_count(1, 250), 1);
        assert_eq!(batch_count(250, 250), 1);
        assert_eq!(batch_count(251, 250), 2);
        assert_eq!(batch_count(185, 250), 1);
    }

    #[test]
    fn test_decode_payload() {
        let batch = &build_batches(&rows(5), BATCH_SIZE).unwrap()[0];
        let decoded = decode_payload(&batch.payload()).unwrap();
        assert_eq!(decoded, batch.records());
    }

    #[test]
    fn test_decode_payload_rejects_malformed() {
        assert!(decode_payload("abcd").is_none());
        assert!(decode_payload("0xzz").is_none());
        assert!(decode_payload("0xabcd").is_none());
        assert_eq!(decode_payload("0x"), Some(vec![]));
    }
}
