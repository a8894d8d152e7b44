//! # roster-payload
//!
//! Converts a tab-delimited membership roster into batched, fixed-width
//! binary import payloads.
//!
//! ## Overview
//!
//! Each roster row becomes a 27-byte record:
//! - **Address**: 20 bytes
//! - **Join year / month**: `u16` big-endian, then `u8`
//! - **Weight**: `u8` part-time factor, 0-100
//! - **Months on leave**: `u16` big-endian
//! - **Active flag**: always `1`
//!
//! Records are grouped positionally into batches of at most 250 and each
//! batch is rendered as one `0x`-prefixed hex payload.
//!
//! ## Example
//!
//! ```
//! use roster_payload::{BATCH_SIZE, build_batches, parse_roster};
//!
//! let roster = "\
//! 0xabababababababababababababababababababab\t1970-01-01\t0\t0
//! 0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd\t-\t100\t0
//! ";
//!
//! let parsed = parse_roster(roster);
//! assert_eq!(parsed.rows.len(), 1);
//!
//! let batches = build_batches(&parsed.rows, BATCH_SIZE).unwrap();
//! assert_eq!(batches.len(), 1);
//! assert!(batches[0].payload().ends_with("07b20100000001"));
//! ```

pub mod batch;
pub mod encoder;
pub mod error;
pub mod parser;
pub mod record;

pub use batch::{BATCH_SIZE, Batch, PAYLOAD_PREFIX, batch_count, build_batches, decode_payload};
pub use encoder::{encode, normalize_address};
pub use error::{EncodeError, RosterError};
pub use parser::{RosterParse, Skipped, parse_roster, read_roster};
pub use record::{ENCODED_RECORD_LEN, EncodedRecord, MemberRecord, RawRow};
