//! Roster row and member record types.
//!
//! A roster row moves through three shapes:
//!
//! - [`RawRow`]: the four tab-separated text fields as read from the roster
//! - [`MemberRecord`]: the validated, typed member
//! - [`EncodedRecord`]: the fixed 27-byte binary packing of a member
//!
//! Encoded layout (big-endian):
//!
//! ```text
//! offset  len  field
//!      0   20  address
//!     20    2  join year (u16)
//!     22    1  join month (u8)
//!     23    1  weight / part-time factor (u8)
//!     24    2  months on leave (u16)
//!     26    1  active flag (always 1)
//! ```

use std::fmt;

/// Width in bytes of one encoded member record.
pub const ENCODED_RECORD_LEN: usize = 27;

/// Width in bytes of a member address.
pub const ADDRESS_LEN: usize = 20;

/// Value of the trailing active flag on the import path.
pub const ACTIVE: u8 = 1;

/// One eligible roster row, still in text form.
///
/// `line` is the 1-based line number in the source roster, kept so that
/// validation errors can point back at the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: usize,
    pub address: String,
    pub join_date: String,
    pub weight: String,
    pub months_on_leave: String,
}

impl RawRow {
    pub fn new(
        line: usize,
        address: impl Into<String>,
        join_date: impl Into<String>,
        weight: impl Into<String>,
        months_on_leave: impl Into<String>,
    ) -> Self {
        Self {
            line,
            address: address.into(),
            join_date: join_date.into(),
            weight: weight.into(),
            months_on_leave: months_on_leave.into(),
        }
    }
}

/// Renders the row in roster form: `address<TAB>date<TAB>weight<TAB>leave`.
impl fmt::Display for RawRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.address, self.join_date, self.weight, self.months_on_leave
        )
    }
}

/// A validated member. Every field is within its encoded width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRecord {
    pub address: [u8; ADDRESS_LEN],
    pub join_year: u16,
    pub join_month: u8,
    pub weight: u8,
    pub months_on_leave: u16,
}

impl MemberRecord {
    /// Pack into the fixed-width binary layout.
    pub fn encode(&self) -> EncodedRecord {
        let mut bytes = [0u8; ENCODED_RECORD_LEN];
        bytes[..20].copy_from_slice(&self.address);
        bytes[20..22].copy_from_slice(&self.join_year.to_be_bytes());
        bytes[22] = self.join_month;
        bytes[23] = self.weight;
        bytes[24..26].copy_from_slice(&self.months_on_leave.to_be_bytes());
        bytes[26] = ACTIVE;
        EncodedRecord(bytes)
    }

    /// Address as lower-case hex without a `0x` prefix.
    pub fn address_hex(&self) -> String {
        hex::encode(self.address)
    }
}

/// A member packed into exactly [`ENCODED_RECORD_LEN`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedRecord([u8; ENCODED_RECORD_LEN]);

impl EncodedRecord {
    pub fn from_bytes(bytes: [u8; ENCODED_RECORD_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ENCODED_RECORD_LEN] {
        &self.0
    }

    /// The trailing active flag.
    pub fn active(&self) -> bool {
        self.0[26] != 0
    }

    /// Unpack the member fields. The active flag is not part of
    /// [`MemberRecord`]; read it with [`EncodedRecord::active`].
    pub fn decode(&self) -> MemberRecord {
        let b = &self.0;
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&b[..20]);
        MemberRecord {
            address,
            join_year: u16::from_be_bytes([b[20], b[21]]),
            join_month: b[22],
            weight: b[23],
            months_on_leave: u16::from_be_bytes([b[24], b[25]]),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> MemberRecord {
        MemberRecord {
            address: [0xab; ADDRESS_LEN],
            join_year: 1970,
            join_month: 1,
            weight: 0,
            months_on_leave: 0,
        }
    }

    #[test]
    fn test_encode_layout() {
        let encoded = member().encode();
        let hex = encoded.to_hex();
        assert_eq!(hex.len(), ENCODED_RECORD_LEN * 2);
        assert_eq!(&hex[..40], "ab".repeat(20));
        assert_eq!(&hex[40..], "07b20100000001");
    }

    #[test]
    fn test_encode_big_endian_fields() {
        let m = MemberRecord {
            join_year: 2100,
            join_month: 12,
            weight: 100,
            months_on_leave: 65535,
            ..member()
        };
        let bytes = m.encode();
        let bytes = bytes.as_bytes();
        assert_eq!(&bytes[20..22], &[0x08, 0x34]);
        assert_eq!(bytes[22], 12);
        assert_eq!(bytes[23], 100);
        assert_eq!(&bytes[24..26], &[0xff, 0xff]);
        assert_eq!(bytes[26], 1);
    }

    #[test]
    fn test_decode_reverses_encode() {
        let m = MemberRecord {
            join_year: 2024,
            join_month: 6,
            weight: 50,
            months_on_leave: 3,
            ..member()
        };
        let encoded = m.encode();
        assert_eq!(encoded.decode(), m);
        assert!(encoded.active());
    }

    #[test]
    fn test_raw_row_display_is_tab_delimited() {
        let row = RawRow::new(1, "0xabc", "2020-01-02", "100", "0");
        assert_eq!(row.to_string(), "0xabc\t2020-01-02\t100\t0");
    }
}
