//! Property tests: any in-range row survives encode, render, and decode.

use proptest::prelude::*;
use roster_payload::{BATCH_SIZE, RawRow, build_batches, decode_payload};

prop_compose! {
    fn valid_row()(
        address in prop::array::uniform20(any::<u8>()),
        upper in any::<bool>(),
        year in 1970u16..=2100,
        month in 1u8..=12,
        day in 1u8..=31,
        weight in 0u8..=100,
        leave in any::<u16>(),
    ) -> (RawRow, [u8; 20]) {
        let hex = hex::encode(address);
        let hex = if upper { format!("0X{}", hex.to_uppercase()) } else { format!("0x{hex}") };
        let date = format!("{year:04}-{month:02}-{day:02}");
        (RawRow::new(1, hex, date, weight.to_string(), leave.to_string()), address)
    }
}

proptest! {
    #[test]
    fn prop_fields_round_trip(rows in prop::collection::vec(valid_row(), 1..600)) {
        let raw: Vec<RawRow> = rows.iter().map(|(r, _)| r.clone()).collect();
        let batches = build_batches(&raw, BATCH_SIZE).unwrap();

        prop_assert_eq!(batches.len(), raw.len().div_ceil(BATCH_SIZE));

        let mut decoded = Vec::new();
        for batch in &batches {
            let payload = batch.payload();
            prop_assert_eq!(payload.len(), 2 + 54 * batch.len());
            decoded.extend(decode_payload(&payload).unwrap());
        }
        prop_assert_eq!(decoded.len(), raw.len());

        for ((row, address), record) in rows.iter().zip(&decoded) {
            let m = record.decode();
            let mut date = row.join_date.split('-');
            prop_assert_eq!(m.address, *address);
            prop_assert_eq!(m.join_year, date.next().unwrap().parse::<u16>().unwrap());
            prop_assert_eq!(m.join_month, date.next().unwrap().parse::<u8>().unwrap());
            prop_assert_eq!(m.weight.to_string(), row.weight.clone());
            prop_assert_eq!(m.months_on_leave.to_string(), row.months_on_leave.clone());
            prop_assert!(record.active());
        }
    }
}
