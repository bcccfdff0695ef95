#![no_main]

use jec_core::{Jet, Met};
use jec_io::{EventReader, decode, decode_many, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must re-encode to the same bytes.
    if let Ok(jet) = decode::<Jet>(data) {
        assert_eq!(encode(&jet), data);
    }
    if let Ok(met) = decode::<Met>(data) {
        assert_eq!(encode(&met), data);
    }
    let _ = decode_many::<Jet>(data);

    // The reader caps per-event allocations, so arbitrary input stays cheap.
    if let Ok(reader) = EventReader::new(data) {
        for ev in reader {
            if ev.is_err() {
                break;
            }
        }
    }
});
