//! Round-trip and length properties over arbitrary records.

use jec_core::{DeepCsv, Jet, Met};
use jec_io::{FormatError, Record, decode, encode};
use proptest::prelude::*;

/// f32 fields in layout order, as raw bits, plus the integer and bool fields.
type JetBits = ([u32; 12], [i8; 2], [bool; 2]);

fn jet_from_bits((f, flav, flags): JetBits) -> Jet {
    let x = |i: usize| f32::from_bits(f[i]);
    Jet {
        pt_raw: x(0),
        eta_raw: x(1),
        phi_raw: x(2),
        mass_raw: x(3),
        jec_factor: x(4),
        area: x(5),
        is_good: flags[0],
        b_tag_cmva: x(6),
        b_tag_deep_csv: DeepCsv::from_array([x(7), x(8), x(9), x(10)]),
        pileup_discr: x(11),
        flavour_hadron: flav[0],
        flavour_parton: flav[1],
        has_gen_match: flags[1],
    }
}

fn jet_to_bits(j: &Jet) -> JetBits {
    let d = j.b_tag_deep_csv.as_array();
    (
        [
            j.pt_raw.to_bits(),
            j.eta_raw.to_bits(),
            j.phi_raw.to_bits(),
            j.mass_raw.to_bits(),
            j.jec_factor.to_bits(),
            j.area.to_bits(),
            j.b_tag_cmva.to_bits(),
            d[0].to_bits(),
            d[1].to_bits(),
            d[2].to_bits(),
            d[3].to_bits(),
            j.pileup_discr.to_bits(),
        ],
        [j.flavour_hadron, j.flavour_parton],
        [j.is_good, j.has_gen_match],
    )
}

proptest! {
    #[test]
    fn jet_round_trips_bit_identically(
        f in any::<[u32; 12]>(),
        flav in any::<[i8; 2]>(),
        flags in any::<[bool; 2]>(),
    ) {
        let jet = jet_from_bits((f, flav, flags));
        let bytes = encode(&jet);
        prop_assert_eq!(bytes.len(), Jet::SIZE);
        let back: Jet = decode(&bytes).unwrap();
        prop_assert_eq!(jet_to_bits(&back), (f, flav, flags));
        prop_assert_eq!(encode(&back), bytes);
    }

    #[test]
    fn met_round_trips_bit_identically(pt in any::<u32>(), phi in any::<u32>()) {
        let met = Met { pt_raw: f32::from_bits(pt), phi_raw: f32::from_bits(phi) };
        let bytes = encode(&met);
        prop_assert_eq!(bytes.len(), Met::SIZE);
        let back: Met = decode(&bytes).unwrap();
        prop_assert_eq!((back.pt_raw.to_bits(), back.phi_raw.to_bits()), (pt, phi));
    }

    #[test]
    fn wrong_length_never_decodes(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        if data.len() != Jet::SIZE {
            let is_length_mismatch =
                matches!(decode::<Jet>(&data), Err(FormatError::LengthMismatch { expected: 52, .. }));
            prop_assert!(is_length_mismatch);
        }
        if data.len() != Met::SIZE {
            let is_length_mismatch =
                matches!(decode::<Met>(&data), Err(FormatError::LengthMismatch { expected: 8, .. }));
            prop_assert!(is_length_mismatch);
        }
    }

    #[test]
    fn jet_bool_bytes_outside_zero_one_are_rejected(
        f in any::<[u32; 12]>(),
        flav in any::<[i8; 2]>(),
        bad in 2u8..=255,
        at_gen_match in any::<bool>(),
    ) {
        let mut bytes = encode(&jet_from_bits((f, flav, [true, true])));
        let offset = if at_gen_match { 51 } else { 24 };
        bytes[offset] = bad;
        let is_invalid_bool =
            matches!(decode::<Jet>(&bytes), Err(FormatError::InvalidBool { value, .. }) if value == bad);
        prop_assert!(is_invalid_bool);
    }
}
