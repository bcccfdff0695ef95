//! Reconstructed jet record.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// DeepCSV b-tagging discriminators.
///
/// Values are stored in the fixed order "bb", "b", "c", "udsg". The order is
/// part of the binary layout and must never be permuted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeepCsv(pub [f32; 4]);

impl DeepCsv {
    /// Index of the "bb" score.
    pub const BB: usize = 0;
    /// Index of the "b" score.
    pub const B: usize = 1;
    /// Index of the "c" score.
    pub const C: usize = 2;
    /// Index of the "udsg" score.
    pub const UDSG: usize = 3;

    /// Wrap scores given in bb, b, c, udsg order.
    #[inline]
    pub const fn from_array(scores: [f32; 4]) -> Self {
        Self(scores)
    }

    /// Scores in bb, b, c, udsg order.
    #[inline]
    pub const fn as_array(&self) -> [f32; 4] {
        self.0
    }

    /// Score for two b hadrons.
    #[inline]
    pub fn bb(&self) -> f32 {
        self.0[Self::BB]
    }

    /// Score for a single b hadron.
    #[inline]
    pub fn b(&self) -> f32 {
        self.0[Self::B]
    }

    /// Score for charm.
    #[inline]
    pub fn c(&self) -> f32 {
        self.0[Self::C]
    }

    /// Score for light flavours and gluons.
    #[inline]
    pub fn udsg(&self) -> f32 {
        self.0[Self::UDSG]
    }
}

/// One reconstructed jet in one event.
///
/// Filled once by the selection stage and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jet {
    /// Raw transverse momentum.
    pub pt_raw: f32,
    /// Raw pseudorapidity.
    pub eta_raw: f32,
    /// Raw azimuthal angle, conventionally in (-pi, pi].
    pub phi_raw: f32,
    /// Raw mass.
    pub mass_raw: f32,

    /// Nominal jet energy correction factor.
    pub jec_factor: f32,

    /// Jet catchment area.
    pub area: f32,

    /// Passes the physics identification criteria.
    pub is_good: bool,

    /// cMVA b-tagging discriminator.
    pub b_tag_cmva: f32,

    /// DeepCSV b-tagging discriminators.
    pub b_tag_deep_csv: DeepCsv,

    /// Pileup discriminator.
    pub pileup_discr: f32,

    /// Flavour under the hadron-based definition.
    pub flavour_hadron: i8,
    /// Flavour under the parton-based definition.
    pub flavour_parton: i8,

    /// A generator-level jet is matched to this one.
    pub has_gen_match: bool,
}

impl Jet {
    /// Transverse momentum after the nominal correction.
    #[inline]
    pub fn corrected_pt(&self) -> f32 {
        self.pt_raw * self.jec_factor
    }

    /// Mass after the nominal correction.
    #[inline]
    pub fn corrected_mass(&self) -> f32 {
        self.mass_raw * self.jec_factor
    }

    /// Corrected `(pt, eta, phi, mass)`, or `None` if the jet fails identification.
    pub fn good_kinematics(&self) -> Option<(f32, f32, f32, f32)> {
        if !self.is_good {
            return None;
        }
        Some((self.corrected_pt(), self.eta_raw, self.phi_raw, self.corrected_mass()))
    }

    /// Check fields against their physical domain.
    ///
    /// NaN fails every `>= 0` check.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("pt_raw", self.pt_raw)?;
        check_non_negative("mass_raw", self.mass_raw)?;
        check_non_negative("area", self.area)?;
        if !self.jec_factor.is_finite() {
            return Err(Error::Validation(format!(
                "jec_factor must be finite, got {}",
                self.jec_factor
            )));
        }
        Ok(())
    }

    /// Name of the first f32 field holding NaN or an infinity, in layout order.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        let d = self.b_tag_deep_csv.as_array();
        [
            ("pt_raw", self.pt_raw),
            ("eta_raw", self.eta_raw),
            ("phi_raw", self.phi_raw),
            ("mass_raw", self.mass_raw),
            ("jec_factor", self.jec_factor),
            ("area", self.area),
            ("b_tag_cmva", self.b_tag_cmva),
            ("b_tag_deep_csv[bb]", d[DeepCsv::BB]),
            ("b_tag_deep_csv[b]", d[DeepCsv::B]),
            ("b_tag_deep_csv[c]", d[DeepCsv::C]),
            ("b_tag_deep_csv[udsg]", d[DeepCsv::UDSG]),
            ("pileup_discr", self.pileup_discr),
        ]
        .into_iter()
        .find_map(|(name, v)| (!v.is_finite()).then_some(name))
    }
}

pub(crate) fn check_non_negative(field: &str, value: f32) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::Validation(format!("{field} must be >= 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn jet() -> Jet {
        Jet {
            pt_raw: 35.2,
            eta_raw: -1.1,
            phi_raw: 2.0,
            mass_raw: 5.3,
            jec_factor: 1.02,
            area: 0.49,
            is_good: true,
            b_tag_cmva: 0.15,
            b_tag_deep_csv: DeepCsv::from_array([0.01, 0.02, 0.03, 0.94]),
            pileup_discr: 0.8,
            flavour_hadron: 5,
            flavour_parton: 5,
            has_gen_match: true,
        }
    }

    #[test]
    fn deep_csv_accessors_follow_fixed_order() {
        let d = DeepCsv::from_array([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(d.bb(), 0.1);
        assert_eq!(d.b(), 0.2);
        assert_eq!(d.c(), 0.3);
        assert_eq!(d.udsg(), 0.4);
        assert_eq!(d.as_array(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn corrected_kinematics() {
        let j = jet();
        assert_relative_eq!(j.corrected_pt(), 35.904, max_relative = 1e-6);
        assert_relative_eq!(j.corrected_mass(), 5.406, max_relative = 1e-6);

        let (pt, eta, phi, m) = j.good_kinematics().unwrap();
        assert_eq!(pt, j.corrected_pt());
        assert_eq!(eta, -1.1);
        assert_eq!(phi, 2.0);
        assert_eq!(m, j.corrected_mass());
    }

    #[test]
    fn bad_jet_hides_kinematics() {
        let j = Jet { is_good: false, ..jet() };
        assert!(j.good_kinematics().is_none());
    }

    #[test]
    fn validate_rejects_out_of_domain() {
        assert!(jet().validate().is_ok());
        assert!(Jet { pt_raw: -1.0, ..jet() }.validate().is_err());
        assert!(Jet { mass_raw: f32::NAN, ..jet() }.validate().is_err());
        assert!(Jet { area: -0.1, ..jet() }.validate().is_err());
        assert!(Jet { jec_factor: f32::INFINITY, ..jet() }.validate().is_err());
    }

    #[test]
    fn non_finite_fields_are_named() {
        assert_eq!(jet().non_finite_field(), None);
        assert_eq!(Jet { b_tag_cmva: f32::NAN, ..jet() }.non_finite_field(), Some("b_tag_cmva"));
        let d = DeepCsv::from_array([0.1, 0.2, f32::NEG_INFINITY, 0.4]);
        assert_eq!(Jet { b_tag_deep_csv: d, ..jet() }.non_finite_field(), Some("b_tag_deep_csv[c]"));
    }

    #[test]
    fn deep_csv_serializes_as_plain_array() {
        let json = serde_json::to_value(jet()).unwrap();
        assert_eq!(json["b_tag_deep_csv"].as_array().unwrap().len(), 4);
        let back: Jet = serde_json::from_value(json).unwrap();
        assert_eq!(back, jet());
    }
}
