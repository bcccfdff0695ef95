//! Missing transverse momentum record.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::jet::check_non_negative;

/// Raw missing transverse momentum of one event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Met {
    /// Magnitude.
    pub pt_raw: f32,
    /// Azimuthal direction.
    pub phi_raw: f32,
}

impl Met {
    /// x component of the raw missing-pt vector.
    #[inline]
    pub fn px(&self) -> f32 {
        self.pt_raw * self.phi_raw.cos()
    }

    /// y component of the raw missing-pt vector.
    #[inline]
    pub fn py(&self) -> f32 {
        self.pt_raw * self.phi_raw.sin()
    }

    /// Name of the first field holding NaN or an infinity.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [("pt_raw", self.pt_raw), ("phi_raw", self.phi_raw)]
            .into_iter()
            .find_map(|(name, v)| (!v.is_finite()).then_some(name))
    }

    /// Check that the magnitude is non-negative.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("met.pt_raw", self.pt_raw)
    }
}
