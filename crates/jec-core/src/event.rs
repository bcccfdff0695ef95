//! Jets and missing pt of a single event.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::jet::Jet;
use crate::met::Met;

/// One event: any number of jets and exactly one missing-pt measurement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// Reconstructed jets, in the order produced upstream.
    pub jets: Vec<Jet>,
    /// Missing transverse momentum.
    pub met: Met,
}

impl Event {
    /// Create an event from its jets and missing pt.
    pub fn new(jets: Vec<Jet>, met: Met) -> Self {
        Self { jets, met }
    }

    /// Jets that pass identification.
    pub fn good_jets(&self) -> impl Iterator<Item = &Jet> {
        self.jets.iter().filter(|j| j.is_good)
    }

    /// Number of jets that pass identification.
    pub fn n_good_jets(&self) -> usize {
        self.good_jets().count()
    }

    /// Validate every jet, then the missing pt.
    ///
    /// The error names the index of the first offending jet.
    pub fn validate(&self) -> Result<()> {
        for (i, jet) in self.jets.iter().enumerate() {
            jet.validate().map_err(|Error::Validation(msg)| {
                Error::Validation(format!("jet {i}: {msg}"))
            })?;
        }
        self.met.validate()
    }
}
