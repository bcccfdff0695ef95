//! `jec summary` — counts over a record stream.

use jec_core::Event;
use serde::Serialize;

/// Aggregate counts over all events in a stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub n_events: usize,
    pub n_jets: usize,
    pub n_good_jets: usize,
    pub n_gen_matched: usize,
    /// `None` (JSON `null`) when the stream holds no jets.
    pub mean_jec_factor: Option<f64>,
}

impl Summary {
    pub fn from_events(events: &[Event]) -> Self {
        let jets = || events.iter().flat_map(|ev| ev.jets.iter());
        let n_jets = jets().count();
        let mean_jec_factor = (n_jets > 0)
            .then(|| jets().map(|j| f64::from(j.jec_factor)).sum::<f64>() / n_jets as f64);

        Self {
            n_events: events.len(),
            n_jets,
            n_good_jets: events.iter().map(Event::n_good_jets).sum(),
            n_gen_matched: jets().filter(|j| j.has_gen_match).count(),
            mean_jec_factor,
        }
    }
}
