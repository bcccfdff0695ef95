//! # jec-core
//!
//! Per-event physics-object records used in jet energy correction studies.
//!
//! [`Jet`] and [`Met`] are flat `Copy` aggregates with single-precision fields,
//! laid out to match the fixed-width binary records written by `jec-io`.
//! [`Event`] groups the jets of one event with its missing-pt measurement.
//!
//! ## Example
//!
//! ```
//! use jec_core::{DeepCsv, Event, Jet, Met};
//!
//! let jet = Jet {
//!     pt_raw: 35.2,
//!     eta_raw: -1.1,
//!     phi_raw: 2.0,
//!     mass_raw: 5.3,
//!     jec_factor: 1.02,
//!     area: 0.49,
//!     is_good: true,
//!     b_tag_cmva: 0.15,
//!     b_tag_deep_csv: DeepCsv::from_array([0.01, 0.02, 0.03, 0.94]),
//!     pileup_discr: 0.8,
//!     flavour_hadron: 5,
//!     flavour_parton: 5,
//!     has_gen_match: true,
//! };
//! let event = Event::new(vec![jet], Met { pt_raw: 42.0, phi_raw: -0.5 });
//! assert_eq!(event.n_good_jets(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod event;
pub mod jet;
pub mod met;

pub use error::{Error, Result};
pub use event::Event;
pub use jet::{DeepCsv, Jet};
pub use met::Met;
