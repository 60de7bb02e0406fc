//! # Actionlog
//!
//! Validated action builders and an ephemeral append-only store for event
//! logging.
//!
//! Actionlog has two independent parts:
//!
//! - **Action factory builders** - [`instant`] for one-shot events,
//!   [`temporal`] for start/stop paired events sharing a key. Both validate
//!   a type tag and an argument specification once, then shape payloads from
//!   caller-supplied details, stamping each with `$timestamp`.
//! - **[`EphemeralStore`]** - an in-memory, per-instance, append-only record
//!   sequence with deep-copied reads.
//!
//! ## Quick Start
//!
//! ```
//! use actionlog::{instant, temporal, EphemeralStore, TemporalConfig, Value};
//! use std::collections::HashMap;
//!
//! let mut store = EphemeralStore::new();
//!
//! // One-shot event
//! let weight = instant("WEIGHT", &["weight"])?;
//! store.put(weight.build(&HashMap::from([("weight".to_string(), Value::Int(220))]))?);
//!
//! // Start/stop paired events
//! let reading = temporal(
//!     "READING",
//!     TemporalConfig::new("title")
//!         .start_args(["author"])
//!         .stop_args(["completed", "rating?"]),
//! )?;
//! store.put(reading.start(
//!     "Moby Dick",
//!     Some(&HashMap::from([(
//!         "author".to_string(),
//!         Value::String("Herman Melville".into()),
//!     )])),
//! )?);
//!
//! assert_eq!(store.len(), 2);
//! # Ok::<(), actionlog::Error>(())
//! ```
//!
//! ## Validation
//!
//! Argument names are validated at factory-creation time: non-empty, no
//! spaces, no leading `$`, and `?` only as the final character, marking an
//! optional argument. Builders re-validate every details map against the
//! captured configuration; a missing required field fails with an error
//! naming every missing field in declared order.

#![warn(missing_docs)]

mod action;
mod args;
mod clock;
mod error;
mod factory;
mod store;
mod value;

pub use action::{create_action_creator, Action};
pub use args::ArgSpec;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Phase, Result};
pub use factory::{instant, temporal, InstantBuilder, TemporalConfig, TemporalFactory};
pub use store::EphemeralStore;
pub use value::{Details, Value};
