//! Action factory builders.
//!
//! [`instant`] builds one-shot actions; [`temporal`] builds start/stop paired
//! actions sharing a key. Both validate the type tag and argument
//! specification once, up front, and return builders holding the parsed
//! configuration immutably. Every build call re-validates the supplied
//! details against that configuration and stamps the payload with
//! `$timestamp`.
//!
//! # Example
//!
//! ```
//! use actionlog::{instant, temporal, TemporalConfig, Value};
//! use std::collections::HashMap;
//!
//! let weight = instant("WEIGHT", &["weight"])?;
//! let action = weight.build(&HashMap::from([("weight".to_string(), Value::Int(220))]))?;
//! assert_eq!(action.action_type(), "WEIGHT");
//!
//! let reading = temporal(
//!     "READING",
//!     TemporalConfig::new("title")
//!         .start_args(["author"])
//!         .stop_args(["completed", "rating?"]),
//! )?;
//! let started = reading.start(
//!     "Moby Dick",
//!     Some(&HashMap::from([(
//!         "author".to_string(),
//!         Value::String("Herman Melville".into()),
//!     )])),
//! )?;
//! assert_eq!(started.action_type(), "START_READING");
//! # Ok::<(), actionlog::Error>(())
//! ```

use crate::action::{create_action_creator, Action};
use crate::args::{validate_name, ArgSpec};
use crate::clock::{iso_timestamp, Clock, SystemClock};
use crate::error::{Error, Phase, Result};
use crate::value::{Details, Value};
use std::sync::Arc;
use tracing::debug;

/// Payload key carrying the creation timestamp.
const TIMESTAMP_FIELD: &str = "$timestamp";

/// Payload key aliasing the temporal key value.
const KEY_ALIAS_FIELD: &str = "$key";

type Creator = Box<dyn Fn(Value) -> Action + Send + Sync>;

/// Validate a type tag: non-empty, single token, no spaces.
fn validate_type(action_type: &str) -> Result<()> {
    if action_type.is_empty() || action_type.contains(' ') {
        return Err(Error::InvalidType(action_type.to_string()));
    }
    Ok(())
}

/// Create a builder for one-shot actions.
///
/// `args` is the ordered argument specification; pass an empty slice for
/// actions with no detail fields. Fails if the type tag contains a space or
/// any argument name violates the naming rules.
pub fn instant<S: AsRef<str>>(action_type: &str, args: &[S]) -> Result<InstantBuilder> {
    validate_type(action_type)?;
    let args = ArgSpec::parse(args)?;
    debug!(action_type, args = args.len(), "created instant builder");
    Ok(InstantBuilder {
        creator: Box::new(create_action_creator(action_type.to_string())),
        args,
        clock: Arc::new(SystemClock),
    })
}

/// Builder for one-shot actions of a fixed type.
pub struct InstantBuilder {
    creator: Creator,
    args: ArgSpec,
    clock: Arc<dyn Clock>,
}

impl InstantBuilder {
    /// Replace the clock used for `$timestamp`. Intended for tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build an action from the supplied details.
    ///
    /// Fails with [`Error::MissingArguments`] if any required field is
    /// absent, naming every missing field in declared order. Fields outside
    /// the argument specification are dropped; absent optional fields appear
    /// as `Value::Null`.
    pub fn build(&self, details: &Details) -> Result<Action> {
        let mut payload = self.args.shape_payload(details)?;
        payload.insert(
            TIMESTAMP_FIELD.to_string(),
            Value::String(iso_timestamp(self.clock.now())),
        );
        Ok((self.creator)(Value::Object(payload)))
    }
}

impl std::fmt::Debug for InstantBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstantBuilder")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Configuration for a temporal (start/stop paired) action factory.
///
/// `key` names the payload field that carries the pairing key; it must not
/// also be listed among the start or stop arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalConfig {
    /// Payload field carrying the pairing key.
    pub key: String,
    /// Argument specification for `start`.
    pub start_args: Vec<String>,
    /// Argument specification for `stop`.
    pub stop_args: Vec<String>,
}

impl TemporalConfig {
    /// Start a configuration with the given key field and empty argument
    /// lists.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            start_args: Vec::new(),
            stop_args: Vec::new(),
        }
    }

    /// Set the start argument specification.
    pub fn start_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.start_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the stop argument specification.
    pub fn stop_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Create a factory for start/stop paired actions.
///
/// Validates the type tag, the key, and both argument specifications up
/// front. The key must satisfy the same naming rules as argument names and
/// must not appear literally inside either argument list.
pub fn temporal(action_type: &str, config: TemporalConfig) -> Result<TemporalFactory> {
    validate_type(action_type)?;
    validate_name(&config.key)?;

    if config.start_args.iter().any(|a| *a == config.key) {
        return Err(Error::KeyCollision {
            key: config.key,
            phase: Phase::Start,
        });
    }
    if config.stop_args.iter().any(|a| *a == config.key) {
        return Err(Error::KeyCollision {
            key: config.key,
            phase: Phase::Stop,
        });
    }

    let start_args = ArgSpec::parse(&config.start_args)?;
    let stop_args = ArgSpec::parse(&config.stop_args)?;
    debug!(
        action_type,
        key = %config.key,
        start_args = start_args.len(),
        stop_args = stop_args.len(),
        "created temporal factory"
    );

    Ok(TemporalFactory {
        start_creator: Box::new(create_action_creator(format!(
            "{}{action_type}",
            Phase::Start.type_prefix()
        ))),
        stop_creator: Box::new(create_action_creator(format!(
            "{}{action_type}",
            Phase::Stop.type_prefix()
        ))),
        key: config.key,
        start_args,
        stop_args,
        clock: Arc::new(SystemClock),
    })
}

/// Factory for start/stop paired actions of a fixed type.
///
/// Both halves stamp the payload with the pairing key under the configured
/// key field and under the `$key` alias.
pub struct TemporalFactory {
    start_creator: Creator,
    stop_creator: Creator,
    key: String,
    start_args: ArgSpec,
    stop_args: ArgSpec,
    clock: Arc<dyn Clock>,
}

impl TemporalFactory {
    /// Replace the clock used for `$timestamp`. Intended for tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the opening action of a pair, typed `START_<type>`.
    ///
    /// `details` may be `None` only when the start argument specification is
    /// empty; otherwise fails with [`Error::DetailsRequired`].
    pub fn start(&self, key: &str, details: Option<&Details>) -> Result<Action> {
        self.fire(Phase::Start, key, details)
    }

    /// Build the closing action of a pair, typed `STOP_<type>`.
    ///
    /// Symmetric to [`TemporalFactory::start`], validated against the stop
    /// argument specification.
    pub fn stop(&self, key: &str, details: Option<&Details>) -> Result<Action> {
        self.fire(Phase::Stop, key, details)
    }

    fn fire(&self, phase: Phase, key: &str, details: Option<&Details>) -> Result<Action> {
        let (args, creator) = match phase {
            Phase::Start => (&self.start_args, &self.start_creator),
            Phase::Stop => (&self.stop_args, &self.stop_creator),
        };

        let empty = Details::new();
        let details = match details {
            Some(d) => d,
            None if args.is_empty() => &empty,
            None => return Err(Error::DetailsRequired { phase }),
        };

        let mut payload = args.shape_payload(details)?;
        payload.insert(self.key.clone(), Value::String(key.to_string()));
        payload.insert(KEY_ALIAS_FIELD.to_string(), Value::String(key.to_string()));
        payload.insert(
            TIMESTAMP_FIELD.to_string(),
            Value::String(iso_timestamp(self.clock.now())),
        );
        Ok(creator(Value::Object(payload)))
    }
}

impl std::fmt::Debug for TemporalFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemporalFactory")
            .field("key", &self.key)
            .field("start_args", &self.start_args)
            .field("stop_args", &self.stop_args)
            .finish_non_exhaustive()
    }
}
