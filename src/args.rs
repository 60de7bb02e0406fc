//! Argument specifications.
//!
//! An argument specification is an ordered list of field names controlling
//! payload shape. A trailing `?` marks a name optional and is stripped before
//! the name is used as a payload key. Names are validated once, when the
//! specification is parsed; builders then hold the parsed form immutably.
//!
//! Naming rules:
//! - must be a non-empty string
//! - no space characters
//! - must not begin with `$` (reserved for injected metadata)
//! - `?` may appear only as the final character

use crate::error::{Error, Result};
use crate::value::{Details, Value};

/// One parsed argument name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ArgName {
    /// The payload key, with any trailing `?` stripped.
    key: String,
    optional: bool,
}

/// A parsed, validated argument specification.
///
/// Order is preserved: missing-argument errors name fields in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgSpec {
    names: Vec<ArgName>,
}

impl ArgSpec {
    /// Parse and validate an ordered list of argument names.
    pub fn parse<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for raw in names {
            let raw = raw.as_ref();
            validate_name(raw)?;
            let optional = raw.ends_with('?');
            let key = if optional {
                raw[..raw.len() - 1].to_string()
            } else {
                raw.to_string()
            };
            parsed.push(ArgName { key, optional });
        }
        Ok(ArgSpec { names: parsed })
    }

    /// Number of declared arguments.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no arguments are declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True if `key` matches a declared payload key (after `?` stripping).
    pub fn declares(&self, key: &str) -> bool {
        self.names.iter().any(|n| n.key == key)
    }

    /// Shape a payload from caller-supplied details.
    ///
    /// Required fields copy the supplied value; absent optional fields become
    /// `Value::Null`. Fields of `details` outside this specification are
    /// dropped. If any required field is absent, fails with
    /// [`Error::MissingArguments`] naming every missing field in declared
    /// order.
    pub(crate) fn shape_payload(&self, details: &Details) -> Result<Details> {
        let mut payload = Details::with_capacity(self.names.len() + 2);
        let mut missing = Vec::new();

        for name in &self.names {
            match details.get(&name.key) {
                Some(value) => {
                    payload.insert(name.key.clone(), value.clone());
                }
                None if name.optional => {
                    payload.insert(name.key.clone(), Value::Null);
                }
                None => missing.push(name.key.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(Error::MissingArguments(missing));
        }

        Ok(payload)
    }
}

/// Validate a single raw argument name against the naming rules.
pub(crate) fn validate_name(raw: &str) -> Result<()> {
    let legal = !raw.is_empty()
        && !raw.contains(' ')
        && !raw.starts_with('$')
        && raw.find('?').map_or(true, |i| i == raw.len() - 1);

    if legal {
        Ok(())
    } else {
        Err(Error::IllegalArgName { name: raw.to_string() })
    }
}
