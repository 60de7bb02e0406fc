//! Action types and the action-creator collaborator.
//!
//! An action is an immutable tagged record `{type, payload}` representing a
//! logged event. Actions are produced through [`create_action_creator`], a
//! function mapping a type tag to a creator closure that wraps a payload.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A logged event: a type tag plus a payload.
///
/// Actions are created fresh on every builder invocation and never mutated
/// afterwards; the type tag is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: String,
    payload: Value,
}

impl Action {
    /// The type tag this action was created with.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// The payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consume the action, returning its payload.
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

/// Bind a type tag, returning a creator that wraps payloads into actions.
///
/// This is the boundary the factory builds on: the factory validates and
/// shapes the payload, then hands it to the creator bound to the validated
/// tag. The creator is pure and side-effect-free.
pub fn create_action_creator(tag: impl Into<String>) -> impl Fn(Value) -> Action {
    let tag = tag.into();
    move |payload| Action {
        action_type: tag.clone(),
        payload,
    }
}
