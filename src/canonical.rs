//! Canonical serialization and serialize-then-deserialize deep clone.
//!
//! Response messages are equal "iff their canonical serializations coincide"
//! and game states are "deep-cloneable by serialization" (see the data model
//! and design notes). `serde_json` serializes struct fields in declaration
//! order and map keys in insertion order, which is stable enough for the
//! closed, hand-authored action/state types the engine operates over.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Returns a string uniquely identifying `value`'s canonical serialization.
///
/// Two values produce the same key iff they serialize identically. Used to
/// detect duplicate candidate actions and to match a tree node's
/// `last_action` against the currently-legal action set.
pub fn canonical_key<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("canonical serialization of engine value")
}

/// Deep-clones `value` by serializing then deserializing it, isolating the
/// result from any aliasing with the original.
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> T {
    let encoded = serde_json::to_vec(value).expect("serialize value for deep clone");
    serde_json::from_slice(&encoded).expect("deserialize value for deep clone")
}
