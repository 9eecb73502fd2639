//! Predicates over Python call expressions for lint rules.
//!
//! Two independent, pure checks: [`matches_call`] matches a call's shape
//! against a dotted method path, and [`matches_inferred_qname`] asks an
//! external [`TypeInference`] engine whether a node's type resolves to an
//! expected fully qualified name. Rule implementations call one or the
//! other and act on the boolean.

pub mod call_name;
pub mod inference;

pub use call_name::matches_call;
pub use inference::{matches_inferred_qname, InferenceError, InferredType, TypeInference};
