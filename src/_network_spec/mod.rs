//! Translation between `LabeledGraph` and the *essential network specification* format.
//!
//! Each line of a specification describes one node and its regulators:
//!
//! ```text
//! X1 : (X1 + X3)(~X2) : E
//! X2 : (X1) : E
//! X3 :  : E
//! ```
//!
//! Activating regulators are joined by `+` into a single parenthesized group (omitted when
//! the node has no activators), and every repressing regulator forms its own `(~NAME)` group.
//! The trailing `: E` marks the node as essential.

/// **(internal)** `LabeledGraph` to specification string.
mod _display_network_spec;
/// **(internal)** Specification string to `LabeledGraph`.
mod _from_string_for_network_spec;
