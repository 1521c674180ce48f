/// **(internal)** Utility methods for constructing, modifying and inspecting labeled graphs.
pub mod _impl_misc;

/// **(internal)** Implements a simple export mechanism for visualising labeled graphs using
/// GraphViz `.dot` format.
pub mod _impl_dot_export;

/// **(internal)** A signed directed graph is an internal representation of the labeled
/// graph that is used to implement the structural analysis algorithms (SCC, reachability, ...).
pub mod signed_directed_graph;
