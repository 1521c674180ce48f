use crate::VertexId;
use std::fmt::{Display, Error, Formatter};

impl VertexId {
    /// Create a `VertexId` from a raw index.
    ///
    /// It is up to the caller to ensure the index refers to a vertex of the intended graph.
    pub fn from_index(index: usize) -> VertexId {
        VertexId(index)
    }

    /// The raw index of this `VertexId`.
    pub fn to_index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(val: usize) -> Self {
        VertexId(val)
    }
}

impl From<VertexId> for usize {
    fn from(value: VertexId) -> Self {
        value.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Vertex({})", self.0)
    }
}
