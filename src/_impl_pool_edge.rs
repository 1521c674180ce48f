use crate::{EdgeSign, PoolEdge};
use std::fmt::{Display, Error, Formatter};

impl PoolEdge {
    pub fn new(source: &str, target: &str, sign: EdgeSign) -> PoolEdge {
        PoolEdge {
            source: source.to_string(),
            target: target.to_string(),
            sign,
        }
    }

    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_target(&self) -> &str {
        &self.target
    }

    pub fn get_sign(&self) -> EdgeSign {
        self.sign
    }

    /// True if this edge is a repression of a node by itself.
    pub fn is_self_repression(&self) -> bool {
        self.source == self.target && self.sign == EdgeSign::Repression
    }
}

/// Pool edges are displayed in the allow-list file syntax, i.e. `TARGET = TYPE(SOURCE)`.
impl Display for PoolEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{} = {}({})", self.target, self.sign, self.source)
    }
}
