use crate::EdgeSign;
use crate::EdgeSign::{Activation, Repression};
use rand::Rng;
use std::fmt::{Display, Error, Formatter};

impl EdgeSign {
    /// Both signs, in their canonical order.
    pub const ALL: [EdgeSign; 2] = [Activation, Repression];

    /// Parse a sign from a regulation type token of an edge allow-list.
    ///
    /// The token denotes an activation when it contains `a` but not `r`, and a repression when
    /// it contains `r` but not `a` (so `a`, `act`, `activation`, `r` or `repression` are all
    /// fine). Any other token is ambiguous and results in `None`.
    pub fn try_from_type_token(token: &str) -> Option<EdgeSign> {
        match (token.contains('a'), token.contains('r')) {
            (true, false) => Some(Activation),
            (false, true) => Some(Repression),
            _ => None,
        }
    }

    /// The single-letter code of this sign (`a` or `r`).
    pub fn code(self) -> char {
        match self {
            Activation => 'a',
            Repression => 'r',
        }
    }

    /// Draw one of the two signs uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> EdgeSign {
        if rng.gen_bool(0.5) {
            Activation
        } else {
            Repression
        }
    }
}

impl Display for EdgeSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.code())
    }
}
