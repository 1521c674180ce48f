use crate::filters::Rejection;
use std::fmt::{Display, Error, Formatter};

impl Rejection {
    /// A short, stable description used to aggregate rejected candidates.
    pub fn category(&self) -> &'static str {
        match self {
            Rejection::NotComputable => "Network spec not computable",
            Rejection::TooManyParameters => "Too many parameters",
            Rejection::NotConnected => "Not connected",
            Rejection::NotStronglyConnected => "Not strongly connected",
            Rejection::NotFeedForward => "Not feed-forward",
            Rejection::InDegreeOutOfRange => "Number of in-edges not in range",
            Rejection::OutDegreeOutOfRange => "Number of out-edges not in range",
        }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.category())
    }
}
