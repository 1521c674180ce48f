use crate::{EdgeSign, LabeledGraph};
use std::fmt::{Display, Error, Formatter};

impl LabeledGraph {
    /// Render this graph as an essential network specification.
    ///
    /// Lines are sorted by node label, activators and repressors within a line are sorted
    /// by name. As a result, two graphs with the same labels and the same labeled edges always
    /// produce byte-identical text, regardless of their vertex identifiers.
    pub fn to_spec(&self) -> String {
        let mut lines = self
            .vertices()
            .map(|vertex| {
                let mut activators = Vec::new();
                let mut repressors = Vec::new();
                for (regulator, sign) in self.in_edges(vertex) {
                    match sign {
                        EdgeSign::Activation => activators.push(&self[regulator]),
                        EdgeSign::Repression => repressors.push(&self[regulator]),
                    }
                }
                activators.sort();
                repressors.sort();

                let mut line = format!("{} : ", &self[vertex]);
                if !activators.is_empty() {
                    line.push('(');
                    line.push_str(&activators.join(" + "));
                    line.push(')');
                }
                for repressor in repressors {
                    line.push_str("(~");
                    line.push_str(repressor);
                    line.push(')');
                }
                line.push_str(" : E\n");
                (&self[vertex], line)
            })
            .collect::<Vec<_>>();
        lines.sort();
        lines.into_iter().map(|(_, line)| line).collect()
    }
}

impl Display for LabeledGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.to_spec())
    }
}
