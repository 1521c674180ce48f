use crate::{EdgeSign, LabeledGraph};
use std::io::Write;

impl LabeledGraph {
    /// Export this labeled graph to a `.dot` format.
    ///
    /// In the representation, we use green arrows for activations and red tee-headed
    /// edges for repressions.
    pub fn to_dot(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        match self.write_as_dot(&mut buffer) {
            Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
            // Writing into a `Vec` cannot fail.
            Err(_) => String::new(),
        }
    }

    pub fn write_as_dot(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(output, "digraph G {{")?;
        for vertex in self.vertices() {
            writeln!(
                output,
                "v{} [shape=box, label=\"{}\", style=filled];",
                vertex.0, &self[vertex]
            )?;
        }
        for (source, target, sign) in self.edges() {
            let (color, arrow) = match sign {
                EdgeSign::Activation => ("#4abd73", "normal"),
                EdgeSign::Repression => ("#d05d5d", "tee"),
            };
            writeln!(
                output,
                "v{} -> v{} [label=\"{}\", color=\"{}\", arrowhead=\"{}\"];",
                source.0, target.0, sign, color, arrow,
            )?;
        }
        writeln!(output, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::LabeledGraph;
    use pretty_assertions::assert_eq;

    #[test]
    pub fn test_labeled_graph_to_dot() {
        let graph = LabeledGraph::try_from_spec("a : (a) : E\nb : (~a) : E\n").unwrap();
        let expected = "digraph G {\n\
            v0 [shape=box, label=\"a\", style=filled];\n\
            v1 [shape=box, label=\"b\", style=filled];\n\
            v0 -> v0 [label=\"a\", color=\"#4abd73\", arrowhead=\"normal\"];\n\
            v0 -> v1 [label=\"r\", color=\"#d05d5d\", arrowhead=\"tee\"];\n\
            }\n";
        assert_eq!(expected, graph.to_dot());
    }
}
