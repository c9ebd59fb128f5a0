use crate::*;

/// Renders the code-bearing parts of every problem: table schemas and
/// solutions, each as a highlighted `<pre>` block grouped under the
/// problem's anchor. Card chrome is left to the page.
#[derive(Debug)]
pub struct Catalogue {
    sql: HighlightCache<SqlHighlighter>,
    schema: HighlightCache<SchemaHighlighter>,
}

impl Catalogue {
    pub fn new(cache_capacity: u64) -> Self {
        Self {
            sql: HighlightCache::new(cache_capacity),
            schema: HighlightCache::new(cache_capacity),
        }
    }

    pub fn render(&self, dataset: &Dataset) -> String {
        let mut out = String::new();
        for problem in &dataset.problems {
            out.push_str(&self.problem(problem).to_html());
            out.push('\n');
        }
        debug!("Rendered {} problems", dataset.problems.len());
        out
    }

    pub fn problem(&self, problem: &Problem) -> Element {
        let schemas = problem.table_schemas.iter().map(|table| {
            Element::new("div")
                .with_class("table-schema-block")
                .with_attr("data-table", table.name.as_str())
                .with_child(self.schema.render(&table.schema).with_class("schema-pre"))
        });

        let labelled = problem.solutions.len() > 1;
        let solutions = problem.solutions.iter().map(|solution| {
            let block = Element::new("div").with_class("code-block");
            let block = if labelled {
                block.with_child(
                    Element::new("span")
                        .with_class("solution-label")
                        .with_text(&solution.label),
                )
            } else {
                block
            };
            block.with_child(self.sql.render(&solution.sql))
        });

        Element::new("section")
            .with_attr("id", problem.section_id.as_str())
            .with_attr("data-difficulty", problem.difficulty.css_class())
            .with_children(schemas)
            .with_children(solutions)
    }
}
