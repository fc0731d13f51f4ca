//! Per-quadrant relation lists built from the parsed stream values.

use crate::config::STREAM_COUNT;
use crate::model::Relation;

/// Four relation lists, one per quadrant, in input line order until sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationSet {
    lists: [Vec<Relation>; STREAM_COUNT],
}

impl RelationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the relations of one input line.
    ///
    /// Quadrant `q` receives `(values[q], values[(q + 1) % 4])`, so the last
    /// quadrant wraps around to pair stream 3 with stream 0.
    pub fn push_line(&mut self, values: [f64; STREAM_COUNT]) {
        for (q, list) in self.lists.iter_mut().enumerate() {
            list.push(Relation::new(values[q], values[(q + 1) % STREAM_COUNT]));
        }
    }

    pub fn quadrant(&self, q: usize) -> &[Relation] {
        &self.lists[q]
    }

    /// Number of input lines pushed so far.
    pub fn len(&self) -> usize {
        self.lists[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stable sort of every quadrant by first component, ascending.
    pub fn sort(&mut self) {
        for list in &mut self.lists {
            list.sort_by(|l, r| l.a.total_cmp(&r.a));
        }
    }

    /// First component of the last relation in each quadrant, or `None` for
    /// an empty quadrant. Only meaningful after [`RelationSet::sort`].
    pub fn max_values(&self) -> [Option<f64>; STREAM_COUNT] {
        std::array::from_fn(|q| self.lists[q].last().map(|r| r.a))
    }
}
