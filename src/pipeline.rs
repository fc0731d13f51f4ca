//! Data-to-coordinate pipeline.
//!
//! The pipeline:
//! 1. Loads the data file into per-stream token buffers
//! 2. Skips the header token of every stream
//! 3. Parses one value per stream and line into the relation lists
//! 4. Sorts, scales and maps the relations to screen coordinates

use crate::config::{Calibration, STREAM_COUNT};
use crate::error::Result;
use crate::mapper::map_all;
use crate::model::QuadrantPlot;
use crate::parser::{ContentSource, StreamBuffers, parse_value};
use crate::relations::RelationSet;
use camino::Utf8Path;

/// Owns the data of a single pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    pub calibration: Calibration,
    pub streams: StreamBuffers,
    pub relations: RelationSet,
}

impl PipelineContext {
    pub fn new(calibration: Calibration) -> Self {
        Self {
            calibration,
            ..Default::default()
        }
    }

    /// Read the data file through `source`.
    pub fn load<S: ContentSource>(&mut self, source: &mut S, path: &Utf8Path) -> Result<()> {
        self.streams = StreamBuffers::load(source, path)?;
        Ok(())
    }

    /// Parse the loaded streams into relations.
    ///
    /// Rows are read until stream 0 runs out. A shorter stream yields an empty
    /// token and fails to parse; surplus tokens in other streams are ignored.
    pub fn build_relations(&mut self) -> Result<()> {
        let mut cursors = self.streams.data_cursors();
        let mut relations = RelationSet::new();
        while !cursors[0].is_exhausted() {
            let mut values = [0.0; STREAM_COUNT];
            for (value, cursor) in values.iter_mut().zip(cursors.iter_mut()) {
                *value = parse_value(cursor.next_token().unwrap_or(""))?;
            }
            relations.push_line(values);
        }
        tracing::debug!("Built {} relations per quadrant", relations.len());
        self.relations = relations;
        Ok(())
    }

    /// Sort, scale and map the relations.
    pub fn map(&mut self) -> Result<QuadrantPlot> {
        map_all(&mut self.relations, &self.calibration)
    }

    /// Run every stage on `path` and return the mapped plot.
    pub fn run<S: ContentSource>(&mut self, source: &mut S, path: &Utf8Path) -> Result<QuadrantPlot> {
        self.load(source, path)?;
        self.build_relations()?;
        self.map()
    }
}

/// Compute the plot for a data file with the default calibration.
pub fn compute_plot<S: ContentSource>(source: &mut S, path: &Utf8Path) -> Result<QuadrantPlot> {
    PipelineContext::new(Calibration::default()).run(source, path)
}
