//! Apply step: hands a projection to whatever performs the visible update.

use pubs_model::Catalog;

use crate::Projection;

/// A consumer of reconciliation output.
///
/// The engine never mutates presentation itself. Implementations decide
/// what "visible" means for their medium (a terminal table, a JSON
/// document, a DOM adapter).
pub trait ProjectionSink {
    type Error;

    /// Apply `projection`, which was computed against `catalog`.
    fn apply(&mut self, catalog: &Catalog, projection: &Projection) -> Result<(), Self::Error>;
}

/// Sink that keeps every projection it receives, mostly for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub applied: Vec<Projection>,
}

impl ProjectionSink for RecordingSink {
    type Error = std::convert::Infallible;

    fn apply(&mut self, _catalog: &Catalog, projection: &Projection) -> Result<(), Self::Error> {
        self.applied.push(projection.clone());
        Ok(())
    }
}
