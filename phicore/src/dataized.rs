//! Forcing an object graph down to terminal data.

use log::debug;

use crate::datum::Datum;
use crate::error::{PhiError, PhiResult};
use crate::object::{DELTA, Object, Phi};

/// A dataized object: forces its source down to a [`Datum`].
///
/// If the source does not itself carry data, its `Δ` attribute is resolved;
/// resolution is pure and deterministic, so there is no retry policy here.
/// Each successful take emits one `debug`-level trace record with the source
/// and result terms; with no logger installed the record is a no-op.
pub struct Dataized {
    phi: Object,
}

impl Dataized {
    pub fn new(phi: Object) -> Self {
        Dataized { phi }
    }

    /// Take the underlying datum, no matter the shape.
    pub fn take(&self) -> PhiResult<Datum> {
        let source = if self.phi.datum().is_some() {
            self.phi.clone()
        } else {
            self.phi
                .attribute(DELTA)
                .value()
                .map_err(|failure| failure.within(DELTA, self.phi.term()))?
        };
        let Some(datum) = source.datum() else {
            return Err(PhiError::NotData {
                ident: source.ident().to_string(),
                term: self.phi.term(),
            });
        };
        debug!("𝔻({}) ➜ {}", self.phi.term(), datum);
        Ok(datum.clone())
    }

    /// Take the datum checked against a caller-specified shape.
    pub fn take_as<T>(&self) -> PhiResult<T>
    where
        T: TryFrom<Datum, Error = PhiError>,
    {
        T::try_from(self.take()?)
    }

    pub fn take_bytes(&self) -> PhiResult<Vec<u8>> {
        self.take_as()
    }

    pub fn take_text(&self) -> PhiResult<String> {
        self.take_as()
    }

    pub fn take_bool(&self) -> PhiResult<bool> {
        self.take_as()
    }

    pub fn take_int(&self) -> PhiResult<i64> {
        self.take_as()
    }

    pub fn take_float(&self) -> PhiResult<f64> {
        self.take_as()
    }
}
