use thiserror::Error;

/// Failures surfaced by attribute resolution and dataization.
///
/// Every variant is recoverable; nothing in the runtime aborts the process.
/// Failures that cross an object boundary are wrapped in [`PhiError::Resolution`]
/// so the chain back to the root cause keeps the term of every object it
/// travelled through.
#[derive(Debug, Error)]
pub enum PhiError {
    #[error("can't find attribute \"{name}\" among other {} attrs ({})", .among.len(), .among.join(", "))]
    MissingAttribute { name: String, among: Vec<String> },

    #[error("there are no free attributes here, can't get the {pos}-th one")]
    NoFreeAttributes { pos: usize },

    #[error("failure resolving {attr} at:\n{term}")]
    Resolution {
        attr: String,
        term: String,
        #[source]
        source: Box<PhiError>,
    },

    #[error("the Δ attribute has {ident} instead of data at:\n{term}")]
    NotData { ident: String, term: String },

    #[error("expected {expected} data, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("bytes are not valid UTF-8 text")]
    InvalidText(#[from] std::string::FromUtf8Error),
}

pub type PhiResult<T> = Result<T, PhiError>;

impl PhiError {
    /// Wrap this failure with the attribute label and term of the object it
    /// crossed, keeping `self` as the source.
    pub fn within(self, attr: impl Into<String>, term: impl Into<String>) -> Self {
        PhiError::Resolution {
            attr: attr.into(),
            term: term.into(),
            source: Box::new(self),
        }
    }

    /// Walk the resolution chain down to the failure that started it.
    pub fn root_cause(&self) -> &PhiError {
        let mut cause = self;
        while let PhiError::Resolution { source, .. } = cause {
            cause = source;
        }
        cause
    }
}
