//! Attribute bindings.
//!
//! An attribute binding is the resolvable content behind one attribute name.
//! Bindings form a small closed family, modeled as the [`Attr`] tagged enum;
//! resolution is plain recursion over the variants, never virtual dispatch.
//! Lookup on an object returns a [`Binding`], the bound form that snapshots
//! the owner so computed bindings can be evaluated and failures can name the
//! object they crossed.

use std::fmt;
use std::rc::Rc;

use strum::EnumIs;

use crate::error::{PhiError, PhiResult};
use crate::object::{Object, PHI, Phi};

/// Term marker for a binding that is not yet reducible to a term.
pub const UNRESOLVED: &str = "λ";

/// Term marker for a binding that holds nothing.
pub const VOID: &str = "Ø";

/// Closure behind a computed binding. Invoked with the owning object each
/// time the value is requested; results are never cached at this layer.
pub type Recipe = Rc<dyn Fn(&Object) -> PhiResult<Object>>;

/// One attribute binding.
#[derive(Clone, EnumIs)]
pub enum Attr {
    /// Holds an already-resolved object.
    Simple(Box<Object>),

    /// Sentinel for a name that was never bound. Constructing it is free;
    /// only requesting its value raises the missing-attribute failure.
    Absent { name: String, among: Vec<String> },

    /// Computed on demand from the owning object.
    Composite(Recipe),

    /// Forwards resolution through the carrier's default attribute ("φ"),
    /// qualified by the originally requested name.
    Decorated { carrier: Box<Object>, name: String },

    /// Wraps another binding with a `Type#attr` label for diagnostics.
    /// Transparent to value resolution apart from label propagation.
    Named { label: String, inner: Box<Attr> },
}

impl Attr {
    /// A direct binding to `object`.
    pub fn simple(object: Object) -> Self {
        Attr::Simple(Box::new(object))
    }

    /// A computed binding driven by `recipe`.
    pub fn composite(recipe: impl Fn(&Object) -> PhiResult<Object> + 'static) -> Self {
        Attr::Composite(Rc::new(recipe))
    }

    /// Resolve this binding to an object, evaluating computed bindings
    /// against `owner`.
    pub fn value(&self, owner: &Object) -> PhiResult<Object> {
        match self {
            Attr::Simple(object) => Ok(object.as_ref().clone()),
            Attr::Absent { name, among } => Err(PhiError::MissingAttribute {
                name: name.clone(),
                among: among.clone(),
            }),
            Attr::Composite(recipe) => recipe(owner),
            Attr::Decorated { carrier, name } => {
                let base = carrier.attribute(PHI).value()?;
                base.attribute(name).value()
            }
            Attr::Named { label, inner } => inner
                .value(owner)
                .map_err(|failure| failure.within(label.clone(), owner.term())),
        }
    }

    /// Re-create this binding for `copy`, a fresh copy of its owner.
    ///
    /// Held objects are value types, so re-creation is a structural copy;
    /// computed bindings share their (immutable) closure and are evaluated
    /// against whatever owner they are looked up on, so they need no
    /// re-pointing. Delegated bindings re-point their carrier to the copy.
    /// The owner slot is not handled here: object copy skips it and
    /// re-points it explicitly.
    pub fn rebind(&self, copy: &Object) -> Attr {
        match self {
            Attr::Simple(object) => Attr::Simple(object.clone()),
            Attr::Absent { .. } => self.clone(),
            Attr::Composite(recipe) => Attr::Composite(Rc::clone(recipe)),
            Attr::Decorated { name, .. } => Attr::Decorated {
                carrier: Box::new(copy.clone()),
                name: name.clone(),
            },
            Attr::Named { label, inner } => Attr::Named {
                label: label.clone(),
                inner: Box::new(inner.rebind(copy)),
            },
        }
    }

    /// Diagnostic term of this binding.
    pub fn term(&self) -> String {
        match self {
            Attr::Simple(object) => object.term(),
            Attr::Absent { .. } => VOID.to_string(),
            Attr::Composite(_) => UNRESOLVED.to_string(),
            Attr::Decorated { .. } => UNRESOLVED.to_string(),
            Attr::Named { inner, .. } => inner.term(),
        }
    }
}

impl fmt::Debug for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::Simple(object) => write!(f, "Simple({})", object.term()),
            Attr::Absent { name, .. } => write!(f, "Absent({name})"),
            Attr::Composite(_) => write!(f, "Composite({UNRESOLVED})"),
            Attr::Decorated { name, .. } => write!(f, "Decorated({name})"),
            Attr::Named { label, inner } => write!(f, "{label}={inner:?}"),
        }
    }
}

/// An attribute bound to the object it was resolved on.
///
/// This is what [`Phi::attribute`] returns: never a raw variant, always the
/// bound form carrying the owner snapshot and the `Type#attr` label.
pub struct Binding {
    label: String,
    owner: Object,
    attr: Attr,
}

impl Binding {
    pub(crate) fn new(label: String, owner: Object, attr: Attr) -> Self {
        Binding { label, owner, attr }
    }

    /// The `Type#attr` label this binding was resolved under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolve the bound attribute to an object.
    pub fn value(&self) -> PhiResult<Object> {
        self.attr.value(&self.owner)
    }

    /// Diagnostic term of the underlying binding.
    pub fn term(&self) -> String {
        self.attr.term()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.label, self.attr)
    }
}
