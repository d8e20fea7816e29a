//! Objects and the object contract.
//!
//! Every runtime value is an object: a mapping from attribute name to
//! binding, an insertion order over the free names, and optionally a
//! terminal [`Datum`]. Objects are value types. Attaching an object under a
//! new owner always produces a structural copy, so two placements of "the
//! same" logical object never alias; the only sanctioned mutation is
//! constructing a new copy.

use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use crate::attr::{Attr, Binding, UNRESOLVED};
use crate::datum::Datum;
use crate::error::{PhiError, PhiResult};

/// Owner slot: the context this object is currently attached under.
pub const RHO: &str = "ρ";

/// Lexical-scope slot: the enclosing environment at construction.
pub const SIGMA: &str = "σ";

/// Default/value attribute, consulted for delegation fallthrough.
pub const PHI: &str = "φ";

/// Data attribute, marking terminal primitive data.
pub const DELTA: &str = "Δ";

/// Free names participate in positional order; system slots do not.
fn is_free(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// The object contract: the capability set every runtime value implements.
pub trait Phi {
    /// Look up an attribute by name. Resolution never fails here; a missing
    /// name yields a binding whose value raises the failure on demand.
    fn attribute(&self, name: &str) -> Binding;

    /// Look up an attribute by position over the free names, clamping an
    /// out-of-range position to the last free attribute.
    fn attribute_at(&self, pos: usize) -> PhiResult<Binding>;

    /// Produce a structurally independent copy attached under `owner`.
    fn copy_with_owner(&self, owner: &Object) -> Object;

    /// Canonical textual term, `Name⟦attr↦term, ...⟧`.
    fn term(&self) -> String;
}

/// The default composite object.
#[derive(Clone)]
pub struct Object {
    ident: String,
    attrs: BTreeMap<String, Attr>,
    order: SmallVec<String, 4>,
    datum: Option<Datum>,
}

impl Object {
    /// The designated empty placeholder (`Φ`), the root both system slots
    /// point at before an object is attached anywhere.
    pub fn root() -> Self {
        Object {
            ident: "Φ".to_string(),
            attrs: BTreeMap::new(),
            order: SmallVec::new(),
            datum: None,
        }
    }

    /// A fresh object with the two system slots pre-registered, both bound
    /// to `sigma`.
    pub fn new(ident: impl Into<String>, sigma: &Object) -> Self {
        let mut object = Object {
            ident: ident.into(),
            attrs: BTreeMap::new(),
            order: SmallVec::new(),
            datum: None,
        };
        object.put(RHO, Attr::simple(sigma.clone()));
        object.put(SIGMA, Attr::simple(sigma.clone()));
        object
    }

    /// A data object: terminal, carries `datum`, renders it as its term.
    pub fn data(datum: Datum) -> Self {
        let mut object = Object::new(datum.shape(), &Object::root());
        object.datum = Some(datum);
        object
    }

    /// Display name of this object's concrete variant.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The terminal datum, if this object is data-bearing.
    pub fn datum(&self) -> Option<&Datum> {
        self.datum.as_ref()
    }

    /// Register an attribute under `name`.
    ///
    /// Free names enter positional order exactly once: re-registering
    /// overwrites the binding but never reorders. The stored binding is
    /// wrapped with its `Type#attr` label.
    pub fn put(&mut self, name: impl Into<String>, attr: Attr) {
        let name = name.into();
        if is_free(&name) && !self.order.iter().any(|known| *known == name) {
            self.order.push(name.clone());
        }
        let label = self.label(&name);
        self.attrs.insert(
            name,
            Attr::Named {
                label,
                inner: Box::new(attr),
            },
        );
    }

    fn label(&self, name: &str) -> String {
        format!("{}#{}", self.ident, name)
    }
}

impl Phi for Object {
    fn attribute(&self, name: &str) -> Binding {
        let label = self.label(name);
        let attr = match self.attrs.get(name) {
            Some(stored) => stored.clone(),
            None => {
                let inner = if name == DELTA && self.datum.is_some() {
                    // Data-bearing objects answer for Δ with themselves, so
                    // delegation chains bottom out in data.
                    Attr::simple(self.clone())
                } else if self.attrs.contains_key(PHI) {
                    Attr::Decorated {
                        carrier: Box::new(self.clone()),
                        name: name.to_string(),
                    }
                } else {
                    Attr::Absent {
                        name: name.to_string(),
                        among: self.attrs.keys().cloned().collect(),
                    }
                };
                Attr::Named {
                    label: label.clone(),
                    inner: Box::new(inner),
                }
            }
        };
        Binding::new(label, self.clone(), attr)
    }

    fn attribute_at(&self, pos: usize) -> PhiResult<Binding> {
        if self.order.is_empty() {
            return Err(PhiError::NoFreeAttributes { pos });
        }
        let idx = pos.min(self.order.len() - 1);
        Ok(self.attribute(&self.order[idx]))
    }

    fn copy_with_owner(&self, owner: &Object) -> Object {
        let mut copy = self.clone();
        // Re-point the owner slot first, so rebound attributes snapshot the
        // copy with its new owner already in place.
        copy.attrs.insert(
            RHO.to_string(),
            Attr::Named {
                label: self.label(RHO),
                inner: Box::new(Attr::simple(owner.clone())),
            },
        );
        let rebound: BTreeMap<String, Attr> = copy
            .attrs
            .iter()
            .map(|(name, attr)| {
                if name.as_str() == RHO {
                    (name.clone(), attr.clone())
                } else {
                    (name.clone(), attr.rebind(&copy))
                }
            })
            .collect();
        copy.attrs = rebound;
        copy
    }

    fn term(&self) -> String {
        if let Some(datum) = &self.datum {
            return datum.to_string();
        }
        let list: Vec<String> = self
            .order
            .iter()
            .filter_map(|name| {
                let term = self.attrs.get(name)?.term();
                if term.ends_with(UNRESOLVED) {
                    None
                } else {
                    Some(format!("{name}↦{term}"))
                }
            })
            .collect();
        if list.is_empty() {
            self.ident.clone()
        } else {
            format!("{}⟦{}⟧", self.ident, list.join(", "))
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term())
    }
}

/// Verbose internal dump: ident, positional order, one line per binding.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:{{", self.ident)?;
        writeln!(f, "  _order={:?}", self.order)?;
        for (name, attr) in &self.attrs {
            match self.order.iter().position(|known| known == name) {
                Some(idx) => writeln!(f, "  {name}({idx})={attr:?}")?,
                None => writeln!(f, "  {name}={attr:?}")?,
            }
        }
        write!(f, "}}")
    }
}

impl From<Datum> for Object {
    fn from(datum: Datum) -> Self {
        Object::data(datum)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::data(Datum::Bool(value))
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::data(Datum::Int(value))
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::data(Datum::Float(value))
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::data(Datum::from(value))
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::data(Datum::Text(value))
    }
}

impl From<Vec<u8>> for Object {
    fn from(value: Vec<u8>) -> Self {
        Object::data(Datum::Bytes(value))
    }
}

impl From<&[u8]> for Object {
    fn from(value: &[u8]) -> Self {
        Object::data(Datum::from(value))
    }
}
