//! Object/attribute runtime for a phi-calculus language.
//!
//! Programs are graphs of objects. Every value, including primitives, is an
//! object exposing named attributes; computation is attribute resolution and
//! forcing down to terminal data. This crate is the execution core:
//!
//! - attribute bindings and their variants (via [`attr`])
//! - the object contract and default composite object (via [`object`])
//! - terminal primitive data (via [`datum`])
//! - forcing, a.k.a. dataization (via [`dataized`])
//!
//! Delegation replaces class inheritance: an object that defines a default
//! attribute ("φ") answers for every name it does not bind locally by
//! falling through to whatever φ resolves to. Back-references (the owner
//! slot "ρ" and lexical-scope slot "σ") are ordinary bindings, and every
//! attachment under a new owner is a structural copy, so placements never
//! share mutable state.
//!
//! ```
//! use phicore::attr::Attr;
//! use phicore::dataized::Dataized;
//! use phicore::datum::Datum;
//! use phicore::object::{Object, Phi, PHI, RHO};
//!
//! // An object whose value decodes its owner as UTF-8 text.
//! let mut decode = Object::new("decode", &Object::root());
//! decode.put(PHI, Attr::composite(|owner| {
//!     let raw = Dataized::new(owner.attribute(RHO).value()?).take_bytes()?;
//!     Ok(Object::from(String::from_utf8(raw)?))
//! }));
//!
//! let attached = decode.copy_with_owner(&Object::from(&b"phi"[..]));
//! assert_eq!(Dataized::new(attached).take()?, Datum::from("phi"));
//! # Ok::<(), phicore::error::PhiError>(())
//! ```

pub mod attr;
pub mod dataized;
pub mod datum;
pub mod error;
pub mod object;
