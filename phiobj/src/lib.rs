//! Generated-style objects built on the phicore contract.
//!
//! Code generated from source programs maps each surface object onto a
//! constructor that registers attributes through [`Object::put`]. This crate
//! holds the hand-written equivalents used by the test suite: conversion
//! objects that read their input by forcing, compute, and wrap the result as
//! a fresh data object returned from the default attribute.

use phicore::attr::Attr;
use phicore::dataized::Dataized;
use phicore::object::{Object, PHI, Phi, RHO};

/// `bytes.as-string`: decodes the owner's byte sequence as UTF-8 text.
///
/// Attach it to a byte-carrying object with
/// [`Phi::copy_with_owner`]; forcing the result (or its φ) yields the
/// decoded text. Invalid UTF-8 is a typed failure, never lossy-decoded.
pub fn bytes_as_string(sigma: &Object) -> Object {
    let mut object = Object::new("bytes.as-string", sigma);
    object.put(
        PHI,
        Attr::composite(|owner| {
            let raw = Dataized::new(owner.attribute(RHO).value()?).take_bytes()?;
            let text = String::from_utf8(raw)?;
            Ok(Object::from(text))
        }),
    );
    object
}

/// `string.as-bytes`: encodes the owner's text as its UTF-8 byte sequence.
pub fn string_as_bytes(sigma: &Object) -> Object {
    let mut object = Object::new("string.as-bytes", sigma);
    object.put(
        PHI,
        Attr::composite(|owner| {
            let text = Dataized::new(owner.attribute(RHO).value()?).take_text()?;
            Ok(Object::from(text.into_bytes()))
        }),
    );
    object
}
