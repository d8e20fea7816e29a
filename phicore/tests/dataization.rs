use phicore::attr::Attr;
use phicore::dataized::Dataized;
use phicore::datum::Datum;
use phicore::error::PhiError;
use phicore::object::{DELTA, Object, PHI, Phi, RHO};

#[test]
fn data_objects_force_to_their_datum() {
    let raw = b"test".to_vec();
    let taken = Dataized::new(Object::from(raw.clone())).take_bytes().unwrap();
    assert_eq!(taken, raw);

    assert!(Dataized::new(Object::from(true)).take_bool().unwrap());
    assert_eq!(Dataized::new(Object::from(8i64)).take_int().unwrap(), 8);
    assert_eq!(
        Dataized::new(Object::from(0.5f64)).take_float().unwrap(),
        0.5
    );
}

#[test]
fn untyped_take_reports_the_shape() {
    let datum = Dataized::new(Object::from("hi")).take().unwrap();
    assert!(datum.is_text());
    assert_eq!(datum, Datum::from("hi"));
}

#[test]
fn forcing_walks_the_data_attribute() {
    let mut object = Object::new("boxed", &Object::root());
    object.put(DELTA, Attr::simple(Object::from(11i64)));

    assert_eq!(Dataized::new(object).take_int().unwrap(), 11);
}

#[test]
fn forcing_walks_the_default_attribute() {
    // No Δ of its own: forcing falls through φ, then bottoms out in data.
    let mut object = Object::new("forwarded", &Object::root());
    object.put(PHI, Attr::simple(Object::from(21i64)));

    assert_eq!(Dataized::new(object).take_int().unwrap(), 21);
}

#[test]
fn forcing_a_computed_default() {
    let mut object = Object::new("summed", &Object::root());
    object.put(
        PHI,
        Attr::composite(|owner| {
            let left = Dataized::new(owner.attribute("a").value()?).take_int()?;
            let right = Dataized::new(owner.attribute("b").value()?).take_int()?;
            Ok(Object::from(left + right))
        }),
    );
    object.put("a", Attr::simple(Object::from(20i64)));
    object.put("b", Attr::simple(Object::from(22i64)));

    assert_eq!(Dataized::new(object).take_int().unwrap(), 42);
}

#[test]
fn non_data_results_are_typed_failures() {
    let mut object = Object::new("fake", &Object::root());
    object.put(DELTA, Attr::simple(Object::new("husk", &Object::root())));

    let failure = Dataized::new(object).take().unwrap_err();
    match failure {
        PhiError::NotData { ident, .. } => assert_eq!(ident, "husk"),
        other => panic!("expected a data-shape failure, got {other}"),
    }
}

#[test]
fn missing_data_attribute_keeps_the_source_term() {
    let object = Object::new("hollow", &Object::root());
    let failure = Dataized::new(object).take().unwrap_err();

    match &failure {
        PhiError::Resolution { attr, term, .. } => {
            assert_eq!(attr, DELTA);
            assert_eq!(term, "hollow");
        }
        other => panic!("expected a resolution frame, got {other}"),
    }
    assert!(matches!(
        failure.root_cause(),
        PhiError::MissingAttribute { name, .. } if name == DELTA
    ));
}

#[test]
fn typed_takes_never_coerce() {
    let failure = Dataized::new(Object::from(&b"raw"[..]))
        .take_bool()
        .unwrap_err();
    assert_eq!(failure.to_string(), "expected bool data, found bytes");

    let failure = Dataized::new(Object::from(1i64)).take_text().unwrap_err();
    assert_eq!(failure.to_string(), "expected text data, found int");
}

#[test]
fn forcing_through_an_attached_reader() {
    // The conversion-object pattern: read the owner by forcing, compute,
    // return fresh data from the default attribute.
    let mut negate = Object::new("negate", &Object::root());
    negate.put(
        PHI,
        Attr::composite(|owner| {
            let value = Dataized::new(owner.attribute(RHO).value()?).take_bool()?;
            Ok(Object::from(!value))
        }),
    );

    let attached = negate.copy_with_owner(&Object::from(false));
    assert!(Dataized::new(attached).take_bool().unwrap());
}
