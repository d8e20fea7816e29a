use phicore::attr::Attr;
use phicore::object::{Object, PHI, Phi};

#[test]
fn renders_free_attributes_in_declaration_order() {
    let mut object = Object::new("point", &Object::root());
    object.put("x", Attr::simple(Object::from(1i64)));
    object.put("y", Attr::simple(Object::from(2i64)));

    assert_eq!(object.term(), "point⟦x↦1, y↦2⟧");
}

#[test]
fn system_slots_never_show_up() {
    let object = Object::new("plain", &Object::root());
    assert_eq!(object.term(), "plain");

    let mut deco = Object::new("deco", &Object::root());
    deco.put(PHI, Attr::simple(Object::from(true)));
    assert_eq!(deco.term(), "deco");
}

#[test]
fn unresolved_attributes_suppress_the_bracket_section() {
    let mut object = Object::new("lazyone", &Object::root());
    object.put("x", Attr::composite(|_| Ok(Object::root())));

    // One free attribute, still unreduced: no brackets at all.
    assert_eq!(object.term(), "lazyone");
}

#[test]
fn resolved_attributes_render_next_to_unresolved_ones() {
    let mut object = Object::new("mixed", &Object::root());
    object.put("x", Attr::composite(|_| Ok(Object::root())));
    object.put("y", Attr::simple(Object::from(false)));

    assert_eq!(object.term(), "mixed⟦y↦false⟧");
}

#[test]
fn absent_bindings_render_as_void() {
    let mut object = Object::new("holey", &Object::root());
    object.put(
        "gap",
        Attr::Absent {
            name: "gap".to_string(),
            among: Vec::new(),
        },
    );

    assert_eq!(object.term(), "holey⟦gap↦Ø⟧");
}

#[test]
fn equal_data_renders_equal_terms() {
    assert_eq!(Object::from(true).term(), Object::from(true).term());
    assert_ne!(Object::from(true).term(), Object::from(false).term());

    let bytes = Object::from(&b"test"[..]);
    assert_eq!(bytes.term(), "74-65-73-74");
    assert_eq!(Object::from("test").term(), "\"test\"");
}

#[test]
fn display_is_the_term() {
    let mut object = Object::new("shown", &Object::root());
    object.put("v", Attr::simple(Object::from(3i64)));
    assert_eq!(format!("{object}"), object.term());
}

#[test]
fn debug_dumps_the_storage() {
    let mut object = Object::new("dumped", &Object::root());
    object.put("v", Attr::simple(Object::from(3i64)));

    let dump = format!("{object:?}");
    assert!(dump.contains("_order="));
    assert!(dump.contains("v(0)="));
    assert!(dump.contains("ρ="));
}
