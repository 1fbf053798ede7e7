use ember_statics::{ElabConf, ElabError, Elaborator};
use ember_tests::{prelude::*, *};

/// `Bool` is left undefined, so it is not a function type
fn opaque() -> Defs {
    Defs::new()
        .with("f", Term::global("Bool"), Term::global("f"))
        .with("x", Term::global("Bool"), Term::global("x"))
        .with("main", Term::global("Bool"), Term::app(Term::global("f"), Term::global("x"), false))
}

#[test]
fn applying_a_bool_is_not_a_lambda_mismatch() {
    init();
    let defs = opaque();
    let mut el = Elaborator::new(&defs, ElabConf::default());
    let err = el.definition(&"main".into()).unwrap_err();
    assert!(matches!(err.error, ElabError::NonFunctionApplication { .. }), "{}", err);

    let err = compile(&defs, &"main".into()).unwrap_err();
    let BuildError::ElabError(report) = &err else { panic!("{}", err) };
    assert!(report.starts_with("Non-function application"));
}

#[test]
fn lambda_checked_against_a_bool() {
    init();
    let defs = opaque().with("bad", Term::global("Bool"), Term::lam("y", false, |y| y));
    let mut el = Elaborator::new(&defs, ElabConf::default());
    let err = el.definition(&"bad".into()).unwrap_err();
    assert!(matches!(err.error, ElabError::LambdaNotFunction { .. }), "{}", err);
}

#[test]
fn reference_to_a_missing_definition() {
    init();
    let defs = defs().with("main", Term::global("Bool"), Term::app(Term::global("not"), Term::global("maybe"), false));
    let err = compile(&defs, &"main".into()).unwrap_err();
    assert!(matches!(&err, BuildError::LookupFailure(name) if name.0 == "maybe"), "{}", err);
}

#[test]
fn unit_is_not_a_bool() {
    init();
    let defs = defs().with("wrong", Term::global("Bool"), Term::global("unit"));
    let err = compile(&defs, &"wrong".into()).unwrap_err();
    let BuildError::ElabError(report) = &err else { panic!("{}", err) };
    assert!(report.starts_with("Type mismatch: expected `Bool`, found `Unit`"), "{}", report);

    // without the comparison the definition goes through unchanged
    let lax = Driver::new(Conf { subsumption: false, ..Conf::default() });
    let out = lax.compile(&defs, &"wrong".into()).unwrap();
    assert_eq!(out.get(&"wrong".into()), Some(&Comp::global("unit")));
}

#[test]
fn scarce_fuel_stops_the_run() {
    init();
    let driver = Driver::new(Conf { fuel: Some(3), ..Conf::default() });
    let err = driver.compile(&defs(), &"not".into()).unwrap_err();
    let BuildError::ElabError(report) = &err else { panic!("{}", err) };
    assert!(report.starts_with("ran out of fuel after 3 reduction steps"), "{}", report);
}
