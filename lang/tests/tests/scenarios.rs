use ember_tests::{compile_case, prelude::*, *};

compile_case!(identity, defs(), "id", Comp::lam("x", Comp::var("x")));
compile_case!(
    bool_true,
    defs(),
    "true",
    Comp::ins(Prim::Bool, Comp::lam("t", Comp::lam("f", Comp::var("t"))))
);
compile_case!(
    bool_false,
    defs(),
    "false",
    Comp::ins(Prim::Bool, Comp::lam("t", Comp::lam("f", Comp::var("f"))))
);
compile_case!(
    bool_not,
    defs(),
    "not",
    Comp::lam(
        "b",
        Comp::app(
            Comp::app(Comp::eli(Prim::Bool, Comp::var("b")), Comp::global("false")),
            Comp::global("true"),
        ),
    )
);
compile_case!(unit, defs(), "unit", Comp::ins(Prim::Unit, Comp::lam("u", Comp::var("u"))));
compile_case!(
    char_literal,
    defs().with("c", Term::global("Char"), ember_surface::encode_chr('a').unwrap()),
    "c",
    Comp::chr('a')
);
compile_case!(
    string_literal,
    defs().with("s", Term::global("String"), ember_surface::encode_str("hello").unwrap()),
    "s",
    Comp::str("hello")
);
compile_case!(
    empty_string_literal,
    defs().with("s", Term::global("String"), Term::global("String.nil")),
    "s",
    Comp::str("")
);

#[test]
fn not_pulls_in_its_constructors() {
    init();
    let out = compile(&defs(), &"not".into()).unwrap();
    // the motive mentions `Bool`
    let names: Vec<DefName> = vec!["Bool".into(), "false".into(), "true".into(), "not".into()];
    assert_eq!(out.names, names);
}

#[test]
fn foo_depends_on_bar() {
    init();
    let defs = Defs::new()
        .with("bar", Term::typ(), Term::typ())
        .with("foo", Term::typ(), Term::global("bar"));
    assert_eq!(ember_statics::order(&defs, &"foo".into()), vec![DefName::from("bar")]);
    let out = compile(&defs, &"foo".into()).unwrap();
    assert_eq!(out.names, vec![DefName::from("bar"), DefName::from("foo")]);
    assert_eq!(out.get(&"foo".into()), Some(&Comp::nul()));
}

#[test]
fn located_definitions_compile_like_plain_ones() {
    init();
    use ember_utils::span::Span;
    let located = Term::loc(
        Span::new(0, 40),
        Term::lam("b", false, |b| {
            Term::loc(
                Span::new(10, 40),
                Term::apps(
                    Term::loc(Span::new(10, 11), b),
                    [
                        (Term::lam("x", false, |_| Term::loc(Span::new(20, 24), Term::global("Bool"))), true),
                        (Term::loc(Span::new(26, 31), Term::global("false")), false),
                        (Term::global("true"), false),
                    ],
                ),
            )
        }),
    );
    let defs = defs().with("not2", arrow(Term::global("Bool"), Term::global("Bool")), located);
    let out = compile(&defs, &"not2".into()).unwrap();
    let plain = compile(&prelude::defs(), &"not".into()).unwrap();
    assert_eq!(out.get(&"not2".into()), plain.get(&"not".into()));
}

#[test]
fn parallel_runs_agree() {
    init();
    let defs = defs();
    let seq = Driver::default();
    let par = Driver::new(Conf { parallel: true, ..Conf::default() });
    let entries: Vec<DefName> = defs.names().cloned().collect();
    for (entry, many) in entries.iter().zip(par.compile_many(&defs, &entries)) {
        let one = seq.compile(&defs, entry).unwrap();
        assert_eq!(many.unwrap(), one);
        assert_eq!(par.compile(&defs, entry).unwrap().names, one.names);
    }
}

#[test]
fn generous_fuel_suffices() {
    init();
    let driver = Driver::new(Conf { fuel: Some(100_000), ..Conf::default() });
    assert!(driver.compile(&defs(), &"not".into()).is_ok());
}
