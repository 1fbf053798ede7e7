use ember_statics::{ElabConf, Elaborator, order};
use ember_surface::{encode_chr, encode_str};
use ember_tests::{prelude::*, *};

/// `d0` refers to nothing, `di` refers to `d(i-1)` and `d(i/2)`
fn chain(len: usize) -> Defs {
    (0..len).fold(Defs::new(), |defs, i| {
        let term = if i == 0 {
            Term::typ()
        } else {
            Term::app(Term::global(format!("d{}", i - 1)), Term::global(format!("d{}", i / 2)), false)
        };
        defs.with(format!("d{}", i), Term::typ(), term)
    })
}

#[test]
fn dependencies_precede_dependents() {
    init();
    let defs = chain(12);
    let names = order(&defs, &"d11".into());
    assert_eq!(names.len(), 11);
    for (pos, name) in names.iter().enumerate() {
        assert_eq!(names.iter().filter(|other| *other == name).count(), 1);
        for dep in order(&defs, name) {
            let at = names.iter().position(|other| other == &dep).unwrap();
            assert!(at < pos, "{} should come before {}", dep, name);
        }
    }
}

#[test]
fn literals_decode_and_recheck() {
    init();
    let defs = defs();
    let mut el = Elaborator::new(&defs, ElabConf::default());
    for c in ['a', 'Z', ' ', '\u{3bb}'] {
        let elab = el.check(&encode_chr(c).unwrap(), &Term::global("Char"), &Ctx::new()).unwrap();
        assert_eq!(elab.comp, Comp::chr(c));
        assert_eq!(elab.ty, Term::global("Char"));
        let Comp::Chr(again) = elab.comp.as_ref() else { unreachable!() };
        let elab = el.check(&encode_chr(*again).unwrap(), &Term::global("Char"), &Ctx::new()).unwrap();
        assert_eq!(elab.comp, Comp::chr(c));
    }
    for s in ["", "ember", "x = y"] {
        let elab = el.check(&encode_str(s).unwrap(), &Term::global("String"), &Ctx::new()).unwrap();
        assert_eq!(elab.comp, Comp::str(s));
        let Comp::Str(again) = elab.comp.as_ref() else { unreachable!() };
        let elab = el.check(&encode_str(again).unwrap(), &Term::global("String"), &Ctx::new()).unwrap();
        assert_eq!(elab.comp, Comp::str(s));
    }
}

#[test]
fn erased_lambda_leaves_only_its_body() {
    init();
    let defs = defs();
    let mut el = Elaborator::new(&defs, ElabConf::default());
    let bool = || Term::global("Bool");
    let erased = Term::lam("y", true, |_| Term::app(Term::global("not"), Term::global("true"), false));
    let ty = Term::pi("y", Term::typ(), |_| bool());
    let with = el.check(&erased, &ty, &Ctx::new()).unwrap().comp;
    let body = Term::app(Term::global("not"), Term::global("true"), false);
    let without = el.check(&body, &bool(), &Ctx::new()).unwrap().comp;
    assert_eq!(with, without);
    assert_eq!(count(&with, &|comp| matches!(comp, Comp::Lam(..))), 0);
}

#[test]
fn primitives_are_wrapped() {
    init();
    let defs = defs();
    let mut el = Elaborator::new(&defs, ElabConf::default());
    // introduction at the outermost level
    let comp = el.check(&bool_tm(true), &Term::global("Bool"), &Ctx::new()).unwrap().comp;
    assert!(matches!(comp.as_ref(), Comp::Ins(Prim::Bool, _)));
    // elimination around the eliminated value
    let tm = Term::apps(
        Term::global("true"),
        [
            (Term::lam("x", false, |_| Term::global("Unit")), true),
            (Term::global("unit"), false),
            (Term::global("unit"), false),
        ],
    );
    let comp = el.check(&tm, &Term::global("Unit"), &Ctx::new()).unwrap().comp;
    let want = Comp::app(
        Comp::app(Comp::eli(Prim::Bool, Comp::global("true")), Comp::global("unit")),
        Comp::global("unit"),
    );
    assert_eq!(comp, want);
}

#[test]
fn plain_lets_are_transparent() {
    init();
    let defs = defs();
    let mut el = Elaborator::new(&defs, ElabConf::default());
    let e = || Term::app(Term::global("not"), Term::global("false"), false);
    let tm = Term::let_("x", false, e(), |x| {
        Term::app(Term::global("not"), Term::app(Term::global("not"), x, false), false)
    });
    let substituted =
        Term::app(Term::global("not"), Term::app(Term::global("not"), e(), false), false);
    let bool = Term::global("Bool");
    let with = el.check(&tm, &bool, &Ctx::new()).unwrap().comp;
    let without = el.check(&substituted, &bool, &Ctx::new()).unwrap().comp;
    assert_eq!(with, without);
}

#[test]
fn duplicable_lets_bind_once() {
    init();
    let defs = defs();
    let mut el = Elaborator::new(&defs, ElabConf::default());
    let e = Term::app(Term::global("not"), Term::global("false"), false);
    // `x` is used three times
    let tm = Term::let_("x", true, e.clone(), |x| {
        Term::apps(
            x.clone(),
            [
                (Term::lam("b", false, |_| Term::global("Bool")), true),
                (Term::app(Term::global("not"), x.clone(), false), false),
                (x, false),
            ],
        )
    });
    let comp = el.check(&tm, &Term::global("Bool"), &Ctx::new()).unwrap().comp;
    let e_comp = el.check(&e, &Term::global("Bool"), &Ctx::new()).unwrap().comp;
    assert_eq!(count(&comp, &|comp| matches!(comp, Comp::Let(..))), 1);
    assert_eq!(count(&comp, &|comp| comp == e_comp.as_ref()), 1);
    let Comp::Let(name, expr, _) = comp.as_ref() else { panic!("{}", comp) };
    assert_eq!((name, expr), (&VarName::from("x"), &e_comp));
}
