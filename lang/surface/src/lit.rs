use crate::syntax::*;

/// Width of an encoded character.
pub const CHAR_BITS: usize = 16;

pub const U16_NEW: &str = "U16.new";
pub const WORD_0: &str = "Word.0";
pub const WORD_1: &str = "Word.1";
pub const WORD_NIL: &str = "Word.nil";
pub const STRING_NIL: &str = "String.nil";
pub const STRING_CONS: &str = "String.cons";

fn is_global(tm: &Tm, name: &str) -> bool {
    matches!(Term::peel(tm).as_ref(), Term::Ref(def) if def.0 == name)
}

/// the argument of `head(argm)`
fn unapply<'a>(tm: &'a Tm, head: &str) -> Option<&'a Tm> {
    match Term::peel(tm).as_ref() {
        | Term::App(App { func, argm, eras: false }) if is_global(func, head) => Some(argm),
        | _ => None,
    }
}

/// Decodes a character literal.
pub fn stringify_chr(tm: &Tm) -> Option<char> {
    let mut word = unapply(tm, U16_NEW)?;
    let mut code = 0u32;
    for bit in 0..CHAR_BITS {
        if let Some(rest) = unapply(word, WORD_0) {
            word = rest;
        } else {
            word = unapply(word, WORD_1)?;
            code |= 1 << bit;
        }
    }
    if !is_global(word, WORD_NIL) {
        return None;
    }
    char::from_u32(code)
}

/// Decodes a string literal.
pub fn stringify_str(tm: &Tm) -> Option<String> {
    let mut tm = tm;
    let mut s = String::new();
    loop {
        if is_global(tm, STRING_NIL) {
            return Some(s);
        }
        let Term::App(App { func, argm: rest, eras: false }) = Term::peel(tm).as_ref() else {
            return None;
        };
        s.push(stringify_chr(unapply(func, STRING_CONS)?)?);
        tm = rest;
    }
}

/// Encodes a character; only characters that fit in 16 bits have an encoding.
pub fn encode_chr(c: char) -> Option<Tm> {
    let code = c as u32;
    if code >> CHAR_BITS != 0 {
        return None;
    }
    let word = (0..CHAR_BITS).rev().fold(Term::global(WORD_NIL), |rest, bit| {
        let digit = if code & (1 << bit) == 0 { WORD_0 } else { WORD_1 };
        Term::app(Term::global(digit), rest, false)
    });
    Some(Term::app(Term::global(U16_NEW), word, false))
}

pub fn encode_str(s: &str) -> Option<Tm> {
    let chrs = s.chars().map(encode_chr).collect::<Option<Vec<_>>>()?;
    Some(chrs.into_iter().rev().fold(Term::global(STRING_NIL), |rest, chr| {
        Term::apps(Term::global(STRING_CONS), [(chr, false), (rest, false)])
    }))
}
