use crate::{syntax::*, *};

#[derive(Debug, Clone)]
pub enum ElabError {
    LookupFailure(DefName),
    UnboundVariable(Var),
    DanglingIndex(usize),
    NonFunctionApplication { term: Tm, ty: Tm },
    LambdaNotFunction { term: Tm, ty: Tm },
    CannotInferLambda { term: Tm },
    TypeMismatch { expected: Tm, found: Tm },
    Core(CoreError),
}

#[derive(Clone, Debug)]
pub struct ElabErrorEntry {
    pub error: ElabError,
    pub blame: &'static std::panic::Location<'static>,
    pub stack: im::Vector<ElabTask>,
}

pub type Result<T> = std::result::Result<T, ElabErrorEntry>;

impl std::fmt::Display for ElabError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = Formatter::new();
        match self {
            | ElabError::LookupFailure(name) => write!(f, "Undefined reference: `{}`", name),
            | ElabError::UnboundVariable(var) => {
                write!(f, "Unbound variable: `{}`", var.ugly(&fmt))
            }
            | ElabError::DanglingIndex(idx) => write!(f, "Dangling bound index: ^{}", idx),
            | ElabError::NonFunctionApplication { term, ty } => write!(
                f,
                "Non-function application: `{}` has type `{}`",
                term.ugly(&fmt),
                ty.ugly(&fmt)
            ),
            | ElabError::LambdaNotFunction { term, ty } => write!(
                f,
                "Lambda has non-function type: `{}` against `{}`",
                term.ugly(&fmt),
                ty.ugly(&fmt)
            ),
            | ElabError::CannotInferLambda { term } => {
                write!(f, "Cannot infer the type of lambda `{}`; annotate it", term.ugly(&fmt))
            }
            | ElabError::TypeMismatch { expected, found } => write!(
                f,
                "Type mismatch: expected `{}`, found `{}`",
                expected.ugly(&fmt),
                found.ugly(&fmt)
            ),
            | ElabError::Core(err) => write!(f, "{}", err),
        }
    }
}

impl std::fmt::Display for ElabErrorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ElabErrorEntry { error, blame, stack } = self;
        let fmt = Formatter::new();
        let budget = 240;
        let truncated = |s: String| {
            if s.chars().count() > budget {
                let mut s: String = s.chars().take(budget - 3).collect();
                s.push_str("...");
                s
            } else {
                s
            }
        };

        let mut s = String::new();
        s += &format!("{}\n", error);
        s += &format!("Blame: {}\n", blame);
        for task in stack.iter() {
            match task {
                | ElabTask::Definition(name) => {
                    s += &format!("\t- when elaborating definition `{}`\n", name);
                }
                | ElabTask::Term(term, switch) => {
                    s += "\t- when elaborating term:\n";
                    s += &format!("\t\t>> {}\n", truncated(term.ugly(&fmt)));
                    match switch {
                        | Switch::Syn => {
                            s += "\t\t<< (syn)\n";
                        }
                        | Switch::Ana(ty) => {
                            s += &format!("\t\t<< (ana) {}\n", truncated(ty.ugly(&fmt)));
                        }
                    }
                }
            }
        }
        write!(f, "{}", s)
    }
}

impl std::error::Error for ElabErrorEntry {}

impl<'d> Elaborator<'d> {
    /// Throw a pure error.
    #[inline]
    pub(crate) fn err<T>(
        &self, error: ElabError, blame: &'static std::panic::Location<'static>,
    ) -> Result<T> {
        let stack = self.stack.clone();
        Err(ElabErrorEntry { error, blame, stack })
    }
    /// Attach the current task stack to a failure of the core calculus.
    #[inline]
    pub(crate) fn lift<T>(
        &self, res: ember_core::Result<T>, blame: &'static std::panic::Location<'static>,
    ) -> Result<T> {
        match res {
            | Ok(t) => Ok(t),
            | Err(err) => self.err(ElabError::Core(err), blame),
        }
    }
}
