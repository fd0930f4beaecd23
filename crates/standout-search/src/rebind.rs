//! Parameter rebinding.
//!
//! Caller-supplied fields are written against their own placeholder
//! (`x => x.author`). Before they can be combined with generated comparison
//! logic under the builder's placeholder (`c => ...`), every occurrence of
//! the caller's placeholder is rewritten to the builder's.

use crate::expr::{Expr, Param};

/// Rewrites one placeholder into another throughout an expression.
///
/// Placeholders other than `from` are left untouched.
#[derive(Debug, Clone)]
pub struct Rebinder<'p> {
    from: &'p Param,
    to: &'p Param,
}

impl<'p> Rebinder<'p> {
    /// Creates a rebinder replacing `from` with `to`.
    pub fn new(from: &'p Param, to: &'p Param) -> Self {
        Rebinder { from, to }
    }

    /// Returns a copy of `expr` with the placeholder replaced.
    pub fn rebind(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Param(p) if p == self.from => Expr::Param(self.to.clone()),
            Expr::Param(p) => Expr::Param(p.clone()),
            Expr::Member { target, name } => Expr::Member {
                target: Box::new(self.rebind(target)),
                name: name.clone(),
            },
            Expr::ToText(inner) => Expr::ToText(Box::new(self.rebind(inner))),
            Expr::Upper(inner) => Expr::Upper(Box::new(self.rebind(inner))),
            Expr::IsPresent(inner) => Expr::IsPresent(Box::new(self.rebind(inner))),
            Expr::Contains { haystack, needle } => Expr::Contains {
                haystack: Box::new(self.rebind(haystack)),
                needle: needle.clone(),
            },
            Expr::And(a, b) => Expr::And(Box::new(self.rebind(a)), Box::new(self.rebind(b))),
            Expr::Or(a, b) => Expr::Or(Box::new(self.rebind(a)), Box::new(self.rebind(b))),
        }
    }
}
