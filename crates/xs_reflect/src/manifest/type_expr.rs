use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::ReflectError;
use crate::registry::MAX_GENERIC_DEPTH;

/// A parsed type reference, such as `Dictionary<String, List<T>>`.
///
/// The path is kept as written; it is resolved later against a registry,
/// see [`TypeRegistry::resolve_type_name`](crate::registry::TypeRegistry::resolve_type_name).
///
/// # Examples
///
/// ```
/// use xs_reflect::manifest::TypeExpr;
///
/// let expr: TypeExpr = "xs.collections.Map< K ,List<V>>".parse().unwrap();
/// assert_eq!(expr.path, "xs.collections.Map");
/// assert_eq!(expr.arguments.len(), 2);
/// assert_eq!(expr.to_string(), "xs.collections.Map<K, List<V>>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    pub path: String,
    pub arguments: Vec<TypeExpr>,
}

impl TypeExpr {
    /// Parses a type expression.
    ///
    /// Arguments may nest up to [`MAX_GENERIC_DEPTH`] levels.
    pub fn parse(text: &str) -> Result<Self, ReflectError> {
        let mut parser = Parser {
            text,
            rest: text,
            depth: 0,
        };
        let expr = parser.expr()?;
        parser.skip_whitespace();
        if !parser.rest.is_empty() {
            return Err(parser.error());
        }
        Ok(expr)
    }
}

impl FromStr for TypeExpr {
    type Err = ReflectError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(argument, f)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Parser

struct Parser<'a> {
    text: &'a str,
    rest: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn error(&self) -> ReflectError {
        ReflectError::MalformedTypeExpr(self.text.to_string())
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn path(&mut self) -> Result<&'a str, ReflectError> {
        self.skip_whitespace();
        let end = self
            .rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(self.rest.len());
        let (path, rest) = self.rest.split_at(end);
        if path.is_empty() || path.starts_with('.') || path.ends_with('.') || path.contains("..") {
            return Err(self.error());
        }
        self.rest = rest;
        Ok(path)
    }

    fn expr(&mut self) -> Result<TypeExpr, ReflectError> {
        let path = self.path()?.to_string();
        let mut arguments = Vec::new();
        if self.eat('<') {
            self.depth += 1;
            if self.depth > MAX_GENERIC_DEPTH {
                return Err(self.error());
            }
            loop {
                arguments.push(self.expr()?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    self.depth -= 1;
                    break;
                }
                return Err(self.error());
            }
        }
        Ok(TypeExpr { path, arguments })
    }
}
