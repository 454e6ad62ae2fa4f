use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::ReflectError;
use crate::info::TypeHandle;
use crate::manifest::{TypeExpr, TypeManifest};
use crate::registry::{Members, TypeRegistry};

/// Generic parameters visible while resolving a declaration.
#[derive(Clone, Copy)]
struct Scope<'a> {
    names: &'a [String],
    handles: &'a [TypeHandle],
}

const NO_PARAMETERS: Scope<'static> = Scope {
    names: &[],
    handles: &[],
};

impl Scope<'_> {
    fn get(&self, name: &str) -> Option<TypeHandle> {
        let position = self.names.iter().position(|n| n == name)?;
        self.handles.get(position).copied()
    }
}

impl TypeRegistry {
    /// Registers every type of `manifest`, returning their handles in order.
    ///
    /// All types are declared before any is defined, so constructor
    /// parameters may refer to types appearing later in the manifest. Base
    /// classes and interfaces must be defined by an earlier entry (or the
    /// prelude).
    ///
    /// Loading stops at the first error; types processed before it stay
    /// registered.
    pub fn load_manifest(&mut self, manifest: &TypeManifest) -> Result<Vec<TypeHandle>, ReflectError> {
        let mut declared = Vec::with_capacity(manifest.types.len());
        for decl in &manifest.types {
            let parameters: Vec<&str> = decl.parameters.iter().map(String::as_str).collect();
            declared.push(self.declare(&decl.path, decl.kind, &parameters)?);
        }

        for (decl, declared) in manifest.types.iter().zip(&declared) {
            let scope = Scope {
                names: &decl.parameters,
                handles: &declared.parameters,
            };

            let mut members = Members::new();
            if let Some(base) = &decl.base {
                members = members.base(self.resolve_text(base, scope)?);
            }
            for interface in &decl.interfaces {
                members = members.implements(self.resolve_text(interface, scope)?);
            }
            for ctor in &decl.constructors {
                let mut parameters = Vec::with_capacity(ctor.parameters.len());
                for parameter in &ctor.parameters {
                    let ty = self.resolve_text(&parameter.ty, scope)?;
                    parameters.push((parameter.name.as_str(), ty));
                }
                members = members.constructor_with(ctor.flags(), parameters);
            }

            self.define(declared.handle, members)?;
        }

        log::debug!("loaded {} types from manifest", declared.len());
        Ok(declared.into_iter().map(|d| d.handle).collect())
    }

    /// Resolves a type expression such as `List<xs.i32>`, instantiating
    /// generic types as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use xs_reflect::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// let known = *registry.known();
    ///
    /// let handle = registry.resolve_type_name("Dictionary<String, List<i32>>").unwrap();
    /// let list = registry.instantiate(known.list, &[known.int32]).unwrap();
    /// let expected = registry.instantiate(known.dictionary, &[known.string, list]).unwrap();
    /// assert_eq!(handle, expected);
    /// ```
    pub fn resolve_type_name(&mut self, text: &str) -> Result<TypeHandle, ReflectError> {
        self.resolve_text(text, NO_PARAMETERS)
    }

    fn resolve_text(&mut self, text: &str, scope: Scope<'_>) -> Result<TypeHandle, ReflectError> {
        let expr = TypeExpr::parse(text)?;
        self.resolve_expr(&expr, scope)
    }

    fn resolve_expr(&mut self, expr: &TypeExpr, scope: Scope<'_>) -> Result<TypeHandle, ReflectError> {
        if expr.arguments.is_empty()
            && let Some(parameter) = scope.get(&expr.path)
        {
            return Ok(parameter);
        }

        let handle = self.lookup(&expr.path)?;
        if expr.arguments.is_empty() {
            return Ok(handle);
        }

        let mut arguments = Vec::with_capacity(expr.arguments.len());
        for argument in &expr.arguments {
            arguments.push(self.resolve_expr(argument, scope)?);
        }
        self.instantiate(handle, &arguments)
    }

    fn lookup(&self, path: &str) -> Result<TypeHandle, ReflectError> {
        if let Some(info) = self.get_with_path(path) {
            return Ok(info.handle());
        }
        if self.is_ambiguous(path) {
            return Err(ReflectError::AmbiguousName(path.to_string()));
        }
        match self.get_with_name(path) {
            Some(info) => Ok(info.handle()),
            None => Err(ReflectError::TypeNotFound(path.to_string())),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
