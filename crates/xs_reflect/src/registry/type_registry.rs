use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use xs_utils::hash::{HashMap, HashSet};

use crate::ReflectError;
use crate::info::{ConstructorInfo, GenericForm, ParameterInfo};
use crate::info::{TypeDescriptor, TypeHandle, TypeKind};
use crate::registry::{Declared, KnownTypes, Members};

// -----------------------------------------------------------------------------
// TypeRegistry

type InstanceKey = (TypeHandle, Box<[TypeHandle]>);

/// The deepest nesting of generic instances a registry accepts.
///
/// Substitution can expand a type without end, e.g. a `Foo<T>` implementing
/// `Sequence<Foo<List<T>>>`; such types are reported as
/// [`ReflectError::GenericDepthExceeded`] once they nest this deep.
/// Type expressions are parsed up to the same depth.
pub const MAX_GENERIC_DEPTH: usize = 32;

/// A registry of reflected types.
///
/// This struct is the central store of type metadata. The serialization
/// engine describes its types here (directly, or through a
/// [`TypeManifest`](crate::manifest::TypeManifest)), and the capability and
/// constructor queries read them back.
///
/// Registering a type is a two-step process, so that generic definitions
/// and mutually referring types can be described:
///
/// 1. [`declare`](Self::declare) reserves a [`TypeHandle`] (and one handle per generic parameter).
/// 2. [`define`](Self::define) attaches base class, interfaces and constructors.
///
/// [`register`](Self::register) does both for non-generic types.
///
/// Generic instances are interned by [`instantiate`](Self::instantiate):
/// asking twice for `List<i32>` yields the same handle.
///
/// # Example
///
/// ```
/// use xs_reflect::info::TypeKind;
/// use xs_reflect::registry::{Members, TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
/// let known = *registry.known();
///
/// let names = registry.instantiate(known.sequence, &[known.string]).unwrap();
/// let roster = registry
///     .register("demo.Roster", TypeKind::Class, Members::new().implements(names))
///     .unwrap();
///
/// assert_eq!(registry.get_with_name("Roster").unwrap().handle(), roster);
/// assert_eq!(registry.descriptor(names).unwrap().name(), "Sequence<String>");
/// ```
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
    path_to_handle: HashMap<String, TypeHandle>,
    name_to_handle: HashMap<String, TypeHandle>,
    ambiguous_names: HashSet<String>,
    instances: HashMap<InstanceKey, TypeHandle>,
    known: KnownTypes,
    // First instance that hit `MAX_GENERIC_DEPTH` during the current operation.
    overflow: Option<TypeHandle>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a type registry holding the prelude types.
    ///
    /// See [`KnownTypes`] for the list.
    pub fn new() -> Self {
        let mut registry = Self {
            types: Vec::new(),
            path_to_handle: HashMap::default(),
            name_to_handle: HashMap::default(),
            ambiguous_names: HashSet::default(),
            instances: HashMap::default(),
            known: KnownTypes::UNSET,
            overflow: None,
        };
        registry.known = KnownTypes::register(&mut registry);
        registry
    }

    /// Returns the handles of the prelude types.
    #[inline]
    pub const fn known(&self) -> &KnownTypes {
        &self.known
    }

    // Short names are only indexed for declared types, full paths for
    // declared types and instances.
    fn add_new_type_indices(&mut self, handle: TypeHandle, path: &str, name: Option<&str>) {
        if let Some(name) = name
            && !self.ambiguous_names.contains(name)
        {
            if self.name_to_handle.contains_key(name) {
                self.name_to_handle.remove(name);
                self.ambiguous_names.insert(name.to_string());
            } else {
                self.name_to_handle.insert(name.to_string(), handle);
            }
        }
        self.path_to_handle.insert(path.to_string(), handle);
    }

    fn push(&mut self, path: String, name: String, kind: TypeKind, generic: GenericForm) -> TypeHandle {
        let handle = TypeHandle::from_index(self.types.len());
        match generic {
            GenericForm::Parameter { .. } => {}
            GenericForm::Instance { .. } => self.add_new_type_indices(handle, &path, None),
            _ => self.add_new_type_indices(handle, &path, Some(&name)),
        }
        self.types
            .push(TypeDescriptor::new(handle, path, name, kind, generic));
        handle
    }

    // -------------------------------------------------------------------------
    // Registration

    /// Reserves a handle for a new type.
    ///
    /// `parameters` names the generic parameters; a non-empty list makes the
    /// type a generic definition. The returned [`Declared`] carries one handle
    /// per parameter, to be used when describing the members.
    ///
    /// The type is unusable as a base class or interface until it is
    /// [defined](Self::define).
    pub fn declare(
        &mut self,
        path: &str,
        kind: TypeKind,
        parameters: &[&str],
    ) -> Result<Declared, ReflectError> {
        if path.is_empty() || matches!(kind, TypeKind::Parameter) {
            return Err(ReflectError::InvalidDeclaration(path.to_string()));
        }
        if parameters
            .iter()
            .enumerate()
            .any(|(i, p)| p.is_empty() || parameters[..i].contains(p))
        {
            return Err(ReflectError::InvalidDeclaration(path.to_string()));
        }
        if self.path_to_handle.contains_key(path) {
            return Err(ReflectError::DuplicatePath(path.to_string()));
        }
        Ok(self.declare_unchecked(path, kind, parameters))
    }

    pub(crate) fn declare_unchecked(
        &mut self,
        path: &str,
        kind: TypeKind,
        parameters: &[&str],
    ) -> Declared {
        let name = path.rsplit('.').next().unwrap_or(path);
        let handle = self.push(
            path.to_string(),
            name.to_string(),
            kind,
            GenericForm::NonGeneric,
        );

        let mut handles = Vec::with_capacity(parameters.len());
        for (position, parameter) in parameters.iter().enumerate() {
            let param = self.push(
                format!("{path}.{parameter}"),
                parameter.to_string(),
                TypeKind::Parameter,
                GenericForm::Parameter {
                    owner: handle,
                    position,
                },
            );
            self.types[param.index()].defined = true;
            handles.push(param);
        }

        if !handles.is_empty() {
            self.types[handle.index()].generic = GenericForm::Definition {
                parameters: handles.clone(),
            };
        }

        Declared {
            handle,
            parameters: handles,
        }
    }

    /// Attaches members to a declared type.
    ///
    /// The base class must be a defined class, every interface a defined
    /// interface. Instances of a generic definition created before this call
    /// receive their substituted members now.
    ///
    /// Members that keep expanding under substitution are reported as
    /// [`ReflectError::GenericDepthExceeded`]. The type is defined at that
    /// point, and the instances nested too deep stay undefined.
    pub fn define(&mut self, handle: TypeHandle, members: Members) -> Result<(), ReflectError> {
        let target = self.descriptor(handle)?;
        if matches!(
            target.generic,
            GenericForm::Instance { .. } | GenericForm::Parameter { .. }
        ) {
            return Err(ReflectError::InvalidDeclaration(target.path.clone()));
        }
        if target.defined {
            return Err(ReflectError::AlreadyDefined(target.path.clone()));
        }
        let kind = target.kind;

        if let Some(base) = members.base {
            let info = self.descriptor(base)?;
            if kind != TypeKind::Class || info.kind != TypeKind::Class || base == handle {
                return Err(ReflectError::InvalidBase(info.path.clone()));
            }
            if !info.defined {
                return Err(ReflectError::Undefined(info.path.clone()));
            }
        }

        for &interface in &members.interfaces {
            let info = self.descriptor(interface)?;
            if !info.is_interface() || interface == handle {
                return Err(ReflectError::NotAnInterface(info.path.clone()));
            }
            if !info.defined {
                return Err(ReflectError::Undefined(info.path.clone()));
            }
        }

        for (_, parameters) in &members.constructors {
            for parameter in parameters {
                self.descriptor(parameter.ty())?;
            }
        }

        self.define_unchecked(handle, members);
        self.take_overflow()
    }

    pub(crate) fn define_unchecked(&mut self, handle: TypeHandle, members: Members) {
        let Members {
            base,
            interfaces,
            constructors,
        } = members;

        let mut flattened = Vec::with_capacity(interfaces.len());
        for interface in interfaces {
            push_unique(&mut flattened, interface);
            for &inherited in &self.types[interface.index()].interfaces {
                push_unique(&mut flattened, inherited);
            }
        }
        if let Some(base) = base {
            for &inherited in &self.types[base.index()].interfaces {
                push_unique(&mut flattened, inherited);
            }
        }

        let constructors = constructors
            .into_iter()
            .map(|(flags, parameters)| ConstructorInfo::new(handle, parameters, flags))
            .collect();

        let target = &mut self.types[handle.index()];
        target.base = base;
        target.interfaces = flattened;
        target.constructors = constructors;
        target.defined = true;
        log::debug!("defined type '{}'", target.path);

        let mut pending: Vec<TypeHandle> = self
            .instances
            .iter()
            .filter(|((definition, _), _)| *definition == handle)
            .map(|(_, instance)| *instance)
            .collect();
        pending.sort_unstable();
        for instance in pending {
            log::debug!(
                "filling members of '{}' after its definition",
                self.types[instance.index()].path
            );
            self.populate_instance(instance);
        }
    }

    /// Declares and defines a non-generic type in one step.
    pub fn register(
        &mut self,
        path: &str,
        kind: TypeKind,
        members: Members,
    ) -> Result<TypeHandle, ReflectError> {
        let declared = self.declare(path, kind, &[])?;
        self.define(declared.handle, members)?;
        Ok(declared.handle)
    }

    // -------------------------------------------------------------------------
    // Generic instances

    /// Returns the instance of `definition` with the given `arguments`.
    ///
    /// Instances are interned; a definition instantiated with its own
    /// parameters is the definition itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use xs_reflect::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// let known = *registry.known();
    ///
    /// let a = registry.instantiate(known.list, &[known.int32]).unwrap();
    /// let b = registry.instantiate(known.list, &[known.int32]).unwrap();
    /// assert_eq!(a, b);
    ///
    /// let info = registry.descriptor(a).unwrap();
    /// assert_eq!(info.path(), "xs.collections.List<xs.i32>");
    /// assert_eq!(info.generic_definition(), Some(known.list));
    /// ```
    pub fn instantiate(
        &mut self,
        definition: TypeHandle,
        arguments: &[TypeHandle],
    ) -> Result<TypeHandle, ReflectError> {
        let info = self.descriptor(definition)?;
        let GenericForm::Definition { parameters } = &info.generic else {
            return Err(ReflectError::NotGenericDefinition(info.path.clone()));
        };
        if parameters.len() != arguments.len() {
            return Err(ReflectError::ArityMismatch {
                path: info.path.clone(),
                expected: parameters.len(),
                found: arguments.len(),
            });
        }
        for &argument in arguments {
            self.descriptor(argument)?;
        }
        let instance = self.instantiate_unchecked(definition, arguments);
        self.take_overflow()?;
        Ok(instance)
    }

    // Instances nested too deep are created but left undefined, which stops
    // the expansion; the public entry points turn that into an error.
    fn take_overflow(&mut self) -> Result<(), ReflectError> {
        match self.overflow.take() {
            Some(instance) => Err(ReflectError::GenericDepthExceeded(
                self.types[instance.index()].path.clone(),
            )),
            None => Ok(()),
        }
    }

    pub(crate) fn instantiate_unchecked(
        &mut self,
        definition: TypeHandle,
        arguments: &[TypeHandle],
    ) -> TypeHandle {
        let info = &self.types[definition.index()];
        if info.generic_arguments() == arguments {
            return definition;
        }
        let key: InstanceKey = (definition, arguments.into());
        if let Some(&instance) = self.instances.get(&key) {
            if self.types[instance.index()].depth > MAX_GENERIC_DEPTH {
                self.overflow.get_or_insert(instance);
            }
            return instance;
        }

        let kind = info.kind;
        let depth = 1 + arguments
            .iter()
            .map(|argument| self.types[argument.index()].depth)
            .max()
            .unwrap_or(0);
        let (path, name) = self.compose_names(definition, arguments);
        let instance = self.push(
            path,
            name,
            kind,
            GenericForm::Instance {
                definition,
                arguments: arguments.to_vec(),
            },
        );
        self.types[instance.index()].depth = depth;
        // Interned before substitution so that self-referring members terminate.
        self.instances.insert(key, instance);
        if depth > MAX_GENERIC_DEPTH {
            log::debug!("'{}' is nested too deep, members left out", self.types[instance.index()].path);
            self.overflow.get_or_insert(instance);
        } else {
            self.populate_instance(instance);
        }
        instance
    }

    fn compose_names(&self, definition: TypeHandle, arguments: &[TypeHandle]) -> (String, String) {
        let info = &self.types[definition.index()];
        let mut path = format!("{}<", info.path);
        let mut name = format!("{}<", info.name);
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                path.push(',');
                name.push_str(", ");
            }
            let argument = &self.types[argument.index()];
            path.push_str(&argument.path);
            name.push_str(&argument.name);
        }
        path.push('>');
        name.push('>');
        (path, name)
    }

    fn populate_instance(&mut self, instance: TypeHandle) {
        let GenericForm::Instance {
            definition,
            arguments,
        } = self.types[instance.index()].generic.clone()
        else {
            return;
        };

        let info = &self.types[definition.index()];
        if !info.defined {
            return;
        }
        let parameters = info.generic_arguments().to_vec();
        let base = info.base;
        let interfaces = info.interfaces.clone();
        let constructors = info.constructors.clone();

        let base = base.map(|base| self.substitute(base, &parameters, &arguments));

        let mut substituted = Vec::with_capacity(interfaces.len());
        for interface in interfaces {
            let interface = self.substitute(interface, &parameters, &arguments);
            push_unique(&mut substituted, interface);
        }

        let mut ctors = Vec::with_capacity(constructors.len());
        for ctor in constructors {
            let mut params = Vec::with_capacity(ctor.arity());
            for param in ctor.parameters() {
                let ty = self.substitute(param.ty(), &parameters, &arguments);
                params.push(ParameterInfo::new(param.name(), ty));
            }
            ctors.push(ConstructorInfo::new(instance, params, ctor.flags()));
        }

        let target = &mut self.types[instance.index()];
        target.base = base;
        target.interfaces = substituted;
        target.constructors = ctors;
        target.defined = true;
    }

    fn substitute(
        &mut self,
        ty: TypeHandle,
        parameters: &[TypeHandle],
        arguments: &[TypeHandle],
    ) -> TypeHandle {
        if let Some(position) = parameters.iter().position(|p| *p == ty) {
            return arguments[position];
        }

        // A definition mentioned inside a member stands for itself applied
        // to its own parameters, e.g. `Node<T>` inside `Node<T>`.
        let (definition, inner) = match &self.types[ty.index()].generic {
            GenericForm::Instance {
                definition,
                arguments,
            } => (*definition, arguments.clone()),
            GenericForm::Definition { parameters } => (ty, parameters.clone()),
            _ => return ty,
        };

        let mut replaced = Vec::with_capacity(inner.len());
        for argument in &inner {
            replaced.push(self.substitute(*argument, parameters, arguments));
        }
        if replaced == inner {
            ty
        } else {
            self.instantiate_unchecked(definition, &replaced)
        }
    }

    // -------------------------------------------------------------------------
    // Lookup

    /// Returns the instance of `definition` with the given `arguments` if
    /// it already exists, without creating it.
    ///
    /// Unlike [`instantiate`](Self::instantiate) this only needs `&self`,
    /// so it works under the read lock of a shared registry.
    pub fn get_instance(&self, definition: TypeHandle, arguments: &[TypeHandle]) -> Option<TypeHandle> {
        let info = self.get(definition)?;
        if info.is_generic_definition() && info.generic_arguments() == arguments {
            return Some(definition);
        }
        let key: InstanceKey = (definition, arguments.into());
        self.instances.get(&key).copied()
    }

    /// Whether the handle belongs to this registry.
    #[inline]
    pub fn contains(&self, handle: TypeHandle) -> bool {
        handle.index() < self.types.len()
    }

    /// Returns the descriptor of `handle`, or `None` for a foreign handle.
    #[inline]
    pub fn get(&self, handle: TypeHandle) -> Option<&TypeDescriptor> {
        self.types.get(handle.index())
    }

    /// Returns the descriptor of `handle`.
    ///
    /// A foreign handle is reported as [`ReflectError::UnknownType`].
    #[inline]
    pub fn descriptor(&self, handle: TypeHandle) -> Result<&TypeDescriptor, ReflectError> {
        self.get(handle).ok_or(ReflectError::UnknownType(handle))
    }

    /// Returns the descriptor with the given full path.
    ///
    /// Instances already created by [`instantiate`](Self::instantiate) can
    /// be found by their path as well, e.g. `xs.collections.List<xs.i32>`.
    pub fn get_with_path(&self, path: &str) -> Option<&TypeDescriptor> {
        match self.path_to_handle.get(path) {
            Some(handle) => self.get(*handle),
            None => None,
        }
    }

    /// Returns the descriptor with the given short name.
    ///
    /// If the name is ambiguous, or no such type has been registered, returns `None`.
    pub fn get_with_name(&self, name: &str) -> Option<&TypeDescriptor> {
        match self.name_to_handle.get(name) {
            Some(handle) => self.get(*handle),
            None => None,
        }
    }

    /// Returns `true` if the short name matches multiple registered types.
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.ambiguous_names.contains(name)
    }

    /// Returns an iterator over all descriptors, in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Returns the number of types, including generic parameters and instances.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.types.iter().map(TypeDescriptor::path))
            .finish()
    }
}

#[inline]
fn push_unique(list: &mut Vec<TypeHandle>, handle: TypeHandle) {
    if !list.contains(&handle) {
        list.push(handle);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeRegistry;
    use crate::ReflectError;
    use crate::info::{GenericForm, TypeHandle, TypeKind};
    use crate::registry::Members;

    #[test]
    fn instances_are_interned() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let a = registry.instantiate(known.list, &[known.int32]).unwrap();
        let len = registry.len();
        let b = registry.instantiate(known.list, &[known.int32]).unwrap();
        assert_eq!(a, b);
        assert_eq!(registry.len(), len);

        let c = registry.instantiate(known.list, &[known.int64]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn own_parameters_yield_definition() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();
        let params = registry
            .descriptor(known.sequence)
            .unwrap()
            .generic_arguments()
            .to_vec();
        assert_eq!(registry.instantiate(known.sequence, &params).unwrap(), known.sequence);
    }

    #[test]
    fn members_are_substituted() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let list = registry.instantiate(known.list, &[known.string]).unwrap();
        let sequence = registry.instantiate(known.sequence, &[known.string]).unwrap();
        let indexed = registry.instantiate(known.indexed_list, &[known.string]).unwrap();
        let collection = registry.instantiate(known.collection, &[known.string]).unwrap();

        let info = registry.descriptor(list).unwrap();
        assert!(info.is_defined());
        assert_eq!(info.base(), Some(known.object));
        assert!(info.interfaces().contains(&indexed));
        assert!(info.interfaces().contains(&collection));
        assert!(info.interfaces().contains(&sequence));
        assert!(info.interfaces().contains(&known.untyped_list));
        assert!(info.interfaces().contains(&known.untyped_sequence));

        let ctor = &info.constructors()[2];
        assert_eq!(ctor.declaring(), list);
        assert_eq!(ctor.parameters()[0].ty(), sequence);
        assert_eq!(ctor.parameters()[0].name(), "items");
    }

    #[test]
    fn inherited_interfaces_are_flattened() {
        let registry = TypeRegistry::new();
        let known = *registry.known();
        let info = registry.descriptor(known.untyped_list).unwrap();
        assert_eq!(
            info.interfaces(),
            &[known.untyped_collection, known.untyped_sequence]
        );
    }

    #[test]
    fn self_referring_generic_terminates() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let node = registry.declare("demo.Node", TypeKind::Class, &["T"]).unwrap();
        let children = registry
            .instantiate(known.sequence, &[node.handle])
            .unwrap();
        registry
            .define(
                node.handle,
                Members::new()
                    .implements(children)
                    .constructor([("children", children)]),
            )
            .unwrap();

        let node_i32 = registry.instantiate(node.handle, &[known.int32]).unwrap();
        let expected = registry.instantiate(known.sequence, &[node_i32]).unwrap();
        let info = registry.descriptor(node_i32).unwrap();
        assert_eq!(info.interfaces()[0], expected);
        assert_eq!(info.constructors()[0].parameters()[0].ty(), expected);
    }

    #[test]
    fn expanding_generic_is_rejected() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        // `Foo<T>` implements `Sequence<Foo<List<T>>>`, which never settles.
        let foo = registry.declare("demo.Foo", TypeKind::Class, &["T"]).unwrap();
        let list_t = registry.instantiate(known.list, &[foo.parameters[0]]).unwrap();
        let foo_list_t = registry.instantiate(foo.handle, &[list_t]).unwrap();
        let items = registry.instantiate(known.sequence, &[foo_list_t]).unwrap();

        let result = registry.define(foo.handle, Members::new().implements(items));
        assert!(matches!(result, Err(ReflectError::GenericDepthExceeded(_))));

        // The registry stays usable.
        let list = registry.instantiate(known.list, &[known.int32]).unwrap();
        assert!(registry.descriptor(list).unwrap().is_defined());
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let mut ty = known.int32;
        for _ in 0..super::MAX_GENERIC_DEPTH {
            ty = registry.instantiate(known.list, &[ty]).unwrap();
        }
        let info = registry.descriptor(ty).unwrap();
        assert_eq!(info.generic_depth(), super::MAX_GENERIC_DEPTH);
        assert!(info.is_defined());

        let err = registry.instantiate(known.list, &[ty]).unwrap_err();
        assert!(matches!(err, ReflectError::GenericDepthExceeded(_)));
        // Asking again reports the same, the instance stays interned.
        let again = registry.instantiate(known.list, &[ty]).unwrap_err();
        assert_eq!(err, again);
        assert_eq!(registry.descriptor(known.int32).unwrap().generic_depth(), 0);
    }

    #[test]
    fn early_instances_are_filled_on_define() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let bag = registry.declare("demo.Bag", TypeKind::Class, &["T"]).unwrap();
        let bag_i32 = registry.instantiate(bag.handle, &[known.int32]).unwrap();
        assert!(!registry.descriptor(bag_i32).unwrap().is_defined());

        let items = registry
            .instantiate(known.sequence, &[bag.parameters[0]])
            .unwrap();
        registry
            .define(bag.handle, Members::new().implements(items))
            .unwrap();

        let expected = registry.instantiate(known.sequence, &[known.int32]).unwrap();
        let info = registry.descriptor(bag_i32).unwrap();
        assert!(info.is_defined());
        assert!(info.interfaces().contains(&expected));
    }

    #[test]
    fn names_and_paths() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let map = registry
            .instantiate(known.dictionary, &[known.string, known.int32])
            .unwrap();
        let info = registry.descriptor(map).unwrap();
        assert_eq!(info.name(), "Dictionary<String, i32>");
        assert_eq!(info.path(), "xs.collections.Dictionary<xs.String,xs.i32>");
        assert_eq!(
            registry.get_with_path(info.path()).map(|d| d.handle()),
            Some(map)
        );

        registry
            .register("a.Item", TypeKind::Class, Members::new())
            .unwrap();
        assert!(registry.get_with_name("Item").is_some());
        registry
            .register("b.Item", TypeKind::Class, Members::new())
            .unwrap();
        assert!(registry.get_with_name("Item").is_none());
        assert!(registry.is_ambiguous("Item"));
    }

    #[test]
    fn parameters_are_described() {
        let mut registry = TypeRegistry::new();
        let pair = registry
            .declare("demo.Pair", TypeKind::Struct, &["A", "B"])
            .unwrap();
        let second = registry.descriptor(pair.parameters[1]).unwrap();
        assert_eq!(second.kind(), TypeKind::Parameter);
        assert_eq!(
            second.generic(),
            &GenericForm::Parameter {
                owner: pair.handle,
                position: 1
            }
        );
        assert!(registry.descriptor(pair.handle).unwrap().is_generic_definition());
    }

    #[test]
    fn registration_errors() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        assert_eq!(
            registry.declare("xs.Object", TypeKind::Class, &[]),
            Err(ReflectError::DuplicatePath("xs.Object".into()))
        );
        assert!(matches!(
            registry.declare("demo.T", TypeKind::Parameter, &[]),
            Err(ReflectError::InvalidDeclaration(_))
        ));
        assert!(matches!(
            registry.declare("demo.Twice", TypeKind::Class, &["T", "T"]),
            Err(ReflectError::InvalidDeclaration(_))
        ));
        assert!(matches!(
            registry.instantiate(known.list, &[known.int32, known.int32]),
            Err(ReflectError::ArityMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
        assert!(matches!(
            registry.instantiate(known.object, &[known.int32]),
            Err(ReflectError::NotGenericDefinition(_))
        ));

        let foreign = TypeHandle::from_index(100_000);
        assert_eq!(
            registry.instantiate(known.list, &[foreign]),
            Err(ReflectError::UnknownType(foreign))
        );

        assert!(matches!(
            registry.register("demo.A", TypeKind::Class, Members::new().implements(known.object)),
            Err(ReflectError::NotAnInterface(_))
        ));
        assert!(matches!(
            registry.register("demo.B", TypeKind::Struct, Members::new().base(known.object)),
            Err(ReflectError::InvalidBase(_))
        ));

        let pending = registry
            .declare("demo.Pending", TypeKind::Interface, &[])
            .unwrap();
        assert!(matches!(
            registry.register("demo.C", TypeKind::Class, Members::new().implements(pending.handle)),
            Err(ReflectError::Undefined(_))
        ));

        registry.define(pending.handle, Members::new()).unwrap();
        assert!(matches!(
            registry.define(pending.handle, Members::new()),
            Err(ReflectError::AlreadyDefined(_))
        ));
    }
}
