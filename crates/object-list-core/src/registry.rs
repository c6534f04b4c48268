//! Type registration for the view layer.
//!
//! Before declarative markup can reference a native type, the type has to be
//! registered under a module name, version and type name. Registered types come
//! in two flavors:
//!
//! - **creatable**: the view layer may instantiate them through
//!   [`TypeRegistry::create`] (they need a `Default` constructor)
//! - **uncreatable**: bindings may refer to them, but instances only come from
//!   native code (collections, items handed out by a provider)
//!
//! # Example
//!
//! ```
//! use object_list_core::{RegistryError, TypeRegistry, TypeVersion};
//!
//! #[derive(Default)]
//! struct Controller;
//! struct Row;
//!
//! let registry = TypeRegistry::new();
//! registry.register_creatable::<Controller>("App", TypeVersion::new(1, 0), "Controller")?;
//! registry.register_uncreatable::<Row>("App", TypeVersion::new(1, 0), "Row", "interface")?;
//!
//! assert!(registry.create("App", "Controller").is_ok());
//! assert!(matches!(
//!     registry.create("App", "Row"),
//!     Err(RegistryError::Uncreatable { .. })
//! ));
//! # Ok::<(), RegistryError>(())
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;

use crate::error::{RegistryError, RegistryResult};

/// Module version a type is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl TypeVersion {
    /// Creates a version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for TypeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

type Factory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// How the view layer may use a registered type.
enum Creation {
    Creatable(Factory),
    Uncreatable { reason: String },
}

/// Registration record for one type.
struct TypeEntry {
    version: TypeVersion,
    type_id: TypeId,
    type_name: &'static str,
    creation: Creation,
}

/// Public description of a registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Module the type lives in.
    pub module: String,
    /// Name the view layer uses for the type.
    pub name: String,
    /// Module version.
    pub version: TypeVersion,
    /// Rust type name, for diagnostics.
    pub type_name: &'static str,
    /// Whether [`TypeRegistry::create`] can instantiate it.
    pub creatable: bool,
}

/// Registry mapping `(module, name)` to native types.
///
/// Uses interior mutability so it can be shared by reference.
#[derive(Default)]
pub struct TypeRegistry {
    entries: RwLock<HashMap<(String, String), TypeEntry>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type the view layer may instantiate.
    pub fn register_creatable<T>(
        &self,
        module: &str,
        version: TypeVersion,
        name: &str,
    ) -> RegistryResult<()>
    where
        T: Default + Send + 'static,
    {
        let factory: Factory = Box::new(|| Box::new(T::default()));
        self.insert::<T>(module, version, name, Creation::Creatable(factory))
    }

    /// Register a type that bindings may reference but not instantiate.
    pub fn register_uncreatable<T: 'static>(
        &self,
        module: &str,
        version: TypeVersion,
        name: &str,
        reason: &str,
    ) -> RegistryResult<()> {
        let creation = Creation::Uncreatable {
            reason: reason.to_string(),
        };
        self.insert::<T>(module, version, name, creation)
    }

    fn insert<T: 'static>(
        &self,
        module: &str,
        version: TypeVersion,
        name: &str,
        creation: Creation,
    ) -> RegistryResult<()> {
        let key = (module.to_string(), name.to_string());
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered {
                module: key.0,
                name: key.1,
            });
        }

        let creatable = matches!(creation, Creation::Creatable(_));
        tracing::debug!(
            target: "object_list_core::registry",
            module,
            %version,
            name,
            type_name = std::any::type_name::<T>(),
            creatable,
            "registered type"
        );

        entries.insert(
            key,
            TypeEntry {
                version,
                type_id: TypeId::of::<T>(),
                type_name: std::any::type_name::<T>(),
                creation,
            },
        );
        Ok(())
    }

    /// Instantiate a creatable type by its qualified name.
    ///
    /// The returned box can be downcast to the registered Rust type.
    pub fn create(&self, module: &str, name: &str) -> RegistryResult<Box<dyn Any + Send>> {
        let entries = self.entries.read();
        let entry = entries
            .get(&(module.to_string(), name.to_string()))
            .ok_or_else(|| RegistryError::NotRegistered {
                module: module.to_string(),
                name: name.to_string(),
            })?;

        match &entry.creation {
            Creation::Creatable(factory) => Ok(factory()),
            Creation::Uncreatable { reason } => Err(RegistryError::Uncreatable {
                name: name.to_string(),
                reason: reason.clone(),
            }),
        }
    }

    /// Look up a registered type.
    pub fn lookup(&self, module: &str, name: &str) -> Option<TypeInfo> {
        let entries = self.entries.read();
        let key = (module.to_string(), name.to_string());
        entries.get(&key).map(|entry| TypeInfo {
            module: key.0.clone(),
            name: key.1.clone(),
            version: entry.version,
            type_name: entry.type_name,
            creatable: matches!(entry.creation, Creation::Creatable(_)),
        })
    }

    /// Returns `true` if `T` is registered under any name.
    pub fn is_registered<T: 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.entries
            .read()
            .values()
            .any(|entry| entry.type_id == type_id)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(TypeRegistry: Send, Sync);
