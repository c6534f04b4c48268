//! Registration of the application types.

use object_list_core::{RegistryResult, TypeRegistry, TypeVersion};

use crate::model::ObjectListModel;

use super::data_item::DataItem;
use super::provider::Provider;

/// Module name the application types are registered under.
pub const APP_MODULE: &str = "App";

/// Version of [`APP_MODULE`].
pub const APP_VERSION: TypeVersion = TypeVersion::new(1, 0);

/// Registers the application types with `registry`.
///
/// Items and their list only ever come from a provider, so they are
/// registered as uncreatable. The provider itself can be instantiated.
pub fn register_types(registry: &TypeRegistry) -> RegistryResult<()> {
    registry.register_uncreatable::<DataItem>(APP_MODULE, APP_VERSION, "DataItem", "interface")?;
    registry.register_uncreatable::<ObjectListModel<DataItem>>(
        APP_MODULE,
        APP_VERSION,
        "ListModel_DataItem",
        "interface",
    )?;
    registry.register_creatable::<Provider>(APP_MODULE, APP_VERSION, "Provider")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_list_core::RegistryError;

    #[test]
    fn test_register_types() {
        let registry = TypeRegistry::new();
        register_types(&registry).unwrap();

        assert_eq!(registry.len(), 3);
        assert!(registry.is_registered::<DataItem>());
        assert!(registry.is_registered::<ObjectListModel<DataItem>>());
        assert!(registry.lookup("App", "Provider").unwrap().creatable);
        assert_eq!(registry.lookup("App", "DataItem").unwrap().version, APP_VERSION);
    }

    #[test]
    fn test_only_provider_is_creatable() {
        let registry = TypeRegistry::new();
        register_types(&registry).unwrap();

        let provider = registry.create("App", "Provider").unwrap();
        assert!(provider.downcast::<Provider>().is_ok());

        for name in ["DataItem", "ListModel_DataItem"] {
            let err = registry.create("App", name).unwrap_err();
            assert_eq!(
                err,
                RegistryError::Uncreatable {
                    name: name.to_string(),
                    reason: "interface".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_registering_twice_fails() {
        let registry = TypeRegistry::new();
        register_types(&registry).unwrap();
        assert!(matches!(
            register_types(&registry),
            Err(RegistryError::AlreadyRegistered { .. })
        ));
    }
}
