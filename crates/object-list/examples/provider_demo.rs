//! Headless walkthrough of a provider and its list model.
//!
//! Run with `cargo run -p object-list --example provider_demo [config.toml]`.
//! `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=object_list_core=trace`.

use object_list::TypeRegistry;
use object_list::app::{APP_MODULE, Provider, ProviderConfig, register_types};
use object_list::logging::targets;
use object_list::model::{ItemModel, ItemRole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("info,{}=debug", targets::APP).into()),
        )
        .init();

    let registry = TypeRegistry::new();
    register_types(&registry)?;

    let provider = match std::env::args().nth(1) {
        Some(path) => Box::new(Provider::with_config(ProviderConfig::load(path)?)),
        None => registry
            .create(APP_MODULE, "Provider")?
            .downcast::<Provider>()
            .map_err(|_| "registered Provider has an unexpected type")?,
    };

    let items = provider.items();
    let signals = items.signals();
    signals.rows_about_to_be_inserted.connect(|&(first, last)| {
        tracing::info!(first, last, "begin insert");
    });
    signals.rows_inserted.connect(|&(first, last)| {
        tracing::info!(first, last, "end insert");
    });
    signals.rows_about_to_be_removed.connect(|&(first, last)| {
        tracing::info!(first, last, "begin remove");
    });
    signals.rows_removed.connect(|&(first, last)| {
        tracing::info!(first, last, "end remove");
    });
    signals.model_about_to_reset.connect(|_| tracing::info!("begin reset"));
    signals.model_reset.connect(|_| tracing::info!("end reset"));
    signals.count_changed.connect(|&length| tracing::info!(length, "length changed"));
    signals.data_changed.connect(|&(first, last)| {
        tracing::info!(first, last, "data changed");
    });

    provider.add_item();
    provider.add_items3();
    provider.change_item();
    provider.remove_item();

    if let Some(item) = items.first() {
        item.set_value("edited in place");
        item.double_id();
    }

    for row in 0..items.row_count() {
        if let Some(item) = items.data(row, ItemRole::MODEL_DATA).into_item() {
            println!("{row}: {} {}", item.id(), item.value());
        }
    }

    items.clear();
    Ok(())
}
