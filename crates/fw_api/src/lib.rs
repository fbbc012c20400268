//! Configuration objects addressable by field path.
//!
//! ## Menu
//!
//! - [`Cluster`], [`InstanceGroup`] and their nested specs.
//! - [`Duration`], [`IntOrString`], [`EnvVar`]: value types with a text form.
//! - [`register_parsers`], [`parser_registry`]: the text parsers of the value
//!   types, for use with [`FieldMutator`](fw_reflect::FieldMutator).
//!
//! ```
//! use fw_api::{InstanceGroup, IntOrString};
//! use fw_reflect::FieldMutator;
//!
//! let mutator = FieldMutator::new(fw_api::parser_registry());
//! let mut group = InstanceGroup::default();
//!
//! mutator.set_string(&mut group, "spec.rollingUpdate.maxSurge", "25%").unwrap();
//! let surge = group.spec.rolling_update.as_ref().and_then(|r| r.max_surge.clone());
//! assert_eq!(surge, Some(IntOrString::String("25%".into())));
//!
//! mutator.unset(&mut group, "spec.rollingUpdate.maxSurge").unwrap();
//! assert_eq!(group.spec.rolling_update.unwrap().max_surge, None);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

use std::sync::LazyLock;

use fw_reflect::registry::ParserRegistry;

// -----------------------------------------------------------------------------
// Modules

pub mod schema;
pub mod values;

// -----------------------------------------------------------------------------
// Exports

pub use schema::{
    Cluster, ClusterAutoscalerConfig, ClusterSpec, HookSpec, InstanceGroup, InstanceGroupRole,
    InstanceGroupSpec, InstanceManager, InstanceRootVolumeSpec, KubeAPIServerConfig,
    KubeletConfigSpec, NetworkingSpec, ObjectMeta, RollingUpdate,
};
pub use values::{Duration, EnvVar, IntOrString, ParseDurationError};

// -----------------------------------------------------------------------------
// Registration

/// Register the text parsers of the value types of this crate.
///
/// Needed only when the `auto_register` feature is off; with it, the
/// global registry already holds them.
pub fn register_parsers(registry: &mut ParserRegistry) {
    registry.register::<Duration>();
    registry.register::<IntOrString>();
    registry.register::<EnvVar>();
}

/// A shared registry with the primitive parsers and those of this crate,
/// independent of the `auto_register` feature.
pub fn parser_registry() -> &'static ParserRegistry {
    static REGISTRY: LazyLock<ParserRegistry> = LazyLock::new(|| {
        let mut registry = ParserRegistry::new();
        registry.auto_register();
        register_parsers(&mut registry);
        registry
    });
    &REGISTRY
}
