//! The configuration objects.

// -----------------------------------------------------------------------------
// Modules

mod cluster;
mod instance_group;
mod meta;

// -----------------------------------------------------------------------------
// Exports

pub use cluster::{
    Cluster, ClusterAutoscalerConfig, ClusterSpec, HookSpec, KubeAPIServerConfig,
    KubeletConfigSpec, NetworkingSpec,
};
pub use instance_group::{
    InstanceGroup, InstanceGroupRole, InstanceGroupSpec, InstanceManager, InstanceRootVolumeSpec,
    RollingUpdate,
};
pub use meta::ObjectMeta;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use fw_reflect::info::Typed;
    use fw_reflect::mutate::Action;
    use fw_reflect::walk::schema_paths;
    use fw_reflect::{FieldError, FieldMutator};

    use super::{Cluster, HookSpec, InstanceGroup, InstanceGroupRole, ObjectMeta};
    use crate::values::{Duration, EnvVar, IntOrString};

    fn mutator() -> FieldMutator<'static> {
        FieldMutator::new(crate::parser_registry())
    }

    #[test]
    fn kubelet_is_allocated() {
        let mut cluster = Cluster::default();
        assert!(cluster.spec.kubelet.is_none());

        mutator()
            .set_string(&mut cluster, "spec.kubelet.maxPods", "110")
            .unwrap();

        let kubelet = cluster.spec.kubelet.unwrap();
        assert_eq!(kubelet.max_pods, Some(110));
        assert_eq!(kubelet.anonymous_auth, None);
    }

    #[test]
    fn env_vars_are_appended() {
        let mut cluster = Cluster::default();
        let mutator = mutator();

        mutator
            .set_string(&mut cluster, "spec.kubeAPIServer.env", "FOO=bar")
            .unwrap();
        mutator
            .set_string(&mut cluster, "spec.kubeAPIServer.env", "BAZ")
            .unwrap();

        let env = cluster.spec.kube_api_server.unwrap().env;
        assert_eq!(env, [EnvVar::new("FOO", "bar"), EnvVar::new("BAZ", "")]);
    }

    #[test]
    fn env_var_fields_are_set_on_every_element() {
        let mut cluster = Cluster::default();
        let mutator = mutator();

        mutator
            .set_string(&mut cluster, "spec.kubeAPIServer.env", "A=1,B=2")
            .unwrap();
        mutator
            .set_string(&mut cluster, "spec.kubeAPIServer.env.value", "0")
            .unwrap();

        let env = cluster.spec.kube_api_server.unwrap().env;
        assert_eq!(env, [EnvVar::new("A", "0"), EnvVar::new("B", "0")]);
    }

    #[test]
    fn name_is_immutable() {
        let mut cluster = Cluster {
            metadata: ObjectMeta::named("prod.example.com"),
            ..Default::default()
        };

        let err = mutator()
            .set_string(&mut cluster, "metadata.name", "other")
            .unwrap_err();
        assert!(matches!(err, FieldError::Immutable { action: Action::Set, .. }));

        let err = mutator().unset(&mut cluster, "metadata.name").unwrap_err();
        assert!(matches!(err, FieldError::Immutable { action: Action::Unset, .. }));

        assert_eq!(cluster.metadata.name, "prod.example.com");
    }

    #[test]
    fn labels_are_mutable() {
        let mut cluster = Cluster::default();
        // Map destinations accept only the empty text.
        mutator()
            .set_string(&mut cluster, "metadata.labels", "")
            .unwrap();
        assert!(cluster.metadata.labels.is_empty());

        let err = mutator()
            .set_string(&mut cluster, "metadata.labels", "a=b")
            .unwrap_err();
        assert!(matches!(err, FieldError::UnhandledType { .. }));
    }

    #[test]
    fn durations_and_quantities() {
        let mut cluster = Cluster::default();
        let mut group = InstanceGroup::default();
        let mutator = mutator();

        mutator
            .set_string(&mut cluster, "spec.kubeAPIServer.eventTTL", "1h")
            .unwrap();
        mutator
            .set_string(&mut group, "spec.rollingUpdate.maxUnavailable", "2")
            .unwrap();
        mutator
            .set_string(&mut group, "spec.rollingUpdate.maxSurge", "30%")
            .unwrap();

        assert_eq!(
            cluster.spec.kube_api_server.as_ref().unwrap().event_ttl,
            Some(Duration::from_secs(3600))
        );
        let rolling_update = group.spec.rolling_update.unwrap();
        assert_eq!(rolling_update.max_unavailable, Some(IntOrString::Int(2)));
        assert_eq!(rolling_update.max_surge, Some(IntOrString::from("30%")));

        let err = mutator
            .set_string(&mut cluster, "spec.kubelet.shutdownGracePeriod", "soon")
            .unwrap_err();
        assert!(matches!(err, FieldError::Conversion { .. }));
        assert!(cluster.spec.kubelet.is_none());
    }

    #[test]
    fn roles_parse_from_names() {
        let mut group = InstanceGroup::default();
        let mutator = mutator();

        mutator
            .set_string(&mut group, "spec.role", "APIServer")
            .unwrap();
        assert_eq!(group.spec.role, InstanceGroupRole::ApiServer);

        let err = mutator
            .set_string(&mut group, "spec.role", "Master")
            .unwrap_err();
        assert!(matches!(err, FieldError::Conversion { .. }));
        assert_eq!(group.spec.role, InstanceGroupRole::ApiServer);

        mutator.unset(&mut group, "spec.role").unwrap();
        assert_eq!(group.spec.role, InstanceGroupRole::Node);
    }

    #[test]
    fn hooks_are_addressed_through_the_list() {
        let mut cluster = Cluster::default();
        cluster.spec.hooks = vec![HookSpec::default(), HookSpec::default()];

        mutator()
            .set_string(&mut cluster, "spec.hooks.roles", "ControlPlane,Node")
            .unwrap();

        for hook in &cluster.spec.hooks {
            assert_eq!(
                hook.roles,
                [InstanceGroupRole::ControlPlane, InstanceGroupRole::Node]
            );
        }
    }

    #[test]
    fn loaded_documents_can_be_edited() {
        let mut cluster: Cluster = serde_json::from_str(
            r#"{
                "metadata": { "name": "dev.example.com" },
                "spec": {
                    "kubernetesVersion": "1.30.2",
                    "kubeAPIServer": { "logLevel": 2 },
                    "kubelet": { "maxPods": 50 }
                }
            }"#,
        )
        .unwrap();
        let mutator = mutator();

        mutator
            .set_string(&mut cluster, "spec.kubelet.maxPods", "110")
            .unwrap();
        mutator
            .unset(&mut cluster, "spec.kubeAPIServer.logLevel")
            .unwrap();
        mutator
            .set_string(&mut cluster, "spec.kubernetesVersion", "1.31.0")
            .unwrap();

        let value = serde_json::to_value(&cluster).unwrap();
        assert_eq!(value["spec"]["kubelet"]["maxPods"], 110);
        assert_eq!(value["spec"]["kubeAPIServer"]["logLevel"], 0);
        assert_eq!(value["spec"]["kubernetesVersion"], "1.31.0");
        assert_eq!(value["metadata"]["name"], "dev.example.com");
    }

    #[test]
    fn reflected_names_match_serde() {
        let paths: Vec<String> = schema_paths(Cluster::type_info())
            .iter()
            .map(ToString::to_string)
            .collect();

        for expected in [
            "spec.kubeAPIServer.eventTTL",
            "spec.kubelet.imageGCHighThresholdPercent",
            "spec.networking.nonMasqueradeCIDR",
            "spec.kubernetesAPIAccess",
            "spec.masterPublicName",
            "spec.hooks.roles",
        ] {
            assert!(paths.iter().any(|p| p == expected), "{expected}");
        }

        let paths: Vec<String> = schema_paths(InstanceGroup::type_info())
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(paths.iter().any(|p| p == "spec.rootVolume.type"));
        assert!(paths.iter().any(|p| p == "spec.associatePublicIP"));
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn global_registry_knows_value_types() {
        let mut group = InstanceGroup::default();
        fw_reflect::set_string(&mut group, "spec.rollingUpdate.maxSurge", "1").unwrap();
        assert_eq!(
            group.spec.rolling_update.unwrap().max_surge,
            Some(IntOrString::Int(1))
        );
    }
}
