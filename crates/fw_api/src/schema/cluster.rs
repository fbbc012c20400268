use alloc::collections::BTreeMap;

use fw_reflect::derive::Reflect;
use serde::{Deserialize, Serialize};

use crate::schema::{InstanceGroupRole, ObjectMeta};
use crate::values::{Duration, EnvVar};

// -----------------------------------------------------------------------------
// Cluster

/// A cluster definition.
///
/// ```
/// use fw_api::Cluster;
/// use fw_reflect::FieldMutator;
///
/// let mutator = FieldMutator::new(fw_api::parser_registry());
/// let mut cluster = Cluster::default();
/// mutator.set_string(&mut cluster, "spec.kubelet.maxPods", "110").unwrap();
/// assert_eq!(cluster.spec.kubelet.unwrap().max_pods, Some(110));
/// ```
#[derive(Reflect, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cluster {
    pub metadata: ObjectMeta,
    pub spec: ClusterSpec,
}

#[derive(Reflect, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterSpec {
    pub kubernetes_version: String,
    pub cloud_provider: String,
    pub config_base: String,
    #[serde(rename = "masterPublicName")]
    pub api_public_name: String,
    #[serde(rename = "sshAccess", skip_serializing_if = "Vec::is_empty")]
    pub ssh_access: Vec<String>,
    #[serde(rename = "kubernetesAPIAccess", skip_serializing_if = "Vec::is_empty")]
    pub kubernetes_api_access: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_policies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<NetworkingSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubelet: Option<KubeletConfigSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_plane_kubelet: Option<KubeletConfigSpec>,
    #[serde(rename = "kubeAPIServer", skip_serializing_if = "Option::is_none")]
    pub kube_api_server: Option<KubeAPIServerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_autoscaler: Option<ClusterAutoscalerConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<HookSpec>,
}

// -----------------------------------------------------------------------------
// Components

/// Kubelet settings, shared by the cluster and by instance groups.
#[derive(Reflect, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KubeletConfigSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pods: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_auth: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pod_infra_container_image: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub node_labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub feature_gates: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub kube_reserved: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub taints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eviction_hard: Option<String>,
    #[serde(
        rename = "imageGCHighThresholdPercent",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_gc_high_threshold_percent: Option<i32>,
    #[serde(rename = "cpuCFSQuota", skip_serializing_if = "Option::is_none")]
    pub cpu_cfs_quota: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming_connection_idle_timeout: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutdown_grace_period: Option<Duration>,
}

#[derive(Reflect, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KubeAPIServerConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    pub log_level: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_server_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_privileged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_mode: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_node_port_range: String,
    pub max_requests_inflight: i32,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub feature_gates: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub admission_control: Vec<String>,
    #[serde(rename = "eventTTL", skip_serializing_if = "Option::is_none")]
    pub event_ttl: Option<Duration>,
}

#[derive(Reflect, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkingSpec {
    #[serde(rename = "networkID")]
    pub network_id: String,
    #[serde(rename = "networkCIDR")]
    pub network_cidr: String,
    #[serde(rename = "nonMasqueradeCIDR")]
    pub non_masquerade_cidr: String,
    #[serde(rename = "serviceClusterIPRange")]
    pub service_cluster_ip_range: String,
    #[serde(rename = "podCIDR")]
    pub pod_cidr: String,
}

#[derive(Reflect, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterAutoscalerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expander: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_similar_node_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_utilization_threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay_after_add: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A unit run on nodes before or after the node services.
#[derive(Reflect, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HookSpec {
    pub name: String,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<InstanceGroupRole>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub before: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub manifest: String,
}
