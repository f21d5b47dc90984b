//! Resource services: one struct per API resource family

pub mod account;
pub mod attachments;
pub mod autoscaling;
pub mod dns;
pub mod firewall;
pub mod instance;
pub mod kubernetes;
pub mod loadbalancer;
pub mod objectstorage;
pub mod targetgroup;
pub mod vpc;

pub use account::{AccountService, ActionService};
pub use attachments::Attachments;
pub use autoscaling::AutoScalingService;
pub use dns::DnsService;
pub use firewall::FirewallService;
pub use instance::InstanceService;
pub use kubernetes::KubernetesService;
pub use loadbalancer::LoadbalancerService;
pub use objectstorage::ObjectStorageService;
pub use targetgroup::TargetGroupService;
pub use vpc::VpcService;
