//! Authenticated Utho API client

use std::sync::Arc;

use crate::application::services::{
    AccountService, ActionService, AutoScalingService, DnsService, FirewallService,
    InstanceService, KubernetesService, LoadbalancerService, ObjectStorageService,
    TargetGroupService, VpcService,
};
use crate::application::ApiClient;
use crate::infrastructure::traits::HttpTransport;

/// Entry point to the per-resource services.
///
/// Cheap to clone; every service shares the same transport.
#[derive(Clone)]
pub struct UthoClient {
    api: ApiClient,
}

impl UthoClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api: ApiClient::new(transport),
        }
    }

    pub fn account(&self) -> AccountService {
        AccountService::new(self.api.clone())
    }

    pub fn actions(&self) -> ActionService {
        ActionService::new(self.api.clone())
    }

    pub fn instances(&self) -> InstanceService {
        InstanceService::new(self.api.clone())
    }

    pub fn kubernetes(&self) -> KubernetesService {
        KubernetesService::new(self.api.clone())
    }

    pub fn loadbalancers(&self) -> LoadbalancerService {
        LoadbalancerService::new(self.api.clone())
    }

    pub fn firewalls(&self) -> FirewallService {
        FirewallService::new(self.api.clone())
    }

    pub fn dns(&self) -> DnsService {
        DnsService::new(self.api.clone())
    }

    pub fn vpcs(&self) -> VpcService {
        VpcService::new(self.api.clone())
    }

    pub fn object_storage(&self) -> ObjectStorageService {
        ObjectStorageService::new(self.api.clone())
    }

    pub fn target_groups(&self) -> TargetGroupService {
        TargetGroupService::new(self.api.clone())
    }

    pub fn autoscaling(&self) -> AutoScalingService {
        AutoScalingService::new(self.api.clone())
    }
}
