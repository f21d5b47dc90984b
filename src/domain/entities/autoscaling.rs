use serde::{Deserialize, Serialize};

use crate::domain::fields::list_or_null;
use crate::domain::{AttachedLoadbalancer, AttachedSecurityGroup, AttachedTargetGroup, Scalar};

/// An autoscaling group and everything configured on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutoScalingGroup {
    pub id: Scalar,
    pub name: Scalar,
    pub dcslug: Scalar,
    pub minsize: Scalar,
    pub maxsize: Scalar,
    pub desiredsize: Scalar,
    pub image: Scalar,
    pub status: Scalar,
    #[serde(deserialize_with = "list_or_null")]
    pub policies: Vec<Policy>,
    #[serde(deserialize_with = "list_or_null")]
    pub schedules: Vec<Schedule>,
    #[serde(deserialize_with = "list_or_null")]
    pub load_balancers: Vec<AttachedLoadbalancer>,
    #[serde(deserialize_with = "list_or_null")]
    pub security_groups: Vec<AttachedSecurityGroup>,
    #[serde(deserialize_with = "list_or_null")]
    pub target_groups: Vec<AttachedTargetGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub id: Scalar,
    pub productid: Scalar,
    pub name: Scalar,
    #[serde(rename = "type")]
    pub kind: Scalar,
    pub compare: Scalar,
    pub value: Scalar,
    pub adjust: Scalar,
    pub period: Scalar,
    pub cooldown: Scalar,
    pub status: Scalar,
    pub cloudid: Scalar,
    pub maxsize: Scalar,
    pub minsize: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub id: Scalar,
    pub groupid: Scalar,
    pub name: Scalar,
    pub desiredsize: Scalar,
    pub recurrence: Scalar,
    pub start_date: Scalar,
    pub status: Scalar,
    pub timezone: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAutoScalingParams {
    pub name: String,
    pub os_disk_size: u32,
    pub dcslug: String,
    pub minsize: String,
    pub maxsize: String,
    pub desiredsize: String,
    pub planid: String,
    pub planname: String,
    pub instance_templateid: String,
    pub public_ip_enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vpc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub load_balancers: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub security_groups: String,
    pub policies: Vec<CreatePolicyParams>,
    pub schedules: Vec<CreateScheduleParams>,
    pub stackid: String,
    pub stackimage: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_groups: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatePolicyParams {
    pub name: String,
    pub productid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub compare: String,
    pub value: String,
    pub adjust: String,
    pub period: String,
    pub cooldown: String,
    pub product: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateScheduleParams {
    pub name: String,
    pub desiredsize: String,
    pub recurrence: String,
    pub start_date: String,
}

/// Body of an autoscaling group delete; the API wants the name echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteAutoScalingParams {
    pub name: String,
}
