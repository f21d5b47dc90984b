//! Table layout for every resource the CLI prints

use crate::cli::output::Tabular;
use crate::domain::{
    AccessKey, Acl, Action, AttachedLoadbalancer, AttachedSecurityGroup, AttachedTargetGroup,
    AutoScalingGroup, Backend, Bucket, CloudInstance, DnsRecord, Domain, Firewall, FirewallRule,
    Frontend, KubernetesCluster, Loadbalancer, Policy, Route, Schedule, Target, TargetGroup, User,
    Vpc,
};

macro_rules! tabular {
    ($ty:ty, [$($header:expr),+ $(,)?], |$item:ident| [$($cell:expr),+ $(,)?]) => {
        impl Tabular for $ty {
            const HEADERS: &'static [&'static str] = &[$($header),+];

            fn row(&self) -> Vec<String> {
                let $item = self;
                vec![$($cell.to_string()),+]
            }
        }
    };
}

tabular!(
    User,
    ["Id", "User Email", "Cloud Limit", "Total Cloud Instance", "K8s limit", "Currency", "Available Credit"],
    |u| [u.id, u.email, u.cloudlimit, u.total_cloudservers, u.k8s_limit, u.currency, u.availablecredit]
);

tabular!(
    Action,
    ["ID", "Action", "ResourceType", "ResourceID", "StartedAt", "CompletedAt", "Process"],
    |a| [a.id, a.action, a.resource_type, a.resource_id, a.started_at, a.completed_at, a.process]
);

tabular!(
    CloudInstance,
    ["ID", "Hostname", "CPU", "RAM", "Disksize", "IP", "Billingcycle", "Image"],
    |i| [i.cloudid, i.hostname, i.cpu, i.ram, i.disksize, i.ip, i.billingcycle, image_label(i)]
);

fn image_label(instance: &CloudInstance) -> String {
    let image = &instance.image;
    if !image.image.is_empty() {
        return image.image.to_string();
    }
    format!("{} {}", image.distribution, image.version)
        .trim()
        .to_string()
}

tabular!(
    KubernetesCluster,
    ["ID", "Dcslug", "Name", "RAM", "CPU", "Disksize", "IP", "Status", "WorkerCount"],
    |k| [k.id, k.dcslug, k.hostname, k.ram, k.cpu, k.disksize, k.ip, k.status, k.worker_count]
);

tabular!(AttachedLoadbalancer, ["ID", "Name", "IP"], |l| [l.id, l.name, l.ip]);

tabular!(AttachedSecurityGroup, ["ID", "Name"], |s| [s.id, s.name]);

tabular!(
    AttachedTargetGroup,
    ["ID", "Name", "Protocol", "Port"],
    |t| [t.id, t.name, t.protocol, t.port]
);

tabular!(
    Loadbalancer,
    ["ID", "IP", "Algorithm", "Type", "Status"],
    |l| [l.id, l.ip, l.algorithm, l.kind, l.status]
);

tabular!(
    Acl,
    ["ID", "Name", "ACLCondition", "Value"],
    |a| [a.id, a.name, a.acl_condition, a.value]
);

tabular!(
    Frontend,
    ["ID", "Name", "Algorithm", "CertificateID", "Port"],
    |f| [f.id, f.name, f.algorithm, f.certificate_id, f.port]
);

tabular!(
    Backend,
    ["ID", "IP", "Cloudid", "Name", "RAM", "CPU", "Disk"],
    |b| [b.id, b.ip, b.cloudid, b.name, b.ram, b.cpu, b.disk]
);

tabular!(
    Route,
    ["ID", "ACLID", "ACLName", "RoutingCondition", "BackendID"],
    |r| [r.id, r.acl_id, r.acl_name, r.routing_condition, r.backend_id]
);

tabular!(
    Firewall,
    ["ID", "Name", "CreatedAt", "Rulecount", "Serverscount"],
    |f| [f.id, f.name, f.created_at, f.rulecount, f.serverscount]
);

tabular!(
    FirewallRule,
    ["ID", "Firewallid", "Type", "Service", "Protocol", "Port", "Addresses"],
    |r| [r.id, r.firewallid, r.kind, r.service, r.protocol, r.port, r.addresses]
);

tabular!(
    Domain,
    ["Domain", "Dns Record Count", "Created At"],
    |d| [d.domain, d.dnsrecord_count, d.created_at]
);

tabular!(
    DnsRecord,
    ["id", "hostname", "type", "value", "ttl", "priority"],
    |r| [r.id, r.hostname, r.kind, r.value, r.ttl, r.priority]
);

tabular!(
    Vpc,
    ["ID", "Network", "Name", "Size", "Dcslug"],
    |v| [v.id, v.network, v.name, v.size, v.dcslug]
);

tabular!(
    Bucket,
    ["Name", "Dcslug", "Size", "Status", "ObjectCount", "CurrentSize"],
    |b| [b.name, b.dcslug, b.size, b.status, b.object_count, b.current_size]
);

tabular!(
    AccessKey,
    ["Name", "Accesskey", "Dcslug", "Status", "CreatedAt"],
    |k| [k.name, k.accesskey, k.dcslug, k.status, k.created_at]
);

tabular!(
    TargetGroup,
    ["ID", "Name", "Port", "Protocol", "HealthCheckPath"],
    |t| [t.id, t.name, t.port, t.protocol, t.health_check_path]
);

tabular!(Target, ["IP", "Cloudid", "Status", "ID"], |t| [t.ip, t.cloudid, t.status, t.id]);

tabular!(
    AutoScalingGroup,
    ["ID", "Name", "Dcslug", "Minsize", "Maxsize", "Image", "Status"],
    |g| [g.id, g.name, g.dcslug, g.minsize, g.maxsize, g.image, g.status]
);

tabular!(
    Policy,
    ["ID", "Autoscaling id", "Name", "Type", "Value", "Status", "Cloudid", "Maxsize", "Minsize"],
    |p| [p.id, p.productid, p.name, p.kind, p.value, p.status, p.cloudid, p.maxsize, p.minsize]
);

tabular!(
    Schedule,
    ["ID", "Group id", "Name", "Desiredsize", "Recurrence", "StartDate", "Status", "Timezone"],
    |s| [s.id, s.groupid, s.name, s.desiredsize, s.recurrence, s.start_date, s.status, s.timezone]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstanceImage, Scalar};

    #[test]
    fn given_every_table_then_row_width_matches_headers() {
        assert_eq!(Policy::default().row().len(), Policy::HEADERS.len());
        assert_eq!(Schedule::default().row().len(), Schedule::HEADERS.len());
        assert_eq!(CloudInstance::default().row().len(), CloudInstance::HEADERS.len());
        assert_eq!(KubernetesCluster::default().row().len(), KubernetesCluster::HEADERS.len());
        assert_eq!(User::default().row().len(), User::HEADERS.len());
    }

    #[test]
    fn given_instance_without_image_slug_when_rendering_then_distribution_and_version() {
        let instance = CloudInstance {
            image: InstanceImage {
                distribution: Scalar::new("ubuntu"),
                version: Scalar::new("22.04"),
                image: Scalar::default(),
            },
            ..CloudInstance::default()
        };

        assert_eq!(instance.row()[7], "ubuntu 22.04");
    }
}
