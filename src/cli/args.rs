//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// uthoctl is a command line interface (CLI) for the Utho API
#[derive(Parser, Debug)]
#[command(name = "uthoctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: ~/.config/uthoctl.yaml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// API base url
    #[arg(long, global = true, env = "UTHO_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save an API token (generate one at https://console.utho.com/api)
    Auth {
        /// Token to save; prompted for without echo when omitted
        #[arg(long)]
        token: Option<String>,
    },

    /// Show account information
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },

    /// Show the account activity log
    Action {
        #[command(subcommand)]
        command: ActionCommands,
    },

    /// Manage compute instances
    Instance {
        #[command(subcommand)]
        command: InstanceCommands,
    },

    /// Manage Kubernetes clusters
    Kubernetes {
        #[command(subcommand)]
        command: KubernetesCommands,
    },

    /// Manage load balancers
    Loadbalancer {
        #[command(subcommand)]
        command: LoadbalancerCommands,
    },

    /// Manage firewalls
    Firewall {
        #[command(subcommand)]
        command: FirewallCommands,
    },

    /// Manage DNS domains and records
    Domain {
        #[command(subcommand)]
        command: DomainCommands,
    },

    /// Manage virtual private clouds
    Vpc {
        #[command(subcommand)]
        command: VpcCommands,
    },

    /// Manage object storage buckets and access keys
    Objectstorage {
        #[command(subcommand)]
        command: ObjectStorageCommands,
    },

    /// Manage target groups
    Targetgroup {
        #[command(subcommand)]
        command: TargetGroupCommands,
    },

    /// Manage autoscaling groups
    Autoscaling {
        #[command(subcommand)]
        command: AutoScalingCommands,
    },

    /// Inspect local settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Show account info
    Get,
}

#[derive(Subcommand, Debug)]
pub enum ActionCommands {
    /// List recent actions
    List,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print effective settings (token masked)
    Show,
}

/// Resources attached to a Kubernetes cluster or an autoscaling group.
#[derive(Subcommand, Debug)]
pub enum AttachmentCommands {
    /// Attach a resource
    Create { id: String, resource_id: String },
    /// Show one attached resource
    Get { id: String, resource_id: String },
    /// List attached resources
    List { id: String },
    /// Detach a resource
    Delete { id: String, resource_id: String },
}

// ============================================================
// instance
// ============================================================

#[derive(Subcommand, Debug)]
pub enum InstanceCommands {
    /// Create a compute instance
    Create(CreateInstanceArgs),
    /// Show instance info
    Get { instance_id: String },
    /// List instances
    List,
    /// Delete an instance
    Delete { instance_id: String },
    /// Manage instance snapshots
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
    /// Manage instance backups
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
}

#[derive(Args, Debug)]
pub struct CreateInstanceArgs {
    /// Hostname of the new instance
    pub hostname: String,
    /// Zone dcslug, e.g. innoida
    #[arg(long)]
    pub dcslug: Option<String>,
    /// Image name, e.g. centos-7.4-x86_64
    #[arg(long)]
    pub image: Option<String>,
    /// Cloud plan id
    #[arg(long)]
    pub planid: Option<String>,
    #[arg(long)]
    pub auth: Option<String>,
    #[arg(long)]
    pub root_password: Option<String>,
    #[arg(long)]
    pub firewall: Option<String>,
    /// Pass 'on' to enable weekly backups
    #[arg(long)]
    pub enablebackup: Option<String>,
    #[arg(long)]
    pub support: Option<String>,
    #[arg(long)]
    pub management: Option<String>,
    /// Billing cycle: hourly (default), monthly, 3month, 6month, 12month
    #[arg(long)]
    pub billingcycle: Option<String>,
    /// Backup id in the same data center
    #[arg(long)]
    pub backupid: Option<String>,
    /// Snapshot id in the same data center
    #[arg(long)]
    pub snapshotid: Option<String>,
    /// SSH key ids, comma separated (e.g. 432,331)
    #[arg(long)]
    pub sshkeys: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// Create a snapshot of an instance
    Create { instance_id: String },
    /// Delete an instance snapshot
    Delete {
        instance_id: String,
        snapshot_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Enable backups for an instance
    Enable { instance_id: String },
    /// Disable backups for an instance
    Disable { instance_id: String },
}

// ============================================================
// kubernetes
// ============================================================

#[derive(Subcommand, Debug)]
pub enum KubernetesCommands {
    /// Create a Kubernetes cluster
    Create(CreateKubernetesArgs),
    /// Show cluster info
    Get { cluster_id: String },
    /// List clusters
    List,
    /// Delete a cluster
    Delete { cluster_id: String },
    /// Manage cluster load balancers
    Loadbalancer {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
    /// Manage cluster security groups
    Securitygroup {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
    /// Manage cluster target groups
    Targetgroup {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
}

#[derive(Args, Debug)]
pub struct CreateKubernetesArgs {
    /// Cluster name, used as the label unless --cluster-label is given
    pub name: String,
    #[arg(long)]
    pub dcslug: Option<String>,
    #[arg(long)]
    pub cluster_label: Option<String>,
    #[arg(long)]
    pub cluster_version: Option<String>,
    #[arg(long)]
    pub auth: Option<String>,
    #[arg(long)]
    pub vpc: Option<String>,
    #[arg(long)]
    pub security_groups: Option<String>,
}

// ============================================================
// loadbalancer
// ============================================================

#[derive(Subcommand, Debug)]
pub enum LoadbalancerCommands {
    /// Create a load balancer
    Create {
        name: String,
        #[arg(long)]
        dcslug: Option<String>,
        /// Load balancer type, e.g. application or network
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Show load balancer info
    Get { loadbalancer_id: String },
    /// List load balancers
    List,
    /// Delete a load balancer
    Delete { loadbalancer_id: String },
    /// Manage load balancer ACLs
    Acl {
        #[command(subcommand)]
        command: AclCommands,
    },
    /// Manage load balancer frontends
    Frontend {
        #[command(subcommand)]
        command: FrontendCommands,
    },
    /// Manage load balancer backends
    Backend {
        #[command(subcommand)]
        command: BackendCommands,
    },
    /// Manage load balancer routes
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AclCommands {
    /// Create an ACL
    Create {
        loadbalancer_id: String,
        name: String,
        #[arg(long)]
        condition_type: Option<String>,
        #[arg(long)]
        frontend_id: Option<String>,
        #[arg(long)]
        value: Option<String>,
    },
    /// Show an ACL
    Get {
        loadbalancer_id: String,
        acl_id: String,
    },
    /// List ACLs
    List { loadbalancer_id: String },
    /// Delete an ACL
    Delete {
        loadbalancer_id: String,
        acl_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum FrontendCommands {
    /// Create a frontend
    Create {
        loadbalancer_id: String,
        name: String,
        /// Protocol: http, https or tcp
        #[arg(long)]
        proto: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        certificate_id: Option<String>,
        /// Balancing algorithm: roundrobin or leastconn
        #[arg(long)]
        algorithm: Option<String>,
        #[arg(long)]
        redirecthttps: Option<String>,
        #[arg(long)]
        cookie: Option<String>,
    },
    /// Show a frontend
    Get {
        loadbalancer_id: String,
        frontend_id: String,
    },
    /// List frontends
    List { loadbalancer_id: String },
    /// Delete a frontend
    Delete {
        loadbalancer_id: String,
        frontend_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BackendCommands {
    /// Add an instance as backend
    Create {
        loadbalancer_id: String,
        frontend_id: String,
        cloud_id: String,
        /// Backend port
        #[arg(long)]
        port: Option<String>,
    },
    /// Show a backend
    Get {
        loadbalancer_id: String,
        backend_id: String,
    },
    /// List backends
    List { loadbalancer_id: String },
    /// Delete a backend
    Delete {
        loadbalancer_id: String,
        backend_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Create a route
    Create {
        loadbalancer_id: String,
        frontend_id: String,
        acl_id: String,
        #[arg(long)]
        route_condition: Option<String>,
        #[arg(long)]
        target_groups: Option<String>,
    },
    /// Show a route
    Get {
        loadbalancer_id: String,
        route_id: String,
    },
    /// List routes
    List { loadbalancer_id: String },
    /// Delete a route
    Delete {
        loadbalancer_id: String,
        route_id: String,
    },
}

// ============================================================
// firewall
// ============================================================

#[derive(Subcommand, Debug)]
pub enum FirewallCommands {
    /// Create a firewall
    Create { name: String },
    /// Show firewall info
    Get { firewall_id: String },
    /// List firewalls
    List,
    /// Delete a firewall
    Delete { firewall_id: String },
    /// Manage firewall rules
    Rule {
        #[command(subcommand)]
        command: FirewallRuleCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum FirewallRuleCommands {
    /// Add a rule
    Create {
        firewall_id: String,
        /// Rule direction: incoming or outgoing
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        protocol: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        addresses: Option<String>,
    },
    /// Show a rule
    Get {
        firewall_id: String,
        rule_id: String,
    },
    /// List rules
    List { firewall_id: String },
    /// Delete a rule
    Delete {
        firewall_id: String,
        rule_id: String,
    },
}

// ============================================================
// domain
// ============================================================

#[derive(Subcommand, Debug)]
pub enum DomainCommands {
    /// Add a domain
    Create { domain: String },
    /// Show domain info
    Get { domain: String },
    /// List domains
    List,
    /// Delete a domain
    Delete { domain: String },
    /// Manage DNS records
    Records {
        #[command(subcommand)]
        command: RecordCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add a DNS record
    Create {
        domain: String,
        /// Record type: A, AAAA, CNAME, MX, TXT, SRV, CAA
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        hostname: Option<String>,
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        ttl: Option<String>,
        #[arg(long)]
        port_type: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        weight: Option<String>,
    },
    /// List DNS records
    List { domain: String },
    /// Delete a DNS record
    Delete { domain: String, record_id: String },
}

// ============================================================
// vpc
// ============================================================

#[derive(Subcommand, Debug)]
pub enum VpcCommands {
    /// Create a VPC
    Create {
        name: String,
        #[arg(long)]
        dcslug: Option<String>,
        #[arg(long)]
        planid: Option<String>,
        /// Network address, e.g. 10.210.100.0
        #[arg(long)]
        network: Option<String>,
        /// Subnet size, e.g. 24
        #[arg(long)]
        size: Option<String>,
    },
    /// Show VPC info
    Get { vpc_id: String },
    /// List VPCs
    List,
    /// Delete a VPC
    Delete { vpc_id: String },
}

// ============================================================
// objectstorage
// ============================================================

#[derive(Subcommand, Debug)]
pub enum ObjectStorageCommands {
    /// Create a bucket
    Create {
        name: String,
        #[arg(long)]
        dcslug: Option<String>,
        /// Billing cycle, e.g. monthly
        #[arg(long)]
        billing: Option<String>,
        /// Size in GB
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        price: Option<String>,
    },
    /// Show a bucket
    Get { dcslug: String, bucket: String },
    /// List buckets in a data center
    List { dcslug: String },
    /// Delete a bucket
    Delete { dcslug: String, bucket: String },
    /// Manage access keys
    Accesskey {
        #[command(subcommand)]
        command: AccessKeyCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccessKeyCommands {
    /// Create an access key
    Create { dcslug: String, name: String },
    /// Show an access key
    Get { dcslug: String, accesskey: String },
    /// List access keys in a data center
    List { dcslug: String },
}

// ============================================================
// targetgroup
// ============================================================

#[derive(Subcommand, Debug)]
pub enum TargetGroupCommands {
    /// Create a target group
    Create(CreateTargetGroupArgs),
    /// Show target group info
    Get { targetgroup_id: String },
    /// List target groups
    List,
    /// Delete a target group
    Delete {
        targetgroup_id: String,
        /// Name of the target group
        #[arg(long)]
        name: String,
    },
    /// Manage targets
    Target {
        #[command(subcommand)]
        command: TargetCommands,
    },
}

#[derive(Args, Debug)]
pub struct CreateTargetGroupArgs {
    pub name: String,
    #[arg(long)]
    pub protocol: Option<String>,
    #[arg(long)]
    pub port: Option<String>,
    #[arg(long)]
    pub health_check_path: Option<String>,
    #[arg(long)]
    pub health_check_protocol: Option<String>,
    #[arg(long)]
    pub health_check_interval: Option<String>,
    #[arg(long)]
    pub health_check_timeout: Option<String>,
    #[arg(long)]
    pub healthy_threshold: Option<String>,
    #[arg(long)]
    pub unhealthy_threshold: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TargetCommands {
    /// Add a target
    Create {
        targetgroup_id: String,
        #[arg(long)]
        backend_protocol: Option<String>,
        #[arg(long)]
        backend_port: Option<String>,
        #[arg(long)]
        ip: Option<String>,
        #[arg(long)]
        cloudid: Option<String>,
    },
    /// Show a target
    Get {
        targetgroup_id: String,
        target_id: String,
    },
    /// List targets
    List { targetgroup_id: String },
    /// Delete a target
    Delete {
        targetgroup_id: String,
        target_id: String,
    },
}

// ============================================================
// autoscaling
// ============================================================

#[derive(Subcommand, Debug)]
pub enum AutoScalingCommands {
    /// Create an autoscaling group
    Create(CreateAutoScalingArgs),
    /// Show autoscaling group info
    Get { autoscaling_id: String },
    /// List autoscaling groups
    List,
    /// Delete an autoscaling group
    Delete {
        autoscaling_id: String,
        /// Name of the autoscaling group
        #[arg(long)]
        name: String,
    },
    /// Manage scaling policies
    Policy {
        #[command(subcommand)]
        command: PolicyCommands,
    },
    /// Manage scaling schedules
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Manage attached load balancers
    Loadbalancer {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
    /// Manage attached security groups
    Securitygroup {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
    /// Manage attached target groups
    Targetgroup {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
}

#[derive(Args, Debug)]
pub struct CreateAutoScalingArgs {
    pub name: String,
    /// OS disk size in GB
    #[arg(long, default_value_t = 0)]
    pub os_disk_size: u32,
    #[arg(long)]
    pub dcslug: Option<String>,
    #[arg(long)]
    pub minsize: Option<String>,
    #[arg(long)]
    pub maxsize: Option<String>,
    #[arg(long)]
    pub desiredsize: Option<String>,
    #[arg(long)]
    pub planid: Option<String>,
    #[arg(long)]
    pub planname: Option<String>,
    #[arg(long)]
    pub instance_templateid: Option<String>,
    /// Assign public IPs: true/false
    #[arg(long)]
    pub public_ip_enabled: Option<String>,
    #[arg(long)]
    pub vpc: Option<String>,
    #[arg(long)]
    pub load_balancers: Option<String>,
    #[arg(long)]
    pub security_groups: Option<String>,
    #[arg(long)]
    pub stackid: Option<String>,
    #[arg(long)]
    pub stackimage: Option<String>,
    #[arg(long)]
    pub target_groups: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    /// Create a scaling policy
    Create {
        autoscaling_id: String,
        name: String,
        /// Metric, e.g. cpu or ram
        #[arg(long = "type")]
        kind: Option<String>,
        /// Comparison, e.g. "above" or "below"
        #[arg(long)]
        compare: Option<String>,
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        adjust: Option<String>,
        #[arg(long)]
        period: Option<String>,
        #[arg(long)]
        cooldown: Option<String>,
        #[arg(long)]
        product: Option<String>,
    },
    /// Show a policy
    Get {
        autoscaling_id: String,
        policy_id: String,
    },
    /// List policies
    List { autoscaling_id: String },
    /// Delete a policy
    Delete { policy_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// Create a schedule
    Create {
        autoscaling_id: String,
        name: String,
        #[arg(long)]
        desiredsize: Option<String>,
        #[arg(long)]
        recurrence: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
    },
    /// Show a schedule
    Get {
        autoscaling_id: String,
        schedule_id: String,
    },
    /// List schedules
    List { autoscaling_id: String },
    /// Delete a schedule
    Delete {
        autoscaling_id: String,
        schedule_id: String,
    },
}
