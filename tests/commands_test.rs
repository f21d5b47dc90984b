//! End-to-end command tests: parsed arguments in, rendered stdout out.
//!
//! The HTTP transport and the terminal are replaced by in-memory fakes, so
//! every test can inspect the requests that were (or were not) sent.

use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tempfile::TempDir;

use uthoctl::application::ApplicationError;
use uthoctl::cli::{execute_command, Cli, CliError, CliResult};
use uthoctl::config::{ConfigStore, Settings};
use uthoctl::domain::{DomainError, DESTROY_INSTANCE_CONFIRMATION};
use uthoctl::infrastructure::di::ServiceContainer;
use uthoctl::infrastructure::traits::HttpMethod;
use uthoctl::infrastructure::InfraError;
use uthoctl::util::testing::{
    init_test_setup, Answer, MockTransport, MockTransportFactory, ScriptedPrompter,
};

struct Harness {
    ctx: ServiceContainer,
    transport: Arc<MockTransport>,
    factory: Arc<MockTransportFactory>,
    prompter: Arc<ScriptedPrompter>,
    _dir: TempDir,
}

impl Harness {
    fn new(token: &str, prompter: Arc<ScriptedPrompter>) -> Self {
        init_test_setup();
        let dir = TempDir::new().unwrap();
        let transport = MockTransport::new();
        let factory = MockTransportFactory::new(transport.clone());
        let settings = Settings {
            token: token.to_string(),
            ..Settings::default()
        };
        let ctx = ServiceContainer::with_deps(
            settings,
            ConfigStore::new(dir.path().join("uthoctl.yaml")),
            prompter.clone(),
            factory.clone(),
        );
        Self {
            ctx,
            transport,
            factory,
            prompter,
            _dir: dir,
        }
    }

    fn logged_in(answer: Answer) -> Self {
        Self::new("secret-token", ScriptedPrompter::new(answer))
    }

    fn run(&self, args: &[&str]) -> (CliResult<()>, String) {
        let cli = Cli::try_parse_from(std::iter::once("uthoctl").chain(args.iter().copied()))
            .expect("valid arguments");
        let mut out = Vec::new();
        let result = execute_command(cli, &self.ctx, &mut out);
        (result, String::from_utf8(out).unwrap())
    }
}

fn lines(out: &str) -> Vec<&str> {
    out.lines().collect()
}

// ============================================================
// Listing and reading
// ============================================================

#[test]
fn given_vpcs_when_listing_then_header_and_one_row_per_vpc_in_order() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({
        "status": "success",
        "vpc": [
            {"id": "11", "network": "10.0.0.0", "name": "first", "size": 24, "dcslug": "innoida"},
            {"id": "12", "network": "10.1.0.0", "name": "second", "size": 24, "dcslug": "inmumbaizone2"}
        ]
    }));

    // Act
    let (result, out) = h.run(&["vpc", "list"]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    for header in ["ID", "Network", "Name", "Size", "Dcslug"] {
        assert!(lines[0].contains(header), "missing header {}", header);
    }
    assert!(lines[1].contains("first") && lines[1].contains("11"));
    assert!(lines[2].contains("second") && lines[2].contains("12"));

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].path, "vpc");
}

#[test]
fn given_http_error_when_reading_then_error_and_nothing_printed() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport.fail(404, "Cloud server not found");

    // Act
    let (result, out) = h.run(&["instance", "get", "99"]);

    // Assert
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("Cloud server not found"));
    assert!(out.is_empty());
}

#[test]
fn given_error_envelope_when_listing_then_api_message_reported() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport
        .respond(json!({"status": "error", "message": "Invalid Authentication"}));

    let (result, out) = h.run(&["firewall", "list"]);

    match result {
        Err(CliError::Infra(InfraError::Application(ApplicationError::Api { message }))) => {
            assert_eq!(message, "Invalid Authentication")
        }
        other => panic!("expected api error, got {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn given_no_token_when_listing_then_missing_token_without_transport() {
    let h = Harness::new("", ScriptedPrompter::new(Answer::Yes));

    let (result, out) = h.run(&["instance", "list"]);

    assert!(matches!(
        result,
        Err(CliError::Infra(InfraError::MissingToken))
    ));
    assert_eq!(h.factory.connects(), 0);
    assert!(h.transport.requests().is_empty());
    assert!(out.is_empty());
}

// ============================================================
// Sub-resources selected from the parent
// ============================================================

fn firewall_with_rules() -> serde_json::Value {
    json!({
        "status": "success",
        "firewalls": [{
            "id": "5",
            "name": "web",
            "rules": [
                {"id": "7", "firewallid": "5", "type": "incoming", "service": "SSH", "protocol": "tcp", "port": "22", "addresses": "0.0.0.0/0"},
                {"id": "8", "firewallid": "5", "type": "incoming", "service": "HTTP", "protocol": "tcp", "port": "80", "addresses": "0.0.0.0/0"}
            ]
        }]
    })
}

#[test]
fn given_rule_id_when_getting_rule_then_only_that_rule_rendered() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(firewall_with_rules());

    // Act
    let (result, out) = h.run(&["firewall", "rule", "get", "5", "8"]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let lines = lines(&out);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("HTTP"));
    assert_eq!(h.transport.requests()[0].path, "firewall/5");
}

#[test]
fn given_unknown_rule_id_when_getting_rule_then_not_found() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(firewall_with_rules());

    let (result, out) = h.run(&["firewall", "rule", "get", "5", "99"]);

    assert!(matches!(
        result,
        Err(CliError::Infra(InfraError::Application(ApplicationError::Domain(
            DomainError::NotFound { .. }
        ))))
    ));
    assert!(out.is_empty());
}

// ============================================================
// Destructive commands
// ============================================================

#[test]
fn given_declined_confirmation_when_deleting_then_aborted_without_request() {
    // Arrange
    let h = Harness::logged_in(Answer::No);

    // Act
    let (result, out) = h.run(&["instance", "delete", "42"]);

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(err, CliError::Aborted));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "Operation aborted.");
    assert_eq!(h.prompter.asked(), 1);
    assert!(h.transport.requests().is_empty());
    assert!(out.is_empty());
}

#[test]
fn given_unreadable_answer_when_deleting_then_prompt_error_without_request() {
    let h = Harness::logged_in(Answer::Fail);

    let (result, _) = h.run(&["vpc", "delete", "3"]);

    assert!(matches!(
        result,
        Err(CliError::Infra(InfraError::Prompt { .. }))
    ));
    assert!(h.transport.requests().is_empty());
}

#[test]
fn given_confirmed_instance_delete_then_destroy_sent_with_phrase_and_status_table() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport
        .respond(json!({"status": "success", "message": "Cloud server deleted"}));

    // Act
    let (result, out) = h.run(&["instance", "delete", "42"]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "cloud/42/destroy");
    assert_eq!(
        request.body.as_ref().unwrap()["confirm"],
        DESTROY_INSTANCE_CONFIRMATION
    );
    let lines = lines(&out);
    assert!(lines[0].contains("Status"));
    assert!(lines[1].contains("success"));
}

#[test]
fn given_confirmed_vpc_delete_then_status_line() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success"}));

    let (result, out) = h.run(&["vpc", "delete", "3"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(out, "Status: success\n");
}

#[test]
fn given_backup_disable_when_declined_then_aborted() {
    let h = Harness::logged_in(Answer::No);

    let (result, _) = h.run(&["instance", "backup", "disable", "42"]);

    assert!(matches!(result, Err(CliError::Aborted)));
    assert!(h.transport.requests().is_empty());
}

#[test]
fn given_backup_enable_then_no_confirmation_asked() {
    let h = Harness::logged_in(Answer::No);
    h.transport.respond(json!({"status": "success"}));

    let (result, out) = h.run(&["instance", "backup", "enable", "42"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(h.prompter.asked(), 0);
    assert_eq!(out, "Status: success\n");
    assert_eq!(h.transport.requests()[0].path, "cloud/42/backups/enable");
}

// ============================================================
// Creates
// ============================================================

#[test]
fn given_invalid_public_ip_flag_when_creating_autoscaling_then_invalid_args_before_client() {
    let h = Harness::logged_in(Answer::Yes);

    let (result, out) = h.run(&[
        "autoscaling",
        "create",
        "asg",
        "--public-ip-enabled",
        "maybe",
    ]);

    assert!(matches!(result, Err(CliError::InvalidArgs(_))));
    assert_eq!(h.factory.connects(), 0);
    assert!(out.is_empty());
}

#[test]
fn given_public_ip_flag_when_creating_autoscaling_then_sent_as_bool() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport
        .respond(json!({"status": "success", "id": "900"}));

    let (result, out) = h.run(&[
        "autoscaling",
        "create",
        "asg",
        "--public-ip-enabled",
        "Yes",
        "--os-disk-size",
        "80",
    ]);

    assert!(result.is_ok(), "{:?}", result);
    let body = h.transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["public_ip_enabled"], true);
    assert_eq!(body["os_disk_size"], 80);
    assert_eq!(body["name"], "asg");
    assert!(lines(&out)[1].contains("900"));
}

#[test]
fn given_instance_create_then_hostname_sent_and_password_shown() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({
        "status": "success",
        "cloudid": "1234",
        "password": "p4ss",
        "ipv4": "103.1.2.3"
    }));

    // Act
    let (result, out) = h.run(&[
        "instance",
        "create",
        "web-1",
        "--dcslug",
        "innoida",
        "--planid",
        "10045",
        "--image",
        "ubuntu-22.04-x86_64",
    ]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "cloud/deploy");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["cloud"][0]["hostname"], "web-1");
    assert_eq!(body["dcslug"], "innoida");
    assert!(body.get("firewall").is_none(), "empty optional fields are omitted");
    let lines = lines(&out);
    assert!(lines[0].contains("Instance Name") && lines[0].contains("Password"));
    for cell in ["web-1", "1234", "p4ss", "103.1.2.3", "success"] {
        assert!(lines[1].contains(cell), "missing {}", cell);
    }
}

#[test]
fn given_kubernetes_create_without_label_then_name_used_as_label() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport
        .respond(json!({"status": "success", "id": "77"}));

    let (result, out) = h.run(&["kubernetes", "create", "prod", "--dcslug", "innoida"]);

    assert!(result.is_ok(), "{:?}", result);
    let body = h.transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["cluster_label"], "prod");
    let lines = lines(&out);
    assert!(lines[0].contains("Kubernetes Name"));
    assert!(lines[1].contains("prod") && lines[1].contains("77"));
}

#[test]
fn given_kubernetes_loadbalancer_attach_then_parent_labelled_header() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport
        .respond(json!({"status": "success", "id": "3"}));

    let (result, out) = h.run(&["kubernetes", "loadbalancer", "create", "77", "3"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(h.transport.requests()[0].path, "kubernetes/77/loadbalancer/3");
    assert!(out.contains("Kubernetes Loadbalancer Id"));
}

#[test]
fn given_dns_record_create_then_hostname_column_from_flag() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport
        .respond(json!({"status": "success", "id": "501"}));

    let (result, out) = h.run(&[
        "domain", "records", "create", "example.com", "--type", "A", "--hostname", "www",
        "--value", "1.2.3.4", "--weight", "5",
    ]);

    assert!(result.is_ok(), "{:?}", result);
    let body = h.transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["type"], "A");
    assert_eq!(body["wight"], "5");
    let lines = lines(&out);
    for cell in ["example.com", "501", "www", "success"] {
        assert!(lines[1].contains(cell), "missing {}", cell);
    }
}

// ============================================================
// Local commands
// ============================================================

#[test]
fn given_token_flag_when_authenticating_then_saved_and_path_printed() {
    // Arrange
    let h = Harness::new("", ScriptedPrompter::new(Answer::Yes));

    // Act
    let (result, out) = h.run(&["auth", "--token", "  tok-123  "]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let path = h.ctx.store.path().display().to_string();
    assert_eq!(out, format!("Token saved successfully at {}\n", path));
    assert_eq!(h.ctx.store.load().unwrap().token, "tok-123");
    assert!(h.transport.requests().is_empty());
}

#[test]
fn given_blank_entries_when_authenticating_then_prompts_until_token() {
    let prompter = ScriptedPrompter::with_secrets(Answer::Yes, &["", "   ", "tok-456"]);
    let h = Harness::new("", prompter);

    let (result, _) = h.run(&["auth"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(h.prompter.asked(), 3);
    assert_eq!(h.ctx.store.load().unwrap().token, "tok-456");
}

#[test]
fn given_closed_input_when_authenticating_then_prompt_error() {
    let h = Harness::new("", ScriptedPrompter::new(Answer::Yes));

    let (result, _) = h.run(&["auth"]);

    assert!(matches!(
        result,
        Err(CliError::Infra(InfraError::Prompt { .. }))
    ));
}

#[test]
fn given_token_when_showing_config_then_masked() {
    let h = Harness::new("abcdefgh1234", ScriptedPrompter::new(Answer::Yes));

    let (result, out) = h.run(&["config", "show"]);

    assert!(result.is_ok(), "{:?}", result);
    assert!(out.contains("****1234"));
    assert!(!out.contains("abcdefgh"));
}

#[test]
fn given_shell_when_generating_completion_then_script_mentions_binary() {
    let h = Harness::logged_in(Answer::Yes);

    let (result, out) = h.run(&["completion", "bash"]);

    assert!(result.is_ok(), "{:?}", result);
    assert!(out.contains("uthoctl"));
}

#[test]
fn given_unparsable_config_file_when_authenticating_then_file_rewritten() {
    // Arrange
    let h = Harness::new("", ScriptedPrompter::new(Answer::Yes));
    std::fs::write(h.ctx.store.path(), "token: [unterminated\n").unwrap();

    // Act
    let (result, out) = h.run(&["auth", "--token", "newtok"]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    assert!(out.starts_with("Token saved successfully at"));
    assert_eq!(h.ctx.store.load().unwrap().token, "newtok");
}

#[test]
fn given_unparsable_config_file_when_asking_path_then_path_printed() {
    let h = Harness::new("", ScriptedPrompter::new(Answer::Yes));
    std::fs::write(h.ctx.store.path(), "token: [unterminated\n").unwrap();

    let (result, out) = h.run(&["config", "path"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(out, format!("{}\n", h.ctx.store.path().display()));
}

// ============================================================
// Load balancer sub-resources
// ============================================================

fn assert_headers(line: &str, headers: &[&str]) {
    for header in headers {
        assert!(line.contains(header), "missing header {} in {:?}", header, line);
    }
}

fn assert_row(line: &str, cells: &[&str]) {
    for cell in cells {
        assert!(line.contains(cell), "missing {} in {:?}", cell, line);
    }
}

fn loadbalancer_with_children() -> serde_json::Value {
    json!({
        "status": "success",
        "loadbalancers": [{
            "id": "3",
            "ip": "103.1.1.1",
            "frontends": [{"id": "21", "name": "web", "algorithm": "roundrobin", "port": 80}],
            "backends": [
                {"id": "31", "ip": "10.0.0.5", "cloudid": "1234", "name": "app-1"},
                {"id": "32", "ip": "10.0.0.6", "cloudid": "1235", "name": "app-2"}
            ],
            "acls": [{"id": "100", "name": "api", "acl_condition": "path_beg", "value": "/api"}],
            "routes": [
                {"id": "41", "acl_id": "100", "acl_name": "api", "routing_condition": "true", "backend_id": "31"},
                {"id": "42", "acl_id": "101", "acl_name": "static", "routing_condition": "false", "backend_id": "32"}
            ]
        }]
    })
}

#[test]
fn given_acl_flags_when_creating_acl_then_condition_sent_and_row_rendered() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success", "id": "100"}));

    // Act
    let (result, out) = h.run(&[
        "loadbalancer", "acl", "create", "3", "api", "--condition-type", "path_beg",
        "--frontend-id", "21", "--value", "/api",
    ]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "loadbalancer/3/acl");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["name"], "api");
    assert_eq!(body["conditiontype"], "path_beg");
    assert_eq!(body["frontend_id"], "21");
    assert_eq!(body["value"], "/api");
    let lines = lines(&out);
    assert_headers(lines[0], &["Acl Name", "Acl Id", "Status"]);
    assert_row(lines[1], &["api", "100", "success"]);
}

#[test]
fn given_frontend_flags_when_creating_frontend_then_optional_fields_omitted() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success", "frontendid": 21}));

    let (result, out) = h.run(&[
        "loadbalancer", "frontend", "create", "3", "web", "--proto", "http", "--port", "80",
        "--algorithm", "roundrobin",
    ]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "loadbalancer/3/frontend");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["proto"], "http");
    assert_eq!(body["port"], "80");
    assert_eq!(body["algorithm"], "roundrobin");
    assert!(body.get("certificate_id").is_none());
    let lines = lines(&out);
    assert_headers(lines[0], &["Frontend Name", "Frontend Id", "Status"]);
    assert_row(lines[1], &["web", "21", "success"]);
}

#[test]
fn given_backend_positionals_when_creating_backend_then_port_flag_becomes_backend_port() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success", "backendid": "31"}));

    let (result, out) = h.run(&[
        "loadbalancer", "backend", "create", "3", "21", "1234", "--port", "8080",
    ]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "loadbalancer/3/backend");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["frontend_id"], "21");
    assert_eq!(body["cloudid"], "1234");
    assert_eq!(body["backend_port"], "8080");
    let lines = lines(&out);
    assert_headers(lines[0], &["Backend Name", "Backend Id", "Status"]);
    assert_row(lines[1], &["1234", "31", "success"]);
}

#[test]
fn given_route_flags_when_creating_route_then_condition_and_target_groups_sent() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success", "id": "41"}));

    let (result, out) = h.run(&[
        "loadbalancer", "route", "create", "3", "21", "100", "--route-condition", "true",
        "--target-groups", "12",
    ]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "loadbalancer/3/route");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["frontend_id"], "21");
    assert_eq!(body["acl_id"], "100");
    assert_eq!(body["route_condition"], "true");
    assert_eq!(body["target_groups"], "12");
    let lines = lines(&out);
    assert_headers(lines[0], &["Route Id", "Status"]);
    assert_row(lines[1], &["41", "success"]);
}

#[test]
fn given_loadbalancer_when_listing_routes_then_rows_in_api_order() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(loadbalancer_with_children());

    let (result, out) = h.run(&["loadbalancer", "route", "list", "3"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(h.transport.requests()[0].path, "loadbalancer/3");
    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    assert_headers(lines[0], &["ID", "ACLID", "ACLName", "RoutingCondition", "BackendID"]);
    assert_row(lines[1], &["41", "api"]);
    assert_row(lines[2], &["42", "static"]);
}

#[test]
fn given_backend_id_when_getting_backend_then_only_that_backend() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(loadbalancer_with_children());

    let (result, out) = h.run(&["loadbalancer", "backend", "get", "3", "32"]);

    assert!(result.is_ok(), "{:?}", result);
    let lines = lines(&out);
    assert_eq!(lines.len(), 2);
    assert_headers(lines[0], &["ID", "IP", "Cloudid", "Name", "RAM", "CPU", "Disk"]);
    assert_row(lines[1], &["32", "app-2", "1235"]);
}

// ============================================================
// Autoscaling policies and schedules
// ============================================================

fn group_with_policies_and_schedules() -> serde_json::Value {
    json!({
        "status": "success",
        "groups": [{
            "id": "9",
            "name": "asg",
            "policies": [
                {"id": "31", "productid": "9", "name": "cpu-high", "type": "cpu", "value": 80, "status": "active"},
                {"id": "32", "productid": "9", "name": "ram-high", "type": "ram", "value": 70, "status": "active"}
            ],
            "schedules": [
                {"id": "4", "groupid": "9", "name": "nightly", "desiredsize": 1, "recurrence": "daily", "start_date": "2026-01-01", "timezone": "UTC"},
                {"id": "5", "groupid": "9", "name": "morning", "desiredsize": 3, "recurrence": "daily", "start_date": "2026-01-02", "timezone": "UTC"}
            ]
        }]
    })
}

#[test]
fn given_policy_flags_when_creating_policy_then_group_id_sent_as_productid() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success", "policyid": "31"}));

    // Act
    let (result, out) = h.run(&[
        "autoscaling", "policy", "create", "9", "cpu-high", "--type", "cpu", "--compare",
        "above", "--value", "80", "--adjust", "1", "--period", "5m", "--cooldown", "300",
        "--product", "asg",
    ]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "autoscaling/policy");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["productid"], "9");
    assert_eq!(body["name"], "cpu-high");
    assert_eq!(body["type"], "cpu");
    assert_eq!(body["compare"], "above");
    assert_eq!(body["cooldown"], "300");
    assert_eq!(body["product"], "asg");
    let lines = lines(&out);
    assert_headers(lines[0], &["Policy Name", "Policy Id", "Status"]);
    assert_row(lines[1], &["cpu-high", "31", "success"]);
}

#[test]
fn given_group_when_listing_policies_then_rows_in_api_order() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(group_with_policies_and_schedules());

    let (result, out) = h.run(&["autoscaling", "policy", "list", "9"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(h.transport.requests()[0].path, "autoscaling/9");
    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    assert_headers(
        lines[0],
        &["ID", "Autoscaling id", "Name", "Type", "Value", "Status", "Cloudid", "Maxsize", "Minsize"],
    );
    assert_row(lines[1], &["31", "cpu-high"]);
    assert_row(lines[2], &["32", "ram-high"]);
}

#[test]
fn given_policy_id_when_getting_policy_then_only_that_policy() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(group_with_policies_and_schedules());

    let (result, out) = h.run(&["autoscaling", "policy", "get", "9", "32"]);

    assert!(result.is_ok(), "{:?}", result);
    let lines = lines(&out);
    assert_eq!(lines.len(), 2);
    assert_row(lines[1], &["ram-high", "70"]);
}

#[test]
fn given_confirmed_policy_delete_then_policy_path_and_status_line() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success"}));

    let (result, out) = h.run(&["autoscaling", "policy", "delete", "31"]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "autoscaling/policy/31");
    assert_eq!(out, "Status: success\n");
}

#[test]
fn given_schedule_flags_when_creating_schedule_then_posted_under_group() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success", "scheduleid": "4"}));

    let (result, out) = h.run(&[
        "autoscaling", "schedule", "create", "9", "nightly", "--desiredsize", "1",
        "--recurrence", "daily", "--start-date", "2026-01-01 00:00:00",
    ]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "autoscaling/9/schedulepolicy");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["name"], "nightly");
    assert_eq!(body["desiredsize"], "1");
    assert_eq!(body["recurrence"], "daily");
    assert_eq!(body["start_date"], "2026-01-01 00:00:00");
    let lines = lines(&out);
    assert_headers(lines[0], &["Schedule Name", "Schedule Id", "Status"]);
    assert_row(lines[1], &["nightly", "4", "success"]);
}

#[test]
fn given_group_when_listing_schedules_then_rows_in_api_order() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(group_with_policies_and_schedules());

    let (result, out) = h.run(&["autoscaling", "schedule", "list", "9"]);

    assert!(result.is_ok(), "{:?}", result);
    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    assert_headers(
        lines[0],
        &["ID", "Group id", "Name", "Desiredsize", "Recurrence", "StartDate", "Status", "Timezone"],
    );
    assert_row(lines[1], &["nightly", "2026-01-01"]);
    assert_row(lines[2], &["morning", "2026-01-02"]);
}

#[test]
fn given_schedule_id_when_getting_schedule_then_only_that_schedule() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(group_with_policies_and_schedules());

    let (result, out) = h.run(&["autoscaling", "schedule", "get", "9", "5"]);

    assert!(result.is_ok(), "{:?}", result);
    let lines = lines(&out);
    assert_eq!(lines.len(), 2);
    assert_row(lines[1], &["morning"]);
}

#[test]
fn given_confirmed_schedule_delete_then_nested_path_and_status_line() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success"}));

    let (result, out) = h.run(&["autoscaling", "schedule", "delete", "9", "4"]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "autoscaling/9/schedulepolicy/4");
    assert_eq!(out, "Status: success\n");
}

#[test]
fn given_no_token_when_deleting_autoscaling_group_then_missing_token_before_prompt() {
    let h = Harness::new("", ScriptedPrompter::new(Answer::Yes));

    let (result, out) = h.run(&["autoscaling", "delete", "9", "--name", "asg"]);

    assert!(matches!(
        result,
        Err(CliError::Infra(InfraError::MissingToken))
    ));
    assert_eq!(h.prompter.asked(), 0);
    assert!(h.transport.requests().is_empty());
    assert!(out.is_empty());
}

// ============================================================
// Object storage
// ============================================================

#[test]
fn given_bucket_name_when_getting_bucket_then_selected_row() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({
        "status": "success",
        "buckets": [
            {"name": "logs", "dcslug": "innoida", "size": 250, "status": "active"},
            {"name": "media", "dcslug": "innoida", "size": 500, "status": "active"}
        ]
    }));

    let (result, out) = h.run(&["objectstorage", "get", "innoida", "media"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(h.transport.requests()[0].path, "objectstorage/innoida/buckets");
    let lines = lines(&out);
    assert_eq!(lines.len(), 2);
    assert_headers(lines[0], &["Name", "Dcslug", "Size", "Status", "ObjectCount", "CurrentSize"]);
    assert_row(lines[1], &["media", "500"]);
}

#[test]
fn given_confirmed_bucket_delete_then_scoped_path_and_status_line() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success"}));

    let (result, out) = h.run(&["objectstorage", "delete", "innoida", "media"]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "objectstorage/innoida/bucket/media/delete");
    assert_eq!(out, "Status: success\n");
}

#[test]
fn given_key_name_when_creating_access_key_then_name_and_status_rendered() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success"}));

    let (result, out) = h.run(&["objectstorage", "accesskey", "create", "innoida", "deploy-key"]);

    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "objectstorage/innoida/accesskey/create");
    assert_eq!(request.body.as_ref().unwrap()["accesskey_name"], "deploy-key");
    let lines = lines(&out);
    assert_headers(lines[0], &["Accesskey Name", "Status"]);
    assert_row(lines[1], &["deploy-key", "success"]);
}

// ============================================================
// Target groups
// ============================================================

#[test]
fn given_health_check_flags_when_creating_target_group_then_all_sent() {
    // Arrange
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(json!({"status": "success", "targetgroupid": 12}));

    // Act
    let (result, out) = h.run(&[
        "targetgroup", "create", "web-tg", "--protocol", "HTTP", "--port", "80",
        "--health-check-path", "/health", "--health-check-protocol", "HTTP",
        "--health-check-interval", "30", "--health-check-timeout", "5",
        "--healthy-threshold", "2", "--unhealthy-threshold", "3",
    ]);

    // Assert
    assert!(result.is_ok(), "{:?}", result);
    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "targetgroup");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["name"], "web-tg");
    assert_eq!(body["protocol"], "HTTP");
    assert_eq!(body["health_check_path"], "/health");
    assert_eq!(body["health_check_interval"], "30");
    assert_eq!(body["unhealthy_threshold"], "3");
    let lines = lines(&out);
    assert_headers(lines[0], &["Targetgroup Name", "Targetgroup Id", "Status"]);
    assert_row(lines[1], &["web-tg", "12", "success"]);
}

fn target_group_with_targets() -> serde_json::Value {
    json!({
        "status": "success",
        "targetgroups": [{
            "id": 12,
            "name": "web-tg",
            "targets": [
                {"id": "t-1", "ip": "10.0.0.5", "cloudid": "1234", "status": "healthy"},
                {"id": "t-2", "ip": "10.0.0.6", "cloudid": "1235", "status": "draining"}
            ]
        }]
    })
}

#[test]
fn given_target_group_when_listing_targets_then_rows_in_api_order() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(target_group_with_targets());

    let (result, out) = h.run(&["targetgroup", "target", "list", "12"]);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(h.transport.requests()[0].path, "targetgroup/12");
    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    assert_headers(lines[0], &["IP", "Cloudid", "Status", "ID"]);
    assert_row(lines[1], &["10.0.0.5", "healthy", "t-1"]);
    assert_row(lines[2], &["10.0.0.6", "draining", "t-2"]);
}

#[test]
fn given_target_id_when_getting_target_then_only_that_target() {
    let h = Harness::logged_in(Answer::Yes);
    h.transport.respond(target_group_with_targets());

    let (result, out) = h.run(&["targetgroup", "target", "get", "12", "t-2"]);

    assert!(result.is_ok(), "{:?}", result);
    let lines = lines(&out);
    assert_eq!(lines.len(), 2);
    assert_row(lines[1], &["10.0.0.6", "t-2"]);
}
