use autowire::api::*;
use std::sync::Arc;

struct Config {
    project_name: String,
    max_iterations: u32,
    debug_mode: bool,
}

struct Runtime {
    model_name: String,
    api_endpoint: String,
    timeout: u64,
}

struct Approval {
    yolo_mode: bool,
}

struct ReadFileTool {
    config: Arc<Config>,
    approval: Arc<Approval>,
}
autowire::injectable!(ReadFileTool { config: Config, approval: Approval });

struct WriteFileTool {
    config: Arc<Config>,
    approval: Arc<Approval>,
    runtime: Arc<Runtime>,
}
autowire::injectable!(WriteFileTool {
    config: Config,
    approval: Approval,
    runtime: Runtime
});

struct SearchTool {
    config: Arc<Config>,
    runtime: Arc<Runtime>,
}
autowire::injectable!(SearchTool { config: Config, runtime: Runtime });

struct SimpleTool {}
autowire::injectable!(SimpleTool {});

#[derive(Debug)]
struct AuditLog;

#[derive(Debug)]
struct AuditedTool {
    audit: Arc<AuditLog>,
}
autowire::injectable!(AuditedTool { audit: AuditLog });

fn seeded_registry() -> TypedRegistry {
    let mut registry = TypedRegistry::new();
    registry.register(Config {
        project_name: "p".to_string(),
        max_iterations: 10,
        debug_mode: true,
    });
    registry.register(Runtime {
        model_name: "m".to_string(),
        api_endpoint: "url".to_string(),
        timeout: 30,
    });
    registry.register(Approval { yolo_mode: true });
    registry
}

#[test]
fn test_end_to_end_tool_loading() {
    let registry = seeded_registry();

    let read_tool: ReadFileTool = resolve(&registry).unwrap();
    assert_eq!(read_tool.config.project_name, "p");
    assert_eq!(read_tool.config.max_iterations, 10);
    assert!(read_tool.config.debug_mode);
    assert!(read_tool.approval.yolo_mode);

    let write_tool: WriteFileTool = resolve(&registry).unwrap();
    assert_eq!(write_tool.runtime.model_name, "m");
    assert_eq!(write_tool.runtime.api_endpoint, "url");
    assert_eq!(write_tool.runtime.timeout, 30);

    let search_tool: SearchTool = resolve(&registry).unwrap();
    assert_eq!(search_tool.config.project_name, "p");

    assert!(resolve::<SimpleTool>(&registry).is_ok());

    // AuditLog was never registered.
    let err = resolve::<AuditedTool>(&registry).unwrap_err();
    assert!(matches!(
        err,
        InjectionError::UnresolvedDependency { .. }
    ));
    assert!(err.to_string().contains("AuditLog"));
}

#[test]
fn test_identity_injection_integration() {
    let registry = seeded_registry();
    let registered = registry.lookup::<Config>().unwrap();

    let read_tool: ReadFileTool = resolve(&registry).unwrap();
    let write_tool: WriteFileTool = resolve(&registry).unwrap();

    assert!(Arc::ptr_eq(&registered, &read_tool.config));
    assert!(Arc::ptr_eq(&read_tool.config, &write_tool.config));
}

#[test]
fn test_replacement_integration() {
    let mut registry = seeded_registry();
    registry.register(Runtime {
        model_name: "replacement".to_string(),
        api_endpoint: "url2".to_string(),
        timeout: 60,
    });

    let tool: SearchTool = resolve(&registry).unwrap();
    assert_eq!(tool.runtime.model_name, "replacement");
    assert_eq!(tool.runtime.timeout, 60);
}

#[test]
fn test_diagnostic_reports_integration() {
    let registry = seeded_registry();

    let snapshot = RegistrySnapshot::from_registry(&registry);
    assert_eq!(snapshot.registered_types.len(), 3);

    let signature = introspect::<WriteFileTool>().unwrap();
    let report = SignatureReport::from_signature(&signature);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["parameters"].as_array().unwrap().len(), 3);
    assert_eq!(json["parameters"][2]["name"], "runtime");
}
