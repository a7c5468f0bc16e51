use crate::modules::{CreateFile, CreateFileArgs, CreateFileError, Module};
use serde_json::json;
use tempfile::TempDir;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

#[test]
fn test_create_file_module_name() {
    let module = CreateFile::new();
    assert_eq!(module.name(), "create_file");
}

#[test]
fn test_create_file_module_description() {
    let module = CreateFile::new();
    assert!(module.description().contains("never overwrites"));
}

#[test]
fn test_args_parsing_content_defaults_to_empty() {
    let args: CreateFileArgs = serde_json::from_value(json!({
        "path": "/tmp/test.txt"
    }))
    .unwrap();

    assert_eq!(args.path, "/tmp/test.txt");
    assert_eq!(args.content, "");
}

#[test]
fn test_args_reject_unknown_keys() {
    let result = serde_json::from_value::<CreateFileArgs>(json!({
        "path": "/tmp/test.txt",
        "mode": "0644"
    }));

    assert!(result.is_err());
}

#[test]
fn test_argument_spec_requires_only_path() {
    let module = CreateFile::new();
    let spec = module.argument_spec();

    assert_eq!(spec["type"], "object");
    let required = spec["required"].as_array().unwrap();
    assert!(required.contains(&json!("path")));
    assert!(!required.contains(&json!("content")));
    assert_eq!(spec["properties"]["content"]["default"], "");
}

#[test]
fn test_docs_mirror_argument_spec() {
    let module = CreateFile::new();
    let docs = module.docs();

    assert_eq!(docs.module, "create_file");
    let path_opt = docs.options.iter().find(|o| o.name == "path").unwrap();
    assert!(path_opt.required);
    assert!(path_opt.default.is_none());
    let content_opt = docs.options.iter().find(|o| o.name == "content").unwrap();
    assert!(!content_opt.required);
    assert_eq!(content_opt.default.as_deref(), Some(""));
    assert_eq!(docs.returns[0].name, "message");
}

#[test]
fn test_run_creates_file() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");
        let module = CreateFile::new();

        let result = module
            .run(json!({
                "path": path.to_str().unwrap(),
                "content": "hello"
            }))
            .await
            .unwrap();

        assert_eq!(result["changed"], true);
        assert_eq!(result["failed"], false);
        assert_eq!(result["message"], "The file was created");

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "hello");
    });
}

#[test]
fn test_run_is_idempotent() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");
        let module = CreateFile::new();
        let args = json!({
            "path": path.to_str().unwrap(),
            "content": "hello"
        });

        let first = module.run(args.clone()).await.unwrap();
        assert_eq!(first["changed"], true);

        let second = module.run(args).await.unwrap();
        assert_eq!(second["changed"], false);
        assert_eq!(second["failed"], false);
        assert_eq!(second["message"], "The file already exists");

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "hello");
    });
}

#[test]
fn test_run_conflict_preserves_existing_file() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");
        tokio::fs::write(&path, "A").await.unwrap();
        let module = CreateFile::new();

        let err = module
            .run(json!({
                "path": path.to_str().unwrap(),
                "content": "B"
            }))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "The file already exists, but its content differs"
        );

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "A");
    });
}

#[test]
fn test_run_rejects_invalid_characters() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad path!.txt");
        let module = CreateFile::new();

        let err = module
            .run(json!({
                "path": path.to_str().unwrap(),
                "content": "x"
            }))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Incorrect file path, allowed symbols are: a-zA-Z0-9_-/."
        );
        assert!(!path.exists());
    });
}

#[test]
fn test_run_rejects_empty_path() {
    let rt = runtime();
    rt.block_on(async {
        let module = CreateFile::new();

        let err = module
            .run(json!({"path": "", "content": "x"}))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Incorrect file path, allowed symbols are: a-zA-Z0-9_-/."
        );
    });
}

#[test]
fn test_run_rejects_trailing_slash() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let dir_path = temp_dir.path().join("newdir");
        let path = format!("{}/", dir_path.to_str().unwrap());
        let module = CreateFile::new();

        let err = module
            .run(json!({"path": path, "content": "x"}))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Incorrect file path, / at the end of the path is not allowed"
        );
        assert!(!dir_path.exists());
    });
}

#[test]
fn test_run_missing_parent_directory_is_io_error() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/test.txt");
        let module = CreateFile::new();

        let err = module
            .run(json!({
                "path": path.to_str().unwrap(),
                "content": "x"
            }))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CreateFileError>(),
            Some(CreateFileError::Io(_))
        ));
        assert!(!path.exists());
    });
}

#[test]
fn test_run_default_content_writes_empty_file() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        let module = CreateFile::new();

        let result = module
            .run(json!({"path": path.to_str().unwrap()}))
            .await
            .unwrap();

        assert_eq!(result["changed"], true);
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "");
    });
}

#[test]
fn test_run_through_bus() {
    let rt = runtime();
    rt.block_on(async {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bus_test.txt");
        let bus = crate::ModuleBus::new();

        let (result, _) = bus
            .call(
                "create_file",
                json!({
                    "path": path.to_str().unwrap(),
                    "content": "from bus"
                }),
            )
            .await
            .unwrap();

        assert_eq!(result["changed"], true);
        assert_eq!(result["message"], "The file was created");
    });
}
