use api_generator::context::GenerationContext;
use api_generator::error::Error;
use api_generator::materializer::Materializer;
use api_generator::registry::TemplateEntry;
use api_generator::renderer::MiniJinjaRenderer;
use std::fs;
use tempfile::TempDir;

fn entries() -> Vec<TemplateEntry> {
    vec![
        TemplateEntry::new("cmd/api/main.go", "main.go.tmpl", "package main\n"),
        TemplateEntry::new("DBLayer/connection.go", "connection.go.tmpl", "// {{ db_type }}\n"),
        TemplateEntry::new("Dockerfile.db", "Dockerfile.db.tmpl", "# {{ cache_type }}\n"),
    ]
}

#[test_log::test]
fn test_materialize_writes_all_entries() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, temp_dir.path());
    let context = GenerationContext::new("postgresql", "memcached");

    let written = materializer.materialize(&entries(), &context).unwrap();

    assert_eq!(
        written,
        vec![
            temp_dir.path().join("cmd/api/main.go"),
            temp_dir.path().join("DBLayer/connection.go"),
            temp_dir.path().join("Dockerfile.db"),
        ]
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("DBLayer/connection.go")).unwrap(),
        "// postgresql\n"
    );
    assert_eq!(fs::read_to_string(temp_dir.path().join("Dockerfile.db")).unwrap(), "# memcached\n");
}

#[test]
fn test_materialize_overwrites_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("cmd/api/main.go");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "stale content that is longer than the template").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, temp_dir.path());
    materializer.materialize(&entries(), &GenerationContext::default()).unwrap();

    assert_eq!(fs::read_to_string(target).unwrap(), "package main\n");
}

#[test]
fn test_parse_failure_stops_batch() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, temp_dir.path());
    let mut entries = entries();
    entries[1].body = "// {{ db_type \n".to_string();

    let err = materializer.materialize(&entries, &GenerationContext::default()).unwrap_err();

    match err {
        Error::TemplateParse { name, .. } => assert_eq!(name, "connection.go.tmpl"),
        other => panic!("Expected TemplateParse, got {:?}", other),
    }
    assert!(temp_dir.path().join("cmd/api/main.go").exists());
    assert!(!temp_dir.path().join("DBLayer/connection.go").exists());
    assert!(!temp_dir.path().join("Dockerfile.db").exists());
}

#[test]
fn test_undefined_placeholder_fails_render() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, temp_dir.path());
    let entries = vec![TemplateEntry::new("cache.go", "cache.go.tmpl", "{{ cache_host }}")];

    let err = materializer.materialize(&entries, &GenerationContext::default()).unwrap_err();

    assert!(matches!(err, Error::Render { ref name, .. } if name == "cache.go.tmpl"));
    assert!(!temp_dir.path().join("cache.go").exists());
}

#[test]
fn test_directory_failure_keeps_earlier_files() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where a directory is needed
    fs::write(temp_dir.path().join("DBLayer"), "").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, temp_dir.path());
    let err = materializer.materialize(&entries(), &GenerationContext::default()).unwrap_err();

    match err {
        Error::CreateDirectory { path, .. } => assert_eq!(path, temp_dir.path().join("DBLayer")),
        other => panic!("Expected CreateDirectory, got {:?}", other),
    }
    assert!(temp_dir.path().join("cmd/api/main.go").exists());
    assert!(!temp_dir.path().join("Dockerfile.db").exists());
}

#[test]
fn test_file_creation_failure() {
    let temp_dir = TempDir::new().unwrap();
    // A directory sitting on the destination path
    fs::create_dir_all(temp_dir.path().join("Dockerfile.db")).unwrap();

    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, temp_dir.path());
    let err = materializer.materialize(&entries(), &GenerationContext::default()).unwrap_err();

    match err {
        Error::CreateFile { path, .. } => assert_eq!(path, temp_dir.path().join("Dockerfile.db")),
        other => panic!("Expected CreateFile, got {:?}", other),
    }
}
