//! Error taxonomy tests: every failure mode is typed, tagged with the
//! document that produced it, and terminal for the whole compile call

use quilt::blueprint::{BlueprintCompiler, CompileError, DocumentKind};

use super::helpers::*;

#[test]
fn test_blueprint_not_found() {
    let project = init_project();
    let compiler = BlueprintCompiler::new(project.path());

    let err = compiler.compile("nonexistent.yaml").unwrap_err();
    assert!(matches!(err, CompileError::NotFound { .. }));
    assert!(err.to_string().contains("Blueprint not found"));
    assert!(err.to_string().contains("nonexistent.yaml"));
}

#[test]
fn test_task_file_not_found() {
    let project = init_project();
    let root = project.path();
    write_blueprint(root, "blueprint.yaml", &blueprint_running(&["missing.yaml"]));

    let err = BlueprintCompiler::new(root)
        .compile("blueprint.yaml")
        .unwrap_err();

    assert!(matches!(err, CompileError::NotFound { .. }));
    assert_eq!(err.document(), &DocumentKind::routine("missing.yaml"));
    assert!(err.to_string().contains("Task file missing"));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_blueprint_syntax_error() {
    let project = init_project();
    let root = project.path();
    write_blueprint(root, "invalid.yaml", "name: Test\ninvalid: yaml: syntax:\n");

    let err = BlueprintCompiler::new(root).compile("invalid.yaml").unwrap_err();

    assert!(matches!(
        err,
        CompileError::Syntax {
            rendered: false,
            ..
        }
    ));
    assert!(!err.to_string().contains("after rendering"));
}

#[test]
fn test_routine_syntax_error_after_rendering() {
    // The raw file is only invalid YAML once the variable is substituted
    let project = init_project();
    let root = project.path();
    write_task(root, "broken.yaml", "steps: {{ vars.inject }}\n");
    write_blueprint(
        root,
        "blueprint.yaml",
        "name: Inject\ntarget: h1\nuser: root\nvars:\n  inject: \"[\"\nrun:\n  - file: broken.yaml\n",
    );

    let err = BlueprintCompiler::new(root)
        .compile("blueprint.yaml")
        .unwrap_err();

    assert!(matches!(err, CompileError::Syntax { rendered: true, .. }));
    assert!(err.to_string().contains("after rendering"));
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn test_empty_blueprint_file() {
    let project = init_project();
    let root = project.path();
    write_blueprint(root, "empty.yaml", "");

    let err = BlueprintCompiler::new(root).compile("empty.yaml").unwrap_err();

    assert!(matches!(err, CompileError::EmptyDocument { .. }));
    assert!(err.to_string().contains("is empty"));
}

#[test]
fn test_comment_only_blueprint_is_empty() {
    let project = init_project();
    let root = project.path();
    write_blueprint(root, "comments.yaml", "# nothing but comments\n");

    let err = BlueprintCompiler::new(root)
        .compile("comments.yaml")
        .unwrap_err();

    assert!(matches!(err, CompileError::EmptyDocument { .. }));
}

#[test]
fn test_routine_empty_after_rendering() {
    // The file renders to whitespace only, which parses to nothing
    let project = init_project();
    let root = project.path();
    write_task(root, "hollow.yaml", "{{ vars.nothing }}\n");
    write_blueprint(
        root,
        "blueprint.yaml",
        "name: Hollow\ntarget: h1\nuser: root\nvars:\n  nothing: \"\"\nrun:\n  - file: hollow.yaml\n",
    );

    let err = BlueprintCompiler::new(root)
        .compile("blueprint.yaml")
        .unwrap_err();

    assert!(matches!(
        err,
        CompileError::EmptyDocument { rendered: true, .. }
    ));
    assert!(err.to_string().contains("after rendering"));
}

#[test]
fn test_blueprint_grammar_error() {
    let project = init_project();
    let root = project.path();
    write_blueprint(root, "bad_schema.yaml", "invalid_field: value\n");

    let err = BlueprintCompiler::new(root)
        .compile("bad_schema.yaml")
        .unwrap_err();

    assert!(matches!(err, CompileError::Grammar { .. }));
    assert_eq!(err.document(), &DocumentKind::blueprint("bad_schema.yaml"));
}

#[test]
fn test_routine_grammar_error_tagged_with_filename() {
    let project = init_project();
    let root = project.path();
    write_task(root, "invalid_task.yaml", "invalid_field: value\n");
    write_blueprint(
        root,
        "blueprint.yaml",
        &blueprint_running(&["invalid_task.yaml"]),
    );

    let err = BlueprintCompiler::new(root)
        .compile("blueprint.yaml")
        .unwrap_err();

    assert!(matches!(err, CompileError::Grammar { .. }));
    assert_eq!(err.document(), &DocumentKind::routine("invalid_task.yaml"));
    assert!(err.to_string().contains("invalid_task.yaml"));
}

#[test]
fn test_missing_variable_fails_with_variable_error() {
    let project = init_project();
    let root = project.path();
    write_task(root, "a.yaml", &templated_task());
    // vars is empty, so vars.port cannot resolve
    write_blueprint(
        root,
        "blueprint.yaml",
        "name: Missing Var\ntarget: h1\nuser: root\nvars: {}\nrun:\n  - file: a.yaml\n",
    );

    let err = BlueprintCompiler::new(root)
        .compile("blueprint.yaml")
        .unwrap_err();

    assert!(matches!(err, CompileError::Variable { .. }));
    assert_eq!(err.document(), &DocumentKind::routine("a.yaml"));
    assert!(err.to_string().contains("a.yaml"));
}

#[test]
fn test_missing_file_reported_before_templating() {
    // The routine references an undefined variable, but the run list hits a
    // missing file first; existence is checked before any hydration
    let project = init_project();
    let root = project.path();
    write_task(root, "later.yaml", "steps:\n  - name: {{ vars.undefined }}\n    uses: shell\n");
    write_blueprint(
        root,
        "blueprint.yaml",
        &blueprint_running(&["absent.yaml", "later.yaml"]),
    );

    let err = BlueprintCompiler::new(root)
        .compile("blueprint.yaml")
        .unwrap_err();

    assert!(matches!(err, CompileError::NotFound { .. }));
    assert_eq!(err.document(), &DocumentKind::routine("absent.yaml"));
}

#[test]
fn test_exit_codes_by_kind() {
    let project = init_project();
    let root = project.path();
    write_blueprint(root, "empty.yaml", "");

    let compiler = BlueprintCompiler::new(root);
    assert_eq!(compiler.compile("absent.yaml").unwrap_err().exit_code(), 66);
    assert_eq!(compiler.compile("empty.yaml").unwrap_err().exit_code(), 65);
}
