//! Tests for the declarative TOML module host.

use crate::agent::domain::{AgentDomainError, NO_DESCRIPTION, Variadic};
use crate::discovery::{
    adapters::TomlModuleLoader,
    domain::{SourceUnit, UnitExports, UnitId},
    ports::{UnitLoadError, UnitLoadResult, UnitLoader},
};
use camino::Utf8Path;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn loader() -> TomlModuleLoader {
    TomlModuleLoader::new()
}

fn load(loader: &TomlModuleLoader, path: &str, source: &str) -> UnitLoadResult<UnitExports> {
    let relative = Utf8Path::new(path);
    let id = UnitId::from_relative_path(relative).expect("identifier derived");
    loader.load(&SourceUnit::new(id, relative.to_owned(), source.to_owned()))
}

const SUMMARIZE: &str = r#"
[[function]]
name = "summarize_text"
doc = """
Summarize a document.

Longer explanation that is not part of the description.
"""

[[function.param]]
name = "text"
type = "str"

[[function.param]]
name = "max_words"
type = "int"
default = 120

[[agent]]
function = "summarize_text"
tags = ["nlp"]
"#;

#[rstest]
fn bare_declaration_derives_metadata(loader: TomlModuleLoader) {
    let exports = load(&loader, "agents/text/summarize.toml", SUMMARIZE).expect("loads");
    let [descriptor] = exports.agents() else {
        panic!("expected exactly one agent");
    };

    assert_eq!(descriptor.name().as_str(), "summarize-text");
    assert_eq!(descriptor.description(), "Summarize a document.");
    assert_eq!(descriptor.tags(), ["nlp".to_owned()]);
    assert_eq!(
        descriptor.callable().to_string(),
        "agents/text/summarize:summarize_text"
    );

    let text = descriptor.parameters().get("text").expect("text parameter");
    assert!(text.required());
    assert_eq!(text.type_label(), "str");
    let max_words = descriptor
        .parameters()
        .get("max_words")
        .expect("max_words parameter");
    assert!(!max_words.required());
    assert_eq!(max_words.default(), Some(&json!(120)));
}

#[rstest]
fn overrides_replace_name_and_description(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "fetch"

[[agent]]
function = "fetch"
name = "web-fetcher"
description = "Fetches pages."
"#;
    let exports = load(&loader, "agents/web.toml", source).expect("loads");
    let [descriptor] = exports.agents() else {
        panic!("expected exactly one agent");
    };

    assert_eq!(descriptor.name().as_str(), "web-fetcher");
    assert_eq!(descriptor.description(), "Fetches pages.");
    assert!(descriptor.tags().is_empty());
    assert!(descriptor.parameters().is_empty());
}

#[rstest]
fn missing_doc_uses_placeholder(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "quiet"

[[agent]]
function = "quiet"
"#;
    let exports = load(&loader, "agents/quiet.toml", source).expect("loads");
    assert_eq!(
        exports.agents().first().map(|agent| agent.description()),
        Some(NO_DESCRIPTION)
    );
}

#[rstest]
fn optional_parameter_defaults_to_null(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "search"

[[function.param]]
name = "filter"
type = "Optional[str]"
optional = true

[[agent]]
function = "search"
"#;
    let exports = load(&loader, "agents/search.toml", source).expect("loads");
    let filter = exports
        .agents()
        .first()
        .and_then(|agent| agent.parameters().get("filter").cloned())
        .expect("filter parameter");

    assert!(!filter.required());
    assert_eq!(filter.default(), Some(&Value::Null));
}

#[rstest]
fn variadic_parameters_are_marked(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "run"

[[function.param]]
name = "args"
kind = "var_positional"

[[function.param]]
name = "options"
kind = "var_keyword"

[[agent]]
function = "run"
"#;
    let exports = load(&loader, "agents/run.toml", source).expect("loads");
    let parameters = exports
        .agents()
        .first()
        .map(|agent| agent.parameters().clone())
        .expect("agent declared");

    let args = parameters.get("args").expect("args parameter");
    assert_eq!(args.variadic(), Some(Variadic::Positional));
    assert!(!args.required());
    assert!(args.default().is_none());
    assert_eq!(
        parameters.get("options").and_then(|param| param.variadic()),
        Some(Variadic::Keyword)
    );
}

#[rstest]
fn several_agents_keep_declaration_order(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "beta"

[[function]]
name = "alpha"

[[agent]]
function = "beta"

[[agent]]
function = "alpha"
"#;
    let exports = load(&loader, "agents/pair.toml", source).expect("loads");
    let names: Vec<_> = exports
        .agents()
        .iter()
        .map(|agent| agent.name().as_str().to_owned())
        .collect();
    assert_eq!(names, ["beta", "alpha"]);
}

#[rstest]
fn syntax_error_is_reported(loader: TomlModuleLoader) {
    let result = load(&loader, "agents/broken.toml", "[[function]\nname = ");
    assert!(matches!(result, Err(UnitLoadError::Syntax { .. })));
}

#[rstest]
fn unknown_fields_are_rejected(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "f"
colour = "blue"
"#;
    let result = load(&loader, "agents/odd.toml", source);
    assert!(matches!(result, Err(UnitLoadError::Syntax { .. })));
}

#[rstest]
fn undefined_function_is_reported(loader: TomlModuleLoader) {
    let source = r#"
[[agent]]
function = "ghost"
"#;
    let result = load(&loader, "agents/ghost.toml", source);
    assert!(matches!(
        result,
        Err(UnitLoadError::UndefinedFunction { ref function, .. }) if function == "ghost"
    ));
}

#[rstest]
fn blank_name_override_is_a_declaration_error(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "f"

[[agent]]
function = "f"
name = "   "
"#;
    let result = load(&loader, "agents/blank.toml", source);
    assert!(matches!(result, Err(UnitLoadError::Declaration { .. })));
}

#[rstest]
fn variadic_with_default_is_a_declaration_error(loader: TomlModuleLoader) {
    let source = r#"
[[function]]
name = "f"

[[function.param]]
name = "rest"
kind = "var_positional"
default = 1
"#;
    let result = load(&loader, "agents/bad_variadic.toml", source);
    assert!(matches!(result, Err(UnitLoadError::Declaration { .. })));
}

#[rstest]
#[case("run:")]
#[case("a:b")]
fn function_names_with_colons_fail_only_their_unit(
    loader: TomlModuleLoader,
    #[case] function: &str,
) {
    let source = format!("[[function]]\nname = \"{function}\"\n");

    let result = load(&loader, "agents/colon.toml", &source);

    assert!(matches!(
        result,
        Err(UnitLoadError::Declaration {
            source: AgentDomainError::InvalidIdentifier(ref identifier),
            ..
        }) if identifier == function
    ));
}
