//! Property-based tests for extraction and synthesis
//!
//! These tests verify invariants that should hold for all inputs:
//! - A parameter group with N names expands to N items of its type
//! - A forwarding method passes every input to `Called`, in order
//! - Accessors are indexed by position among all outputs
//! - Rendering the same source twice is byte-identical

use mockgen::{extract, parse_source, FileHeader, MockSynthesizer, SignatureTable};
use proptest::prelude::*;
use std::path::Path;

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

const RESULT_TYPES: &[&str] = &["error", "int", "string", "Widget"];

/// Parameter name, unique per method once indexed
fn param_name() -> impl Strategy<Value = String> {
    "p[a-z0-9]{0,6}".prop_filter("not a keyword", |s| !GO_KEYWORDS.contains(&s.as_str()))
}

/// Parameter groups: (name count, type)
fn param_groups() -> impl Strategy<Value = Vec<(usize, &'static str)>> {
    prop::collection::vec((1usize..4, prop::sample::select(vec!["int", "string", "Widget"])), 0..4)
}

fn results() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(RESULT_TYPES.to_vec()), 0..4)
}

fn table_for(source: &str) -> SignatureTable {
    let file = parse_source(source, Path::new("gen.go")).unwrap();
    extract(&file).unwrap()
}

fn render(source: &str) -> String {
    let header = FileHeader {
        source_name: "gen.go".to_string(),
        package: "gen".to_string(),
    };
    MockSynthesizer::default().render(&table_for(source), &header)
}

/// Build a one-method interface, naming every parameter `<prefix><index>`.
fn method_source(prefix: &str, groups: &[(usize, &str)], results: &[&str]) -> (String, Vec<String>) {
    let mut names = Vec::new();
    let params = groups
        .iter()
        .map(|(count, ty)| {
            let group: Vec<String> = (0..*count)
                .map(|_| {
                    let name = format!("{prefix}{}", names.len());
                    names.push(name.clone());
                    name
                })
                .collect();
            format!("{} {ty}", group.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let results = match results {
        [] => String::new(),
        [single] => format!(" {single}"),
        many => format!(" ({})", many.join(", ")),
    };

    let source = format!("package gen\n\ntype Subject interface {{\n\tDo({params}){results}\n}}\n");
    (source, names)
}

proptest! {
    /// Property: every name in a group becomes one input of the group's type
    #[test]
    fn prop_group_expansion(prefix in param_name(), groups in param_groups()) {
        let (source, names) = method_source(&prefix, &groups, &[]);
        let table = table_for(&source);
        let method = &table.get("Subject").unwrap().methods[0];

        let expected_types: Vec<&str> = groups
            .iter()
            .flat_map(|(count, ty)| std::iter::repeat(*ty).take(*count))
            .collect();
        let names_found: Vec<&str> = method.inputs.iter().map(|i| i.name.as_deref().unwrap()).collect();
        let types_found: Vec<&str> = method.inputs.iter().map(|i| i.ty.as_str()).collect();

        prop_assert_eq!(names_found, names.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(types_found, expected_types);
    }

    /// Property: `Called` receives every input, in declared order
    #[test]
    fn prop_called_receives_all_inputs(prefix in param_name(), groups in param_groups()) {
        let (source, names) = method_source(&prefix, &groups, &["error"]);
        let rendered = render(&source);

        let expected = format!("\targs := m.Called({})\n", names.join(", "));
        prop_assert!(rendered.contains(&expected), "missing `{}` in\n{}", expected, rendered);
    }

    /// Property: each output uses its type's accessor at its own index
    #[test]
    fn prop_accessor_per_output(results in results()) {
        let (source, _) = method_source("p", &[], &results);
        let rendered = render(&source);

        if results.is_empty() {
            prop_assert!(rendered.contains("\tm.Called()\n"));
            prop_assert!(!rendered.contains("return"));
        } else {
            let expected = results
                .iter()
                .enumerate()
                .map(|(i, ty)| match *ty {
                    "error" => format!("args.Error({i})"),
                    "int" => format!("args.Int({i})"),
                    "string" => format!("args.String({i})"),
                    other => format!("args.Get({i}).(*{other})"),
                })
                .collect::<Vec<_>>()
                .join(", ");
            let expected = format!("\treturn {expected}\n");
            prop_assert!(rendered.contains(&expected), "missing `{}` in\n{}", expected, rendered);
        }
    }

    /// Property: rendering is deterministic
    #[test]
    fn prop_render_is_idempotent(
        prefix in param_name(),
        groups in param_groups(),
        results in results(),
    ) {
        let (source, _) = method_source(&prefix, &groups, &results);
        prop_assert_eq!(render(&source), render(&source));
    }
}
