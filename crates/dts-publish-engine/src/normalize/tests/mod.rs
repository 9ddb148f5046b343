//! End-to-end tests for the normalizer.
//!
//! Fixtures are `<name>.input.d.ts` / `<name>.output.d.ts` pairs in `fixtures/`,
//! normalized with the default options.

use pretty_assertions::assert_eq;

use crate::normalize::{
    CatchAllPlacement, Construct, NamespaceName, NormalizeError, NormalizeOptions, normalize,
    scan,
};

// Fixture tests

#[test]
fn fixture_firebase_auth() {
    assert_fixture("firebase_auth");
}

#[test]
fn fixture_scattered_namespaces() {
    assert_fixture("scattered_namespaces");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!(
        "{}/src/normalize/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    let input = std::fs::read_to_string(format!("{fixtures_dir}/{name}.input.d.ts")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.output.d.ts")).unwrap();

    let actual = normalize(&input, &NormalizeOptions::default()).unwrap();
    assert_eq!(actual, expected);
}

fn run(text: &str) -> String {
    normalize(text, &NormalizeOptions::default()).unwrap()
}

fn lines(text: &[&str]) -> String {
    text.join("\n")
}

// Property tests

#[test]
fn occurrences_merge_in_input_order_with_one_separator() {
    let first = lines(&["declare namespace a {", "  one;", "}"]);
    let second = lines(&["declare namespace a {", "  two;", "}"]);
    let filler = "declare var x: number;";

    for text in [
        format!("{first}\n{second}"),
        format!("{first}\n{filler}\n\n{second}"),
        format!("{filler}\n{first}\n{second}\n{filler}"),
    ] {
        let out = scan(&text, &NormalizeOptions::default()).unwrap();
        let body = out
            .namespaces
            .body(&NamespaceName::parse("a").unwrap())
            .unwrap();
        assert_eq!(body, ["  one;", "", "  two;"]);
    }
}

#[test]
fn internal_namespace_never_reaches_output() {
    let text = lines(&[
        "declare namespace ಠ_ಠ.clutz {",
        "declare namespace leaked.ns {",
        "  class SecretInstance {",
        "  }",
        "  type GlobalError = Error;",
        "}",
        "declare namespace a {",
        "  x: number;",
        "}",
    ]);
    let out = run(&text);

    assert!(!out.contains("leaked"));
    assert!(!out.contains("SecretInstance"));
    assert!(!out.contains("ಠ_ಠ"));
    assert_eq!(out, "declare namespace a {\n  x: number;\n}\n");
}

#[test]
fn output_is_deterministic_and_independent_of_namespace_order() {
    let a = lines(&["declare namespace a.b {", "  a;", "}"]);
    let z = lines(&["declare namespace z.q {", "  z;", "}"]);

    let forward = run(&format!("{a}\n{z}"));
    let backward = run(&format!("{z}\n{a}"));

    assert_eq!(forward, run(&format!("{a}\n{z}")));
    assert_eq!(forward, backward);
}

#[test]
fn marker_lines_are_removed_entirely() {
    let text = lines(&[
        "declare namespace a {",
        "  class A {",
        "    private noStructuralTyping_a_A : any;",
        "    noStructuralTyping_: any; value: number;",
        "  }",
        "}",
    ]);
    let out = run(&text);

    assert!(!out.contains("noStructuralTyping_"));
    assert!(!out.contains("value"));
    assert_eq!(out, "declare namespace a {\n  class A {\n  }\n}\n");
}

#[test]
fn error_alias_is_rewritten_only_inside_namespaces() {
    let text = lines(&[
        "declare var e : ಠ_ಠ.clutz.GlobalError ;",
        "declare namespace a {",
        "  function f (e : ಠ_ಠ.clutz.GlobalError ) : ಠ_ಠ.clutz.GlobalError ;",
        "}",
    ]);
    let out = run(&text);

    insta::assert_snapshot!(out, @r"
    declare var e : ಠ_ಠ.clutz.GlobalError ;
    declare namespace a {
      function f (e : Error ) : Error ;
    }
    ");
}

#[test]
fn block_comments_are_elided_when_stripping() {
    let text = lines(&[
        "declare namespace a.b {",
        "  x: number;",
        "  /*",
        "  internal doc",
        "  */",
        "  y: string;",
        "}",
    ]);
    let out = run(&text);

    insta::assert_snapshot!(out, @r"
    declare namespace a.b {
      x: number;
      y: string;
    }
    ");
}

#[test]
fn block_comments_are_kept_verbatim_when_not_stripping() {
    let text = lines(&[
        "declare namespace a.b {",
        "  x: number;",
        "  /*",
        "  internal doc",
        "  */",
        "  y: string;",
        "}",
    ]);
    let options = NormalizeOptions {
        strip_comments: false,
        ..NormalizeOptions::default()
    };
    let out = normalize(&text, &options).unwrap();

    assert_eq!(
        out,
        "declare namespace a.b {\n  x: number;\n  /*\n  internal doc\n  */\n  y: string;\n}\n"
    );
}

#[test]
fn namespaces_are_emitted_in_sorted_order() {
    let text = lines(&[
        "declare namespace z.q {",
        "  z;",
        "}",
        "declare namespace a.b {",
        "  a;",
        "}",
    ]);
    let out = run(&text);

    let a = out.find("declare namespace a.b {").unwrap();
    let z = out.find("declare namespace z.q {").unwrap();
    assert!(a < z);
    assert_eq!(
        out,
        "declare namespace a.b {\n  a;\n}\n\ndeclare namespace z.q {\n  z;\n}\n"
    );
}

#[test]
fn directive_lines_never_reach_output() {
    let text = lines(&[
        "//!! top level",
        "declare namespace ಠ_ಠ.clutz {",
        "//!! internal",
        "}",
        "declare namespace a {",
        "//!! body",
        "  /*",
        "//!! comment",
        "  */",
        "  x;",
        "}",
        "//!! trailing",
    ]);
    let out = run(&text);

    assert!(!out.contains("//!!"));
    assert_eq!(out, "declare namespace a {\n  x;\n}\n");
}

#[test]
fn catch_all_placement_is_configurable() {
    let text = lines(&[
        "declare namespace b {",
        "  b;",
        "}",
        "declare var one: number;",
        "declare namespace a {",
        "  a;",
        "}",
        "declare var two: number;",
    ]);
    let options = NormalizeOptions {
        catch_all: CatchAllPlacement::Trailing,
        ..NormalizeOptions::default()
    };

    insta::assert_snapshot!(normalize(&text, &options).unwrap(), @r"
    declare namespace a {
      a;
    }

    declare namespace b {
      b;
    }

    declare var one: number;
    declare var two: number;
    ");
    insta::assert_snapshot!(run(&text), @r"
    declare var one: number;
    declare var two: number;
    declare namespace a {
      a;
    }

    declare namespace b {
      b;
    }
    ");
}

#[test]
fn custom_internal_namespace_and_alias() {
    let text = lines(&[
        "declare namespace scratch {",
        "  hidden;",
        "}",
        "declare namespace a {",
        "  f(): scratch.Err;",
        "}",
    ]);
    let options = NormalizeOptions {
        internal_namespace: "scratch".to_string(),
        error_alias: "scratch.Err".to_string(),
        ..NormalizeOptions::default()
    };

    assert_eq!(
        normalize(&text, &options).unwrap(),
        "declare namespace a {\n  f(): Error;\n}\n"
    );
}

#[test]
fn crlf_input_normalizes_to_lf_output() {
    let out = run("declare namespace a {\r\n  x;\r\n}\r\n");
    assert_eq!(out, "declare namespace a {\n  x;\n}\n");
}

#[test]
fn empty_input_produces_empty_output() {
    assert_eq!(run(""), "");
    assert_eq!(run("\n\n//!! only a directive\n"), "");
}

#[test]
fn malformed_input_fails_fast() {
    let err = normalize(
        "declare namespace a {\n  x;\n",
        &NormalizeOptions::default(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        NormalizeError::Unterminated {
            construct: Construct::Namespace(NamespaceName::parse("a").unwrap()),
            line: 1,
        }
    );
}
