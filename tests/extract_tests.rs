//! Tests for test cell classification, reading, and case synthesis.

use nbcheck::{
    assign::{SuiteType, Test, doctest, gen_case, gen_suite, is_test_cell, read_test},
    notebook::Cell,
};
use serde_json::json;

fn cell_from(value: serde_json::Value) -> Cell {
    serde_json::from_value(value).expect("deserialize cell")
}

fn code_cell(source: Vec<&str>, outputs: serde_json::Value) -> Cell {
    cell_from(json!({
        "cell_type": "code",
        "metadata": {},
        "execution_count": null,
        "source": source,
        "outputs": outputs,
    }))
}

#[test]
fn non_code_cells_are_never_test_cells() {
    let cell = cell_from(json!({
        "cell_type": "markdown",
        "metadata": {},
        "source": ["# TEST\n", "looks like a test, is prose"],
    }));
    assert!(!is_test_cell(&cell));
}

#[test]
fn code_cell_without_marker_is_not_a_test_cell() {
    let cell = code_cell(vec!["x = 1"], json!([]));
    assert!(!is_test_cell(&cell));
}

#[test]
fn code_cell_with_empty_source_is_not_a_test_cell() {
    let cell = code_cell(vec![], json!([]));
    assert!(!is_test_cell(&cell));
}

#[test]
fn marker_matching_is_case_insensitive() {
    for first_line in ["# TEST\n", "# test\n", "# Test\n", "## Hidden Test ##\n"] {
        let cell = code_cell(vec![first_line, "1 + 1"], json!([]));
        assert!(is_test_cell(&cell), "expected {first_line:?} to mark a test cell");
    }
}

#[test]
fn hidden_flag_follows_directive_line() {
    let visible = code_cell(vec!["# TEST\n", "1 + 1"], json!([]));
    assert!(!read_test(&visible).expect("read visible test").hidden);

    let hidden = code_cell(vec!["# TEST hidden\n", "1 + 1"], json!([]));
    assert!(read_test(&hidden).expect("read hidden test").hidden);

    let hidden_marker = code_cell(vec!["# HIDDEN TEST\n", "1 + 1"], json!([]));
    assert!(read_test(&hidden_marker).expect("read hidden-marker test").hidden);
}

#[test]
fn input_excludes_the_directive_line() {
    let cell = code_cell(vec!["# TEST\n", "a = 1\n", "a"], json!([]));
    let test = read_test(&cell).expect("read test");
    assert_eq!(test.input, "a = 1\na");
}

#[test]
fn outputs_concatenate_stream_text_then_text_plain() {
    let cell = code_cell(
        vec!["# TEST\n", "noisy()"],
        json!([
            {"output_type": "stream", "name": "stdout", "text": ["1\n"]},
            {"output_type": "execute_result", "data": {"text/plain": "2"}, "metadata": {}},
        ]),
    );
    let test = read_test(&cell).expect("read test");
    assert_eq!(test.output, "1\n2");
}

#[test]
fn text_plain_list_contributes_only_its_first_element() {
    let cell = code_cell(
        vec!["# TEST\n", "value"],
        json!([
            {"output_type": "execute_result", "data": {"text/plain": ["42\n", "ignored"]}},
        ]),
    );
    let test = read_test(&cell).expect("read test");
    assert_eq!(test.output, "42\n");
}

#[test]
fn read_test_fails_on_a_cell_with_no_source() {
    let cell = code_cell(vec![], json!([]));
    assert!(read_test(&cell).is_err());
}

#[test]
fn transcript_marks_statements_and_continuations() {
    let lines = doctest::to_transcript(["def f(x):", "    return x", "f(2)"]);
    assert_eq!(lines, vec![">>> def f(x):", "...     return x", ">>> f(2)"]);
}

#[test]
fn transcript_continues_dangling_clauses() {
    let lines = doctest::to_transcript(["try:", "    x = 1", "except:", "    pass"]);
    assert_eq!(lines, vec![">>> try:", "...     x = 1", "... except:", "...     pass"]);
}

#[test]
fn transcript_continues_after_a_backslash_line() {
    let lines = doctest::to_transcript(["x = 1 + \\", "2"]);
    assert_eq!(lines, vec![">>> x = 1 + \\", "... 2"]);
}

#[test]
fn semicolon_inserted_between_adjacent_prompt_lines() {
    let test = Test {
        input:  "x = 1\ny = 2".to_string(),
        output: "".to_string(),
        hidden: false,
    };
    let case = gen_case(&test);
    assert_eq!(case.code, ">>> x = 1;\n>>> y = 2\n");
    assert!(!case.hidden);
    assert!(!case.locked);
}

#[test]
fn blank_lines_do_not_take_semicolons() {
    let test = Test {
        input:  "\ny = 2".to_string(),
        output: "".to_string(),
        hidden: false,
    };
    let case = gen_case(&test);
    assert_eq!(case.code, ">>> \n>>> y = 2\n");
}

#[test]
fn expected_output_is_the_final_case_line() {
    let test = Test {
        input:  "square(2)".to_string(),
        output: "4".to_string(),
        hidden: false,
    };
    let case = gen_case(&test);
    assert_eq!(case.code, ">>> square(2)\n4");
}

#[test]
fn suites_preserve_case_order_and_carry_fixed_metadata() {
    let tests = vec![
        Test {
            input:  "a".to_string(),
            output: "1".to_string(),
            hidden: false,
        },
        Test {
            input:  "b".to_string(),
            output: "2".to_string(),
            hidden: true,
        },
        Test {
            input:  "c".to_string(),
            output: "3".to_string(),
            hidden: false,
        },
    ];

    let suite = gen_suite(&tests);

    assert_eq!(suite.cases.len(), 3);
    assert_eq!(
        suite.cases.iter().map(|c| c.hidden).collect::<Vec<_>>(),
        vec![false, true, false]
    );
    assert_eq!(suite.cases[0].code, ">>> a\n1");
    assert_eq!(suite.cases[2].code, ">>> c\n3");
    assert!(suite.scored);
    assert!(suite.setup.is_empty());
    assert!(suite.teardown.is_empty());
    assert_eq!(suite.suite_type, SuiteType::Doctest);
}
