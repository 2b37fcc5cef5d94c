use std::fs;

use num_bigint::BigInt;
use vecalc::{
    config::{Config, apply_format},
    error::{Diagnostic, ErrorKind},
    evaluate,
    interpreter::{evaluator::core::Context, value::core::Value},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_vecalc_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut context = Context::new();
            let actual: Vec<String> = evaluate(&mut context, "<book>", &code).into_iter()
                                                                             .map(book_rendering)
                                                                             .collect();
            assert_eq!(actual, expected, "Example {} in {:?} failed:\n{}", i + 1, path, code);
        }
    }

    assert!(count > 0, "No vecalc examples found in book/src");
}

/// Splits each fenced `vecalc` block into its input and the expected output
/// lines, which are written as `=> output`.
fn extract_vecalc_blocks(content: &str) -> Vec<(String, Vec<String>)> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut code = String::new();
    let mut expected = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```vecalc") {
            inside = true;
            code.clear();
            expected.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push((code.clone(), expected.clone()));
            continue;
        }
        if inside {
            if let Some(output) = trimmed.strip_prefix("=> ") {
                expected.push(output.to_string());
            } else {
                code.push_str(line);
                code.push('\n');
            }
        }
    }

    blocks
}

fn book_rendering(result: Result<Value, Diagnostic>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(diagnostic) => format!("error: {}", diagnostic.kind),
    }
}

fn outputs(src: &str) -> Vec<String> {
    let mut context = Context::new();
    evaluate(&mut context, "<test>", src).into_iter()
                                         .map(|result| match result {
                                             Ok(value) => value.to_string(),
                                             Err(diagnostic) => diagnostic.to_string(),
                                         })
                                         .collect()
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(outputs(src), expected, "Script:\n{src}");
}

fn assert_failure(src: &str, message: &str) {
    let outputs = outputs(src);
    assert!(outputs.iter().any(|line| line.contains(message)),
            "Expected an error containing {message:?} from:\n{src}\nGot: {outputs:?}");
}

#[test]
fn basic_arithmetic() {
    assert_output("3 + 4", &["7"]);
    assert_output("7 * 9", &["63"]);
    assert_output("8 - 5", &["3"]);
    assert_output("2 ** 10", &["1024"]);
}

#[test]
fn exact_division() {
    assert_output("1/3 + 1/6", &["1/2"]);
    assert_output("10 / 4", &["5/2"]);
    assert_output("10 / 2", &["5"]);
    assert_output("1/2 + 1/2", &["1"]);
    assert_failure("1 / 0", "Division by zero.");
    assert_failure("1/0", "Division by zero.");
}

#[test]
fn operators_are_right_associative() {
    assert_output("2 - 1 - 1", &["2"]);
    assert_output("2 * 3 + 4", &["14"]);
    assert_output("(2 * 3) + 4", &["10"]);
    assert_output("2 ** 3 ** 2", &["512"]);
}

#[test]
fn prefix_operators_take_the_rest_of_the_line() {
    assert_output("- 2 + 3", &["-5"]);
    assert_output("(- 2) + 3", &["1"]);
    assert_output("abs -5", &["5"]);
    assert_output("/ 4", &["1/4"]);
    assert_output("^ 0", &["-1"]);
    assert_output("not 0 1 2", &["1 0 0"]);
    assert_output("sgn 0 - 3 0 3", &["-1 0 -1"]);
    assert_output("floor 7/2", &["3"]);
    assert_output("ceil 7/2", &["4"]);
    assert_output("floor -7/2", &["-4"]);
    assert_failure("^ 1/2", "Operator ^ is not defined for rational values.");
    assert_failure("/ 0", "Division by zero.");
}

#[test]
fn assignment_and_last_value() {
    assert_output("x := 5\nx * x", &["25"]);
    assert_output("3 + 4\n_ * 2", &["7", "14"]);
    assert_output("x := 5\n_ + 1", &["6"]);
    assert_output("x := 1\nx := x + 1\nx", &["2"]);
    assert_failure("y + 1", "y undefined.");
}

#[test]
fn vector_broadcast() {
    assert_output("1 2 3 + 10", &["11 12 13"]);
    assert_output("10 - 1 2 3", &["9 8 7"]);
    assert_output("1 2 3 * 4 5 6", &["4 10 18"]);
    assert_output("1 2 3 < 2", &["1 0 0"]);
    assert_output("- 1 2 3", &["-1 -2 -3"]);
    assert_output("1/2 1/3 + 1/6", &["2/3 1/2"]);
    assert_failure("1 2 3 + 4 5", "Length mismatch: 3 2.");
}

#[test]
fn integer_division_flavours() {
    assert_output("7 idiv 2", &["3"]);
    assert_output("(-7) idiv 2", &["-3"]);
    assert_output("(-7) imod 2", &["-1"]);
    assert_output("(-7) div 2", &["-4"]);
    assert_output("(-7) mod 2", &["1"]);
    assert_output("7 div -2", &["-3"]);
    assert_output("7 mod -2", &["1"]);
    assert_failure("5 imod 0", "Modulo by zero.");
    assert_failure("5 mod 0", "Modulo by zero.");
    assert_failure("1/2 mod 2", "Operator mod is not defined for rational values.");
}

#[test]
fn powers_and_shifts() {
    assert_output("2 ** 64", &["18446744073709551616"]);
    assert_output("1/2 ** 2", &["1/4"]);
    assert_output("0 ** 0", &["1"]);
    assert_output("1 << 70", &["1180591620717411303424"]);
    assert_output("(1 << 70) >> 69", &["2"]);
    assert_output("6 & 3", &["2"]);
    assert_output("6 | 3", &["7"]);
    assert_output("6 ^ 3", &["5"]);
    assert_failure("2 ** -1", "Negative exponent not implemented.");
    assert_failure("2 ** 1/2", "fractional exponent 1/2");
    assert_failure("1 << -1", "Illegal shift count -1.");
    assert_failure("1/2 & 1", "Operator & is not defined for rational values.");
}

#[test]
fn oversized_results_are_refused_without_ending_the_session() {
    assert_output("1 << 9223372036854775807\n7",
                  &["<test>:1: Illegal shift count 9223372036854775807.", "7"]);
    assert_failure("1 << 16777216", "Illegal shift count 16777216.");
    assert_output("0 << 9223372036854775807", &["0"]);
    assert_output("1 >> 9223372036854775807", &["0"]);
    assert_output("(-5) >> 100000000000000000000000", &["-1"]);
    assert_output("2 ** 99999999\n7",
                  &["<test>:1: Invalid argument: power result exceeds 16777216 bits.", "7"]);
    assert_output("1 ** 99999999", &["1"]);
    assert_output("(-1) ** 99999999", &["-1"]);
    assert_output("1e99999999 == 0\n7", &["<test>:1: Invalid number \"1e99999999\".", "7"]);
    assert_output("1e10000 == 0", &["0"]);
}

#[test]
fn comparisons_min_and_max() {
    assert_output("3 == 3", &["1"]);
    assert_output("3 != 3", &["0"]);
    assert_output("1/2 < 2/3", &["1"]);
    assert_output("3 min 5", &["3"]);
    assert_output("1/2 max 1/3", &["1/2"]);
    assert_output("1 5 3 max 2 2 4", &["2 5 4"]);
}

#[test]
fn overflow_promotes_to_big_integers() {
    assert_output("9223372036854775807 + 1", &["9223372036854775808"]);
    assert_output("(- 9223372036854775807) - 2", &["-9223372036854775809"]);
    assert_output("4294967296 * 4294967296", &["18446744073709551616"]);
    assert_output("9223372036854775808 - 1", &["9223372036854775807"]);
}

#[test]
fn results_shrink_to_native_integers() {
    let mut context = Context::new();
    let results = evaluate(&mut context, "<test>", "9223372036854775808 - 1\n2/4 + 1/2");

    assert_eq!(results[0], Ok(Value::SmallInt(i64::MAX)));
    assert_eq!(results[1], Ok(Value::SmallInt(1)));
}

#[test]
fn literals() {
    assert_output("0x1f + 1", &["32"]);
    assert_output("0b101", &["5"]);
    assert_output("0o17", &["15"]);
    assert_output("1.25", &["5/4"]);
    assert_output("2.0", &["2"]);
    assert_output("3e2", &["300"]);
    assert_output("100000000000000000000", &["100000000000000000000"]);
}

#[test]
fn indexing() {
    assert_output("v := 10 20 30\nv[1]", &["20"]);
    assert_output("v := 10 20 30\nv[0 2]", &["10 30"]);
    assert_output("v := 10 20 30\nv[2 0 1]", &["30 10 20"]);
    assert_output("10 20 30[2] + 1", &["31"]);
    assert_output("(1 2 3 * 2)[1]", &["4"]);
    assert_output("5[0]", &["5"]);
    assert_failure("v := 10 20 30\nv[3]", "Index 3 out of range for vector of length 3.");
    assert_failure("v := 10 20 30\nv[1/2]", "Cannot convert rational to int.");
}

#[test]
fn iota_counts_from_the_origin() {
    assert_output("iota 5", &["0 1 2 3 4"]);
    assert_output("iota 0", &[""]);
    assert_output("iota 4 + 1", &["0 1 2 3 4"]);
    assert_output("(iota 4) + 1", &["1 2 3 4"]);
    assert_failure("iota 1/2", "Operator iota is not defined for rational values.");
    assert_failure("iota (- 1)", "Invalid argument");

    let mut config = Config::new();
    config.set_origin(1);
    let mut context = Context::with_config(config);
    let results = evaluate(&mut context, "<test>", "v := iota 3\nv\nv[1]\nv[0]");

    assert_eq!(results[0].as_ref().map(ToString::to_string), Ok("1 2 3".to_string()));
    assert_eq!(results[1], Ok(Value::SmallInt(1)));
    assert!(results[2].is_err());
}

#[test]
fn parse_errors() {
    assert_failure("(1 + 2", "Expected closing parenthesis ')', found EOF.");
    assert_failure("v := 1 2\nv[0", "Expected closing bracket ']', found EOF.");
    assert_failure("1 +", "Unexpected EOF.");
    assert_failure("1 2 )", "Unexpected \")\".");
    assert_failure("$", "Invalid token \"$\".");
    assert_failure("1 $ 2", "Unexpected \"$\" after expression.");
    assert_failure("3 iota 4", "Unknown operator iota.");
}

#[test]
fn a_failing_line_does_not_stop_the_session() {
    assert_output("5 idiv 0\n1 + 1", &["<test>:1: Division by zero.", "2"]);
    assert_output("1 +\n2 * 3", &["<test>:1: Unexpected newline.", "6"]);
    assert_output("1 + ) 5\n7", &["<test>:1: Unexpected \")\".", "7"]);
    assert_output("1\n\n5 idiv 0\nx := 2\nx", &["1", "<test>:3: Division by zero.", "2"]);
}

#[test]
fn failed_assignment_keeps_the_old_value() {
    assert_output("x := 1\nx := 1 / 0\nx", &["<test>:2: Division by zero.", "1"]);
}

#[test]
fn comments_and_blank_lines_produce_nothing() {
    assert_output("# nothing here\n\n   \n1 + 1 # trailing", &["2"]);
}

#[test]
fn diagnostics_carry_the_error_kind() {
    let mut context = Context::new();
    let results = evaluate(&mut context, "calc.vc", "1 2 + 1 2 3");

    let Err(diagnostic) = &results[0] else {
        panic!("expected a diagnostic, got {results:?}");
    };
    assert_eq!(diagnostic.file, "calc.vc");
    assert_eq!(diagnostic.line, 1);
    assert!(matches!(diagnostic.kind, ErrorKind::Runtime(_)));
}

#[test]
fn configured_formats() {
    let mut config = Config::new();
    config.set_format("%x");
    let mut context = Context::with_config(config);
    let results = evaluate(&mut context, "<test>", "255 + 1\n255/16\n10 11 12");

    let rendered: Vec<String> = results.iter()
                                       .map(|r| r.as_ref().map(|v| v.render(context.config())))
                                       .collect::<Result<_, _>>()
                                       .unwrap();
    assert_eq!(rendered, ["100", "ff/10", "a b c"]);
}

#[test]
fn parse_debug_does_not_change_results() {
    let mut config = Config::new();
    config.set_debug("parse", true);
    let mut context = Context::with_config(config);

    let results = evaluate(&mut context, "<test>", "1 + - 2");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0], Ok(Value::SmallInt(-1)));
}

#[test]
fn format_verbs_copy_through_unknown_and_missing_arguments() {
    let three = BigInt::from(3);

    assert_eq!(apply_format("%d of %d 100%%", &[&three]), "3 of %!d(MISSING) 100%");
    assert_eq!(apply_format("%q", &[&three]), "%!q(3)");
    assert_eq!(apply_format("%b|%o|%X", &[&three, &BigInt::from(8), &BigInt::from(255)]),
               "11|10|FF");
}
