#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::case_loader::{CaseFailure, CaseResult, CodecCase, get_inline_cases};
/// Codec case runner
///
/// Runs the shared codec cases against the qsplice implementation
use qsplice::QueryComponent;

/// Run codec cases and return results
pub fn run_codec_cases(cases: Vec<CodecCase>) -> CaseResult {
    let mut result = CaseResult::new();
    let mut case_num = 0;

    for case in cases {
        match case {
            CodecCase::Comment(_) => {}
            CodecCase::QueryTest {
                query,
                entries,
                encoded,
                failure,
            } => {
                case_num += 1;

                // Check if the case expects a parse failure
                if failure == Some(true) {
                    match QueryComponent::parse(&query) {
                        Ok(_) => {
                            result.failed += 1;
                            result.failures.push(CaseFailure {
                                case_num,
                                query: query.clone(),
                                field: "parsing".to_string(),
                                expected: "failure".to_string(),
                                actual: "success".to_string(),
                            });
                        }
                        Err(_) => result.passed += 1,
                    }
                    continue;
                }

                let component = match QueryComponent::parse(&query) {
                    Ok(component) => component,
                    Err(e) => {
                        result.failed += 1;
                        result.failures.push(CaseFailure {
                            case_num,
                            query: query.clone(),
                            field: "parsing".to_string(),
                            expected: "success".to_string(),
                            actual: e.to_string(),
                        });
                        continue;
                    }
                };

                let mut case_passed = true;

                // Check each expected field
                if let Some(expected) = &entries {
                    let actual: Vec<(String, String)> = component
                        .iter()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect();
                    if &actual != expected {
                        result.failures.push(CaseFailure {
                            case_num,
                            query: query.clone(),
                            field: "entries".to_string(),
                            expected: format!("{expected:?}"),
                            actual: format!("{actual:?}"),
                        });
                        case_passed = false;
                    }
                }

                if let Some(expected) = &encoded {
                    let actual = component.encode();
                    if &actual != expected {
                        result.failures.push(CaseFailure {
                            case_num,
                            query: query.clone(),
                            field: "encoded".to_string(),
                            expected: expected.clone(),
                            actual,
                        });
                        case_passed = false;
                    }
                }

                if case_passed {
                    result.passed += 1;
                } else {
                    result.failed += 1;
                }
            }
        }
    }

    result
}

#[test]
fn test_full_codec_suite() {
    let case_data = include_str!("./codec_cases.json");
    let cases: Vec<CodecCase> =
        serde_json::from_str(case_data).expect("Failed to parse codec case data");

    println!("\nRunning {} codec cases...", cases.len());

    let result = run_codec_cases(cases);

    println!("\n{}", result.summary());

    if !result.failures.is_empty() {
        println!("\nFailures:");
        for failure in &result.failures {
            println!("\nCase #{}: {}", failure.case_num, failure.field);
            println!("   Query: {}", failure.query);
            println!("   Expected: {}", failure.expected);
            println!("   Actual: {}", failure.actual);
        }
    }

    println!("\nPass rate: {:.2}%", result.pass_rate());

    // Conformance requires every case to pass
    assert_eq!(
        result.failed,
        0,
        "\n\nCodec conformance failed!\n\
         Passed: {}, Failed: {}, Pass Rate: {:.2}%\n\
         \n\
         Run with `cargo test test_full_codec_suite -- --nocapture` to see failure details.\n",
        result.passed,
        result.failed,
        result.pass_rate()
    );

    // Also verify the case count hasn't shrunk unexpectedly
    let total_cases = result.passed + result.failed + result.skipped;
    assert!(
        total_cases >= 35,
        "Expected at least 35 codec cases, but found {total_cases}",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_inline_cases() {
        let cases = get_inline_cases();
        let result = run_codec_cases(cases);

        println!("\n{}", result.summary());

        if !result.failures.is_empty() {
            println!("\nFailures:");
            for failure in &result.failures {
                println!("  Case #{}: {}", failure.case_num, failure.field);
                println!("    Query: {}", failure.query);
                println!("    Expected: {}", failure.expected);
                println!("    Actual: {}", failure.actual);
            }
        }

        assert_eq!(result.failed, 0, "Inline cases must all pass");
        assert_eq!(result.passed, 3);
    }
}
