use crate::harness::suite::{get_template_tests, Expectation};
use litmark::{html, TemplateError, Value};

#[test]
fn template_suite() {
    let tests = get_template_tests();

    assert!(!tests.is_empty(), "No template tests found");

    for test in tests {
        let values = test.values.iter().cloned().map(Value::from).collect();
        let result = html(&test.literals, values).and_then(|c| c.compile());

        match test.expected {
            Expectation::Output(expected) => {
                expect_eql!(
                    result,
                    Ok(expected),
                    test.literals,
                    test.description
                );
            }
            Expectation::CountMismatch(mismatch) => {
                expect_eql!(
                    result,
                    Err(TemplateError::ValueCountMismatch {
                        expected: mismatch.expected,
                        actual: mismatch.actual,
                    }),
                    test.literals,
                    test.description
                );
            }
            Expectation::Unsupported(kind) => {
                let kind_matches = matches!(
                    &result,
                    Err(TemplateError::UnsupportedValue(actual)) if *actual == kind
                );

                expect_eql!(kind_matches, true, test.literals, test.description);
            }
        }
    }
}
