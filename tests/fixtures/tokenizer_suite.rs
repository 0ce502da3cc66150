use crate::harness::suite::get_tokenizer_tests;
use litmark::{tokenize_literals, LexEvent, TokenizerState};

#[test]
fn tokenizer_suite() {
    let tests = get_tokenizer_tests();

    assert!(!tests.is_empty(), "No tokenizer tests found");

    for test in tests {
        let mut actual = Vec::new();

        tokenize_literals(&test.literals, |event| match event {
            LexEvent::Token { state, text, .. } => actual.push((state, text.to_string())),
            LexEvent::Break { live_state, .. } => {
                actual.push((TokenizerState::End, format!("{live_state:?}")));
            }
        });

        let expected = test
            .tokens
            .iter()
            .map(|(state, text)| match state.as_str() {
                "Break" => (TokenizerState::End, text.clone()),
                state => (TokenizerState::from(state), text.clone()),
            })
            .collect::<Vec<_>>();

        expect_eql!(actual, expected, test.literals, test.description);
    }
}
