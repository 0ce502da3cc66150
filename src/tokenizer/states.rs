use super::{HtmlTokenizer, StateResult, TokenizerState};
use memchr::memchr;

#[inline]
const fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\n' | b'\r' | b'\t' | b'\x0C')
}

impl HtmlTokenizer<'_> {
    pub(super) fn content_state(&mut self) -> StateResult {
        let input = self.input();
        let pos = self.cursor.pos();

        match memchr(b'<', &input[pos..]) {
            Some(offset) => {
                self.cursor.consume_several(offset);

                StateResult::Emit(TokenizerState::TagOpen)
            }
            None => {
                self.cursor.consume_to_end(input);

                StateResult::Emit(TokenizerState::End)
            }
        }
    }

    pub(super) fn tag_open_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor.consume_if(input, b'<');
        self.cursor.consume_if(input, b'/');

        match self.cursor.peek(input) {
            Some(ch) if ch.is_ascii_alphabetic() => StateResult::Emit(TokenizerState::TagName),
            // NOTE: the tag name is going to be provided by a value.
            None => StateResult::Emit(TokenizerState::TagName),
            Some(_) => StateResult::Emit(TokenizerState::Illegal),
        }
    }

    pub(super) fn tag_name_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor
            .consume_while(input, |ch| !is_whitespace(ch) && ch != b'/' && ch != b'>');

        match self.cursor.peek(input) {
            Some(b'/') => StateResult::Emit(TokenizerState::SelfClosingStartTag),
            Some(b'>') => StateResult::Emit(TokenizerState::TagClose),
            Some(_) => StateResult::Emit(TokenizerState::BeforeAttributeName),
            None => StateResult::Emit(TokenizerState::End),
        }
    }

    pub(super) fn before_attribute_name_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor.consume_while(input, is_whitespace);

        match self.cursor.peek(input) {
            Some(b'/') => StateResult::Emit(TokenizerState::SelfClosingStartTag),
            Some(b'>') => StateResult::Emit(TokenizerState::TagClose),
            Some(_) => StateResult::Emit(TokenizerState::AttributeName),
            None => StateResult::Emit(TokenizerState::End),
        }
    }

    pub(super) fn attribute_name_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor.consume_while(input, |ch| {
            !is_whitespace(ch) && !matches!(ch, b'=' | b'/' | b'>')
        });

        match self.cursor.peek(input) {
            Some(b'/') => StateResult::Emit(TokenizerState::SelfClosingStartTag),
            Some(b'>') => StateResult::Emit(TokenizerState::TagClose),
            Some(_) => StateResult::Emit(TokenizerState::AfterAttributeName),
            None => StateResult::Emit(TokenizerState::End),
        }
    }

    pub(super) fn after_attribute_name_state(&mut self) -> StateResult {
        let input = self.input();
        let mut offset = 0;

        while self.cursor.lookahead(input, offset).is_some_and(is_whitespace) {
            offset += 1;
        }

        if self.cursor.lookahead(input, offset) == Some(b'=') {
            self.cursor.consume_several(offset + 1);

            StateResult::Emit(TokenizerState::BeforeAttributeValue)
        } else {
            // NOTE: the attribute has no value, so the whitespace
            // belongs to the next attribute.
            StateResult::Reconsume(TokenizerState::BeforeAttributeName)
        }
    }

    pub(super) fn before_attribute_value_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor.consume_while(input, is_whitespace);

        match self.cursor.peek(input) {
            Some(b'"') => {
                self.cursor.consume_ch(input);

                StateResult::Emit(TokenizerState::AttributeValueDoubleQuoted)
            }
            Some(b'\'') => {
                self.cursor.consume_ch(input);

                StateResult::Emit(TokenizerState::AttributeValueSingleQuoted)
            }
            Some(b'>') => StateResult::Emit(TokenizerState::TagClose),
            _ => StateResult::Emit(TokenizerState::AttributeValueUnquoted),
        }
    }

    pub(super) fn attribute_value_quoted_state(&mut self, closing_quote: u8) -> StateResult {
        let input = self.input();
        let pos = self.cursor.pos();

        match memchr(closing_quote, &input[pos..]) {
            Some(offset) => {
                self.cursor.consume_several(offset);

                StateResult::Emit(TokenizerState::AfterAttributeValueQuoted)
            }
            None => {
                self.cursor.consume_to_end(input);

                StateResult::Emit(TokenizerState::End)
            }
        }
    }

    pub(super) fn after_attribute_value_quoted_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor.consume_ch(input);

        match self.cursor.peek(input) {
            Some(b'/') => StateResult::Emit(TokenizerState::SelfClosingStartTag),
            Some(b'>') => StateResult::Emit(TokenizerState::TagClose),
            _ => StateResult::Emit(TokenizerState::BeforeAttributeName),
        }
    }

    pub(super) fn attribute_value_unquoted_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor
            .consume_while(input, |ch| !is_whitespace(ch) && ch != b'>');

        match self.cursor.peek(input) {
            Some(b'>') => StateResult::Emit(TokenizerState::TagClose),
            Some(_) => StateResult::Emit(TokenizerState::BeforeAttributeName),
            None => StateResult::Emit(TokenizerState::End),
        }
    }

    pub(super) fn self_closing_start_tag_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor.consume_if(input, b'/');

        match self.cursor.peek(input) {
            Some(b'>') => StateResult::Emit(TokenizerState::TagClose),
            _ => StateResult::Emit(TokenizerState::BeforeAttributeName),
        }
    }

    pub(super) fn tag_close_state(&mut self) -> StateResult {
        let input = self.input();

        self.cursor.consume_if(input, b'>');

        StateResult::Emit(TokenizerState::Content)
    }
}
