mod states;

use crate::base::{Cursor, Range};
use cfg_if::cfg_if;
use std::fmt::{self, Debug};

/// A state of the [`HtmlTokenizer`].
///
/// Each token is tagged with the state that produced it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenizerState {
    #[default]
    Content,
    TagOpen,
    TagName,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
    TagClose,
    /// The input is exhausted.
    End,
    /// `<` that doesn't start a tag.
    Illegal,
}

impl TokenizerState {
    #[inline]
    #[must_use]
    pub const fn is_attribute_value(self) -> bool {
        matches!(
            self,
            TokenizerState::AttributeValueDoubleQuoted
                | TokenizerState::AttributeValueSingleQuoted
                | TokenizerState::AttributeValueUnquoted
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_attribute_name(self) -> bool {
        matches!(
            self,
            TokenizerState::BeforeAttributeName | TokenizerState::AttributeName
        )
    }
}

/// A span of the source produced by a single tokenizer state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token {
    pub state: TokenizerState,
    pub range: Range,
}

impl Token {
    #[inline]
    #[must_use]
    pub const fn new(state: TokenizerState, range: Range) -> Self {
        Token { state, range }
    }
}

enum StateResult {
    /// Emit the consumed span and switch to the given state.
    Emit(TokenizerState),
    /// Switch to the given state without emitting anything.
    Reconsume(TokenizerState),
}

/// Pull tokenizer for a single literal fragment of a template.
///
/// Tokens produced for a source partition it: concatenated in order, their texts give the
/// source back. When the source is exhausted the state that was active emits its (possibly
/// empty) token and all subsequent calls to [`next`] return an [`End`] token. The state that
/// was active right before [`End`] can be passed to [`set_source`] to continue tokenization
/// of the next fragment as if both fragments were a single string.
///
/// [`next`]: HtmlTokenizer::next
/// [`set_source`]: HtmlTokenizer::set_source
/// [`End`]: TokenizerState::End
pub struct HtmlTokenizer<'s> {
    source: &'s str,
    cursor: Cursor,
    state: TokenizerState,
}

impl<'s> HtmlTokenizer<'s> {
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        HtmlTokenizer {
            source,
            cursor: Cursor::default(),
            state: TokenizerState::Content,
        }
    }

    /// Switches to a new source, starting from its beginning in the given state.
    #[inline]
    pub fn set_source(&mut self, source: &'s str, state: TokenizerState) {
        self.source = source;
        self.cursor = Cursor::default();
        self.state = state;
    }

    #[inline]
    pub fn set_state(&mut self, state: TokenizerState) {
        self.state = state;
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Returns the text of a token produced for the current source.
    #[inline]
    #[must_use]
    pub fn value(&self, range: Range) -> &'s str {
        &self.source[range.start..range.end]
    }

    pub fn next(&mut self) -> Token {
        loop {
            let state = self.state;
            let start = self.cursor.pos();

            let result = match state {
                TokenizerState::Content => self.content_state(),
                TokenizerState::TagOpen => self.tag_open_state(),
                TokenizerState::TagName => self.tag_name_state(),
                TokenizerState::BeforeAttributeName => self.before_attribute_name_state(),
                TokenizerState::AttributeName => self.attribute_name_state(),
                TokenizerState::AfterAttributeName => self.after_attribute_name_state(),
                TokenizerState::BeforeAttributeValue => self.before_attribute_value_state(),
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.attribute_value_quoted_state(b'"')
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.attribute_value_quoted_state(b'\'')
                }
                TokenizerState::AttributeValueUnquoted => self.attribute_value_unquoted_state(),
                TokenizerState::AfterAttributeValueQuoted => {
                    self.after_attribute_value_quoted_state()
                }
                TokenizerState::SelfClosingStartTag => self.self_closing_start_tag_state(),
                TokenizerState::TagClose => self.tag_close_state(),
                TokenizerState::Illegal => StateResult::Emit(TokenizerState::Content),
                TokenizerState::End => {
                    let end = self.source.len();

                    return Token::new(TokenizerState::End, Range::new(end, end));
                }
            };

            match result {
                StateResult::Emit(next_state) => {
                    let token = Token::new(state, Range::new(start, self.cursor.pos()));

                    trace!(@token token, self.value(token.range));

                    self.state = next_state;

                    return token;
                }
                StateResult::Reconsume(next_state) => self.state = next_state,
            }
        }
    }

    #[inline]
    fn input(&self) -> &'s [u8] {
        self.source.as_bytes()
    }
}

/// An event produced by [`tokenize_literals`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LexEvent<'s> {
    Token {
        literal: usize,
        state: TokenizerState,
        text: &'s str,
    },
    /// The literal is exhausted and tokenization of the next one resumes in `live_state`.
    Break {
        literal: usize,
        live_state: TokenizerState,
    },
}

/// Tokenizes template literals as if they were a single source.
///
/// Whenever a literal other than the last one is exhausted, the state that produced the
/// last token before [`TokenizerState::End`] becomes the initial state for the next literal.
pub fn tokenize_literals<'s, S: AsRef<str>>(
    literals: &'s [S],
    mut handler: impl FnMut(LexEvent<'s>),
) {
    let mut tokenizer = HtmlTokenizer::new("");
    let mut steps = Vec::new();
    let mut state = TokenizerState::Content;

    for (idx, literal) in literals.iter().enumerate() {
        trace!(@resume idx, state);

        tokenizer.set_source(literal.as_ref(), state);

        loop {
            let token = tokenizer.next();

            steps.push(token.state);

            if token.state == TokenizerState::End {
                break;
            }

            handler(LexEvent::Token {
                literal: idx,
                state: token.state,
                text: tokenizer.value(token.range),
            });
        }

        if idx + 1 < literals.len() {
            // NOTE: the last step is always END, the step before it is the state
            // that ran out of input.
            state = steps
                .len()
                .checked_sub(2)
                .map_or(TokenizerState::Content, |live_idx| steps[live_idx]);

            steps.truncate(steps.len().saturating_sub(2));

            handler(LexEvent::Break {
                literal: idx,
                live_state: state,
            });
        }
    }
}

cfg_if! {
    if #[cfg(feature = "integration_test")] {
        impl From<&str> for TokenizerState {
            fn from(name: &str) -> Self {
                match name {
                    "Content" => TokenizerState::Content,
                    "TagOpen" => TokenizerState::TagOpen,
                    "TagName" => TokenizerState::TagName,
                    "BeforeAttributeName" => TokenizerState::BeforeAttributeName,
                    "AttributeName" => TokenizerState::AttributeName,
                    "AfterAttributeName" => TokenizerState::AfterAttributeName,
                    "BeforeAttributeValue" => TokenizerState::BeforeAttributeValue,
                    "AttributeValueDoubleQuoted" => TokenizerState::AttributeValueDoubleQuoted,
                    "AttributeValueSingleQuoted" => TokenizerState::AttributeValueSingleQuoted,
                    "AttributeValueUnquoted" => TokenizerState::AttributeValueUnquoted,
                    "AfterAttributeValueQuoted" => TokenizerState::AfterAttributeValueQuoted,
                    "SelfClosingStartTag" => TokenizerState::SelfClosingStartTag,
                    "TagClose" => TokenizerState::TagClose,
                    "End" => TokenizerState::End,
                    "Illegal" => TokenizerState::Illegal,
                    _ => panic!("Unknown tokenizer state: {name}"),
                }
            }
        }
    }
}

impl Debug for HtmlTokenizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlTokenizer")
            .field("state", &self.state)
            .field("pos", &self.cursor.pos())
            .field("source", &self.source)
            .finish()
    }
}
