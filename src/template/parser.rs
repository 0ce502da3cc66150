use super::attribute::Quote;
use super::part::{ContentPart, Part, TagPart};
use crate::tokenizer::{tokenize_literals, LexEvent, TokenizerState};

/// Builds parts of a template from the token stream of its literals.
#[derive(Default)]
pub(super) struct TemplateParser {
    parts: Vec<Part>,
    content: Option<ContentPart>,
    tag: Option<TagPart>,
}

impl TemplateParser {
    pub fn parse<S: AsRef<str>>(literals: &[S]) -> Vec<Part> {
        let mut parser = TemplateParser::default();

        tokenize_literals(literals, |event| match event {
            LexEvent::Token { state, text, .. } => parser.handle_token(state, text),
            LexEvent::Break { live_state, .. } => parser.add_break(live_state),
        });

        parser.finish()
    }

    fn handle_token(&mut self, state: TokenizerState, text: &str) {
        match state {
            TokenizerState::Content => self.content_mut().push_str(text),
            TokenizerState::TagOpen => {
                self.flush();
                self.tag = Some(TagPart::new(text));
            }
            TokenizerState::Illegal => self.fold_tag_into_content(),
            TokenizerState::TagClose => {
                self.tag_mut().close(text);
                self.flush();
                self.content = Some(ContentPart::default());
            }
            TokenizerState::End => (),
            _ => {
                let tag = self.tag_mut();

                tag.push_raw(text);

                match state {
                    TokenizerState::TagName => tag.push_name(text),
                    TokenizerState::BeforeAttributeName => tag.start_attribute(text),
                    TokenizerState::AttributeName => tag.current_attribute_mut().push_name(text),
                    TokenizerState::AfterAttributeName => {
                        tag.current_attribute_mut().push_after_name(text);
                    }
                    TokenizerState::BeforeAttributeValue => {
                        tag.current_attribute_mut().push_before_value(text);
                    }
                    TokenizerState::AttributeValueDoubleQuoted => {
                        let attr = tag.current_attribute_mut();

                        attr.set_quote(Quote::Double);
                        attr.push_value(text);
                    }
                    TokenizerState::AttributeValueSingleQuoted => {
                        let attr = tag.current_attribute_mut();

                        attr.set_quote(Quote::Single);
                        attr.push_value(text);
                    }
                    TokenizerState::AttributeValueUnquoted => {
                        tag.current_attribute_mut().push_value(text);
                    }
                    TokenizerState::SelfClosingStartTag => tag.set_self_closing(true),
                    _ => (),
                }
            }
        }
    }

    fn add_break(&mut self, live_state: TokenizerState) {
        trace!(@break self.parts.len(), live_state);

        match live_state {
            TokenizerState::TagOpen | TokenizerState::TagName => self.tag_mut().add_name_break(),
            TokenizerState::BeforeAttributeName
            | TokenizerState::AttributeName
            | TokenizerState::AfterAttributeValueQuoted
            | TokenizerState::SelfClosingStartTag => {
                self.tag_mut().current_attribute_mut().add_name_break();
            }
            TokenizerState::AfterAttributeName
            | TokenizerState::BeforeAttributeValue
            | TokenizerState::AttributeValueDoubleQuoted
            | TokenizerState::AttributeValueSingleQuoted
            | TokenizerState::AttributeValueUnquoted => {
                self.tag_mut().current_attribute_mut().add_value_break();
            }
            TokenizerState::Content
            | TokenizerState::TagClose
            | TokenizerState::Illegal
            | TokenizerState::End => self.content_mut().add_break(),
        }
    }

    /// `<` that doesn't start a tag is a text.
    fn fold_tag_into_content(&mut self) {
        let raw = self.tag.take().map(TagPart::into_raw).unwrap_or_default();

        trace!(@fold raw);

        if self.content.is_none() && matches!(self.parts.last(), Some(Part::Content(_))) {
            if let Some(Part::Content(content)) = self.parts.pop() {
                self.content = Some(content);
            }
        }

        self.content_mut().push_str(&raw);
    }

    fn content_mut(&mut self) -> &mut ContentPart {
        if let Some(tag) = self.tag.take() {
            self.parts.push(Part::Tag(tag));
        }

        self.content.get_or_insert_with(ContentPart::default)
    }

    fn tag_mut(&mut self) -> &mut TagPart {
        if let Some(content) = self.content.take() {
            self.push_content(content);
        }

        self.tag.get_or_insert_with(TagPart::default)
    }

    fn push_content(&mut self, content: ContentPart) {
        if !content.is_blank() {
            self.parts.push(Part::Content(content));
        }
    }

    fn flush(&mut self) {
        if let Some(content) = self.content.take() {
            self.push_content(content);
        }

        if let Some(tag) = self.tag.take() {
            self.parts.push(Part::Tag(tag));
        }
    }

    fn finish(mut self) -> Vec<Part> {
        if let Some(tag) = self.tag.as_mut() {
            tag.finish();
        }

        self.flush();
        self.parts
    }
}
