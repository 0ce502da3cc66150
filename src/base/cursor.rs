/// Position of the tokenizer in the current literal.
#[derive(Debug, Default, Copy, Clone)]
pub struct Cursor {
    next_pos: usize,
}

impl Cursor {
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.next_pos
    }

    #[inline]
    pub fn peek(&self, input: &[u8]) -> Option<u8> {
        let ch = input.get(self.next_pos).copied();

        trace!(@chars "peek", ch)
    }

    #[inline]
    pub fn consume_ch(&mut self, input: &[u8]) -> Option<u8> {
        let ch = input.get(self.next_pos).copied();

        if ch.is_some() {
            self.next_pos += 1;
        }

        trace!(@chars "consume", ch)
    }

    /// Consumes `ch` if it's the next character of the input.
    #[inline]
    pub fn consume_if(&mut self, input: &[u8], ch: u8) -> bool {
        if input.get(self.next_pos) == Some(&ch) {
            self.next_pos += 1;

            trace!(@chars "consume", Some(ch));

            true
        } else {
            false
        }
    }

    #[inline]
    pub fn consume_while(&mut self, input: &[u8], mut predicate: impl FnMut(u8) -> bool) {
        while let Some(&ch) = input.get(self.next_pos) {
            if !predicate(ch) {
                break;
            }

            self.next_pos += 1;
        }

        trace!(@chars "consume while");
    }

    #[inline]
    pub fn consume_several(&mut self, count: usize) {
        self.next_pos += count;

        trace!(@chars "consume several");
    }

    #[inline]
    pub fn consume_to_end(&mut self, input: &[u8]) {
        self.next_pos = input.len();

        trace!(@chars "consume to end");
    }

    #[inline]
    pub fn lookahead(&self, input: &[u8], offset: usize) -> Option<u8> {
        let ch = input.get(self.next_pos + offset).copied();

        trace!(@chars "lookahead", ch)
    }
}
