//! Scanner (C1)
//!
//! Tokenises a script buffer into a stream of classified word-fragments.
//! Tokens are (kind, byte-range) pairs into the caller's buffer; the
//! scanner never copies or retains the underlying text.

/// Classification of a single token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Inter-word whitespace.
    Sep,
    /// A statement terminator (`;`, `\n`, or end of input).
    Eol,
    /// A literal word not requiring escape decoding (braced literal).
    Str,
    /// A literal word that may contain backslash sequences.
    Esc,
    /// A variable name, without the leading `$`.
    Var,
    /// A nested script, to be substituted with its evaluation result.
    Cmd,
    /// End of input.
    Eof,
}

/// A single scanned token: a classification plus a half-open byte range
/// into the scanner's source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// True for the locale-independent "graphic" byte class used to separate
/// words: printable ASCII excluding space. Bytes outside this range
/// (including all non-ASCII bytes) are treated as non-graphic.
pub(crate) fn is_graphic(b: u8) -> bool {
    b.is_ascii_graphic()
}

/// Drives the token state machine over a byte buffer.
pub struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
    prev_kind: TokenKind,
    insidequote: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            prev_kind: TokenKind::Eol,
            insidequote: false,
        }
    }

    /// Produce the next token. Once the buffer is exhausted, returns EOF
    /// tokens repeatedly (an EOL token is synthesized first if the last
    /// real token wasn't already an EOL, so a trailing command with no
    /// terminator is still dispatched).
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.pos >= self.buf.len() {
                let kind = if !matches!(self.prev_kind, TokenKind::Eol | TokenKind::Eof) {
                    TokenKind::Eol
                } else {
                    TokenKind::Eof
                };
                self.prev_kind = kind;
                return Token { kind, start: self.pos, end: self.pos };
            }

            let b = self.buf[self.pos];

            if (b == b'\n' || b == b';') && !self.insidequote {
                return self.scan_eol();
            }
            if b == b'[' {
                return self.scan_command();
            }
            if b == b'$' {
                return self.scan_var();
            }
            if b == b'#' {
                if self.prev_kind != TokenKind::Eol {
                    return self.scan_string();
                }
                self.scan_comment();
                continue;
            }
            if is_graphic(b) || self.insidequote {
                return self.scan_string();
            }
            return self.scan_sep();
        }
    }

    fn scan_eol(&mut self) -> Token {
        let start = self.pos;
        while self.pos < self.buf.len() {
            let b = self.buf[self.pos];
            if !is_graphic(b) || b == b';' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.prev_kind = TokenKind::Eol;
        Token { kind: TokenKind::Eol, start, end: self.pos }
    }

    fn scan_sep(&mut self) -> Token {
        let start = self.pos;
        while self.pos < self.buf.len() && !is_graphic(self.buf[self.pos]) {
            self.pos += 1;
        }
        self.prev_kind = TokenKind::Sep;
        Token { kind: TokenKind::Sep, start, end: self.pos }
    }

    fn scan_command(&mut self) -> Token {
        self.pos += 1; // skip '['
        let start = self.pos;
        let mut level = 1i32;
        let mut blevel = 0i32;
        while self.pos < self.buf.len() {
            let b = self.buf[self.pos];
            if b == b'\\' {
                if self.pos + 1 < self.buf.len() {
                    self.pos += 2;
                    continue;
                }
                self.pos += 1;
                continue;
            }
            if b == b'[' {
                if blevel == 0 {
                    level += 1;
                }
            } else if b == b']' {
                if blevel == 0 {
                    level -= 1;
                    if level == 0 {
                        break;
                    }
                }
            } else if b == b'{' {
                blevel += 1;
            } else if b == b'}' && blevel != 0 {
                blevel -= 1;
            }
            self.pos += 1;
        }
        let end = self.pos;
        if self.pos < self.buf.len() && self.buf[self.pos] == b']' {
            self.pos += 1;
        }
        self.prev_kind = TokenKind::Cmd;
        Token { kind: TokenKind::Cmd, start, end }
    }

    fn scan_var(&mut self) -> Token {
        self.pos += 1; // skip '$'
        let start = self.pos;
        while self.pos < self.buf.len() {
            let b = self.buf[self.pos];
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            // Lone '$' — a literal single-character word.
            self.prev_kind = TokenKind::Str;
            Token { kind: TokenKind::Str, start: start - 1, end: start }
        } else {
            self.prev_kind = TokenKind::Var;
            Token { kind: TokenKind::Var, start, end: self.pos }
        }
    }

    fn scan_brace(&mut self) -> Token {
        self.pos += 1; // skip '{'
        let start = self.pos;
        let mut level = 1i32;
        while self.pos < self.buf.len() {
            let b = self.buf[self.pos];
            if b == b'{' {
                level += 1;
                self.pos += 1;
            } else if b == b'\\' && self.pos + 1 < self.buf.len() {
                self.pos += 2;
            } else if b == b'}' {
                level -= 1;
                if level == 0 {
                    break;
                }
                self.pos += 1;
            } else {
                self.pos += 1;
            }
        }
        let end = self.pos;
        if self.pos < self.buf.len() {
            self.pos += 1; // skip closing '}'
        }
        self.prev_kind = TokenKind::Str;
        Token { kind: TokenKind::Str, start, end }
    }

    fn scan_string(&mut self) -> Token {
        let newword = matches!(self.prev_kind, TokenKind::Sep | TokenKind::Eol | TokenKind::Str);
        if newword && self.buf.get(self.pos) == Some(&b'{') {
            return self.scan_brace();
        }
        if newword && self.buf.get(self.pos) == Some(&b'"') {
            self.insidequote = true;
            self.pos += 1;
        }
        let start = self.pos;
        while self.pos < self.buf.len() {
            let b = self.buf[self.pos];
            if b == b'$' || b == b'[' {
                break;
            }
            if b == b'"' {
                if self.insidequote {
                    let end = self.pos;
                    self.pos += 1;
                    self.insidequote = false;
                    self.prev_kind = TokenKind::Esc;
                    return Token { kind: TokenKind::Esc, start, end };
                }
                self.pos += 1;
                continue;
            }
            if b == b'\\' {
                self.pos += 1;
                if self.pos < self.buf.len() {
                    self.pos += 1;
                }
                continue;
            }
            if (!is_graphic(b) || b == b';') && !self.insidequote {
                break;
            }
            self.pos += 1;
        }
        let end = self.pos;
        self.prev_kind = TokenKind::Esc;
        Token { kind: TokenKind::Esc, start, end }
    }

    fn scan_comment(&mut self) {
        while self.pos < self.buf.len() && self.buf[self.pos] != b'\n' {
            self.pos += 1;
        }
    }
}

/// Shared with the escape decoder, so `\x` decoding uses the same
/// hex-digit definition as the scanner.
pub(crate) fn hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}
