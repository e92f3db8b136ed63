//! Tolerant scanner for JSX-style markup.
//!
//! Component files wrap their markup in arbitrary JavaScript, so the scanner
//! looks for element openings anywhere in the source, skipping string
//! literals and comments. Recoverable problems become [`ParseError`]s; the
//! scanner never fails outright and never panics.

use crate::{
    AttrEntry, AttrValue, Attribute, Child, Element, Expression, ExpressionContainer, Parse,
    ParseError, Span, TagName,
};

/// Parse JSX-style markup out of `source`.
#[must_use]
pub fn parse(source: &str) -> Parse {
    let mut parser = Parser::new(source);
    let roots = parser.scan_elements(0, source.len());
    Parse {
        roots,
        errors: parser.errors,
    }
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            errors: Vec::new(),
        }
    }

    fn error(&mut self, message: impl Into<String>, offset: usize) {
        self.errors.push(ParseError {
            message: message.into(),
            offset,
        });
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_ws(&mut self, limit: usize) {
        while self.pos < limit && self.bytes[self.pos].is_ascii_whitespace() {
            self.bump();
        }
    }

    /// Scan `start..end` for top-level element openings. Leaves `pos`
    /// unchanged for the caller.
    fn scan_elements(&mut self, start: usize, end: usize) -> Vec<Element> {
        let saved = self.pos;
        self.pos = start;
        let mut elements = Vec::new();
        while self.pos < end {
            match self.bytes[self.pos] {
                b'"' | b'\'' => self.skip_string(end),
                b'`' => self.skip_template(end),
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line_comment(end),
                b'/' if self.peek_at(1) == Some(b'*') => self.skip_block_comment(end),
                b'<' if self.at_element_start() => {
                    let guarded = self.guard_precedes(start);
                    if let Some(element) = self.parse_element(guarded, end) {
                        elements.push(element);
                    }
                }
                _ => self.bump(),
            }
        }
        self.pos = saved;
        elements
    }

    /// `<` followed by an identifier start; `</`, `<>`, `<=` and plain
    /// comparisons are not element openings.
    fn at_element_start(&self) -> bool {
        matches!(self.peek_at(1), Some(b) if b.is_ascii_alphabetic() || b == b'_')
    }

    /// Look back from the current `<` for a `&&` operator, which marks the
    /// element as a conditionally rendered (`cond && <el/>`) operand.
    fn guard_precedes(&self, region_start: usize) -> bool {
        let mut idx = self.pos;
        while idx > region_start && self.bytes[idx - 1].is_ascii_whitespace() {
            idx -= 1;
        }
        idx >= region_start + 2 && self.bytes[idx - 1] == b'&' && self.bytes[idx - 2] == b'&'
    }

    fn skip_string(&mut self, limit: usize) {
        let quote = self.bytes[self.pos];
        self.bump();
        while self.pos < limit {
            match self.bytes[self.pos] {
                b'\\' => self.pos = (self.pos + 2).min(limit),
                b'\n' => break,
                b if b == quote => {
                    self.bump();
                    break;
                }
                _ => self.bump(),
            }
        }
    }

    fn skip_template(&mut self, limit: usize) {
        self.bump();
        while self.pos < limit {
            match self.bytes[self.pos] {
                b'\\' => self.pos = (self.pos + 2).min(limit),
                b'`' => {
                    self.bump();
                    return;
                }
                b'$' if self.peek_at(1) == Some(b'{') => {
                    self.bump();
                    self.skip_braced(limit);
                }
                _ => self.bump(),
            }
        }
    }

    fn skip_line_comment(&mut self, limit: usize) {
        while self.pos < limit && self.bytes[self.pos] != b'\n' {
            self.bump();
        }
    }

    fn skip_block_comment(&mut self, limit: usize) {
        self.pos = (self.pos + 2).min(limit);
        while self.pos < limit {
            if self.bytes[self.pos] == b'*' && self.peek_at(1) == Some(b'/') {
                self.pos += 2;
                return;
            }
            self.bump();
        }
    }

    /// Skip a balanced `{ ... }` group, string- and comment-aware. Returns
    /// the span of the inner region; `pos` ends just past the closing brace
    /// (or at `limit` when unterminated).
    fn skip_braced(&mut self, limit: usize) -> Span {
        let open = self.pos;
        self.bump();
        let inner_start = self.pos;
        let mut depth = 1usize;
        while self.pos < limit {
            match self.bytes[self.pos] {
                b'"' | b'\'' => self.skip_string(limit),
                b'`' => self.skip_template(limit),
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line_comment(limit),
                b'/' if self.peek_at(1) == Some(b'*') => self.skip_block_comment(limit),
                b'{' => {
                    depth += 1;
                    self.bump();
                }
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        let inner = Span::new(inner_start, self.pos);
                        self.bump();
                        return inner;
                    }
                    self.bump();
                }
                _ => self.bump(),
            }
        }
        self.error("unterminated `{` expression", open);
        Span::new(inner_start, self.pos)
    }

    fn ident(&mut self, limit: usize) -> Option<Span> {
        let start = self.pos;
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.bump(),
            _ => return None,
        }
        while self.pos < limit {
            let b = self.bytes[self.pos];
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' {
                self.bump();
            } else {
                break;
            }
        }
        Some(Span::new(start, self.pos))
    }

    fn parse_element(&mut self, guarded: bool, limit: usize) -> Option<Element> {
        let open = self.pos;
        self.bump();

        let name_start = self.pos;
        let mut path = Vec::new();
        loop {
            let Some(segment) = self.ident(limit) else { break };
            path.push(self.src[segment.start..segment.end].to_string());
            if self.peek() == Some(b'.') {
                self.bump();
            } else {
                break;
            }
        }
        if path.is_empty() {
            self.error("expected tag name after `<`", open);
            return None;
        }
        let name_span = Span::new(name_start, self.pos);
        let tag = match path.len() {
            1 => TagName::Simple {
                name: path.swap_remove(0),
            },
            _ => TagName::Member { path },
        };

        let mut attributes = Vec::new();
        let mut self_closing = false;
        let mut closed = false;
        while self.pos < limit {
            self.skip_ws(limit);
            match self.peek() {
                Some(b'>') => {
                    self.bump();
                    closed = true;
                    break;
                }
                Some(b'/') if self.peek_at(1) == Some(b'>') => {
                    self.pos += 2;
                    self_closing = true;
                    closed = true;
                    break;
                }
                Some(b'{') => {
                    let brace_start = self.pos;
                    self.skip_braced(limit);
                    attributes.push(AttrEntry::Spread(Span::new(brace_start, self.pos)));
                }
                Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
                    attributes.push(AttrEntry::Attribute(self.parse_attribute(limit)));
                }
                Some(_) => {
                    // Drop the stray byte and keep going rather than
                    // abandoning the element.
                    self.error("unexpected character in opening tag", self.pos);
                    self.bump();
                }
                None => break,
            }
        }
        if !closed {
            self.error("unterminated opening tag", open);
        }

        let mut element = Element {
            tag,
            name_span,
            attributes,
            children: Vec::new(),
            self_closing,
            span: Span::new(open, self.pos),
            guarded,
        };
        if closed && !self_closing {
            self.parse_children(&mut element, limit);
        }
        Some(element)
    }

    fn parse_attribute(&mut self, limit: usize) -> Attribute {
        let start = self.pos;
        // attribute names allow `-` (data-*, aria-*) and `:` namespaces
        while self.pos < limit {
            let b = self.bytes[self.pos];
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b':' {
                self.bump();
            } else {
                break;
            }
        }
        let name = self.src[start..self.pos].to_string();
        let name_end = self.pos;

        self.skip_ws(limit);
        if self.peek() != Some(b'=') {
            return Attribute {
                name,
                value: None,
                span: Span::new(start, name_end),
            };
        }
        self.bump();
        self.skip_ws(limit);

        let value = match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.bump();
                let literal_start = self.pos;
                while self.pos < limit && self.bytes[self.pos] != quote {
                    self.bump();
                }
                let literal = self.src[literal_start..self.pos].to_string();
                if self.pos < limit {
                    self.bump();
                } else {
                    self.error("unterminated attribute value", literal_start);
                }
                Some(AttrValue::Literal(literal))
            }
            Some(b'{') => {
                let inner = self.skip_braced(limit);
                let raw = self.src[inner.start..inner.end].to_string();
                Some(AttrValue::Expression(classify_expression(raw)))
            }
            _ => {
                self.error("expected attribute value after `=`", self.pos.min(limit));
                None
            }
        };
        Attribute {
            name,
            value,
            span: Span::new(start, self.pos),
        }
    }

    fn parse_children(&mut self, element: &mut Element, limit: usize) {
        while self.pos < limit {
            match self.bytes[self.pos] {
                b'<' if self.peek_at(1) == Some(b'/') => {
                    // Closing tag. Tolerate a mismatched name rather than
                    // trying to resynchronize the tree.
                    let close_start = self.pos;
                    self.pos += 2;
                    self.skip_ws(limit);
                    let close_name_start = self.pos;
                    while self.pos < limit {
                        let b = self.bytes[self.pos];
                        if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.' {
                            self.bump();
                        } else {
                            break;
                        }
                    }
                    let close_name = &self.src[close_name_start..self.pos];
                    if close_name != element.tag.resolved() {
                        self.error(
                            format!("mismatched closing tag `</{close_name}>`"),
                            close_start,
                        );
                    }
                    self.skip_ws(limit);
                    if self.peek() == Some(b'>') {
                        self.bump();
                    }
                    return;
                }
                b'<' if self.at_element_start() => {
                    if let Some(child) = self.parse_element(false, limit) {
                        element.children.push(Child::Element(child));
                    }
                }
                b'<' => {
                    // `<>`, `<!`, stray `<`
                    self.bump();
                }
                b'{' => {
                    let container_start = self.pos;
                    let inner = self.skip_braced(limit);
                    let elements = self.scan_elements(inner.start, inner.end);
                    element.children.push(Child::Expression(ExpressionContainer {
                        span: Span::new(container_start, self.pos),
                        elements,
                    }));
                }
                _ => {
                    let text_start = self.pos;
                    while self.pos < limit
                        && self.bytes[self.pos] != b'<'
                        && self.bytes[self.pos] != b'{'
                    {
                        self.bump();
                    }
                    element
                        .children
                        .push(Child::Text(Span::new(text_start, self.pos)));
                }
            }
        }
        self.error(
            format!("unclosed element <{}>", element.tag.resolved()),
            element.span.start,
        );
    }
}

/// Classify a `{...}` attribute expression. Template literals keep their
/// literal segments; everything else is opaque.
fn classify_expression(raw: String) -> Expression {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('`') && trimmed.ends_with('`') {
        if let Some(quasis) = template_quasis(trimmed) {
            return Expression::Template { quasis, raw };
        }
    }
    Expression::Opaque { raw }
}

/// Split a backtick template into its literal segments, dropping `${...}`
/// interpolations. Returns `None` when the template nests in a way the
/// splitter does not understand; the caller treats that as opaque.
fn template_quasis(template: &str) -> Option<Vec<String>> {
    let inner = template.get(1..template.len() - 1)?;
    let mut quasis = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '$' if chars.peek() == Some(&'{') => {
                chars.next();
                quasis.push(std::mem::take(&mut current));
                let mut depth = 1usize;
                for inner_ch in chars.by_ref() {
                    match inner_ch {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                if depth != 0 {
                    return None;
                }
            }
            _ => current.push(ch),
        }
    }
    quasis.push(current);
    Some(quasis)
}
