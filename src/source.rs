use std::fs;
use std::io;
use std::rc::Rc;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

pub type Source = Rc<SourceImpl>;

pub struct SourceImpl {
    pub name: String,
    pub content: String,
}

pub fn file(path: &str) -> io::Result<Source> {
    let bytes = fs::read(path)?;
    Ok(named(path, &String::from_utf8_lossy(&bytes)))
}

pub fn text(text: &str) -> Source {
    named("<stdin>", text)
}

pub fn named(name: &str, content: &str) -> Source {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    Rc::new(SourceImpl {
        name: String::from(name),
        content: String::from(content),
    })
}

impl SourceImpl {
    pub fn character_at(&self, index: usize) -> Option<char> {
        self.content.get(index..).and_then(|rest| rest.chars().next())
    }

    pub fn length(&self) -> usize {
        self.content.len()
    }

    pub fn lexeme(&self, index: usize, length: usize) -> &str {
        let end = index + length;
        &self.content[index..end]
    }
}

/// A byte range of a [`Source`], with the 1-based line it starts on.
#[derive(Clone)]
pub struct Span {
    pub source: Source,
    pub index: usize,
    pub length: usize,
    pub line: usize,
}

impl Span {
    pub fn new(source: &Source, index: usize, length: usize, line: usize) -> Self {
        Span {
            source: Rc::clone(source),
            index,
            length,
            line,
        }
    }

    /// Covers everything from the start of `start` to the end of `end`
    pub fn join<T: ContainsSpan, U: ContainsSpan>(start: &T, end: &U) -> Span {
        let start = start.span();
        let end = end.span();
        let length = (end.index + end.length).saturating_sub(start.index);
        Span::new(&start.source, start.index, length, start.line)
    }

    pub fn lexeme(&self) -> &str {
        self.source.lexeme(self.index, self.length)
    }

    /// The full text of the line containing this span and the span's offset within it
    pub fn entire_line(&self) -> (&str, usize) {
        let content = &self.source.content;
        let start = content[..self.index]
            .rfind('\n')
            .map(|newline| newline + 1)
            .unwrap_or(0);
        let end = content[self.index..]
            .find('\n')
            .map(|newline| self.index + newline)
            .unwrap_or(content.len());
        let line = content[start..end].trim_end_matches('\r');
        let offset = content[start..self.index].chars().count();
        (line, offset)
    }

    pub fn location(&self) -> String {
        format!("{}:{}", self.source.name, self.line)
    }
}

impl std::fmt::Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Span(line: {}, lexeme: {:?})", self.line, self.lexeme())
    }
}

pub trait ContainsSpan {
    fn span(&self) -> &Span;
}

impl ContainsSpan for Span {
    fn span(&self) -> &Span {
        self
    }
}
