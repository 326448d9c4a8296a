pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Ceiling for `max_depth`; the parser recurses once per nesting level.
pub const MAX_DEPTH_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub(crate) fn width(self) -> usize {
        let Indent::Spaces(width) = self;
        width
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

/// What to do when an object repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Last value wins; the key keeps its first position.
    #[default]
    Replace,
    /// First value wins.
    Ignore,
    Error,
}

/// Grammar switches for the parser. The default is the lenient grammar;
/// [`ParseOptions::strict`] turns every extension off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub single_quotes: bool,
    pub unquoted_keys: bool,
    pub comments: bool,
    pub trailing_commas: bool,
    pub undefined_literal: bool,
    pub control_chars_in_strings: bool,
    pub lone_surrogates: bool,
    pub max_depth: usize,
    pub duplicate_keys: DuplicateKeys,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::default().with_strict(true)
    }

    pub fn is_strict(&self) -> bool {
        !(self.single_quotes
            || self.unquoted_keys
            || self.comments
            || self.trailing_commas
            || self.undefined_literal
            || self.control_chars_in_strings
            || self.lone_surrogates)
    }

    /// Toggles all grammar extensions at once.
    pub fn with_strict(mut self, strict: bool) -> Self {
        let lenient = !strict;
        self.single_quotes = lenient;
        self.unquoted_keys = lenient;
        self.comments = lenient;
        self.trailing_commas = lenient;
        self.undefined_literal = lenient;
        self.control_chars_in_strings = lenient;
        self.lone_surrogates = lenient;
        self
    }

    pub fn with_single_quotes(mut self, allow: bool) -> Self {
        self.single_quotes = allow;
        self
    }

    pub fn with_unquoted_keys(mut self, allow: bool) -> Self {
        self.unquoted_keys = allow;
        self
    }

    pub fn with_comments(mut self, allow: bool) -> Self {
        self.comments = allow;
        self
    }

    pub fn with_trailing_commas(mut self, allow: bool) -> Self {
        self.trailing_commas = allow;
        self
    }

    /// Sets the nesting limit, capped at [`MAX_DEPTH_LIMIT`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    pub fn depth_limit(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }

    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }

    pub(crate) fn grammar_name(&self) -> &'static str {
        if self.is_strict() {
            "strict"
        } else {
            "lenient"
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            single_quotes: true,
            unquoted_keys: true,
            comments: true,
            trailing_commas: true,
            undefined_literal: true,
            control_chars_in_strings: true,
            lone_surrogates: true,
            max_depth: DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

/// Output shape for the JSON writer. `indent: None` writes compact JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub indent: Option<Indent>,
    pub escape_non_ascii: bool,
    pub sort_keys: bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self::default().with_indent(Some(Indent::default()))
    }

    pub fn with_indent(mut self, indent: Option<Indent>) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_escape_non_ascii(mut self, escape_non_ascii: bool) -> Self {
        self.escape_non_ascii = escape_non_ascii;
        self
    }

    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
