//! Command template compilation.
//!
//! A template is a whitespace-separated list of words. Lowercase words are
//! literals that must appear in the input verbatim; uppercase words are
//! placeholders that capture one or more input words:
//!
//! ```text
//! "put ITEM in CONTAINER"
//!   prefix:  ["put"]
//!   body:    [ITEM, "in", CONTAINER]
//!   fixed:   1   (literal words in the body)
//!   args:    ["item", "container"]
//! ```

use std::fmt;

use misadventure_foundation::{Context, Error, Result, TemplateFault};

/// One word of a compiled template body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternToken {
    /// A word that must appear exactly.
    Literal(String),
    /// A named slot capturing one or more words.
    Placeholder(String),
}

/// A compiled command template.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    template: String,
    context: Option<Context>,
    prefix: Vec<String>,
    body: Vec<PatternToken>,
    placeholder_count: usize,
    fixed_count: usize,
    argnames: Vec<String>,
}

impl Pattern {
    /// Compiles `template`, scoping it to `context`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidTemplate` if the template is empty, has a
    /// word containing non-letters, has a word mixing upper and lower case, or
    /// uses the same placeholder twice.
    pub fn compile(template: &str, context: Option<Context>) -> Result<Self> {
        let fail = |fault| Err(Error::invalid_template(template, fault));

        let mut tokens = Vec::new();
        let mut argnames: Vec<String> = Vec::new();

        for word in template.split_whitespace() {
            if !word.chars().all(char::is_alphabetic) {
                return fail(TemplateFault::NonAlphabetic(word.to_string()));
            }
            if is_upper(word) {
                let name = word.to_lowercase();
                if argnames.contains(&name) {
                    return fail(TemplateFault::DuplicatePlaceholder(name));
                }
                argnames.push(name.clone());
                tokens.push(PatternToken::Placeholder(name));
            } else if is_lower(word) {
                tokens.push(PatternToken::Literal(word.to_string()));
            } else {
                return fail(TemplateFault::MixedCase(word.to_string()));
            }
        }

        if tokens.is_empty() {
            return fail(TemplateFault::Empty);
        }

        let split = tokens
            .iter()
            .position(|t| matches!(t, PatternToken::Placeholder(_)))
            .unwrap_or(tokens.len());
        let body = tokens.split_off(split);
        let prefix = tokens
            .into_iter()
            .filter_map(|t| match t {
                PatternToken::Literal(w) => Some(w),
                PatternToken::Placeholder(_) => None,
            })
            .collect();

        let placeholder_count = argnames.len();
        let fixed_count = body.len() - placeholder_count;

        Ok(Self {
            template: template.to_string(),
            context,
            prefix,
            body,
            placeholder_count,
            fixed_count,
            argnames,
        })
    }

    /// A global, all-literal pattern for a single lowercase word.
    pub(crate) fn keyword(word: &str) -> Self {
        Self {
            template: word.to_string(),
            context: None,
            prefix: vec![word.to_string()],
            body: Vec::new(),
            placeholder_count: 0,
            fixed_count: 0,
            argnames: Vec::new(),
        }
    }

    /// The template text this pattern was compiled from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The context this pattern is scoped to (`None` = global).
    #[must_use]
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// Leading literal words.
    #[must_use]
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// Tokens from the first placeholder onwards.
    #[must_use]
    pub fn body(&self) -> &[PatternToken] {
        &self.body
    }

    /// Number of placeholders.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// Number of literal words in the body.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.fixed_count
    }

    /// Placeholder names in template order.
    #[must_use]
    pub fn argnames(&self) -> &[String] {
        &self.argnames
    }

    /// Dispatch ordering key derived from the context depth.
    #[must_use]
    pub fn specificity(&self) -> usize {
        misadventure_foundation::context::specificity(self.context.as_ref())
    }

    /// Returns true if this pattern is available in the `active` context.
    #[must_use]
    pub fn is_active(&self, active: Option<&Context>) -> bool {
        misadventure_foundation::context::matches(self.context.as_ref(), active)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(f, "Pattern({:?}, context={:?})", self.template, ctx.as_str()),
            None => write!(f, "Pattern({:?})", self.template),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// At least one cased letter and no lowercase letters.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// At least one cased letter and no uppercase letters.
fn is_lower(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}
