//! Token types produced by the tokenizer.

use core::fmt;

use serde::Serialize;

/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// Character tokens are delivered as runs: consecutive character data between
/// two other tokens arrives as one or more `Text` tokens whose payloads
/// concatenate to the decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag. When a DOCTYPE token is created, its name,
    /// public identifier, and system identifier must be marked as missing
    /// (which is a distinct state from the empty string), and the force-quirks
    /// flag must be set to off (its other state is on)."
    Doctype {
        /// "a name"
        name: Option<String>,
        /// "a public identifier"
        public_identifier: Option<String>,
        /// "a system identifier"
        system_identifier: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes, each of which has a name and a value."
    ///
    /// Names are lowercase and attribute names are unique within the list.
    StartTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Same structure as a start tag; attributes and the
    /// self-closing flag are parse errors here but are kept as written.
    EndTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// A run of character data.
    Text {
        /// The decoded characters.
        data: String,
    },

    /// Signals the end of input. Returned forever once reached.
    EndOfInput,
}

impl Token {
    /// A start tag with the given name and attributes, not self-closing.
    #[must_use]
    pub fn start_tag(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::StartTag {
            name: name.into(),
            self_closing: false,
            attributes,
        }
    }

    /// An end tag with the given name and no attributes.
    #[must_use]
    pub fn end_tag(name: impl Into<String>) -> Self {
        Self::EndTag {
            name: name.into(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// A text token.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text { data: data.into() }
    }

    /// A comment token.
    #[must_use]
    pub fn comment(data: impl Into<String>) -> Self {
        Self::Comment { data: data.into() }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// The tag name of a start or end tag.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The value of the named attribute on a start or end tag.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => attributes
                .iter()
                .find(|attr| attr.name == name)
                .map(|attr| attr.value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                if let Some(pub_id) = public_identifier {
                    write!(f, " PUBLIC \"{pub_id}\"")?;
                }
                if let Some(sys_id) = system_identifier {
                    write!(f, " SYSTEM \"{sys_id}\"")?;
                }
                if *force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name, .. } => write!(f, "</{name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            // Escaped so whitespace-only runs stay visible.
            Self::Text { data } => write!(f, "Text(\"{}\")", data.escape_debug()),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        let tag = Token::StartTag {
            name: "a".to_string(),
            self_closing: true,
            attributes: vec![Attribute::new("href", "/x")],
        };
        assert_eq!(tag.to_string(), "<a href=\"/x\" />");
        assert_eq!(Token::end_tag("p").to_string(), "</p>");
        assert_eq!(Token::text("a\n\tb").to_string(), "Text(\"a\\n\\tb\")");
        assert_eq!(Token::EndOfInput.to_string(), "EOF");

        let doctype = Token::Doctype {
            name: Some("html".to_string()),
            public_identifier: None,
            system_identifier: Some("about:legacy-compat".to_string()),
            force_quirks: false,
        };
        assert_eq!(
            doctype.to_string(),
            "DOCTYPE html SYSTEM \"about:legacy-compat\""
        );
    }

    #[test]
    fn test_attribute_lookup() {
        let tag = Token::start_tag(
            "input",
            vec![Attribute::new("type", "text"), Attribute::new("value", "")],
        );
        assert_eq!(tag.tag_name(), Some("input"));
        assert_eq!(tag.attribute("type"), Some("text"));
        assert_eq!(tag.attribute("value"), Some(""));
        assert_eq!(tag.attribute("name"), None);
        assert_eq!(Token::text("x").attribute("type"), None);
    }
}
