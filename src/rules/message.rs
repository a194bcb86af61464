use std::fmt;

/// Message identifiers and their templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    NoMagicNumber,
    NoMagicString,
    Unexpected,
    TooManyParams,
    TooManyFunctionLines,
    TooManyFileLines,
}

impl MessageId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoMagicNumber => "noMagicNumber",
            Self::NoMagicString => "noMagicString",
            Self::Unexpected => "unexpected",
            Self::TooManyParams | Self::TooManyFunctionLines | Self::TooManyFileLines => "exceed",
        }
    }

    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::NoMagicNumber => "No magic number: {{value}}. Extract to a named constant.",
            Self::NoMagicString => "No magic string: {{value}}. Extract to a named constant.",
            Self::Unexpected => {
                "Unexpected comment. Code should be self-documenting. If necessary, use an allowed prefix ({{allowed}})."
            }
            Self::TooManyParams => {
                "{{name}} has too many parameters ({{count}}). Maximum allowed is {{max}}."
            }
            Self::TooManyFunctionLines => {
                "{{name}} has too many lines ({{lineCount}}). Maximum allowed is {{maxLines}}."
            }
            Self::TooManyFileLines => {
                "File has too many lines ({{actual}}). Maximum allowed is {{max}}."
            }
        }
    }

    /// Render the template with `{{key}}` placeholders substituted.
    #[must_use]
    pub fn render(self, data: &[(&str, &str)]) -> String {
        render_message(self.template(), data)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substitute `{{key}}` placeholders. Unknown placeholders are left as written.
#[must_use]
pub fn render_message(template: &str, data: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            output.push_str(&rest[open..]);
            return output;
        };
        let key = after_open[..close].trim();
        match data.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
