use crate::{FormatArg, FormatOptions};

/// A C-style format specifier, without the leading `%`.
///
/// A specifier is a length modifier (possibly empty) plus a conversion
/// character, e.g. `lld` or `@`. [`Specifier::render`] adds the `%` and an
/// optional 1-based position for the indexed form `%N$…`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specifier {
    length_modifier: &'static str,
    conversion: char,
}

impl Specifier {
    /// Creates a specifier from a length modifier and a conversion character.
    #[must_use]
    pub const fn new(length_modifier: &'static str, conversion: char) -> Self {
        Self {
            length_modifier,
            conversion,
        }
    }

    /// Renders the specifier text, e.g. `%lld`, or `%2$lld` with a position.
    #[must_use]
    pub fn render(&self, position: Option<usize>) -> String {
        match position {
            Some(n) => format!("%{n}${}{}", self.length_modifier, self.conversion),
            None => format!("%{}{}", self.length_modifier, self.conversion),
        }
    }
}

/// A value type that can stand behind a format placeholder.
///
/// This is the capability every `sparam` value type must declare: its native
/// format specifier, and how it converts into a [`FormatArg`] for the
/// template's parallel argument list.
pub trait FormatValue {
    /// The specifier used when this type appears in the template direction.
    const SPECIFIER: Specifier;

    /// Converts the value into its runtime argument representation.
    fn argument(&self) -> FormatArg;
}

impl FormatValue for String {
    const SPECIFIER: Specifier = Specifier::new("", '@');

    fn argument(&self) -> FormatArg {
        FormatArg::Text(self.clone())
    }
}

impl FormatValue for char {
    const SPECIFIER: Specifier = Specifier::new("", 'c');

    fn argument(&self) -> FormatArg {
        FormatArg::Char(*self)
    }
}

impl FormatValue for i8 {
    const SPECIFIER: Specifier = Specifier::new("hh", 'd');

    fn argument(&self) -> FormatArg {
        FormatArg::Int8(*self)
    }
}

impl FormatValue for i16 {
    const SPECIFIER: Specifier = Specifier::new("h", 'd');

    fn argument(&self) -> FormatArg {
        FormatArg::Int16(*self)
    }
}

impl FormatValue for i32 {
    const SPECIFIER: Specifier = Specifier::new("", 'd');

    fn argument(&self) -> FormatArg {
        FormatArg::Int32(*self)
    }
}

impl FormatValue for isize {
    const SPECIFIER: Specifier = Specifier::new("l", 'd');

    fn argument(&self) -> FormatArg {
        FormatArg::WideInt(*self)
    }
}

impl FormatValue for i64 {
    const SPECIFIER: Specifier = Specifier::new("ll", 'd');

    fn argument(&self) -> FormatArg {
        FormatArg::Int64(*self)
    }
}

impl FormatValue for f64 {
    const SPECIFIER: Specifier = Specifier::new("L", 'f');

    fn argument(&self) -> FormatArg {
        FormatArg::Float(*self)
    }
}

/// Substitutes format specifiers in `text` with rendered arguments.
///
/// Recognizes `%%` (a literal `%`), the positional form `%N$…` (1-based),
/// the length modifiers `hh`, `h`, `ll`, `l`, `L`, and the conversions `d`,
/// `f`, `c`, `s`, and `@`. Non-positional specifiers consume arguments in
/// order; positional ones address the list directly and do not advance the
/// cursor. Each argument renders according to its own kind.
///
/// The function is total: malformed specifiers and specifiers with no
/// corresponding argument pass through verbatim.
///
/// # Examples
///
/// ```
/// use weft_format::{substitute, FormatArg, FormatOptions};
///
/// let args = [FormatArg::Text("weft".into()), FormatArg::Int32(3)];
/// let text = substitute("%@ v%d, 100%%", &args, &FormatOptions::default());
/// assert_eq!(text, "weft v3, 100%");
/// ```
#[must_use]
pub fn substitute(text: &str, args: &[FormatArg], options: &FormatOptions) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut rest = text;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let body = &rest[pos + 1..];

        if let Some(after) = body.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        let Some(spec) = leading_specifier(body) else {
            out.push('%');
            rest = body;
            continue;
        };

        let arg = match spec.position {
            Some(n) => args.get(n - 1),
            None => args.get(cursor),
        };
        match arg {
            Some(arg) => {
                out.push_str(&arg.render(options));
                if spec.position.is_none() {
                    cursor += 1;
                }
                rest = &body[spec.consumed..];
            }
            None => {
                out.push('%');
                rest = body;
            }
        }
    }

    out.push_str(rest);
    out
}

struct LeadingSpecifier {
    position: Option<usize>,
    consumed: usize,
}

/// Parses a specifier body (`2$lld`, `@`, …) at the start of `text`.
fn leading_specifier(text: &str) -> Option<LeadingSpecifier> {
    let mut consumed = 0;

    let digits = text.chars().take_while(char::is_ascii_digit).count();
    let position = if digits > 0 && text[digits..].starts_with('$') {
        let n: usize = text[..digits].parse().ok()?;
        if n == 0 {
            return None;
        }
        consumed = digits + 1;
        Some(n)
    } else {
        None
    };

    let after_position = &text[consumed..];
    for modifier in ["hh", "h", "ll", "l", "L", ""] {
        if let Some(after_modifier) = after_position.strip_prefix(modifier) {
            let conversion = after_modifier.chars().next()?;
            if matches!(conversion, 'd' | 'f' | 'c' | 's' | '@') {
                consumed += modifier.len() + conversion.len_utf8();
                return Some(LeadingSpecifier { position, consumed });
            }
            // A stripped modifier with no valid conversion after it falls
            // through to the shorter candidates, ending with "".
        }
    }

    None
}
