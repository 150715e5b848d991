/// One renderable argument, tagged with its primitive kind.
///
/// Placeholder values are carried alongside a template as a heterogeneous,
/// ordered list. Rather than open-ended dynamic typing, the supported kinds
/// form a closed set; each corresponds to a format specifier (see
/// [`FormatValue`](crate::FormatValue)).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatArg {
    /// An object/string-like value (`%@`).
    Text(String),
    /// A character, carried as its Unicode scalar value (`%c`).
    Char(char),
    /// An 8-bit signed integer (`%hhd`).
    Int8(i8),
    /// A 16-bit signed integer (`%hd`).
    Int16(i16),
    /// A 32-bit signed integer (`%d`).
    Int32(i32),
    /// A pointer-wide signed integer (`%ld`).
    WideInt(isize),
    /// A 64-bit signed integer (`%lld`).
    Int64(i64),
    /// An extended floating-point value (`%Lf`).
    Float(f64),
}

impl FormatArg {
    /// Renders the argument to text under the given options.
    #[must_use]
    pub fn render(&self, options: &FormatOptions) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Char(c) => c.to_string(),
            Self::Int8(n) => n.to_string(),
            Self::Int16(n) => n.to_string(),
            Self::Int32(n) => n.to_string(),
            Self::WideInt(n) => n.to_string(),
            Self::Int64(n) => n.to_string(),
            Self::Float(x) => {
                let text = x.to_string();
                if options.decimal_separator == '.' {
                    text
                } else {
                    text.replace('.', &options.decimal_separator.to_string())
                }
            }
        }
    }
}

/// Explicit formatting configuration.
///
/// Passed by reference wherever arguments are rendered to text; there is no
/// process-wide formatter state. The default uses `.` as the decimal
/// separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Separator between the integer and fractional parts of a float.
    pub decimal_separator: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}
