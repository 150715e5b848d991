//! Ready-made conversions between placeholder text and typed values.

use std::str::FromStr;

use weft_core::PartialIso;

/// The identity conversion: placeholder text is the value.
#[must_use]
pub fn text() -> PartialIso<String, String> {
    PartialIso::identity()
}

/// Converts via [`FromStr`] forwards and [`ToString`] backwards.
///
/// Suitable for numeric types and anything else whose `Display` output
/// parses back to the same value.
///
/// # Examples
///
/// ```
/// use weft_format::iso;
///
/// let int = iso::parsed::<i32>();
/// assert_eq!(int.apply(&"2019".to_string()), Some(2019));
/// assert_eq!(int.apply(&"twenty".to_string()), None);
/// assert_eq!(int.unapply(&2019), Some("2019".to_string()));
/// ```
#[must_use]
pub fn parsed<T>() -> PartialIso<String, T>
where
    T: FromStr + ToString + 'static,
{
    PartialIso::new(|text: &String| text.parse().ok(), |value: &T| Some(value.to_string()))
}

/// Accepts exactly one character of placeholder text.
#[must_use]
pub fn character() -> PartialIso<String, char> {
    PartialIso::new(
        |text: &String| {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        },
        |c: &char| Some(c.to_string()),
    )
}

/// Derives the template-direction variant of an iso.
///
/// The forward direction is unchanged; the backward direction always yields
/// `specifier` instead of the value's own text. This is what lets the
/// template direction preview a grammar's shape (`"Count: %d"`) without
/// binding real values.
#[must_use]
pub fn formatted<A: 'static>(
    iso: &PartialIso<String, A>,
    specifier: impl Into<String>,
) -> PartialIso<String, A> {
    let forward = iso.clone();
    let specifier = specifier.into();
    PartialIso::new(
        move |text: &String| forward.apply(text),
        move |_value: &A| Some(specifier.clone()),
    )
}
