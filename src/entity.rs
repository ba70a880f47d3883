use std::borrow::Cow;

use crate::error::Error;

const PREDEFINED: &[(&str, char)] = &[
    ("amp", '&'),
    ("apos", '\''),
    ("gt", '>'),
    ("lt", '<'),
    ("quot", '"'),
];

/// Decode the predefined entities. Input without `&` is returned as is.
pub(crate) fn decode_entities(content: &str) -> Result<Cow<str>, Error> {
    if !content.contains('&') {
        return Ok(Cow::Borrowed(content));
    }
    let mut result = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(start) = rest.find('&') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find(';') else {
            return Err(Error::UnclosedEntity(after.to_string()));
        };
        let entity = &after[..end];
        let c = PREDEFINED
            .iter()
            .find(|(name, _)| *name == entity)
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::InvalidEntity(entity.to_string()))?;
        result.push(c);
        rest = &after[end + 1..];
    }
    result.push_str(rest);
    Ok(Cow::Owned(result))
}

fn escape<'a>(content: &'a str, special: &[char]) -> Cow<'a, str> {
    if !content.contains(special) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match PREDEFINED.iter().find(|(_, p)| *p == c) {
            Some((name, _)) if special.contains(&c) => {
                result.push('&');
                result.push_str(name);
                result.push(';');
            }
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape text content.
pub(crate) fn escape_text(content: &str) -> Cow<str> {
    escape(content, &['&', '<', '>'])
}

/// Escape an attribute value written between double quotes.
pub(crate) fn escape_attribute(content: &str) -> Cow<str> {
    escape(content, &['&', '<', '"'])
}
