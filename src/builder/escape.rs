use crate::constants::{LIST_ESCAPE, LIST_SEPARATOR};

/// Split a list-valued cell on unescaped `;`, turning `\;` into `;`.
///
/// An empty cell yields a single empty value.
pub fn split_escaped(cell: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut chars = cell.chars().peekable();

    while let Some(c) = chars.next() {
        if c == LIST_ESCAPE && chars.peek() == Some(&LIST_SEPARATOR) {
            current.push(LIST_SEPARATOR);
            chars.next();
        } else if c == LIST_SEPARATOR {
            values.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    values.push(current);
    values
}

/// Inverse of [`split_escaped`]
pub fn join_escaped<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let escaped = format!("{LIST_ESCAPE}{LIST_SEPARATOR}");
    values
        .into_iter()
        .map(|v| v.as_ref().replace(LIST_SEPARATOR, &escaped))
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}
