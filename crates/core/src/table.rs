//! Data tables: one behaviour per row, described from a template.

use std::fmt;

/// A table row whose columns can be rendered into a description.
pub trait Row: Clone + Send + Sync + 'static {
    fn columns(&self) -> Vec<String>;
}

macro_rules! impl_row {
    ($($column:ident),+) => {
        impl<$($column),+> Row for ($($column,)+)
        where
            $($column: fmt::Display + Clone + Send + Sync + 'static),+
        {
            #[allow(non_snake_case)]
            fn columns(&self) -> Vec<String> {
                let ($($column,)+) = self;
                vec![$($column.to_string()),+]
            }
        }
    };
}

impl_row!(A);
impl_row!(A, B);
impl_row!(A, B, C);
impl_row!(A, B, C, D);

/// Replaces each `{}` in `template`, left to right, with the next column.
///
/// Placeholders beyond the last column are kept verbatim.
pub fn describe_row(template: &str, columns: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut columns = columns.iter();
    let mut rest = template;
    while let Some(at) = rest.find("{}") {
        out.push_str(&rest[..at]);
        match columns.next() {
            Some(column) => out.push_str(column),
            None => out.push_str("{}"),
        }
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_placeholders_in_order() {
        let row = (1, 2, 3);
        assert_eq!(describe_row("{} plus {} is {}", &row.columns()), "1 plus 2 is 3");
    }

    #[test]
    fn keeps_unfilled_placeholders() {
        assert_eq!(describe_row("{} and {}", &("x",).columns()), "x and {}");
        assert_eq!(describe_row("no holes", &(1, 2).columns()), "no holes");
    }
}
