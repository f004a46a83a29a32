//! Table formatting utilities

use prettytable::{Cell, Row, Table};

/// Create a table with bold headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        headers
            .iter()
            .map(|h| Cell::new(h).style_spec("b"))
            .collect(),
    ));
    table
}

/// Create a two-column `Property | Value` table
pub fn property_table<I, K>(rows: I) -> Table
where
    I: IntoIterator<Item = (K, String)>,
    K: AsRef<str>,
{
    let mut table = create_table(&["Property", "Value"]);
    for (key, value) in rows {
        table.add_row(Row::new(vec![
            Cell::new(key.as_ref()),
            Cell::new(&value).style_spec("r"),
        ]));
    }
    table
}
