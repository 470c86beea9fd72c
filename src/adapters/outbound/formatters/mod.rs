/// Formatter adapters for the report output
mod table_formatter;

pub use table_formatter::TableFormatter;
