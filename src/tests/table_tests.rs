use super::Table;
use crate::error::TableError;

fn sample() -> Table<&'static str> {
    let mut table = Table::new(2);
    table.add_row(["a", "b"]);
    table.add_row(["x"]);
    table
}

#[test]
fn renders_pipe_delimited_rows_with_blank_empty_cells() {
    let table = sample();
    assert_eq!(table.get_row(1).expect("row"), &[Some("x"), None]);
    assert_eq!(table.get_table(), "| a | b |\n| x |  |\n");
    assert_eq!(table.to_string(), table.get_table());
}

#[test]
fn add_row_pads_and_truncates_to_column_count() {
    let mut table: Table<i32> = Table::new(3);
    table.add_row([1]);
    table.add_row([1, 2, 3, 4, 5]);

    assert_eq!(table.get_row(0).expect("row"), &[Some(1), None, None]);
    assert_eq!(table.get_row(1).expect("row"), &[Some(1), Some(2), Some(3)]);
    assert_eq!(table.rows(), 2);
}

#[test]
fn add_row_accepts_explicit_empty_markers() {
    let mut table: Table<&str> = Table::new(2);
    table.add_row([None, Some("b")]);
    assert_eq!(table.get_table(), "|  | b |\n");
}

#[test]
fn add_column_fills_existing_rows_with_placeholder() {
    let mut table = sample();
    table.add_column("p");

    assert_eq!(table.columns(), 3);
    for row in 0..table.rows() {
        assert_eq!(table.get_column(row, table.columns() - 1).expect("cell"), Some(&"p"));
    }
}

#[test]
fn default_column_uses_empty_text() {
    let mut table: Table<String> = Table::default();
    table.add_row(Vec::<String>::new());
    table.add_default_column();

    assert_eq!(table.get_column(0, 0).expect("cell"), Some(&String::new()));
    assert_eq!(table.get_table(), "|  |\n");
}

#[test]
fn set_then_get_column_round_trips() {
    let mut table = sample();
    table.set_column("z", 1, 1).expect("set");
    assert_eq!(table.get_column(1, 1).expect("get"), Some(&"z"));

    table.set_column(None::<&str>, 0, 0).expect("clear");
    assert_eq!(table.get_column(0, 0).expect("get"), None);
}

#[test]
fn del_row_shifts_later_rows_down() {
    let mut table = sample();
    let removed = table.del_row(0).expect("delete");

    assert_eq!(removed, vec![Some("a"), Some("b")]);
    assert_eq!(table.rows(), 1);
    assert_eq!(table.columns(), 2);
    assert_eq!(table.get_row(0).expect("row"), &[Some("x"), None]);
}

#[test]
fn del_column_shifts_later_cells_left() {
    let mut table = sample();
    table.del_column(0).expect("delete");

    assert_eq!(table.columns(), 1);
    assert_eq!(table.get_table(), "| b |\n|  |\n");
}

#[test]
fn out_of_range_positions_are_errors() {
    let mut table = sample();
    assert_eq!(
        table.get_column(2, 0),
        Err(TableError::RowOutOfRange { index: 2, rows: 2 })
    );
    assert_eq!(
        table.set_column("v", 0, 2),
        Err(TableError::ColumnOutOfRange { index: 2, columns: 2 })
    );
    assert_eq!(
        table.del_row(5),
        Err(TableError::RowOutOfRange { index: 5, rows: 2 })
    );
    assert!(table.get_row(2).is_err());
}

#[test]
fn del_column_is_checked_even_without_rows() {
    let mut table: Table<String> = Table::new(1);
    assert_eq!(
        table.del_column(1),
        Err(TableError::ColumnOutOfRange { index: 1, columns: 1 })
    );
    assert_eq!(table.columns(), 1);
}

#[test]
fn row_view_edits_are_visible_in_the_table() {
    let mut table = sample();
    table.get_row_mut(1).expect("row")[1] = Some("y");
    assert_eq!(table.get_table(), "| a | b |\n| x | y |\n");
}
