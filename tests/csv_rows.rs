use customer_landing_ingest::ingestion::csv::{
    read_rows_from_path, read_rows_from_reader, reader_builder,
};

#[test]
fn read_rows_from_path_happy_path() {
    let rows = read_rows_from_path("tests/fixtures/customers.csv").unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].headers(), ["customer_id", "name", "age", "email"]);
    assert_eq!(rows[0].get("customer_id"), Some("1"));
    assert_eq!(rows[0].get("name"), Some("Ann"));
    assert_eq!(rows[1].get("name"), Some(""));
    // Values are kept verbatim; trimming is the detector's job.
    assert_eq!(rows[3].get("name"), Some("  Cy  "));
}

#[test]
fn header_only_file_has_no_rows() {
    let rows = read_rows_from_path("tests/fixtures/header_only.csv").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn empty_input_has_no_rows() {
    let mut rdr = reader_builder().from_reader("".as_bytes());
    let rows = read_rows_from_reader(&mut rdr).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn any_header_is_accepted() {
    let input = "id,full_name\n7,Ada\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());

    let rows = read_rows_from_reader(&mut rdr).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("id"), Some("7"));
    assert_eq!(rows[0].get("customer_id"), None);
}

#[test]
fn short_records_leave_trailing_columns_absent() {
    let input = "customer_id,name,age\n1,Ann\n2,Bo,40,extra\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());

    let rows = read_rows_from_reader(&mut rdr).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("name"), Some("Ann"));
    assert_eq!(rows[0].get("age"), None);
    assert_eq!(rows[1].get("age"), Some("40"));
    assert_eq!(rows[1].values().len(), 4);
}

#[test]
fn blank_lines_are_skipped() {
    let input = "customer_id,name,age\n1,Ann,30\n\n2,Bo,40\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());

    let rows = read_rows_from_reader(&mut rdr).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn repeated_header_resolves_to_last_column() {
    let input = "name,name\nfirst,second\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());

    let rows = read_rows_from_reader(&mut rdr).unwrap();
    assert_eq!(rows[0].get("name"), Some("second"));
}

#[test]
fn invalid_utf8_is_a_csv_error() {
    let input: &[u8] = b"customer_id,name,age\n1,\xff\xfe,30\n";
    let mut rdr = reader_builder().from_reader(input);

    let err = read_rows_from_reader(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("csv error"));
}
