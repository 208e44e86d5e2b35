use rpresence::utils::table::{Column, Table};

#[test]
fn test_fit_counts_characters_not_bytes() {
    assert_eq!(Column::fit("Café ☕", 4).width, 6);
    assert_eq!(Column::fit("Zürich Büro", 8).width, 11);
    assert_eq!(Column::fit("Ops", 8).width, 8);
}

#[test]
fn test_rows_line_up_with_non_ascii_headers() {
    let mut table = Table::new(
        vec![Column::new("Date", 11), Column::fit("Müller GmbH", 8)],
        '-',
    );
    table.add_row(vec!["2025-09-01".into(), "01h 00m".into()]);

    let rendered = table.render();
    let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();

    assert_eq!(widths.len(), 3);
    assert!(widths.iter().all(|w| *w == widths[0]), "{rendered}");
}
