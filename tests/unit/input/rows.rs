use super::*;

fn leds(num_leds: u32) -> RenderConfig {
    RenderConfig {
        num_leds,
        ..RenderConfig::default()
    }
}

fn row_of(num_leds: usize, color: [i64; 3]) -> String {
    let fields: Vec<String> = (0..num_leds)
        .flat_map(|_| color.iter().map(|c| c.to_string()))
        .collect();
    fields.join(",")
}

#[test]
fn complete_row_parses_into_frame() {
    let input = format!("{}\n", row_of(4, [1, 2, 3]));
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(4));

    let Some(RowParse::Frame(frame)) = rows.next() else {
        panic!("expected a frame");
    };
    assert_eq!(frame.len(), 4);
    assert!(frame.leds().iter().all(|&c| c == Rgb8::new(1, 2, 3)));
    assert!(rows.next().is_none());
}

#[test]
fn triplets_map_to_leds_in_order() {
    let input = "10,11,12,20,21,22\n";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(2));
    let Some(RowParse::Frame(frame)) = rows.next() else {
        panic!("expected a frame");
    };
    assert_eq!(frame.led(0), Some(Rgb8::new(10, 11, 12)));
    assert_eq!(frame.led(1), Some(Rgb8::new(20, 21, 22)));
}

#[test]
fn extra_fields_are_ignored() {
    let input = "1,2,3,4,5,6,99,99\n";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(2));
    assert!(matches!(rows.next(), Some(RowParse::Frame(f)) if f.len() == 2));
}

#[test]
fn short_row_is_malformed() {
    let input = format!("{}\n1,2,3\n", row_of(2, [0, 0, 0]));
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(2));
    assert!(matches!(rows.next(), Some(RowParse::Frame(_))));

    let Some(RowParse::Malformed(bad)) = rows.next() else {
        panic!("expected malformed row");
    };
    assert_eq!(
        bad.defect,
        RowDefect::TooFewFields {
            expected: 6,
            found: 3
        }
    );
    assert_eq!(bad.line, Some(2));
}

#[test]
fn non_integer_field_is_malformed() {
    let input = "1,2,3,4,x,6\n";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(2));
    let Some(RowParse::Malformed(bad)) = rows.next() else {
        panic!("expected malformed row");
    };
    assert_eq!(
        bad.defect,
        RowDefect::NotAnInteger {
            field: 4,
            value: "x".to_string()
        }
    );
}

#[test]
fn fractional_channel_is_malformed() {
    let input = "1.5,2,3\n";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(1));
    assert!(matches!(rows.next(), Some(RowParse::Malformed(_))));
}

#[test]
fn padded_and_out_of_range_values_are_accepted() {
    let input = " 7 , 300 ,-4\n";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(1));
    let Some(RowParse::Frame(frame)) = rows.next() else {
        panic!("expected a frame");
    };
    assert_eq!(frame.led(0), Some(Rgb8::new(7, 255, 0)));
}

#[test]
fn count_rows_counts_every_line() {
    let input = "1,2,3\n4,5\n\n6,7,8\n";
    assert_eq!(count_rows(input.as_bytes()).unwrap(), 4);
    assert_eq!(count_rows("1,2,3\r\n\r\n4,5,6".as_bytes()).unwrap(), 3);
    assert_eq!(count_rows("".as_bytes()).unwrap(), 0);
}

#[test]
fn blank_line_is_a_short_row() {
    let input = "1,2,3\n\n4,5,6\n";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(1));
    assert!(matches!(rows.next(), Some(RowParse::Frame(_))));

    let Some(RowParse::Malformed(bad)) = rows.next() else {
        panic!("expected malformed row");
    };
    assert_eq!(
        bad.defect,
        RowDefect::TooFewFields {
            expected: 3,
            found: 0
        }
    );
    assert_eq!(bad.line, Some(2));
}

#[test]
fn crlf_lines_and_unterminated_last_line_parse() {
    let input = "1,2,3\r\n4,5,6";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(1));
    assert!(matches!(
        rows.next(),
        Some(RowParse::Frame(f)) if f.led(0) == Some(Rgb8::new(1, 2, 3))
    ));
    assert!(matches!(
        rows.next(),
        Some(RowParse::Frame(f)) if f.led(0) == Some(Rgb8::new(4, 5, 6))
    ));
    assert!(rows.next().is_none());
}

#[test]
fn quoted_fields_are_unquoted() {
    let input = "\"1\",2,\" 3\"\n";
    let mut rows = FrameReader::from_reader(input.as_bytes(), &leds(1));
    assert!(matches!(
        rows.next(),
        Some(RowParse::Frame(f)) if f.led(0) == Some(Rgb8::new(1, 2, 3))
    ));
}

#[test]
fn missing_file_is_input_error() {
    let missing = Path::new("target/definitely/not/here.csv");
    assert!(matches!(
        count_frames(missing),
        Err(LedTraceError::Input(_))
    ));
    assert!(matches!(
        FrameReader::open(missing, &RenderConfig::default()),
        Err(LedTraceError::Input(_))
    ));
}
