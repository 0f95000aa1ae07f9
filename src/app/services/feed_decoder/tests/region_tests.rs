//! Tests for region table decoding

use super::super::decode_regions;
use super::sample_region_feed;

#[test]
fn test_decode_sample_feed() {
    let records = decode_regions(&sample_region_feed());

    assert_eq!(records.len(), 4);

    let seoul = &records[2];
    assert_eq!(seoul.reg_id, "11B10101");
    assert_eq!(seoul.reg_sp.as_deref(), Some("C"));
    assert_eq!(seoul.reg_name.as_deref(), Some("서울"));
}

#[test]
fn test_fixed_column_extraction() {
    // First token is the id, fourth is the category, the rest is the name
    let text = "# REG_ID TM_ST TM_ED REG_SP REG_NAME\n\
                11B10101    20260101    20271231    C   서울\n";

    let records = decode_regions(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reg_id, "11B10101");
    assert_eq!(records[0].reg_sp.as_deref(), Some("C"));
    assert_eq!(records[0].reg_name.as_deref(), Some("서울"));
}

#[test]
fn test_multi_word_region_name_rejoined() {
    let records = decode_regions(&sample_region_feed());

    // "서울 인천 경기도" spans three tokens, rejoined with single spaces
    let broad = &records[1];
    assert_eq!(broad.reg_id, "11B00000");
    assert_eq!(broad.reg_sp.as_deref(), Some("B"));
    assert_eq!(broad.reg_name.as_deref(), Some("서울 인천 경기도"));
}

#[test]
fn test_no_header_yields_empty_output() {
    let text = "#START7777\nnothing tabular here\n";

    assert!(decode_regions(text).is_empty());
    assert!(decode_regions("").is_empty());
}

#[test]
fn test_short_row_yields_partial_record() {
    // Fewer than four tokens: category and name absent, never an error
    let text = "# REG_ID TM_ST TM_ED REG_SP REG_NAME\n\
                11B10101    20260101\n";

    let records = decode_regions(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reg_id, "11B10101");
    assert_eq!(records[0].reg_sp, None);
    assert_eq!(records[0].reg_name, None);
}

#[test]
fn test_four_token_row_has_empty_name() {
    // Exactly four tokens: the category is present, the name is empty
    let text = "# REG_ID TM_ST TM_ED REG_SP REG_NAME\n\
                11B10101    20260101    20271231    C\n";

    let records = decode_regions(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reg_sp.as_deref(), Some("C"));
    assert_eq!(records[0].reg_name.as_deref(), Some(""));
}

#[test]
fn test_comment_and_blank_lines_excluded() {
    let text = "# REG_ID TM_ST TM_ED REG_SP REG_NAME\n\
                \n\
                108         199001010000    210012310000    A   전국\n\
                # interleaved comment\n\
                11B10101    199001010000    210012310000    C   서울\n\
                #7777END\n";

    let records = decode_regions(text);

    // The sentinel is just another comment line to the region decoder
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].reg_id, "108");
    assert_eq!(records[1].reg_id, "11B10101");
}

#[test]
fn test_decoding_is_idempotent() {
    let feed = sample_region_feed();

    assert_eq!(decode_regions(&feed), decode_regions(&feed));
}

#[test]
fn test_crlf_line_endings_tolerated() {
    let text = "# REG_ID TM_ST TM_ED REG_SP REG_NAME\r\n\
                11B10101    20260101    20271231    C   서울\r\n";

    let records = decode_regions(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reg_name.as_deref(), Some("서울"));
}

#[test]
fn test_leading_whitespace_rows_still_parse() {
    // Data rows are trimmed before tokenizing
    let text = "# REG_ID TM_ST TM_ED REG_SP REG_NAME\n\
                   11B10101    20260101    20271231    C   서울\n";

    let records = decode_regions(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reg_id, "11B10101");
}
