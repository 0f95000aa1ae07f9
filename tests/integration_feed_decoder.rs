//! Integration tests for the typ01 feed decoders
//!
//! These tests run realistic multi-section feed text through the public
//! decoding API to verify end-to-end behavior: preamble handling, record
//! shapes, and the dispatch classification.

use kma_processor::app::services::feed_decoder::{decode_forecast, decode_regions};
use kma_processor::{FeedPayload, FeedResource};

/// A short-term land forecast response as served with help comments enabled
const FORECAST_FEED: &str = "\
#START7777
#----------------------------------------------------------------------
#  단기예보 : 육상예보 [fct_afs_dl.php]
#
#  REG_ID : 예보구역코드
#  TM_FC  : 발표시각
#  TM_EF  : 발효시각
#  TA     : 기온
#  WF     : 날씨
#----------------------------------------------------------------------
# REG_ID TM_FC TM_EF MOD NE STN C MAN_ID MAN_FC TA ST SKY PREP WF
11B10101,202601010500,202601010600,A01,2,108,1,10,202601010450,5,20,DB01,0,맑음
11B10101,202601010500,202601011200,A01,2,108,1,10,202601010450,9,30,DB03,1,구름많음
11B10101,202601010500,202601011800,A01,2,108,1,10,202601010450,7,40,DB04,2,흐리고 비
11B20201,202601010500,202601010600,A01,2,112,1,10,202601010450,4,20,DB01,0,맑음
#7777END
";

/// A forecast region table response
const REGION_FEED: &str = "\
#START7777
#  단기예보구역 [fct_shrt_reg.php]
# REG_ID TM_ST TM_ED REG_SP REG_NAME
108         199001010000    210012310000    A   전국
11B00000    199001010000    210012310000    B   서울 인천 경기도
11B10101    199001010000    210012310000    C   서울
11B20201    199001010000    210012310000    C   인천
11D10000    199001010000    210012310000    B   강원도 영서
#7777END
";

/// A typ01 report with no tabular section at all
const TEXTUAL_REPORT: &str = "\
#START7777
# 기상특보 통보문
대설주의보가 발효 중입니다.
#7777END
";

/// Test end-to-end forecast decoding of a realistic feed
///
/// Purpose: Validate preamble skipping, run-time field derivation, and
/// value extraction against a feed shaped like real upstream output.
#[test]
fn test_decode_forecast_feed_end_to_end() {
    let records = decode_forecast(FORECAST_FEED);

    assert_eq!(records.len(), 4);

    let first = &records[0];
    assert_eq!(first.get("REG_ID"), Some("11B10101"));
    assert_eq!(first.get("TM_EF"), Some("202601010600"));
    assert_eq!(first.get("TA"), Some("5"));
    assert_eq!(first.get("WF"), Some("맑음"));
    assert_eq!(first.len(), 14);

    // Multi-word forecast phrase survives the comma split
    assert_eq!(records[2].get("WF"), Some("흐리고 비"));

    // Announce time parses from the TM_FC field
    let announce = first.announce_time().expect("TM_FC should parse");
    assert_eq!(
        announce.format("%Y-%m-%d %H:%M").to_string(),
        "2026-01-01 05:00"
    );
}

/// Test end-to-end region decoding of a realistic feed
#[test]
fn test_decode_region_feed_end_to_end() {
    let records = decode_regions(REGION_FEED);

    assert_eq!(records.len(), 5);

    assert_eq!(records[0].reg_id, "108");
    assert_eq!(records[0].reg_sp.as_deref(), Some("A"));
    assert_eq!(records[0].category_label(), Some("broad"));
    assert_eq!(records[0].reg_name.as_deref(), Some("전국"));

    assert_eq!(records[1].reg_name.as_deref(), Some("서울 인천 경기도"));
    assert_eq!(records[4].reg_name.as_deref(), Some("강원도 영서"));
}

/// Test that a non-tabular report yields no records from either decoder
#[test]
fn test_textual_report_yields_no_records() {
    assert!(decode_forecast(TEXTUAL_REPORT).is_empty());
    assert!(decode_regions(TEXTUAL_REPORT).is_empty());
}

/// Test resource classification driving the transport dispatch
#[test]
fn test_resource_dispatch_classification() {
    assert_eq!(
        FeedResource::from_path("fct_afs_dl.php"),
        FeedResource::Forecast
    );
    assert_eq!(
        FeedResource::from_path("fct_shrt_reg.php"),
        FeedResource::RegionTable
    );
    assert_eq!(FeedResource::from_path("sfc_web_map.php"), FeedResource::Other);
}

/// Test JSON shapes of decoded payloads
///
/// Purpose: The decoded output is consumed as JSON by presentation
/// layers; absent fields must be omitted, not serialized as null.
#[test]
fn test_decoded_payload_json_shape() {
    let forecast = FeedPayload::Forecast(decode_forecast(FORECAST_FEED));
    let json = serde_json::to_value(&forecast).unwrap();

    let rows = json.as_array().expect("forecast payload is a JSON array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["WF"], "맑음");

    let regions = FeedPayload::Regions(decode_regions(REGION_FEED));
    let json = serde_json::to_value(&regions).unwrap();

    let rows = json.as_array().expect("region payload is a JSON array");
    assert_eq!(rows[2]["regId"], "11B10101");
    assert_eq!(rows[2]["regSp"], "C");
    assert_eq!(rows[2]["regName"], "서울");
}

/// Test that short data rows serialize without the missing trailing fields
#[test]
fn test_short_row_json_omits_missing_fields() {
    let feed = "# REG_ID TM_FC TM_EF TA ST SKY PREP WF EXTRA\n\
                108,202601010500,202601010600,5,20,DB01,0,맑음\n";

    let records = decode_forecast(feed);
    let json = serde_json::to_value(&records).unwrap();

    let row = &json.as_array().unwrap()[0];
    assert_eq!(row["WF"], "맑음");
    assert!(row.get("EXTRA").is_none());
}

/// Test decoding stability across repeated invocations
#[test]
fn test_repeated_decoding_is_stable() {
    let forecast_a = decode_forecast(FORECAST_FEED);
    let forecast_b = decode_forecast(FORECAST_FEED);
    assert_eq!(forecast_a, forecast_b);

    let regions_a = decode_regions(REGION_FEED);
    let regions_b = decode_regions(REGION_FEED);
    assert_eq!(regions_a, regions_b);
}
