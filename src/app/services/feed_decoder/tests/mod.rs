//! Test fixtures for feed decoder testing
//!
//! This module provides representative typ01 feed samples shared across
//! the decoder test modules.

mod region_tests;

/// A representative short-term land forecast feed, with preamble comments
/// and the data-block sentinel
pub fn sample_forecast_feed() -> String {
    "#START7777\n\
     #----------------------------------------------------------------------\n\
     #  단기예보 : 육상예보 [fct_afs_dl.php]\n\
     #  TM_FC : 발표시각, TM_EF : 발효시각, TA : 기온, WF : 날씨\n\
     #----------------------------------------------------------------------\n\
     # REG_ID TM_FC TM_EF TA ST SKY PREP WF\n\
     11B10101,202601010500,202601010600,5,20,DB01,0,맑음\n\
     11B10101,202601010500,202601011200,8,30,DB03,1,구름많음\n\
     11B20201,202601010500,202601010600,3,20,DB04,2,흐리고 비\n\
     #7777END\n"
        .to_string()
}

/// A representative forecast region table feed
pub fn sample_region_feed() -> String {
    "#START7777\n\
     #  단기예보구역 [fct_shrt_reg.php]\n\
     # REG_ID TM_ST TM_ED REG_SP REG_NAME\n\
     108         199001010000    210012310000    A   전국\n\
     11B00000    199001010000    210012310000    B   서울 인천 경기도\n\
     11B10101    199001010000    210012310000    C   서울\n\
     11B20201    199001010000    210012310000    C   인천\n\
     #7777END\n"
        .to_string()
}
