pub mod api;
pub mod components;
pub mod date_utils;
pub mod formatters;
pub mod icons;
pub mod locale;
pub mod meta;
pub mod mock_data;
pub mod number_format;
pub mod storage;
pub mod theme;
pub mod timezone;
