//! Common utility functions

pub mod phone;

pub use phone::{mask_phone_number, normalize_tr_phone, NORMALIZED_PHONE_LEN, TR_COUNTRY_CODE};
