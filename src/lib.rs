#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use fw_api as api;
pub use fw_reflect as reflect;
