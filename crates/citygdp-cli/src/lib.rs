//! citygdp-cli
//! ===========
//!
//! Command-line interface for the `citygdp-core` dashboard analytics.
//!
//! This crate primarily provides a binary (`citygdp`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! citygdp --help
//! citygdp stats
//! citygdp cities --region 华东 --sort growth-desc
//! citygdp city shanghai
//! citygdp compare 1 3 8
//! citygdp top -n 5
//! ```
//!
//! For programmatic access use the [`citygdp-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
