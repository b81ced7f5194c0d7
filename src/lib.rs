//! Card-count forecasting for football fixtures.
//! Blends referee, team and league disciplinary averages into a Poisson model of the cards shown,
//! prices the over/under lines, and derives a betting recommendation. Also scores a referee's
//! recent form and a team's historical compatibility with a referee.
//!
//! Every engine function is pure and synchronous; none retains state between calls.

pub mod compat;
pub mod domain;
pub mod factorial;
pub mod file;
pub mod forecast;
pub mod form;
pub mod linear;
pub mod poisson;
pub mod print;
pub mod probs;
pub mod recommend;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
