#![allow(missing_docs)]

mod distribution;
mod logging;
mod requests;

const fn main() {}
