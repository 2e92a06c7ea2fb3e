//! Fixture domain and generated codecs for end-to-end codec behavior tests.
//!
//! `build.rs` runs the real pipeline over the fixture schema; everything in
//! `generated` comes out of that run untouched.

pub mod domain;

pub mod generated {
    #![allow(clippy::pedantic, clippy::nursery)]

    include!(concat!(env!("OUT_DIR"), "/dynamap.rs"));
}

#[cfg(test)]
mod test;
