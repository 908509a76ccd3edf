// Copyright 2022 David Haig
// Licensed under the Apache License, Version 2.0 (the "License");

//! The long term post filter (LTPF) of the LC3 codec.
//!
//! The encoder side resamples each frame to 12.8 kHz and 6.4 kHz, searches for a pitch lag and
//! decides whether the postfilter should be audible. The decoder side applies the pitch
//! synchronous comb filter to the decoded output, crossfading whenever its parameters change.
//! Each channel owns its own state and every buffer is borrowed from a caller supplied slice so
//! that the crate can run without an allocator.

#![no_std]

pub mod common {
    pub mod bits;
    pub mod config;
    pub mod constants;
    pub mod ltpf_data;
    pub mod pitch_index;
    pub mod ring_buffer;
    pub mod scaler;
}

pub mod encoder {
    pub mod activation_gate;
    pub mod buffer_writer;
    pub mod long_term_post_filter;
    pub mod ltpf_encoder;
    pub mod pitch_detection;
    pub mod pitch_refinement;
    pub mod resampler;
}

pub mod decoder {
    pub mod buffer_reader;
    pub mod long_term_post_filter;
    pub mod ltpf_decoder;
}

pub mod tables {
    pub mod long_term_post_filter_coef;
}
