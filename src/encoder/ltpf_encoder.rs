// Copyright 2022 David Haig
// Licensed under the Apache License, Version 2.0 (the "License");

use super::{
    buffer_writer::{BufferWriter, BufferWriterError},
    long_term_post_filter::{LongTermPostFilter, LongTermPostFilterResult},
};
use crate::common::{bits::BitWrite, config::Lc3Config, ltpf_data::put_data, scaler::Scaler};
use heapless::Vec;

/// Entry point for the encoder side - Start here

#[derive(Debug)]
pub enum LtpfEncoderError {
    BufferWriter(BufferWriterError),
    ChannelIndexOutOfRange(ChannelIndexErrorDetails),
}

#[derive(Debug)]
pub struct ChannelIndexErrorDetails {
    pub channel_index: usize,
    pub num_channels: usize,
}

pub struct LtpfEncoder<'a, const NUM_CHANNELS: usize> {
    channels: Vec<LongTermPostFilter<'a>, NUM_CHANNELS>,
}

impl<'a, const NUM_CHANNELS: usize> LtpfEncoder<'a, NUM_CHANNELS> {
    pub fn new(config: Lc3Config, scaler_buf: &'a mut [Scaler]) -> Self {
        let mut channels: Vec<LongTermPostFilter<'a>, NUM_CHANNELS> = Vec::new();
        let mut scaler_buf_save = scaler_buf;

        for _ in 0..NUM_CHANNELS {
            let (long_term_post_filter, scaler_buf) = LongTermPostFilter::new(config, scaler_buf_save);
            channels.push(long_term_post_filter).ok();
            scaler_buf_save = scaler_buf;
        }

        Self { channels }
    }

    /// Analyses one frame of one channel and writes the side information bits backwards from the
    /// end of `buf_out`: the pitch present flag followed by the post filter data if a pitch is present.
    /// The size of `buf_out` is the size of the encoded frame.
    pub fn encode_frame(
        &mut self,
        channel_index: usize,
        samples_in: &[Scaler],
        near_nyquist_flag: bool,
        buf_out: &mut [u8],
    ) -> Result<LongTermPostFilterResult, LtpfEncoderError> {
        let channel = self.channels.get_mut(channel_index).ok_or(LtpfEncoderError::ChannelIndexOutOfRange(
            ChannelIndexErrorDetails {
                channel_index,
                num_channels: NUM_CHANNELS,
            },
        ))?;

        let post_filter = channel.run(samples_in, near_nyquist_flag, buf_out.len());

        let mut writer = BufferWriter::new(buf_out);
        writer
            .put_bit(post_filter.pitch_present)
            .map_err(LtpfEncoderError::BufferWriter)?;
        if post_filter.pitch_present {
            put_data(&mut writer, &post_filter.data).map_err(LtpfEncoderError::BufferWriter)?;
        }

        Ok(post_filter)
    }

    pub fn calc_working_buffer_length(config: &Lc3Config) -> usize {
        LongTermPostFilter::calc_working_buffer_length(config) * NUM_CHANNELS
    }
}
