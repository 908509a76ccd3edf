// Copyright 2022 David Haig
// Licensed under the Apache License, Version 2.0 (the "License");
//

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(not(feature = "alloc"))]
use heapless::Vec;

use super::{
    buffer_reader::{BufferReader, BufferReaderError},
    long_term_post_filter::LongTermPostFilter,
};
use crate::common::{
    bits::BitRead,
    config::{FrameDuration, Lc3Config, SamplingFrequency},
    ltpf_data::{get_side_info, LtpfData},
    scaler::Scaler,
};

/// Entry point for the decoder side - Start here

#[derive(Debug)]
pub enum LtpfDecoderError {
    BufferReader(BufferReaderError),
    InvalidSampleBuffer(SampleBufferErrorDetails),
    ChannelIndexOutOfRange(usize),
}

#[derive(Debug)]
pub struct SampleBufferErrorDetails {
    pub required_length: usize,
    pub actual_length: usize,
}

#[cfg(not(feature = "alloc"))]
pub struct LtpfDecoder<'a, const NUM_CHANNELS: usize = 2> {
    config: Lc3Config,
    channels: heapless::Vec<LongTermPostFilter<'a>, NUM_CHANNELS>,
}

#[cfg(feature = "alloc")]
pub struct LtpfDecoder<'a> {
    config: Lc3Config,
    channels: alloc::vec::Vec<LongTermPostFilter<'a>>,
}

// reads the pitch present flag and the post filter data written by LtpfEncoder
fn read_side_info(buf_in: &[u8]) -> Result<LtpfData, LtpfDecoderError> {
    let mut reader = BufferReader::new(buf_in);
    let pitch_present = reader.get_bit().map_err(LtpfDecoderError::BufferReader)?;
    get_side_info(&mut reader, pitch_present).map_err(LtpfDecoderError::BufferReader)
}

fn check_samples(config: &Lc3Config, samples: &[Scaler]) -> Result<(), LtpfDecoderError> {
    if samples.len() != config.nf {
        return Err(LtpfDecoderError::InvalidSampleBuffer(SampleBufferErrorDetails {
            required_length: config.nf,
            actual_length: samples.len(),
        }));
    }

    Ok(())
}

// filters one frame with the decoded side information or with none for a lost frame
fn filter_frame(
    config: &Lc3Config,
    channel: &mut LongTermPostFilter,
    buf_in: Option<&[u8]>,
    nbytes: usize,
    samples: &mut [Scaler],
) -> Result<Option<LtpfData>, LtpfDecoderError> {
    check_samples(config, samples)?;
    let data = buf_in.map(read_side_info).transpose()?;
    channel.run(data.as_ref(), nbytes, samples);
    Ok(data)
}

#[cfg(not(feature = "alloc"))]
impl<'a, const NUM_CHANNELS: usize> LtpfDecoder<'a, NUM_CHANNELS> {
    pub fn new(
        frame_duration: FrameDuration,
        sampling_frequency: SamplingFrequency,
        scaler_buf: &'a mut [Scaler],
    ) -> Self {
        let config = Lc3Config::new(sampling_frequency, frame_duration);
        let mut channels: Vec<LongTermPostFilter<'a>, NUM_CHANNELS> = Vec::new();
        let mut scaler_buf_saved = scaler_buf;

        for _ in 0..NUM_CHANNELS {
            let (post_filter, scaler_buf) = LongTermPostFilter::new(config, scaler_buf_saved);
            channels.push(post_filter).ok();
            scaler_buf_saved = scaler_buf;
        }

        Self { config, channels }
    }

    /// Reads the side information at the end of `buf_in` and filters the decoded samples of the
    /// frame in place. Returns the post filter data that was applied.
    pub fn decode_frame(
        &mut self,
        channel_index: usize,
        buf_in: &[u8],
        samples: &mut [Scaler],
    ) -> Result<LtpfData, LtpfDecoderError> {
        let channel = self
            .channels
            .get_mut(channel_index)
            .ok_or(LtpfDecoderError::ChannelIndexOutOfRange(channel_index))?;
        let data = filter_frame(&self.config, channel, Some(buf_in), buf_in.len(), samples)?;
        Ok(data.unwrap_or_default())
    }

    /// Keeps the filter state running for a frame that was lost (the filter fades out if it was on)
    pub fn conceal_frame(
        &mut self,
        channel_index: usize,
        nbytes: usize,
        samples: &mut [Scaler],
    ) -> Result<(), LtpfDecoderError> {
        let channel = self
            .channels
            .get_mut(channel_index)
            .ok_or(LtpfDecoderError::ChannelIndexOutOfRange(channel_index))?;
        filter_frame(&self.config, channel, None, nbytes, samples)?;
        Ok(())
    }

    pub const fn calc_working_buffer_length(
        frame_duration: FrameDuration,
        sampling_frequency: SamplingFrequency,
    ) -> usize {
        let config = Lc3Config::new(sampling_frequency, frame_duration);
        NUM_CHANNELS * LongTermPostFilter::calc_working_buffer_length(&config)
    }
}

#[cfg(feature = "alloc")]
impl<'a> LtpfDecoder<'a> {
    pub fn new(
        num_channels: usize,
        frame_duration: FrameDuration,
        sampling_frequency: SamplingFrequency,
        scaler_buf: &'a mut [Scaler],
    ) -> Self {
        let mut channels = alloc::vec::Vec::new();
        let config = Lc3Config::new(sampling_frequency, frame_duration);
        let mut scaler_buf_saved = scaler_buf;

        for _ in 0..num_channels {
            let (post_filter, scaler_buf) = LongTermPostFilter::new(config, scaler_buf_saved);
            channels.push(post_filter);
            scaler_buf_saved = scaler_buf;
        }

        Self { config, channels }
    }

    /// Reads the side information at the end of `buf_in` and filters the decoded samples of the
    /// frame in place. Returns the post filter data that was applied.
    pub fn decode_frame(
        &mut self,
        channel_index: usize,
        buf_in: &[u8],
        samples: &mut [Scaler],
    ) -> Result<LtpfData, LtpfDecoderError> {
        let channel = self
            .channels
            .get_mut(channel_index)
            .ok_or(LtpfDecoderError::ChannelIndexOutOfRange(channel_index))?;
        let data = filter_frame(&self.config, channel, Some(buf_in), buf_in.len(), samples)?;
        Ok(data.unwrap_or_default())
    }

    /// Keeps the filter state running for a frame that was lost (the filter fades out if it was on)
    pub fn conceal_frame(
        &mut self,
        channel_index: usize,
        nbytes: usize,
        samples: &mut [Scaler],
    ) -> Result<(), LtpfDecoderError> {
        let channel = self
            .channels
            .get_mut(channel_index)
            .ok_or(LtpfDecoderError::ChannelIndexOutOfRange(channel_index))?;
        filter_frame(&self.config, channel, None, nbytes, samples)?;
        Ok(())
    }

    pub const fn calc_working_buffer_length(
        num_channels: usize,
        frame_duration: FrameDuration,
        sampling_frequency: SamplingFrequency,
    ) -> usize {
        let config = Lc3Config::new(sampling_frequency, frame_duration);
        num_channels * LongTermPostFilter::calc_working_buffer_length(&config)
    }
}
