use super::{
    bits::{BitRead, BitWrite},
    constants::MAX_PITCH_INDEX,
    pitch_index::PitchLag,
};

const NUM_BITS_PITCH_INDEX: usize = 9;

#[derive(Debug, PartialEq, Eq)]
pub enum LtpfDataError {
    PitchIndexOutOfRange(usize),
}

/// The per frame decision of the long term post filter as carried in the bitstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LtpfData {
    /// is the post filter audible in this frame
    pub active: bool,

    /// 9 bit pitch index (see `PitchLag::to_index`)
    pub pitch_index: usize,
}

impl LtpfData {
    pub fn new(active: bool, pitch_index: usize) -> Result<Self, LtpfDataError> {
        if pitch_index > MAX_PITCH_INDEX {
            return Err(LtpfDataError::PitchIndexOutOfRange(pitch_index));
        }

        Ok(Self { active, pitch_index })
    }

    pub fn pitch_lag(&self) -> PitchLag {
        PitchLag::from_index(self.pitch_index)
    }

    /// Switches the filter off for this frame. The pitch index is left untouched so that the
    /// payload stays well formed.
    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Number of side information bits used by the post filter: the pitch present flag, plus the
/// active flag and pitch index when a pitch is present
pub const fn get_nbits(pitch_present: bool) -> usize {
    1 + 10 * pitch_present as usize
}

pub fn put_data<W: BitWrite>(writer: &mut W, data: &LtpfData) -> Result<(), W::Error> {
    writer.put_bit(data.active)?;
    writer.put_bits(data.pitch_index, NUM_BITS_PITCH_INDEX)
}

pub fn get_data<R: BitRead>(reader: &mut R) -> Result<LtpfData, R::Error> {
    let active = reader.get_bit()?;
    let pitch_index = reader.get_bits(NUM_BITS_PITCH_INDEX)?;
    Ok(LtpfData { active, pitch_index })
}

/// Reads the payload only if the pitch present flag was set, otherwise the filter is inactive
pub fn get_side_info<R: BitRead>(reader: &mut R, pitch_present: bool) -> Result<LtpfData, R::Error> {
    if pitch_present {
        get_data(reader)
    } else {
        Ok(LtpfData::default())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use std::vec::Vec;

    // collects bits in order, most significant bit first for multi bit values
    #[derive(Default)]
    struct BitVec {
        bits: Vec<bool>,
        cursor: usize,
    }

    impl BitWrite for BitVec {
        type Error = ();

        fn put_bit(&mut self, bit: bool) -> Result<(), ()> {
            self.bits.push(bit);
            Ok(())
        }

        fn put_bits(&mut self, value: usize, num_bits: usize) -> Result<(), ()> {
            for i in (0..num_bits).rev() {
                self.bits.push((value >> i) & 1 == 1);
            }
            Ok(())
        }
    }

    impl BitRead for BitVec {
        type Error = ();

        fn get_bit(&mut self) -> Result<bool, ()> {
            let bit = *self.bits.get(self.cursor).ok_or(())?;
            self.cursor += 1;
            Ok(bit)
        }

        fn get_bits(&mut self, num_bits: usize) -> Result<usize, ()> {
            let mut value = 0;
            for _ in 0..num_bits {
                value = (value << 1) | self.get_bit()? as usize;
            }
            Ok(value)
        }
    }

    #[test]
    fn nbits_depends_on_pitch_present() {
        assert_eq!(get_nbits(false), 1);
        assert_eq!(get_nbits(true), 11);
    }

    #[test]
    fn payload_layout_is_active_then_index() {
        let mut bits = BitVec::default();
        put_data(&mut bits, &LtpfData::new(true, 0b1_0110_0101).unwrap()).unwrap();

        let expected = [true, true, false, true, true, false, false, true, false, true];
        assert_eq!(bits.bits, expected);

        let data = get_data(&mut bits).unwrap();
        assert!(data.active);
        assert_eq!(data.pitch_index, 0b1_0110_0101);
    }

    #[test]
    fn disable_only_clears_active() {
        let mut data = LtpfData::new(true, 437).unwrap();
        data.disable();

        assert_eq!(data, LtpfData { active: false, pitch_index: 437 });
    }

    #[test]
    fn side_info_without_pitch_reads_nothing() {
        let mut bits = BitVec::default();
        let data = get_side_info(&mut bits, false).unwrap();

        assert_eq!(data, LtpfData::default());
        assert_eq!(bits.cursor, 0);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(LtpfData::new(false, 512), Err(LtpfDataError::PitchIndexOutOfRange(512)));
        assert!(LtpfData::new(false, 511).is_ok());
    }
}
