use crate::common::bits::BitWrite;

#[derive(Debug, PartialEq, Eq)]
pub enum BufferWriterError {
    WriteBitOutOfBounds(usize),
}

/// Writes side information bits backwards from the end of the frame buffer.
///
/// The first bit lands in the least significant bit of the last byte and multi bit values are
/// written least significant bit first, which is the layout BufferReader expects.
pub struct BufferWriter<'a> {
    buf: &'a mut [u8],
    bit_cursor: usize,
}

impl<'a> BufferWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, bit_cursor: 0 }
    }

    pub fn nbits_side_written(&self) -> usize {
        self.bit_cursor
    }

    pub fn write_bool_backward(&mut self, bit: bool) -> Result<(), BufferWriterError> {
        let byte_index = self.bit_cursor / 8;
        if byte_index >= self.buf.len() {
            return Err(BufferWriterError::WriteBitOutOfBounds(self.bit_cursor));
        }

        let bp_side = self.buf.len() - 1 - byte_index;
        let mask_side: u8 = 1 << (self.bit_cursor % 8);
        if bit {
            self.buf[bp_side] |= mask_side;
        } else {
            self.buf[bp_side] &= !mask_side;
        }

        self.bit_cursor += 1;
        Ok(())
    }

    pub fn write_uint_backward(&mut self, mut val: usize, num_bits: usize) -> Result<(), BufferWriterError> {
        for _ in 0..num_bits {
            self.write_bool_backward(val & 1 == 1)?;
            val >>= 1;
        }

        Ok(())
    }
}

impl<'a> BitWrite for BufferWriter<'a> {
    type Error = BufferWriterError;

    fn put_bit(&mut self, bit: bool) -> Result<(), BufferWriterError> {
        self.write_bool_backward(bit)
    }

    fn put_bits(&mut self, value: usize, num_bits: usize) -> Result<(), BufferWriterError> {
        self.write_uint_backward(value, num_bits)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn buffer_writer_backwards() {
        let mut buf = [0; 10];
        let mut writer = BufferWriter::new(&mut buf);

        writer.write_bool_backward(true).unwrap();
        writer.write_uint_backward(22, 6).unwrap();
        writer.write_bool_backward(false).unwrap();
        writer.write_uint_backward(0b101, 3).unwrap();
        assert_eq!(writer.nbits_side_written(), 11);

        assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0, 0, 0b0000_0101, 45]);
    }

    #[test]
    fn bits_are_overwritten_not_merged() {
        let mut buf = [0xff; 1];
        let mut writer = BufferWriter::new(&mut buf);

        writer.write_uint_backward(0, 4).unwrap();

        assert_eq!(buf, [0xf0]);
    }

    #[test]
    fn write_past_the_front_fails() {
        let mut buf = [0; 1];
        let mut writer = BufferWriter::new(&mut buf);

        writer.write_uint_backward(0xff, 8).unwrap();

        assert_eq!(writer.put_bit(true), Err(BufferWriterError::WriteBitOutOfBounds(8)));
    }
}
