use crate::common::bits::BitRead;
use byteorder::{BigEndian, ByteOrder};

#[derive(Debug, PartialEq, Eq)]
pub enum BufferReaderError {
    BigEndianBitReaderReadUsizeNumBitsOutOfRange(usize, usize),
    BigEndianBitReaderReadBoolOutOfRange(usize),
    NumBitsTooLarge(usize),
}

// widest value read_tail_usize can return
const MAX_NUM_BITS: usize = 32;

// Big Endian buffer reader
// This reader reads bits from the tail end of the buffer working its way towards the head.
// Multi byte payloads are fetched in BigEndian format and the value starts at the least
// significant bit that has not been read yet.
pub struct BufferReader<'a> {
    buf: &'a [u8],
    tail_bit_cursor: usize,
}

impl<'a> BufferReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::new_at(buf, 0)
    }

    pub fn new_at(buf: &'a [u8], tail_bit_cursor: usize) -> Self {
        Self { buf, tail_bit_cursor }
    }

    pub fn get_tail_bit_cursor(&self) -> usize {
        self.tail_bit_cursor
    }

    pub fn read_tail_usize(&mut self, num_bits: usize) -> Result<usize, BufferReaderError> {
        if num_bits > MAX_NUM_BITS {
            return Err(BufferReaderError::NumBitsTooLarge(num_bits));
        }

        if num_bits == 0 {
            return Ok(0);
        }

        let byte_index = self.tail_bit_cursor / 8;
        let bit_index = self.tail_bit_cursor % 8;
        let num_bytes = (bit_index + num_bits + 7) / 8;

        if byte_index + num_bytes > self.buf.len() {
            return Err(BufferReaderError::BigEndianBitReaderReadUsizeNumBitsOutOfRange(
                num_bits, bit_index,
            ));
        }

        let from_index = self.buf.len() - byte_index - num_bytes;
        let value = BigEndian::read_uint(&self.buf[from_index..], num_bytes);

        // shift the bits we want to ignore out of the way
        let mask = (1u64 << num_bits) - 1;
        let value = (value >> bit_index) & mask;

        self.tail_bit_cursor += num_bits;
        Ok(value as usize)
    }

    pub fn read_tail_bool(&mut self) -> Result<bool, BufferReaderError> {
        let byte_index = self.tail_bit_cursor / 8;
        let bit_index = self.tail_bit_cursor % 8;

        if byte_index >= self.buf.len() {
            return Err(BufferReaderError::BigEndianBitReaderReadBoolOutOfRange(bit_index));
        }

        let from_index = self.buf.len() - byte_index - 1;
        let byte = self.buf[from_index] >> bit_index;

        self.tail_bit_cursor += 1;
        Ok(byte & 1 == 1)
    }
}

impl<'a> BitRead for BufferReader<'a> {
    type Error = BufferReaderError;

    fn get_bit(&mut self) -> Result<bool, BufferReaderError> {
        self.read_tail_bool()
    }

    fn get_bits(&mut self, num_bits: usize) -> Result<usize, BufferReaderError> {
        self.read_tail_usize(num_bits)
    }
}
