/// Fixed width unsigned writes into a bitstream
pub trait BitWrite {
    type Error;

    fn put_bit(&mut self, bit: bool) -> Result<(), Self::Error>;

    /// Writes the `num_bits` least significant bits of `value`
    fn put_bits(&mut self, value: usize, num_bits: usize) -> Result<(), Self::Error>;
}

/// Fixed width unsigned reads from a bitstream
pub trait BitRead {
    type Error;

    fn get_bit(&mut self) -> Result<bool, Self::Error>;

    fn get_bits(&mut self, num_bits: usize) -> Result<usize, Self::Error>;
}
