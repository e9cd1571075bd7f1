//! DHT12 temperature/humidity sensor driver
//!
//! I2C variant of the DHT11 family. A poll selects register 0 and
//! reads the whole 5-byte measurement block: humidity, temperature
//! and a checksum, all in 0.1-unit fixed point.

use embedded_hal::i2c::I2c;

/// Fixed I2C address of the DHT12.
pub const DHT12_ADDR: u8 = 0x5C;

/// Poll failure.
///
/// Carries no bus error payload; the consumer only cares that the
/// sample is unusable and retries on the next poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The sensor did not acknowledge its address.
    Connect,
    /// The sensor acknowledged but the 5-byte block did not arrive.
    ShortRead,
    /// Measurement block failed its checksum.
    Checksum,
}

/// One decoded measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in 0.1 °C steps.
    pub temperature_x10: i16,
    /// Relative humidity in 0.1 %RH steps.
    pub humidity_x10: u16,
}

pub struct Dht12<I2C> {
    i2c: I2C,
}

impl<I2C, E> Dht12<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> I2C {
        self.i2c
    }

    /// Poll the sensor once.
    ///
    /// The DHT12 wants a stop between the register select and the
    /// read, so this is two transactions rather than a write_read.
    pub fn read(&mut self) -> Result<Reading, Error> {
        self.i2c
            .write(DHT12_ADDR, &[0x00])
            .map_err(|_| Error::Connect)?;

        let mut block = [0u8; 5];
        self.i2c
            .read(DHT12_ADDR, &mut block)
            .map_err(|_| Error::ShortRead)?;

        decode(block)
    }
}

/// Validate and decode a raw measurement block.
fn decode(block: [u8; 5]) -> Result<Reading, Error> {
    let sum = block[0]
        .wrapping_add(block[1])
        .wrapping_add(block[2])
        .wrapping_add(block[3]);
    if sum != block[4] {
        return Err(Error::Checksum);
    }

    let humidity_x10 = u16::from(block[0]) * 10 + u16::from(block[1]);

    // Bit 7 of the integer byte is a sign flag, not two's complement.
    let magnitude = i16::from(block[2] & 0x7F) * 10 + i16::from(block[3]);
    let temperature_x10 = if block[2] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(Reading {
        temperature_x10,
        humidity_x10,
    })
}
