//! DS3231 real-time clock driver
//!
//! Battery-backed I2C RTC with a programmable square-wave output.
//! The clock keeps colon blink in step with seconds by routing the
//! 1 Hz square wave to a GPIO instead of polling the seconds register.

use embedded_hal::i2c::I2c;

/// Fixed I2C address of the DS3231.
pub const DS3231_ADDR: u8 = 0x68;

/// Time register offsets.
mod reg {
    pub const SECONDS: u8 = 0x00;
    pub const MINUTES: u8 = 0x01;
    pub const HOURS: u8 = 0x02;
    pub const CONTROL: u8 = 0x0E;
}

/// Hours register, bit 6: set when the clock runs in 12-hour mode.
const HOUR_MODE_12H: u8 = 1 << 6;
/// Hours register, bit 5: PM flag, only meaningful in 12-hour mode.
const HOUR_PM: u8 = 1 << 5;

/// Control register, bit 7: stops the oscillator on battery power.
const CTRL_OSC_DISABLE: u8 = 1 << 7;
/// Control register, bit 2: routes alarm interrupts to the SQW pin
/// instead of the square wave.
const CTRL_INTCN: u8 = 1 << 2;
/// Control register, bits 4:3: square wave rate select (00 = 1 Hz).
const CTRL_RATE_MASK: u8 = 0b0001_1000;

/// Raw hour register contents with the mode flags decoded.
///
/// In 12-hour mode `hour` is 1..=12 and `pm` distinguishes the half
/// of the day; in 24-hour mode `hour` is 0..=23 and `pm` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourReading {
    pub hour: u8,
    pub is_12h: bool,
    pub pm: bool,
}

impl HourReading {
    /// Fold the mode flags into a 0..=23 hour.
    pub fn to_24h(self) -> u8 {
        if !self.is_12h {
            return self.hour;
        }
        match (self.hour, self.pm) {
            (12, false) => 0, // midnight
            (12, true) => 12, // noon
            (hour, true) => hour + 12,
            (hour, false) => hour,
        }
    }
}

pub struct Ds3231<I2C> {
    i2c: I2C,
}

impl<I2C, E> Ds3231<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> I2C {
        self.i2c
    }

    /// Read the hour register without assuming the clock's hour mode.
    pub fn hour(&mut self) -> Result<HourReading, E> {
        let raw = self.read_register(reg::HOURS)?;
        if raw & HOUR_MODE_12H != 0 {
            Ok(HourReading {
                hour: bcd_decode(raw & 0x1F),
                is_12h: true,
                pm: raw & HOUR_PM != 0,
            })
        } else {
            Ok(HourReading {
                hour: bcd_decode(raw & 0x3F),
                is_12h: false,
                pm: false,
            })
        }
    }

    pub fn minute(&mut self) -> Result<u8, E> {
        Ok(bcd_decode(self.read_register(reg::MINUTES)? & 0x7F))
    }

    pub fn second(&mut self) -> Result<u8, E> {
        Ok(bcd_decode(self.read_register(reg::SECONDS)? & 0x7F))
    }

    /// Write the hour in 24-hour mode.
    ///
    /// BCD for 0..=23 never sets bit 6, so this also clears the
    /// 12-hour mode flag.
    pub fn set_hour(&mut self, hour: u8) -> Result<(), E> {
        self.i2c.write(DS3231_ADDR, &[reg::HOURS, bcd_encode(hour)])
    }

    pub fn set_minute(&mut self, minute: u8) -> Result<(), E> {
        self.i2c
            .write(DS3231_ADDR, &[reg::MINUTES, bcd_encode(minute)])
    }

    pub fn set_second(&mut self, second: u8) -> Result<(), E> {
        self.i2c
            .write(DS3231_ADDR, &[reg::SECONDS, bcd_encode(second)])
    }

    /// Set hours, minutes and seconds in one transaction.
    ///
    /// Writing the seconds register resets the divider chain, so the
    /// new time starts on a full second.
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) -> Result<(), E> {
        self.i2c.write(
            DS3231_ADDR,
            &[
                reg::SECONDS,
                bcd_encode(second),
                bcd_encode(minute),
                bcd_encode(hour),
            ],
        )
    }

    /// Switch the clock to 24-hour mode, preserving the stored hour.
    pub fn set_24h_mode(&mut self) -> Result<(), E> {
        let reading = self.hour()?;
        self.set_hour(reading.to_24h())
    }

    /// Output a 1 Hz square wave on the SQW pin.
    ///
    /// Keeps the oscillator running on battery and leaves the alarm
    /// interrupt enables untouched.
    pub fn enable_square_wave_1hz(&mut self) -> Result<(), E> {
        let control = self.read_register(reg::CONTROL)?;
        let value = control & !(CTRL_OSC_DISABLE | CTRL_INTCN | CTRL_RATE_MASK);
        self.i2c.write(DS3231_ADDR, &[reg::CONTROL, value])
    }

    fn read_register(&mut self, register: u8) -> Result<u8, E> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(DS3231_ADDR, &[register], &mut buf)?;
        Ok(buf[0])
    }
}

fn bcd_decode(value: u8) -> u8 {
    (value & 0x0F) + ((value >> 4) * 10)
}

fn bcd_encode(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    impl embedded_hal::i2c::Error for BusFault {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    /// Fake register file: reads serve from `registers`, writes land
    /// in `registers` (first payload byte selects the register).
    struct FakeBus {
        registers: [u8; 19],
        fail: bool,
    }

    impl FakeBus {
        fn new() -> Self {
            Self {
                registers: [0; 19],
                fail: false,
            }
        }
    }

    impl ErrorType for FakeBus {
        type Error = BusFault;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), BusFault> {
            assert_eq!(address, DS3231_ADDR);
            if self.fail {
                return Err(BusFault);
            }
            let mut pointer = 0usize;
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        pointer = usize::from(bytes[0]);
                        for (offset, value) in bytes[1..].iter().enumerate() {
                            self.registers[pointer + offset] = *value;
                        }
                    }
                    Operation::Read(buf) => {
                        for (offset, slot) in buf.iter_mut().enumerate() {
                            *slot = self.registers[pointer + offset];
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_reads_bcd_time() {
        let mut bus = FakeBus::new();
        bus.registers[0x00] = 0x42; // 42 seconds
        bus.registers[0x01] = 0x59; // 59 minutes
        bus.registers[0x02] = 0x23; // 23 hours, 24h mode
        let mut rtc = Ds3231::new(bus);

        assert_eq!(rtc.second(), Ok(42));
        assert_eq!(rtc.minute(), Ok(59));
        let hour = rtc.hour().unwrap();
        assert_eq!(hour.hour, 23);
        assert!(!hour.is_12h);
        assert_eq!(hour.to_24h(), 23);
    }

    #[test]
    fn test_decodes_12h_pm() {
        let mut bus = FakeBus::new();
        // 12h mode, PM, 07 -> 19:00
        bus.registers[0x02] = HOUR_MODE_12H | HOUR_PM | 0x07;
        let mut rtc = Ds3231::new(bus);

        let hour = rtc.hour().unwrap();
        assert!(hour.is_12h);
        assert!(hour.pm);
        assert_eq!(hour.hour, 7);
        assert_eq!(hour.to_24h(), 19);
    }

    #[test]
    fn test_12h_boundaries() {
        // 12 AM is midnight, 12 PM is noon
        let midnight = HourReading {
            hour: 12,
            is_12h: true,
            pm: false,
        };
        let noon = HourReading {
            hour: 12,
            is_12h: true,
            pm: true,
        };
        assert_eq!(midnight.to_24h(), 0);
        assert_eq!(noon.to_24h(), 12);
    }

    #[test]
    fn test_set_time_burst_writes_bcd() {
        let mut rtc = Ds3231::new(FakeBus::new());
        rtc.set_time(13, 37, 0).unwrap();

        let bus = rtc.into_inner();
        assert_eq!(bus.registers[0x00], 0x00);
        assert_eq!(bus.registers[0x01], 0x37);
        assert_eq!(bus.registers[0x02], 0x13);
    }

    #[test]
    fn test_set_24h_mode_preserves_hour() {
        let mut bus = FakeBus::new();
        // 12h mode, PM, 11 -> should become 23 in 24h mode
        bus.registers[0x02] = HOUR_MODE_12H | HOUR_PM | 0x11;
        let mut rtc = Ds3231::new(bus);

        rtc.set_24h_mode().unwrap();

        let bus = rtc.into_inner();
        assert_eq!(bus.registers[0x02], 0x23);
        assert_eq!(bus.registers[0x02] & HOUR_MODE_12H, 0);
    }

    #[test]
    fn test_square_wave_clears_rate_and_intcn() {
        let mut bus = FakeBus::new();
        // Power-on default: INTCN set, rate 8.192 kHz, alarm 1 enabled
        bus.registers[0x0E] = CTRL_INTCN | CTRL_RATE_MASK | 0x01;
        let mut rtc = Ds3231::new(bus);

        rtc.enable_square_wave_1hz().unwrap();

        let bus = rtc.into_inner();
        assert_eq!(bus.registers[0x0E], 0x01); // alarm enable survives
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut bus = FakeBus::new();
        bus.fail = true;
        let mut rtc = Ds3231::new(bus);

        assert_eq!(rtc.minute(), Err(BusFault));
        assert_eq!(rtc.set_time(1, 2, 3), Err(BusFault));
    }

    #[test]
    fn test_bcd_helpers() {
        assert_eq!(bcd_decode(0x59), 59);
        assert_eq!(bcd_encode(59), 0x59);
        for value in 0..=99 {
            assert_eq!(bcd_decode(bcd_encode(value)), value);
        }
    }
}
