//! Daisy-chained 74HC595 pair behind the tube drivers
//!
//! The first shifted byte ends up in the far register (segment
//! anodes), the second in the near one (tube grids). Outputs only
//! change on the rising latch edge, so a scan step appears on the
//! tubes as a single update.

use embedded_hal::digital::OutputPin;
use phosphor_core::scan::ScanStep;

pub struct Shift595<Data, Clock, Latch> {
    data: Data,
    clock: Clock,
    latch: Latch,
}

impl<Data, Clock, Latch, E> Shift595<Data, Clock, Latch>
where
    Data: OutputPin<Error = E>,
    Clock: OutputPin<Error = E>,
    Latch: OutputPin<Error = E>,
{
    pub fn new(data: Data, clock: Clock, latch: Latch) -> Self {
        Self { data, clock, latch }
    }

    /// Clock one scan step into the register pair.
    ///
    /// The latch is held low for the whole 16-bit shift and raised
    /// once at the end.
    pub fn latch_frame(&mut self, step: ScanStep) -> Result<(), E> {
        self.latch.set_low()?;
        for byte in step {
            self.shift_byte(byte)?;
        }
        self.latch.set_high()
    }

    /// MSB-first, data valid before the rising clock edge.
    fn shift_byte(&mut self, byte: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.clock.set_high()?;
            self.clock.set_low()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Data(bool),
        Clock(bool),
        Latch(bool),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    type Trace = RefCell<heapless::Vec<Event, 64>>;

    /// Pin that appends its transitions to a shared trace.
    struct TracePin<'a> {
        event: fn(bool) -> Event,
        trace: &'a Trace,
        fail: bool,
    }

    impl<'a> TracePin<'a> {
        fn new(event: fn(bool) -> Event, trace: &'a Trace) -> Self {
            Self {
                event,
                trace,
                fail: false,
            }
        }

        fn record(&mut self, high: bool) -> Result<(), PinFault> {
            if self.fail {
                return Err(PinFault);
            }
            let _ = self.trace.borrow_mut().push((self.event)(high));
            Ok(())
        }
    }

    impl ErrorType for TracePin<'_> {
        type Error = PinFault;
    }

    impl OutputPin for TracePin<'_> {
        fn set_low(&mut self) -> Result<(), PinFault> {
            self.record(false)
        }

        fn set_high(&mut self) -> Result<(), PinFault> {
            self.record(true)
        }
    }

    fn driver(trace: &Trace) -> Shift595<TracePin<'_>, TracePin<'_>, TracePin<'_>> {
        Shift595::new(
            TracePin::new(Event::Data, trace),
            TracePin::new(Event::Clock, trace),
            TracePin::new(Event::Latch, trace),
        )
    }

    #[test]
    fn test_latch_brackets_the_shift() {
        let trace = Trace::new(heapless::Vec::new());
        driver(&trace).latch_frame([0xA5, 0x3C]).unwrap();

        let events = trace.borrow();
        // Latch low, 16 x (data, clock up, clock down), latch high
        assert_eq!(events.len(), 50);
        assert_eq!(events[0], Event::Latch(false));
        assert_eq!(events[49], Event::Latch(true));
        assert!(events[1..49]
            .iter()
            .all(|event| !matches!(event, Event::Latch(_))));
    }

    #[test]
    fn test_shifts_msb_first() {
        let trace = Trace::new(heapless::Vec::new());
        driver(&trace).latch_frame([0b1010_0000, 0b0000_0001]).unwrap();

        let mut shifted: u16 = 0;
        for event in trace.borrow().iter() {
            if let Event::Data(high) = event {
                shifted = (shifted << 1) | u16::from(*high);
            }
        }
        assert_eq!(shifted, 0b1010_0000_0000_0001);
    }

    #[test]
    fn test_data_valid_before_clock_rises() {
        let trace = Trace::new(heapless::Vec::new());
        driver(&trace).latch_frame([0xFF, 0x00]).unwrap();

        let events = trace.borrow();
        for step in events[1..49].chunks(3) {
            assert!(matches!(step[0], Event::Data(_)));
            assert_eq!(step[1], Event::Clock(true));
            assert_eq!(step[2], Event::Clock(false));
        }
    }

    #[test]
    fn test_pin_error_propagates() {
        let trace = Trace::new(heapless::Vec::new());
        let mut driver = Shift595::new(
            TracePin::new(Event::Data, &trace),
            TracePin {
                event: Event::Clock,
                trace: &trace,
                fail: true,
            },
            TracePin::new(Event::Latch, &trace),
        );

        assert_eq!(driver.latch_frame([0xFF, 0xFF]), Err(PinFault));
    }
}
