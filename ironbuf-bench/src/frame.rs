//! Simulated controller status frame.
//!
//! Layout:
//! - temp_fet: 2 bytes (float16, scale 10)
//! - temp_motor: 2 bytes (float16, scale 10)
//! - current_motor: 4 bytes (float32, scale 100)
//! - current_in: 4 bytes (float32, scale 100)
//! - duty: 2 bytes (float16, scale 1000)
//! - rpm: 4 bytes (int32)
//! - voltage: 4 bytes (float32_auto)
//! - amp_hours: 4 bytes (float32, scale 10000)
//! - tachometer: 4 bytes (uint32)
//! - fault_code: 2 bytes (uint16)
//! - id: 2 bytes (int16)
//! - ready: 1 byte (bool)
//!
//! Total: 39 bytes

use ironbuf_core::buffer::{BufferReader, BufferWriter};

/// Encoded length of [`StatusFrame`] in bytes.
pub const STATUS_FRAME_LENGTH: usize = 39;

/// Decoded status frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusFrame {
    /// FET temperature in degrees.
    pub temp_fet: f32,
    /// Motor temperature in degrees.
    pub temp_motor: f32,
    /// Motor current in amps.
    pub current_motor: f32,
    /// Input current in amps.
    pub current_in: f32,
    /// Duty cycle, -1.0 to 1.0.
    pub duty: f32,
    /// Electrical RPM.
    pub rpm: i32,
    /// Input voltage.
    pub voltage: f32,
    /// Consumed charge in amp hours.
    pub amp_hours: f32,
    /// Tachometer count.
    pub tachometer: u32,
    /// Fault code, 0 when healthy.
    pub fault_code: u16,
    /// Controller id.
    pub id: i16,
    /// Ready flag.
    pub ready: bool,
}

impl StatusFrame {
    /// Returns a representative frame.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            temp_fet: 38.5,
            temp_motor: 52.1,
            current_motor: 14.25,
            current_in: 9.75,
            duty: 0.512,
            rpm: 21_400,
            voltage: 50.4,
            amp_hours: 1.2345,
            tachometer: 884_120,
            fault_code: 0,
            id: 17,
            ready: true,
        }
    }

    /// Encodes the frame at the start of `buffer`.
    ///
    /// # Panics
    /// Panics if `buffer` is shorter than [`STATUS_FRAME_LENGTH`].
    pub fn encode(&self, buffer: &mut [u8]) -> usize {
        let mut writer = BufferWriter::new(buffer, 0);
        writer.append_float16(self.temp_fet, 10.0);
        writer.append_float16(self.temp_motor, 10.0);
        writer.append_float32(self.current_motor, 100.0);
        writer.append_float32(self.current_in, 100.0);
        writer.append_float16(self.duty, 1000.0);
        writer.append_int32(self.rpm);
        writer.append_float32_auto(self.voltage);
        writer.append_float32(self.amp_hours, 10_000.0);
        writer.append_uint32(self.tachometer);
        writer.append_uint16(self.fault_code);
        writer.append_int16(self.id);
        writer.append_bool(self.ready);
        writer.bytes_written() as usize
    }

    /// Decodes a frame, substituting zero values for missing fields.
    #[must_use]
    pub fn decode(buffer: &[u8]) -> Self {
        let mut reader = BufferReader::new(buffer);
        Self {
            temp_fet: reader.get_float16(10.0),
            temp_motor: reader.get_float16(10.0),
            current_motor: reader.get_float32(100.0),
            current_in: reader.get_float32(100.0),
            duty: reader.get_float16(1000.0),
            rpm: reader.get_int32(),
            voltage: reader.get_float32_auto(),
            amp_hours: reader.get_float32(10_000.0),
            tachometer: reader.get_uint32(),
            fault_code: reader.get_uint16(),
            id: reader.get_int16(),
            ready: reader.get_bool(),
        }
    }
}
