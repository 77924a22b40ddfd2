//! Example telemetry frame: a controller packs readings, a host unpacks them.
//!
//! Run with: `RUST_LOG=trace cargo run --example telemetry`
//!
//! The second half decodes a truncated copy of the frame; with `trace`
//! enabled the substituted reads are logged.

use ironbuf::prelude::*;

const SCALE_TEMP: f32 = 10.0;
const SCALE_CURRENT: f32 = 100.0;
const SCALE_DUTY: f32 = 1000.0;

#[derive(Debug, Default)]
struct Telemetry {
    temp_fet: f32,
    current_motor: f32,
    duty_cycle: f32,
    rpm: i32,
    input_voltage: f32,
    tachometer: u32,
    fault: bool,
}

impl Telemetry {
    const ENCODED_LENGTH: usize = 2 + 4 + 2 + 4 + 4 + 4 + 1;

    fn encode(&self, buf: &mut [u8]) -> i32 {
        let mut writer = BufferWriter::new(buf, 0);
        writer.append_float16(self.temp_fet, SCALE_TEMP);
        writer.append_float32(self.current_motor, SCALE_CURRENT);
        writer.append_float16(self.duty_cycle, SCALE_DUTY);
        writer.append_int32(self.rpm);
        writer.append_float32_auto(self.input_voltage);
        writer.append_uint32(self.tachometer);
        writer.append_bool(self.fault);
        writer.bytes_written()
    }

    fn decode(reader: &mut BufferReader<'_>) -> Self {
        Self {
            temp_fet: reader.get_float16(SCALE_TEMP),
            current_motor: reader.get_float32(SCALE_CURRENT),
            duty_cycle: reader.get_float16(SCALE_DUTY),
            rpm: reader.get_int32(),
            input_voltage: reader.get_float32_auto(),
            tachometer: reader.get_uint32(),
            fault: reader.get_bool(),
        }
    }
}

fn main() -> CoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sample = Telemetry {
        temp_fet: 41.3,
        current_motor: -12.57,
        duty_cycle: 0.437,
        rpm: 18_250,
        input_voltage: 48.6,
        tachometer: 1_204_332,
        fault: false,
    };

    let mut frame = [0u8; Telemetry::ENCODED_LENGTH];
    let written = sample.encode(&mut frame);
    println!("encoded {} bytes: {:02X?}", written, frame);

    let mut reader = BufferReader::new(&frame);
    let decoded = Telemetry::decode(&mut reader);
    println!("decoded: {:?}", decoded);
    println!("exhausted: {}", reader.is_exhausted());

    // Frame cut short in transit.
    let truncated = &frame[..9];
    let mut reader = BufferReader::with_limit(truncated, Limit::Length(truncated.len() as i32))?;
    let partial = Telemetry::decode(&mut reader);
    tracing::info!("truncated frame decoded as {:?}", partial);
    println!("truncated: {:?} (cursor {})", partial, reader.position());

    // Checked writes refuse to overrun a short buffer.
    let mut short = [0u8; 3];
    let mut index = 0;
    try_append_uint16(&mut short, 0xCAFE, &mut index)?;
    if let Err(e) = try_append_uint16(&mut short, 0xBEEF, &mut index) {
        println!("checked append rejected: {}", e);
    }

    Ok(())
}
