use std::io::{self, Write};
use std::path::Path;

use crate::sim::Telemetry;

/// Write a telemetry trace as CSV.
///
/// Columns: frame, pos_x, pos_y, vel_x, vel_y, speed, altitude,
///          heading_deg, throttle, engine_on
pub fn write_trace<W: Write>(writer: &mut W, trace: &[Telemetry]) -> io::Result<()> {
    writeln!(
        writer,
        "frame,pos_x,pos_y,vel_x,vel_y,speed,altitude,heading_deg,throttle,engine_on"
    )?;

    for t in trace {
        writeln!(
            writer,
            "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.2},{},{}",
            t.frame,
            t.pos.x, t.pos.y,
            t.vel.x, t.vel.y,
            t.speed,
            t.altitude,
            t.heading.to_degrees(),
            t.throttle,
            u8::from(t.engine_on),
        )?;
    }

    Ok(())
}

/// Write a telemetry trace to a CSV file at the given path.
pub fn write_trace_file(path: &Path, trace: &[Telemetry]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trace(&mut file, trace)?;
    file.flush()
}
