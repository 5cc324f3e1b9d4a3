use std::io::{self, Write};
use std::path::Path;

use crate::sim::TraceSample;

/// Write a step trace in CSV format.
///
/// Columns: step, time, pos_x, pos_y, vel_x, vel_y, speed, heading_deg,
///          mach, cd, density, drag_n, gravity
pub fn write_trace<W: Write>(writer: &mut W, trace: &[TraceSample]) -> io::Result<()> {
    writeln!(
        writer,
        "step,time,pos_x,pos_y,vel_x,vel_y,speed,heading_deg,\
         mach,cd,density,drag_n,gravity"
    )?;

    for s in trace {
        let f = &s.forces;
        writeln!(
            writer,
            "{},{:.2},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},\
             {:.4},{:.4},{:.7},{:.3},{:.4}",
            s.step,
            s.time,
            s.pos.x, s.pos.y,
            s.vel.x, s.vel.y,
            f.speed,
            f.heading.to_degrees(),
            f.mach,
            f.cd,
            f.density,
            f.drag,
            f.gravity,
        )?;
    }

    Ok(())
}

/// Write a step trace to a CSV file at the given path.
pub fn write_trace_file(path: impl AsRef<Path>, trace: &[TraceSample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trace(&mut file, trace)
}
