use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::state::Shell;
use crate::sim::Flight;

/// Summary statistics for one traced firing.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub angle_deg: f64,
    pub range_m: f64,
    pub hang_time_s: f64,
    pub apogee_m: f64,
    pub apogee_time: f64,
    pub max_mach: f64,
    pub impact_speed: f64,
    pub steps: usize,
}

impl FlightSummary {
    pub fn from_flight(angle_deg: f64, flight: &Flight) -> Self {
        let apogee_time = flight
            .trace
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map_or(0.0, |s| s.time);

        FlightSummary {
            angle_deg,
            range_m: flight.result.range,
            hang_time_s: flight.result.hang_time,
            apogee_m: flight.apogee(),
            apogee_time,
            max_mach: flight.max_mach(),
            impact_speed: flight.impact_speed(),
            steps: flight.trace.len(),
        }
    }
}

/// Write flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    shell: &Shell,
    summary: &FlightSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"shell\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", shell.name)?;
    writeln!(writer, "    \"diameter_m\": {},", shell.diameter)?;
    writeln!(writer, "    \"mass_kg\": {},", shell.mass)?;
    writeln!(writer, "    \"muzzle_speed_ms\": {}", shell.muzzle_speed)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"angle_deg\": {:.2},", summary.angle_deg)?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"range_m\": {:.2},", summary.range_m)?;
    writeln!(writer, "    \"hang_time_s\": {:.2},", summary.hang_time_s)?;
    writeln!(writer, "    \"apogee_m\": {:.2},", summary.apogee_m)?;
    writeln!(writer, "    \"apogee_time_s\": {:.2},", summary.apogee_time)?;
    writeln!(writer, "    \"max_mach\": {:.3},", summary.max_mach)?;
    writeln!(writer, "    \"impact_speed_ms\": {:.2},", summary.impact_speed)?;
    writeln!(writer, "    \"steps\": {}", summary.steps)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(
    path: impl AsRef<Path>,
    shell: &Shell,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, shell, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::SimConfig;
    use crate::sim::simulate_traced;

    fn flight_at(angle: f64) -> Flight {
        simulate_traced(&Shell::m795(), &SimConfig::default(), angle).unwrap()
    }

    #[test]
    fn summary_matches_flight() {
        let f = flight_at(40.0);
        let s = FlightSummary::from_flight(40.0, &f);
        assert_eq!(s.range_m, f.result.range);
        assert_eq!(s.hang_time_s, f.result.hang_time);
        assert_eq!(s.steps, f.trace.len());
        assert!(s.apogee_time > 0.0 && s.apogee_time < s.hang_time_s);
        assert!(s.apogee_m > 0.0);
    }

    #[test]
    fn json_output_contains_sections() {
        let f = flight_at(40.0);
        let summary = FlightSummary::from_flight(40.0, &f);

        let mut buf = Vec::new();
        write_summary(&mut buf, &Shell::m795(), &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"shell\""));
        assert!(json.contains("\"M795\""));
        assert!(json.contains("\"range_m\""));
        assert!(json.contains("\"angle_deg\": 40.00"));
        assert!(json.trim_end().ends_with('}'));
    }
}
