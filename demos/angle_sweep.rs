use artillery_sim::{simulate_with, Shell, SimConfig};

fn main() {
    let shell = Shell::m795();
    let config = SimConfig::default();

    println!("Sweeping {} from 5 to 85 deg off vertical ...", shell.name);
    println!("  {:>5}  {:>10}  {:>9}", "angle", "range (m)", "time (s)");

    let mut best = (0.0, 0.0);
    for tenth in (50..=850).step_by(25) {
        let angle = tenth as f64 / 10.0;
        let r = match simulate_with(&shell, &config, angle) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("  {:>5.1}  {}", angle, e);
                continue;
            }
        };
        println!("  {:>5.1}  {:>10.2}  {:>9.2}", angle, r.range, r.hang_time);
        if r.range > best.1 {
            best = (angle, r.range);
        }
    }

    let vacuum = shell.muzzle_speed.powi(2) / 9.807;
    println!();
    println!("Max range {:.0} m at {:.1} deg (vacuum: {:.0} m at 45.0 deg)", best.1, best.0, vacuum);
}
