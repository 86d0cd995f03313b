//! This example solves a profile-shifted gear pair and writes the
//! mechanism drawing to `mesh.svg`.

use gearmesh::{GearCuttingParameters, generate_mechanism_path, solve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let parameters = GearCuttingParameters::new(
        11.0,   // m – module [mm]
        13,     // z1 – pinion teeth
        47,     // z2 – gear teeth
        0.8,    // x1 – pinion profile shift
        0.6032, // x2 – gear profile shift
    );

    let result = generate_mechanism_path(solve(&parameters)?)?;

    let mechanism = &result.mechanism;
    println!("transmission ratio        i  = {:.4}", mechanism.transmission_ratio);
    println!("operating pressure angle  α' = {:.4}°", mechanism.operating_pressure_angle);
    println!("center distance           a  = {:.4} mm", mechanism.center_distance);
    println!("contact ratio             ε  = {:.4}", mechanism.contact_ratio);

    let document = gearmesh::io::svg::document(&result)?;
    svg::save("mesh.svg", &document)?;
    println!("wrote mesh.svg ({} paths)", result.geometry.len());

    Ok(())
}
