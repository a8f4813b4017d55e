use tracing::info;
use vectorlib::{AngleUnit, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("Vector Projection Demo");
    println!("======================\n");

    let vector1 = Vector::new([3.039, 1.879])?;
    let vector2 = Vector::new([0.825, 2.036])?;
    info!(dimension = vector1.dimension(), "projecting first pair");
    println!("proj: {}", vector1.projection(&vector2)?);

    let vector3 = Vector::new([-9.88, -3.264, -8.159])?;
    let vector4 = Vector::new([-2.155, -9.353, -9.473])?;
    info!(dimension = vector3.dimension(), "orthogonal component of second pair");
    println!("perp: {}", vector3.orthogonal_component(&vector4)?);

    let vector5 = Vector::new([3.009, -6.172, 3.692, -2.51])?;
    let vector6 = Vector::new([6.404, -9.144, 2.759, 8.718])?;
    info!(dimension = vector5.dimension(), "decomposing third pair");
    let parallel = vector5.projection(&vector6)?;
    println!("proj: {}", parallel);
    println!("perp: {}", vector5.minus(&parallel)?);

    println!(
        "\nangle between third pair: {} degrees",
        vector5.angle(&vector6, AngleUnit::Degrees)?.round(3)
    );

    Ok(())
}
