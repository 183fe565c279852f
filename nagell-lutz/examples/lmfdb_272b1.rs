use nagell_lutz::{Curve, Point, PointOrder};

use std::time::Instant;

fn main() {
    // LMFDB 272.b1: y² = x³ − 1451x + 21274
    let curve = Curve::new(-1451, 21274).unwrap();
    println!("discriminant: {}", curve.discriminant());

    let base = Point::integral(21, 8);
    assert!(curve.contains(&base));
    match curve.order_of(&base) {
        PointOrder::Finite(order) => println!("order of {base}: {order}"),
        PointOrder::Infinite => println!("{base} has infinite order"),
        PointOrder::Unknown => println!("order of {base} not found within the Mazur bound"),
    }
    for n in 1..=4 {
        println!("  {n}P = {}", base.mul(&curve, n));
    }

    let start = Instant::now();
    let torsion = curve.torsion_subgroup();
    println!("torsion subgroup ({} elements, {:?}):", torsion.len(), start.elapsed());
    for point in &torsion {
        println!("  {point}");
    }

    for prime in [5, 7, 11, 13] {
        println!("points mod {prime}: {}", curve.group_order_mod(prime));
    }
}
