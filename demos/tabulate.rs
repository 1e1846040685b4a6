extern crate equispaced_linear;

use equispaced_linear::{EquispacedLinear, Sample};

fn main() {

    let x_min = 0.0;
    let x_max = 6.0;

    let mut interpolant = EquispacedLinear::new(7, 1.0, 5.0, None).unwrap();
    interpolant.tabulate(|x| (x - 3.0).powi(2));

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut x_vector = Vec::new();

    for i in 0..=number_of_steps {
        x_vector.push(x_min + step * i as f64);
    }

    let result = interpolant.evaluate_many(Sample::Value, &x_vector);

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}
