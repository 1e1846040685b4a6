extern crate equispaced_linear;

use equispaced_linear::EquispacedLinear;

fn main() {

    let x_min = 0.0;
    let x_max = 2.0 * std::f64::consts::PI;

    let mut interpolant = EquispacedLinear::new(64, x_min, x_max, Some(0.0)).unwrap();
    interpolant.tabulate(f64::sin);
    interpolant.initialize_derivatives(None).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y;dy;d2y;d3y");
    for i in 1..number_of_steps {
        let x = x_min + step * i as f64;
        let bracket = interpolant.precompute(x);
        println!(
            "{:.2};{:.3};{:.3};{:.3};{:.3}",
            x,
            interpolant.value(x, Some(bracket)),
            interpolant.first_derivative(x, Some(bracket)),
            interpolant.second_derivative(x, Some(bracket)),
            interpolant.third_derivative(x, Some(bracket)),
        );
    }
}
