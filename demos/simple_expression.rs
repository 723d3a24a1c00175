use evalix_rs::{evaluate_expression, VariableMap};

fn main() {
    pretty_env_logger::init();

    let variables = VariableMap::from([("a".to_string(), 3.0), ("pi".to_string(), std::f64::consts::PI)]);

    let expressions = [
        "5+3.12*2^4/1+3*(19-3)",
        "a*pi^2",
        "max(1, 3, sin(1))",
        "round(a / 2)",
    ];

    for expression in expressions {
        match evaluate_expression(expression, Some(&variables), None) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{}: {}", expression, err),
        }
    }
}
