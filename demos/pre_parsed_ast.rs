use evalix_rs::{evaluate, parse, VariableMap};

fn main() {
    pretty_env_logger::init();

    let expression = "price * 1.2 + volume / 100";
    let ast = parse(expression).expect("Failed to parse");

    let contexts = vec![
        VariableMap::from([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]),
        VariableMap::from([("price".to_string(), 80.0), ("volume".to_string(), 6000.0)]),
    ];

    // One parse, many evaluations.
    for (i, context) in contexts.iter().enumerate() {
        match evaluate(&ast, Some(context), None) {
            Ok(result) => println!("Result {}: {}", i, result),
            Err(err) => println!("Error {}: {}", i, err),
        }
    }
}
