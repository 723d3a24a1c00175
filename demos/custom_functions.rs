use evalix_rs::{evaluate_expression, Arity, Function, FunctionMap};

fn factorial(n: f64) -> f64 {
    if n <= 1.0 {
        1.0
    } else {
        n * factorial(n - 1.0)
    }
}

fn main() {
    pretty_env_logger::init();

    let mut functions = FunctionMap::new();
    functions.insert(
        "add5".to_string(),
        Function::new(Arity::Exact(1), |args| args[0] + 5.0),
    );
    functions.insert(
        "fact".to_string(),
        Function::new(Arity::Exact(1), |args| factorial(args[0])),
    );
    // Shadowed by the built-in of the same name.
    functions.insert("max".to_string(), Function::new(Arity::Any, |_args| 0.0));

    let expressions = ["add5(3)", "fact(5)", "max(1, 2)", "add5(1, 2)"];

    for expression in expressions {
        match evaluate_expression(expression, None, Some(&functions)) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{}: {}", expression, err),
        }
    }
}
