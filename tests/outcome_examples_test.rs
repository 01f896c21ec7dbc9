//! Worked examples for `Outcome` and the `try_catch` boundary

use std::cell::Cell;

use fpcore::json::parse_json;
use fpcore::outcome::{Caught, Outcome};
use fpcore::Error;
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    age: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct ErrorBox {
    message: String,
}

fn validate_user(user: User) -> Outcome<String, User> {
    if user.age > 18 {
        Outcome::ok(user)
    } else {
        Outcome::err("Underage user!!!".to_string())
    }
}

fn do_something(user: User) -> Outcome<String, User> {
    if user.name.len() < 4 {
        Outcome::ok(user)
    } else {
        Outcome::err("Too short of a name".to_string())
    }
}

fn user() -> User {
    User {
        name: "Simone".to_string(),
        age: 33,
    }
}

fn default_user() -> User {
    User {
        name: "default".to_string(),
        age: 0,
    }
}

#[test]
fn test_user_pipeline() {
    assert_eq!(validate_user(user()).map(|u| u.age), Outcome::Ok(33));

    let boxed: Outcome<ErrorBox, User> = validate_user(user()).map_left(|e| ErrorBox {
        message: format!("error is: {}", e),
    });
    assert_eq!(boxed, Outcome::Ok(user()));

    assert_eq!(
        validate_user(user()).chain(do_something),
        Outcome::Err("Too short of a name".to_string())
    );
    assert_eq!(validate_user(user()).get_or_else(|_| default_user()), user());
    assert_eq!(validate_user(user()).fold(|_| default_user(), |u| u), user());
}

#[test]
fn test_underage_user_short_circuits() {
    let calls = Cell::new(0);
    let minor = User {
        age: 18,
        ..user()
    };

    let result = validate_user(minor).chain(|u| {
        calls.set(calls.get() + 1);
        do_something(u)
    });

    assert_eq!(result, Outcome::Err("Underage user!!!".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_parse_json_boundary() {
    let good = parse_json(r#"{"goodjson":true}"#).map(|v| v["goodjson"].clone());
    assert_eq!(good.into_result().unwrap(), json!(true));

    match parse_json("{") {
        Outcome::Err(Error::Json(e)) => assert!(e.is_eof()),
        other => panic!("expected a JSON error, got {:?}", other),
    }
}

#[test]
fn test_try_catch_never_raises() {
    let outcome: Outcome<String, Vec<u8>> = Outcome::try_catch(
        || -> Result<Vec<u8>, std::io::Error> {
            let bytes: Vec<u8> = Vec::new();
            let fourth = bytes[3];
            Ok(vec![fourth])
        },
        |caught| match caught {
            Caught::Raised(e) => format!("io: {}", e),
            Caught::Panicked(message) => format!("panic: {}", message),
        },
    );

    let message = outcome.fold(|e| e, |_| String::new());
    assert!(message.starts_with("panic: index out of bounds"), "{}", message);
}
